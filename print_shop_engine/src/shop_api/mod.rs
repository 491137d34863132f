//! # Print shop engine public API
//!
//! The `shop_api` module exposes the programmatic API for the engine. The API is modular, so that callers can pick
//! and choose the functionality they need:
//!
//! * [`orders_api`] runs the order flows: a submitted draft is validated, its financial state derived, the result
//!   persisted, and an invalidation event published — in that order, for both create and edit.
//! * [`catalog_api`] manages the client register and the product catalog, and provides the listings UI callers use
//!   to populate selectable references on an order form.
//!
//! The pattern for using the APIs is the same everywhere. An API instance is created by supplying a database backend
//! that implements the backend traits the API requires, plus the event producers to notify:
//!
//! ```rust,ignore
//! use print_shop_engine::{OrderApi, SqliteDatabase};
//! use print_shop_engine::events::EventProducers;
//! let db = SqliteDatabase::new_with_url("sqlite://data/print_shop.db", 5).await?;
//! let api = OrderApi::new(db, EventProducers::default());
//! let order = api.create_order(draft).await?;
//! ```
pub mod catalog_api;
pub mod errors;
pub mod orders_api;
