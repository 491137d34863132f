//! Print Shop Engine
//!
//! The Print Shop Engine is the backend library for a small print shop administration tool. It tracks clients,
//! products and orders, and derives the payment state of every order from its manually entered total and amount paid.
//!
//! The library is divided into three main sections:
//! 1. The financial state model ([`mod@financials`]). A pure, synchronous module that validates an operator-submitted
//!    order draft and recomputes the derived fields (`remaining_amount` and `payment_status`) before anything touches
//!    storage. This is the only place those two fields are ever written.
//! 2. Database management and control ([`mod@db`]). SQLite is the supported backend. You should never need to access
//!    the database directly; use the public APIs instead. The exception is the data types used in the database, which
//!    are defined in the `db_types` module and are public.
//! 3. The public API ([`OrderApi`] and [`CatalogApi`]). These wrap a database backend and run the
//!    validate → derive → persist → notify pipeline for order and catalog mutations respectively.
//!
//! The engine also emits an event after every successful create, update or delete. Callers that cache entity listings
//! subscribe to these events to know when a listing has gone stale. A simple hook system is used so that you can
//! easily react to them.
mod db;

pub mod db_types;
pub mod events;
pub mod financials;
mod shop_api;

#[cfg(feature = "sqlite")]
pub use db::sqlite::{SqliteDatabase, SqliteDatabaseError};
pub use db::traits::{
    ClientManagement,
    OrderManagement,
    OrderQueryFilter,
    ProductManagement,
    ShopDatabase,
};
pub use shop_api::{
    catalog_api::CatalogApi,
    errors::{CatalogApiError, OrderApiError},
    orders_api::OrderApi,
};
