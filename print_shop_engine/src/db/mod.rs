//! # Database management and control.
//!
//! This module provides the interface contracts of the engine's database *backends*, and the SQLite implementation.
//!
//! ## Traits
//! * [`traits::ShopDatabase`] defines the mutation surface: inserts, full-replacement updates and unconditional
//!   deletes for orders, clients and products. This is the surface the public APIs mirror one-to-one.
//! * [`traits::OrderManagement`] defines the behaviour for querying orders.
//! * [`traits::ClientManagement`] and [`traits::ProductManagement`] provide the catalog lookups that UI callers use
//!   to populate selectable references before building an order draft.
//!
//! A backend does not validate an order's financial fields; it persists exactly what
//! [`crate::financials::prepare_order`] produced. Referential checks on `client_id`/`product_id` are also left
//! unenforced here, matching the schema this engine replaces.
pub mod traits;

#[cfg(feature = "sqlite")]
pub mod sqlite;
