use crate::db_types::{Client, Product};

/// Read access to the client register. UI callers list clients to populate the selectable reference on an order
/// draft; nothing in the engine itself consumes these lookups.
#[allow(async_fn_in_trait)]
pub trait ClientManagement {
    type Error: std::error::Error;

    async fn client_by_id(&self, id: i64) -> Result<Option<Client>, Self::Error>;

    async fn list_clients(&self) -> Result<Vec<Client>, Self::Error>;
}

/// Read access to the product catalog.
#[allow(async_fn_in_trait)]
pub trait ProductManagement {
    type Error: std::error::Error;

    async fn product_by_id(&self, id: i64) -> Result<Option<Product>, Self::Error>;

    async fn list_products(&self) -> Result<Vec<Product>, Self::Error>;
}
