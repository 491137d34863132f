use crate::db_types::{Client, NewClient, NewOrder, NewProduct, Order, Product};

/// This trait defines the mutation surface that backends expose to the engine's public APIs.
///
/// Every mutation writes a complete record: updates are full replacements of the editable fields (there is no partial
/// patch), and the financial fields of an order (`total`, `amount_paid`, `remaining_amount`, `payment_status`) are
/// written together in a single statement so a reader can never observe them out of step. Concurrent updates to the
/// same id resolve as last-write-wins; there is no version column.
#[allow(async_fn_in_trait)]
pub trait ShopDatabase: Clone {
    type Error: std::error::Error;

    /// The URL of the database
    fn url(&self) -> &str;

    /// Stores a new order and returns it with its assigned id. The order's `client_id`/`product_id` are not checked
    /// for existence.
    async fn insert_order(&self, order: NewOrder) -> Result<Order, Self::Error>;

    /// Replaces the editable fields of the order with the given id. Returns `None` if no such order exists.
    async fn update_order(&self, id: i64, order: NewOrder) -> Result<Option<Order>, Self::Error>;

    /// Deletes the order with the given id unconditionally. Returns whether a row was actually removed.
    async fn delete_order(&self, id: i64) -> Result<bool, Self::Error>;

    /// Stores a new client and returns it with its assigned id.
    async fn insert_client(&self, client: NewClient) -> Result<Client, Self::Error>;

    /// Replaces the fields of the client with the given id. Returns `None` if no such client exists.
    async fn update_client(&self, id: i64, client: NewClient) -> Result<Option<Client>, Self::Error>;

    /// Deletes the client with the given id. Orders referencing it are left untouched (no cascade).
    async fn delete_client(&self, id: i64) -> Result<bool, Self::Error>;

    /// Stores a new product and returns it with its assigned id.
    async fn insert_product(&self, product: NewProduct) -> Result<Product, Self::Error>;

    /// Replaces the fields of the product with the given id. Returns `None` if no such product exists.
    async fn update_product(&self, id: i64, product: NewProduct) -> Result<Option<Product>, Self::Error>;

    /// Deletes the product with the given id. Orders referencing it are left untouched (no cascade).
    async fn delete_product(&self, id: i64) -> Result<bool, Self::Error>;

    /// Closes the database connection.
    async fn close(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
