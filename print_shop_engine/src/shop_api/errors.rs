use thiserror::Error;

use crate::{financials::OrderValidationError, ShopDatabase};

#[derive(Debug, Error)]
pub enum OrderApiError<B: ShopDatabase> {
    #[error("Database error: {0}")]
    DatabaseError(B::Error),
    #[error(transparent)]
    ValidationError(#[from] OrderValidationError),
    #[error("Order {0} does not exist")]
    OrderNotFound(i64),
}

#[derive(Debug, Error)]
pub enum CatalogApiError<B: ShopDatabase> {
    #[error("Database error: {0}")]
    DatabaseError(B::Error),
    #[error("Client {0} does not exist")]
    ClientNotFound(i64),
    #[error("Product {0} does not exist")]
    ProductNotFound(i64),
}
