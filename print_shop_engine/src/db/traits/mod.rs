mod catalog_management;
mod order_management;
mod shop_database;

pub use catalog_management::{ClientManagement, ProductManagement};
pub use order_management::{OrderManagement, OrderQueryFilter};
pub use shop_database::ShopDatabase;
