use std::fmt::Debug;

use log::*;
use sqlx::SqlitePool;

use super::{clients, db_url, new_pool, orders, products, SqliteDatabaseError};
use crate::{
    db::traits::{ClientManagement, OrderManagement, OrderQueryFilter, ProductManagement, ShopDatabase},
    db_types::{Client, NewClient, NewOrder, NewProduct, Order, Product},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl SqliteDatabase {
    /// Creates a new database API object using the URL from the environment.
    pub async fn new(max_connections: u32) -> Result<Self, SqliteDatabaseError> {
        let url = db_url();
        SqliteDatabase::new_with_url(url.as_str(), max_connections).await
    }

    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, SqliteDatabaseError> {
        trace!("Creating new database connection pool with url {url}");
        let pool = new_pool(url, max_connections).await?;
        let url = url.to_string();
        Ok(Self { url, pool })
    }

    /// Brings the schema up to date by running the embedded migrations.
    pub async fn run_migrations(&self) -> Result<(), SqliteDatabaseError> {
        sqlx::migrate!("./src/db/sqlite/migrations").run(&self.pool).await?;
        info!("🗃️ Migrations complete");
        Ok(())
    }

    /// Returns a reference to the database connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl ShopDatabase for SqliteDatabase {
    type Error = SqliteDatabaseError;

    fn url(&self) -> &str {
        self.url.as_str()
    }

    async fn insert_order(&self, order: NewOrder) -> Result<Order, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        let order = orders::insert_order(order, &mut conn).await?;
        debug!("🗃️ Order #{} has been saved in the DB", order.id);
        Ok(order)
    }

    async fn update_order(&self, id: i64, order: NewOrder) -> Result<Option<Order>, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        trace!("🗃️ Order #{id} updating with new values: {order:?}");
        let order = orders::update_order(id, order, &mut conn).await?;
        match &order {
            Some(_) => debug!("🗃️ Order #{id} has been updated."),
            None => debug!("🗃️ Order #{id} does not exist. Nothing was updated."),
        }
        Ok(order)
    }

    async fn delete_order(&self, id: i64) -> Result<bool, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        let deleted = orders::delete_order(id, &mut conn).await?;
        debug!("🗃️ Order #{id} deletion: removed = {deleted}");
        Ok(deleted)
    }

    async fn insert_client(&self, client: NewClient) -> Result<Client, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        let client = clients::insert_client(client, &mut conn).await?;
        debug!("🗃️ Client #{} ({}) has been saved in the DB", client.id, client.name);
        Ok(client)
    }

    async fn update_client(&self, id: i64, client: NewClient) -> Result<Option<Client>, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        let client = clients::update_client(id, client, &mut conn).await?;
        Ok(client)
    }

    async fn delete_client(&self, id: i64) -> Result<bool, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        let deleted = clients::delete_client(id, &mut conn).await?;
        debug!("🗃️ Client #{id} deletion: removed = {deleted}");
        Ok(deleted)
    }

    async fn insert_product(&self, product: NewProduct) -> Result<Product, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        let product = products::insert_product(product, &mut conn).await?;
        debug!("🗃️ Product #{} ({}) has been saved in the DB", product.id, product.name);
        Ok(product)
    }

    async fn update_product(&self, id: i64, product: NewProduct) -> Result<Option<Product>, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        let product = products::update_product(id, product, &mut conn).await?;
        Ok(product)
    }

    async fn delete_product(&self, id: i64) -> Result<bool, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        let deleted = products::delete_product(id, &mut conn).await?;
        debug!("🗃️ Product #{id} deletion: removed = {deleted}");
        Ok(deleted)
    }

    async fn close(&mut self) -> Result<(), Self::Error> {
        self.pool.close().await;
        Ok(())
    }
}

impl OrderManagement for SqliteDatabase {
    type Error = SqliteDatabaseError;

    async fn order_by_id(&self, id: i64) -> Result<Option<Order>, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        orders::fetch_order_by_id(id, &mut conn).await
    }

    async fn fetch_orders(&self, query: OrderQueryFilter) -> Result<Vec<Order>, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        orders::fetch_orders(query, &mut conn).await
    }
}

impl ClientManagement for SqliteDatabase {
    type Error = SqliteDatabaseError;

    async fn client_by_id(&self, id: i64) -> Result<Option<Client>, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        clients::fetch_client_by_id(id, &mut conn).await
    }

    async fn list_clients(&self) -> Result<Vec<Client>, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        clients::fetch_clients(&mut conn).await
    }
}

impl ProductManagement for SqliteDatabase {
    type Error = SqliteDatabaseError;

    async fn product_by_id(&self, id: i64) -> Result<Option<Product>, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        products::fetch_product_by_id(id, &mut conn).await
    }

    async fn list_products(&self) -> Result<Vec<Product>, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        products::fetch_products(&mut conn).await
    }
}
