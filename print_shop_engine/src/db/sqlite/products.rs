use sqlx::SqliteConnection;

use crate::{
    db::sqlite::SqliteDatabaseError,
    db_types::{NewProduct, Product},
};

const PRODUCT_COLUMNS: &str = "id, name, price, created_at, updated_at";

pub async fn insert_product(product: NewProduct, conn: &mut SqliteConnection) -> Result<Product, SqliteDatabaseError> {
    let sql = format!(
        r#"
        INSERT INTO products (name, price)
        VALUES ($1, $2)
        RETURNING {PRODUCT_COLUMNS};
    "#
    );
    let product =
        sqlx::query_as::<_, Product>(&sql).bind(product.name).bind(product.price).fetch_one(conn).await?;
    Ok(product)
}

pub async fn update_product(
    id: i64,
    product: NewProduct,
    conn: &mut SqliteConnection,
) -> Result<Option<Product>, SqliteDatabaseError> {
    let sql = format!(
        r#"
        UPDATE products
        SET name = $1, price = $2, updated_at = CURRENT_TIMESTAMP
        WHERE id = $3
        RETURNING {PRODUCT_COLUMNS};
    "#
    );
    let product = sqlx::query_as::<_, Product>(&sql)
        .bind(product.name)
        .bind(product.price)
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(product)
}

pub async fn delete_product(id: i64, conn: &mut SqliteConnection) -> Result<bool, SqliteDatabaseError> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1").bind(id).execute(conn).await?;
    Ok(result.rows_affected() > 0)
}

pub async fn fetch_product_by_id(
    id: i64,
    conn: &mut SqliteConnection,
) -> Result<Option<Product>, SqliteDatabaseError> {
    let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
    let product = sqlx::query_as::<_, Product>(&sql).bind(id).fetch_optional(conn).await?;
    Ok(product)
}

pub async fn fetch_products(conn: &mut SqliteConnection) -> Result<Vec<Product>, SqliteDatabaseError> {
    let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY name ASC, id ASC");
    let products = sqlx::query_as::<_, Product>(&sql).fetch_all(conn).await?;
    Ok(products)
}
