use log::trace;
use sqlx::{QueryBuilder, SqliteConnection};

use crate::{
    db::{sqlite::SqliteDatabaseError, traits::OrderQueryFilter},
    db_types::{NewOrder, Order},
};

const ORDER_COLUMNS: &str = "id, client_id, product_id, quantity, order_date, status, total, amount_paid, \
                             remaining_amount, payment_status, created_at, updated_at";

/// Inserts a new order using the given connection. All four financial columns are written by the one statement, so
/// no reader can see a total without its matching remainder and payment status.
pub async fn insert_order(order: NewOrder, conn: &mut SqliteConnection) -> Result<Order, SqliteDatabaseError> {
    let sql = format!(
        r#"
        INSERT INTO orders (client_id, product_id, quantity, order_date, status, total, amount_paid,
                            remaining_amount, payment_status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {ORDER_COLUMNS};
    "#
    );
    let order = sqlx::query_as::<_, Order>(&sql)
        .bind(order.client_id)
        .bind(order.product_id)
        .bind(order.quantity)
        .bind(order.order_date)
        .bind(order.status)
        .bind(order.total)
        .bind(order.amount_paid)
        .bind(order.remaining_amount)
        .bind(order.payment_status)
        .fetch_one(conn)
        .await?;
    Ok(order)
}

/// Replaces every editable field of the order with the given id in a single statement. Returns `None` if the id does
/// not exist. Fields not present in [`NewOrder`] (`id`, `created_at`) are left alone.
pub async fn update_order(
    id: i64,
    order: NewOrder,
    conn: &mut SqliteConnection,
) -> Result<Option<Order>, SqliteDatabaseError> {
    let sql = format!(
        r#"
        UPDATE orders
        SET client_id = $1, product_id = $2, quantity = $3, order_date = $4, status = $5, total = $6,
            amount_paid = $7, remaining_amount = $8, payment_status = $9, updated_at = CURRENT_TIMESTAMP
        WHERE id = $10
        RETURNING {ORDER_COLUMNS};
    "#
    );
    let order = sqlx::query_as::<_, Order>(&sql)
        .bind(order.client_id)
        .bind(order.product_id)
        .bind(order.quantity)
        .bind(order.order_date)
        .bind(order.status)
        .bind(order.total)
        .bind(order.amount_paid)
        .bind(order.remaining_amount)
        .bind(order.payment_status)
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(order)
}

pub async fn delete_order(id: i64, conn: &mut SqliteConnection) -> Result<bool, SqliteDatabaseError> {
    let result = sqlx::query("DELETE FROM orders WHERE id = $1").bind(id).execute(conn).await?;
    Ok(result.rows_affected() > 0)
}

pub async fn fetch_order_by_id(id: i64, conn: &mut SqliteConnection) -> Result<Option<Order>, SqliteDatabaseError> {
    let sql = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1");
    let order = sqlx::query_as::<_, Order>(&sql).bind(id).fetch_optional(conn).await?;
    Ok(order)
}

/// Fetches orders according to criteria specified in the `OrderQueryFilter`.
///
/// Resulting orders are ordered by `order_date` in descending order (most recent first), ties broken by id.
pub async fn fetch_orders(
    query: OrderQueryFilter,
    conn: &mut SqliteConnection,
) -> Result<Vec<Order>, SqliteDatabaseError> {
    let mut builder = QueryBuilder::new(format!("SELECT {ORDER_COLUMNS} FROM orders "));
    if !query.is_empty() {
        builder.push("WHERE ");
    }
    let mut where_clause = builder.separated(" AND ");
    if let Some(client_id) = query.client_id {
        where_clause.push("client_id = ");
        where_clause.push_bind_unseparated(client_id);
    }
    if let Some(product_id) = query.product_id {
        where_clause.push("product_id = ");
        where_clause.push_bind_unseparated(product_id);
    }
    if let Some(statuses) = query.status.filter(|s| !s.is_empty()) {
        let statuses = statuses.iter().map(|s| format!("'{s}'")).collect::<Vec<String>>().join(",");
        where_clause.push(format!("status IN ({statuses})"));
    }
    if let Some(statuses) = query.payment_status.filter(|s| !s.is_empty()) {
        let statuses = statuses.iter().map(|s| format!("'{s}'")).collect::<Vec<String>>().join(",");
        where_clause.push(format!("payment_status IN ({statuses})"));
    }
    if let Some(since) = query.since {
        where_clause.push("order_date >= ");
        where_clause.push_bind_unseparated(since);
    }
    if let Some(until) = query.until {
        where_clause.push("order_date <= ");
        where_clause.push_bind_unseparated(until);
    }
    builder.push(" ORDER BY order_date DESC, id DESC");

    trace!("🗃️ Executing query: {}", builder.sql());
    let orders = builder.build_query_as::<Order>().fetch_all(conn).await?;
    trace!("🗃️ Result of fetch_orders: {} rows", orders.len());
    Ok(orders)
}
