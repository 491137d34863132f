use sqlx::SqliteConnection;

use crate::{
    db::sqlite::SqliteDatabaseError,
    db_types::{Client, NewClient},
};

const CLIENT_COLUMNS: &str = "id, name, phone, address, created_at, updated_at";

pub async fn insert_client(client: NewClient, conn: &mut SqliteConnection) -> Result<Client, SqliteDatabaseError> {
    let sql = format!(
        r#"
        INSERT INTO clients (name, phone, address)
        VALUES ($1, $2, $3)
        RETURNING {CLIENT_COLUMNS};
    "#
    );
    let client = sqlx::query_as::<_, Client>(&sql)
        .bind(client.name)
        .bind(client.phone)
        .bind(client.address)
        .fetch_one(conn)
        .await?;
    Ok(client)
}

pub async fn update_client(
    id: i64,
    client: NewClient,
    conn: &mut SqliteConnection,
) -> Result<Option<Client>, SqliteDatabaseError> {
    let sql = format!(
        r#"
        UPDATE clients
        SET name = $1, phone = $2, address = $3, updated_at = CURRENT_TIMESTAMP
        WHERE id = $4
        RETURNING {CLIENT_COLUMNS};
    "#
    );
    let client = sqlx::query_as::<_, Client>(&sql)
        .bind(client.name)
        .bind(client.phone)
        .bind(client.address)
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(client)
}

pub async fn delete_client(id: i64, conn: &mut SqliteConnection) -> Result<bool, SqliteDatabaseError> {
    let result = sqlx::query("DELETE FROM clients WHERE id = $1").bind(id).execute(conn).await?;
    Ok(result.rows_affected() > 0)
}

pub async fn fetch_client_by_id(id: i64, conn: &mut SqliteConnection) -> Result<Option<Client>, SqliteDatabaseError> {
    let sql = format!("SELECT {CLIENT_COLUMNS} FROM clients WHERE id = $1");
    let client = sqlx::query_as::<_, Client>(&sql).bind(id).fetch_optional(conn).await?;
    Ok(client)
}

pub async fn fetch_clients(conn: &mut SqliteConnection) -> Result<Vec<Client>, SqliteDatabaseError> {
    let sql = format!("SELECT {CLIENT_COLUMNS} FROM clients ORDER BY name ASC, id ASC");
    let clients = sqlx::query_as::<_, Client>(&sql).fetch_all(conn).await?;
    Ok(clients)
}
