// SPDX-License-Identifier: MIT

//! One-shot load of the router inventory at startup.

use crate::error::StoreError;
use fleet_core::{Router, RouterId};
use sqlx::{MySqlPool, Row};

/// Reads the full router inventory. Grounded on the original projection
/// `SELECT id, name, host, port, username, password FROM routers` — no
/// pagination, no filtering, the fleet is small enough to load whole.
pub async fn load_all(pool: &MySqlPool) -> Result<Vec<Router>, StoreError> {
    let rows = sqlx::query("SELECT id, name, host, port, username, password FROM routers")
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(row_to_router).collect())
}

fn row_to_router(row: sqlx::mysql::MySqlRow) -> Router {
    Router {
        id: RouterId::new(row.get("id")),
        name: row.get("name"),
        host: row.get("host"),
        port: row.get::<i16, _>("port") as u16,
        username: row.get("username"),
        password: row.get("password"),
    }
}
