// SPDX-License-Identifier: MIT

//! SQL-backed [`SubscriberSink`], the write side of a SYNC command.

use async_trait::async_trait;
use chrono::Utc;
use fleet_core::{RouterId, SubscriberRecord};
use fleet_worker::SubscriberSink;
use sqlx::MySqlPool;

/// Upserts by `(router_id, username)`, taking the richer four-field form
/// (profile, remote_address, is_enabled, updated_at) as canonical over the
/// narrower signature the same upsert used to have.
pub struct SqlSubscriberStore {
    pool: MySqlPool,
}

impl SqlSubscriberStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn upsert_one(&self, router_id: RouterId, record: &SubscriberRecord) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO pppoe_users (router_id, username, profile, remote_address, is_enabled, updated_at) \
             VALUES (?, ?, ?, NULL, ?, ?) \
             ON DUPLICATE KEY UPDATE profile = VALUES(profile), is_enabled = VALUES(is_enabled), updated_at = VALUES(updated_at)",
        )
        .bind(router_id.get())
        .bind(&record.user)
        .bind(&record.profile)
        .bind(!record.disabled)
        .bind(Utc::now().naive_utc())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl SubscriberSink for SqlSubscriberStore {
    async fn upsert_many(&self, router_id: RouterId, records: Vec<SubscriberRecord>) {
        for record in &records {
            if let Err(err) = self.upsert_one(router_id, record).await {
                tracing::warn!(router_id = %router_id, user = %record.user, error = %err, "subscriber upsert failed");
            }
        }
    }
}
