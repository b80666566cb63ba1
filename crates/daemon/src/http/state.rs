// SPDX-License-Identifier: MIT

//! The context every handler is injected with, replacing the ambient
//! global pool the original reached for from anywhere in the process.

use fleet_webhook::WebhookSink;
use fleet_worker::Pool;
use sqlx::MySqlPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<Pool>,
    pub webhook: Arc<dyn WebhookSink>,
    pub db: MySqlPool,
    pub api_secret: String,
}
