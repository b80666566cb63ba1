// SPDX-License-Identifier: MIT

//! `GET /health` — unauthenticated liveness probe.

use axum::Json;
use serde_json::{json, Value};

pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok", "muscle": "alive"}))
}
