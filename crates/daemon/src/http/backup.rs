// SPDX-License-Identifier: MIT

//! `POST /router/{id}/backup` — trigger a device backup save.

use super::dispatch::{submit_and_wait, DEFAULT_DEADLINE};
use super::error::ApiError;
use super::state::AppState;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use fleet_core::RouterId;
use fleet_worker::{Command, CommandKind};
use serde_json::json;

pub async fn router_backup(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response, ApiError> {
    let worker = state.pool.get(RouterId::new(id)).ok_or(ApiError::RouterNotFound)?;

    let filename = format!("fleet_backup_{}.backup", Utc::now().format("%Y%m%d_%H%M%S"));
    let (command, rx) = Command::with_sink(CommandKind::Backup { filename: filename.clone() });
    submit_and_wait(&worker, command, rx, DEFAULT_DEADLINE).await?;

    Ok(Json(json!({"status": "Backup created", "file": filename})).into_response())
}

#[cfg(test)]
#[path = "backup_tests.rs"]
mod tests;
