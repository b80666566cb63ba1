// SPDX-License-Identifier: MIT

//! `POST /sync/{id}` — force an immediate subscriber sync.

use super::dispatch::{submit_and_wait, DEFAULT_DEADLINE};
use super::error::ApiError;
use super::state::AppState;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use fleet_core::RouterId;
use fleet_worker::{Command, CommandKind};
use serde_json::json;

pub async fn sync_router(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response, ApiError> {
    let worker = state.pool.get(RouterId::new(id)).ok_or(ApiError::RouterNotFound)?;

    let (command, rx) = Command::with_sink(CommandKind::Sync);
    submit_and_wait(&worker, command, rx, DEFAULT_DEADLINE).await?;

    Ok(Json(json!({"status": "Sync command sent"})).into_response())
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
