// SPDX-License-Identifier: MIT

//! `GET /monitoring/targets`, `GET /router/{id}/health`, and
//! `GET /router/{id}/traffic` — the read side of the cache.

use super::dispatch::{submit_and_wait, TRAFFIC_DEADLINE};
use super::error::ApiError;
use super::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fleet_core::RouterId;
use fleet_worker::{Command, CommandKind, CommandOutcome};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct TargetsQuery {
    #[allow(dead_code)]
    request_id: Option<String>,
}

pub async fn monitoring_targets(State(state): State<AppState>, Query(_query): Query<TargetsQuery>) -> Response {
    Json(state.pool.get_all_active_users()).into_response()
}

pub async fn router_health(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response, ApiError> {
    let worker = state.pool.get(RouterId::new(id)).ok_or(ApiError::RouterNotFound)?;
    match worker.cache().resources() {
        Some(resources) => Ok(Json(resources).into_response()),
        None => Ok((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"status": "No data yet", "next_retry": "10s"})),
        )
            .into_response()),
    }
}

#[derive(Debug, Deserialize)]
pub struct TrafficQuery {
    user: Option<String>,
}

pub async fn router_traffic(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<TrafficQuery>,
) -> Result<Response, ApiError> {
    let user = query.user.filter(|v| !v.is_empty()).ok_or_else(|| ApiError::Validation("query param 'user' required".into()))?;
    let worker = state.pool.get(RouterId::new(id)).ok_or(ApiError::RouterNotFound)?;

    let (command, rx) = Command::with_sink(CommandKind::GetTraffic { user });
    let outcome = submit_and_wait(&worker, command, rx, TRAFFIC_DEADLINE).await?;

    match outcome {
        CommandOutcome::Traffic(stats) => Ok(Json(stats).into_response()),
        _ => Ok(Json(json!({})).into_response()),
    }
}

#[cfg(test)]
#[path = "monitoring_tests.rs"]
mod tests;
