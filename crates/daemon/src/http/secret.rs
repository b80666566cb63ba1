// SPDX-License-Identifier: MIT

//! `POST /secret` and `PUT /secret/{user}` — the subscriber CRUD bridge.
//!
//! The original hardcoded every secret write to router 1 with a TODO to
//! let the caller pick a target; this resolves that TODO by requiring
//! `router_id` in the request body instead of guessing.

use super::dispatch::{submit_and_wait, DEFAULT_DEADLINE};
use super::error::ApiError;
use super::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fleet_core::RouterId;
use fleet_worker::{Command, CommandKind, CreateSecretPayload, UpdateSecretPayload};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CreateSecretRequest {
    router_id: Option<i64>,
    user: Option<String>,
    password: Option<String>,
    profile: Option<String>,
    remote_ip: Option<String>,
    local_ip: Option<String>,
    comment: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSecretRequest {
    router_id: Option<i64>,
    profile: Option<String>,
}

fn require(field: Option<String>, name: &str) -> Result<String, ApiError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::Validation(format!("'{name}' is required"))),
    }
}

fn require_router(id: Option<i64>) -> Result<RouterId, ApiError> {
    id.map(RouterId::new)
        .ok_or_else(|| ApiError::Validation("'router_id' is required".into()))
}

pub async fn create_secret(State(state): State<AppState>, Json(body): Json<CreateSecretRequest>) -> Result<Response, ApiError> {
    let router_id = require_router(body.router_id)?;
    let worker = state.pool.get(router_id).ok_or(ApiError::RouterNotFound)?;
    let user = require(body.user, "user")?;
    let password = require(body.password, "password")?;
    let profile = require(body.profile, "profile")?;

    let payload = CreateSecretPayload {
        user: user.clone(),
        password,
        profile,
        local_ip: body.local_ip,
        remote_ip: body.remote_ip,
        comment: body.comment.unwrap_or_default(),
    };
    let (command, rx) = Command::with_sink(CommandKind::CreateSecret(payload));
    submit_and_wait(&worker, command, rx, DEFAULT_DEADLINE).await?;

    Ok((StatusCode::CREATED, Json(json!({"status": "Secret Created", "user": user}))).into_response())
}

pub async fn update_secret(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Json(body): Json<UpdateSecretRequest>,
) -> Result<Response, ApiError> {
    let router_id = require_router(body.router_id)?;
    let worker = state.pool.get(router_id).ok_or(ApiError::RouterNotFound)?;
    let profile = require(body.profile, "profile")?;

    let payload = UpdateSecretPayload {
        user: user.clone(),
        profile: profile.clone(),
    };
    let (command, rx) = Command::with_sink(CommandKind::UpdateSecret(payload));
    submit_and_wait(&worker, command, rx, DEFAULT_DEADLINE).await?;

    Ok(Json(json!({"status": "Secret Updated", "user": user, "profile": profile})).into_response())
}

#[cfg(test)]
#[path = "secret_tests.rs"]
mod tests;
