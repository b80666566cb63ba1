// SPDX-License-Identifier: MIT

//! `POST /isolate` — add or remove an IP from a firewall address list.

use super::dispatch::{submit_and_wait, DEFAULT_DEADLINE};
use super::error::ApiError;
use super::state::AppState;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fleet_core::{IsolateAction, RouterId};
use fleet_worker::{Command, CommandKind, IsolatePayload};
use serde::Deserialize;
use serde_json::json;

const DEFAULT_LIST: &str = "ISOLATED";

#[derive(Debug, Deserialize)]
pub struct IsolateRequest {
    router_id: Option<i64>,
    ip: Option<String>,
    action: Option<String>,
    list: Option<String>,
    comment: Option<String>,
}

pub async fn isolate(State(state): State<AppState>, Json(body): Json<IsolateRequest>) -> Result<Response, ApiError> {
    let router_id = body
        .router_id
        .map(RouterId::new)
        .ok_or_else(|| ApiError::Validation("'router_id' is required".into()))?;
    let worker = state.pool.get(router_id).ok_or(ApiError::RouterNotFound)?;

    let ip = body.ip.filter(|v| !v.is_empty()).ok_or_else(|| ApiError::Validation("'ip' is required".into()))?;
    let action = match body.action.as_deref() {
        Some("add") => IsolateAction::Add,
        Some("remove") => IsolateAction::Remove,
        _ => return Err(ApiError::Validation("'action' must be 'add' or 'remove'".into())),
    };
    let list = body.list.filter(|v| !v.is_empty()).unwrap_or_else(|| DEFAULT_LIST.to_string());

    let payload = IsolatePayload {
        ip: ip.clone(),
        list,
        action,
        comment: body.comment.unwrap_or_default(),
    };
    let (command, rx) = Command::with_sink(CommandKind::Isolate(payload));
    submit_and_wait(&worker, command, rx, DEFAULT_DEADLINE).await?;

    let action_name = match action {
        IsolateAction::Add => "add",
        IsolateAction::Remove => "remove",
    };
    Ok(Json(json!({"status": "Isolation Updated", "ip": ip, "action": action_name})).into_response())
}

#[cfg(test)]
#[path = "isolate_tests.rs"]
mod tests;
