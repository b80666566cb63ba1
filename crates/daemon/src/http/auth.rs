// SPDX-License-Identifier: MIT

//! `X-App-Key` authentication for every route under the secured group.

use super::state::AppState;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use subtle::ConstantTimeEq;

pub async fn require_api_key(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let provided = request
        .headers()
        .get("X-App-Key")
        .and_then(|value| value.to_str().ok());

    match provided {
        Some(key) if keys_match(key, &state.api_secret) => next.run(request).await,
        _ => (StatusCode::UNAUTHORIZED, Json(json!({"error": "Unauthorized"}))).into_response(),
    }
}

/// Equal-length, constant-time comparison so a wrong key never leaks how
/// many leading bytes it got right through response timing.
fn keys_match(provided: &str, expected: &str) -> bool {
    provided.len() == expected.len() && bool::from(provided.as_bytes().ct_eq(expected.as_bytes()))
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
