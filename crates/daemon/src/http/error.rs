// SPDX-License-Identifier: MIT

//! The shape every handler's failure path collapses into.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub enum ApiError {
    Validation(String),
    RouterNotFound,
    MailboxFull,
    Timeout,
    Device(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, json!({"error": message})),
            ApiError::RouterNotFound => (StatusCode::NOT_FOUND, json!({"error": "Router Not Found"})),
            ApiError::MailboxFull => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({"error": "Worker busy", "hint": "the router's command queue is full, retry shortly"}),
            ),
            ApiError::Timeout => (StatusCode::GATEWAY_TIMEOUT, json!({"error": "Timeout waiting for router"})),
            ApiError::Device(message) => (StatusCode::INTERNAL_SERVER_ERROR, json!({"error": message})),
        };
        (status, Json(body)).into_response()
    }
}
