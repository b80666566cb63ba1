// SPDX-License-Identifier: MIT

//! The HTTP surface: one handler module per concern, a shared
//! [`AppState`] injected via `axum::extract::State`, and a trace layer
//! wrapping every request.

mod auth;
mod backup;
mod dispatch;
mod error;
mod health;
mod isolate;
mod monitoring;
mod secret;
pub mod state;
mod sync;

pub use state::AppState;

use axum::middleware;
use axum::routing::{get, post, put};
use axum::Router as AxumRouter;
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> AxumRouter {
    let secured = AxumRouter::new()
        .route("/sync/{id}", post(sync::sync_router))
        .route("/secret", post(secret::create_secret))
        .route("/secret/{user}", put(secret::update_secret))
        .route("/isolate", post(isolate::isolate))
        .route("/monitoring/targets", get(monitoring::monitoring_targets))
        .route("/router/{id}/health", get(monitoring::router_health))
        .route("/router/{id}/traffic", get(monitoring::router_traffic))
        .route("/router/{id}/backup", post(backup::router_backup))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_api_key));

    let v1 = AxumRouter::new()
        .route("/health", get(health::health))
        .merge(secured)
        .with_state(state);

    AxumRouter::new().nest("/api/v1", v1).layer(TraceLayer::new_for_http())
}

#[cfg(test)]
pub mod test_support;
