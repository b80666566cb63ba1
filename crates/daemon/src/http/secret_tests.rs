// SPDX-License-Identifier: MIT

use crate::http::test_support::{build, build_with, TEST_API_SECRET};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use fleet_core::{Router, RouterId};
use serde_json::json;
use std::collections::HashMap;
use tower::ServiceExt;

fn router(id: i64) -> Router {
    Router {
        id: RouterId::new(id),
        name: format!("r{id}"),
        host: format!("10.0.0.{id}"),
        port: 8728,
        username: "admin".into(),
        password: "pw".into(),
    }
}

fn json_request(method: &str, path: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header("X-App-Key", TEST_API_SECRET)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test(start_paused = true)]
async fn create_secret_on_a_known_router_returns_201() {
    let app = build(vec![router(1)]).await;
    let body = json!({"router_id": 1, "user": "alice", "password": "pw123", "profile": "default"});
    let response = crate::http::router(app.state)
        .oneshot(json_request("POST", "/api/v1/secret", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test(start_paused = true)]
async fn create_secret_missing_password_returns_400() {
    let app = build(vec![router(1)]).await;
    let body = json!({"router_id": 1, "user": "alice", "profile": "default"});
    let response = crate::http::router(app.state)
        .oneshot(json_request("POST", "/api/v1/secret", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test(start_paused = true)]
async fn create_secret_missing_router_id_returns_400() {
    let app = build(vec![router(1)]).await;
    let body = json!({"user": "alice", "password": "pw123", "profile": "default"});
    let response = crate::http::router(app.state)
        .oneshot(json_request("POST", "/api/v1/secret", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test(start_paused = true)]
async fn create_secret_on_an_unknown_router_returns_404() {
    let app = build(vec![router(1)]).await;
    let body = json!({"router_id": 999, "user": "alice", "password": "pw123", "profile": "default"});
    let response = crate::http::router(app.state)
        .oneshot(json_request("POST", "/api/v1/secret", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(start_paused = true)]
async fn update_secret_returns_the_new_profile() {
    let app = build_with(vec![router(1)], |factory| {
        factory.push_response(
            "/ppp/secret/print",
            Ok(vec![HashMap::from([(".id".to_string(), "*1".to_string())])]),
        );
    })
    .await;
    let body = json!({"router_id": 1, "profile": "gold"});
    let response = crate::http::router(app.state)
        .oneshot(json_request("PUT", "/api/v1/secret/alice", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
