// SPDX-License-Identifier: MIT

use super::*;
use fleet_core::RouterId;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn posts_event_as_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let sink = HttpWebhookSink::new(format!("{}/hook", server.uri()));
    let event = WebhookEvent::router_up(RouterId::new(1), "10.0.0.1");
    sink.send(event).await.unwrap();
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let sink = HttpWebhookSink::new(format!("{}/hook", server.uri()));
    let event = WebhookEvent::router_up(RouterId::new(1), "10.0.0.1");
    let err = sink.send(event).await.unwrap_err();
    assert!(matches!(err, WebhookError::SendFailed(_)));
}
