// SPDX-License-Identifier: MIT

use super::*;
use fleet_core::RouterId;

#[tokio::test]
async fn records_every_sent_event() {
    let sink = FakeWebhookSink::new();
    sink.send(WebhookEvent::router_up(RouterId::new(1), "h")).await.unwrap();
    sink.send(WebhookEvent::router_down(RouterId::new(1), "h", "timeout"))
        .await
        .unwrap();
    assert_eq!(sink.calls().len(), 2);
}

#[tokio::test]
async fn fail_next_errors_exactly_once() {
    let sink = FakeWebhookSink::new();
    sink.fail_next();
    let first = sink.send(WebhookEvent::router_up(RouterId::new(1), "h")).await;
    assert!(first.is_err());
    let second = sink.send(WebhookEvent::router_up(RouterId::new(1), "h")).await;
    assert!(second.is_ok());
}
