// SPDX-License-Identifier: MIT

use super::*;
use fleet_core::RouterId;

#[tokio::test]
async fn discards_every_event() {
    let sink = NoopWebhookSink::new();
    let event = WebhookEvent::router_up(RouterId::new(1), "10.0.0.1");
    sink.send(event).await.unwrap();
}
