// SPDX-License-Identifier: MIT

use super::*;
use fleet_core::RouterId;

#[tokio::test]
async fn noop_sink_drops_everything() {
    let sink = NoopSubscriberSink;
    sink.upsert_many(
        RouterId::new(1),
        vec![SubscriberRecord {
            user: "alice".into(),
            profile: "default".into(),
            disabled: false,
        }],
    )
    .await;
}

#[tokio::test]
async fn fake_sink_records_every_batch() {
    let sink = FakeSubscriberSink::new();
    sink.upsert_many(RouterId::new(1), vec![]).await;
    sink.upsert_many(RouterId::new(2), vec![]).await;
    assert_eq!(sink.calls().len(), 2);
}
