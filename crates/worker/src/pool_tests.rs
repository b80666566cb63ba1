// SPDX-License-Identifier: MIT

use super::*;
use crate::subscriber_sink::NoopSubscriberSink;
use fleet_core::RouterId;
use fleet_protocol::FakeSessionFactory;
use fleet_webhook::NoopWebhookSink;

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

#[tokio::test(start_paused = true)]
async fn init_spawns_one_worker_per_router_and_becomes_ready() {
    let factory = Arc::new(FakeSessionFactory::new());
    let pool = Pool::init(
        vec![router(1), router(2), router(3)],
        factory,
        Arc::new(NoopSubscriberSink),
        Arc::new(NoopWebhookSink),
        Duration::from_secs(3600),
    );

    assert_eq!(pool.len(), 3);
    assert!(!pool.is_empty());

    pool.wait_for_ready(Duration::from_secs(5)).await;
    for id in [1, 2, 3] {
        let worker = pool.get(RouterId::new(id)).expect("worker registered");
        assert!(worker.is_online());
    }
}

#[tokio::test(start_paused = true)]
async fn get_returns_none_for_an_unknown_router() {
    let factory = Arc::new(FakeSessionFactory::new());
    let pool = Pool::init(
        vec![router(1)],
        factory,
        Arc::new(NoopSubscriberSink),
        Arc::new(NoopWebhookSink),
        Duration::from_secs(3600),
    );
    pool.wait_for_ready(Duration::from_secs(5)).await;

    assert!(pool.get(RouterId::new(999)).is_none());
}

#[tokio::test(start_paused = true)]
async fn get_all_active_users_concatenates_every_worker() {
    let factory = Arc::new(FakeSessionFactory::new());
    factory.push_response(
        "/ppp/active/print",
        Ok(vec![std::collections::HashMap::from([
            ("name".to_string(), "alice".to_string()),
            ("address".to_string(), "10.0.0.9".to_string()),
        ])]),
    );

    let pool = Pool::init(
        vec![router(1), router(2)],
        factory,
        Arc::new(NoopSubscriberSink),
        Arc::new(NoopWebhookSink),
        Duration::from_secs(3600),
    );
    pool.wait_for_ready(Duration::from_secs(5)).await;
    tokio::task::yield_now().await;

    let all = pool.get_all_active_users();
    assert_eq!(all.len(), 2);
}
