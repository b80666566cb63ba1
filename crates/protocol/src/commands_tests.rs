// SPDX-License-Identifier: MIT

use super::*;
use crate::fake::FakeSessionFactory;
use crate::session::DeviceSessionFactory;
use fleet_core::RouterId;

fn row(pairs: &[(&str, &str)]) -> Row {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

async fn fake_session() -> crate::fake::FakeSession {
    let factory = FakeSessionFactory::new();
    factory
        .dial(
            &fleet_core::Router {
                id: RouterId::new(1),
                name: "r".into(),
                host: "h".into(),
                port: 8728,
                username: "u".into(),
                password: "p".into(),
            },
            std::time::Duration::from_secs(5),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn set_secret_profile_fails_when_user_missing() {
    let mut session = fake_session().await;
    let err = set_secret_profile(&mut session, "ghost", "new-profile").await.unwrap_err();
    assert!(matches!(err, SessionError::NotFound(_)));
}

#[tokio::test]
async fn get_all_secrets_maps_disabled_flag() {
    let factory = FakeSessionFactory::new();
    factory.push_response(
        "/ppp/secret/print",
        Ok(vec![
            row(&[("name", "alice"), ("profile", "default"), ("disabled", "false")]),
            row(&[("name", "bob"), ("profile", "default"), ("disabled", "true")]),
        ]),
    );
    let mut session = factory
        .dial(
            &fleet_core::Router {
                id: RouterId::new(1),
                name: "r".into(),
                host: "h".into(),
                port: 8728,
                username: "u".into(),
                password: "p".into(),
            },
            std::time::Duration::from_secs(5),
        )
        .await
        .unwrap();

    let secrets = get_all_secrets(&mut session).await.unwrap();
    assert_eq!(
        secrets,
        vec![
            fleet_core::SubscriberRecord {
                user: "alice".to_string(),
                profile: "default".to_string(),
                disabled: false,
            },
            fleet_core::SubscriberRecord {
                user: "bob".to_string(),
                profile: "default".to_string(),
                disabled: true,
            },
        ]
    );
}

#[tokio::test]
async fn get_queue_traffic_falls_back_to_substring_scan() {
    let factory = FakeSessionFactory::new();
    // exact-name query returns nothing
    factory.push_response("/queue/simple/print", Ok(vec![]));
    let mut session = factory
        .dial(
            &fleet_core::Router {
                id: RouterId::new(1),
                name: "r".into(),
                host: "h".into(),
                port: 8728,
                username: "u".into(),
                password: "p".into(),
            },
            std::time::Duration::from_secs(5),
        )
        .await
        .unwrap();

    // second call (the unfiltered scan) needs a second queued response
    factory.push_response(
        "/queue/simple/print",
        Ok(vec![row(&[("name", "pppoe-alice-queue"), ("rate", "1500/5000")])]),
    );

    let stats = get_queue_traffic(&mut session, "alice").await.unwrap();
    assert_eq!(stats.name, "alice");
    assert_eq!(stats.rx, 1500);
    assert_eq!(stats.tx, 5000);
}

#[tokio::test]
async fn get_queue_traffic_errors_when_nothing_matches() {
    let factory = FakeSessionFactory::new();
    factory.push_response("/queue/simple/print", Ok(vec![]));
    let mut session = factory
        .dial(
            &fleet_core::Router {
                id: RouterId::new(1),
                name: "r".into(),
                host: "h".into(),
                port: 8728,
                username: "u".into(),
                password: "p".into(),
            },
            std::time::Duration::from_secs(5),
        )
        .await
        .unwrap();

    let err = get_queue_traffic(&mut session, "nobody").await.unwrap_err();
    assert!(matches!(err, SessionError::NotFound(_)));
}

#[tokio::test]
async fn get_system_resource_parses_memory_fields() {
    let factory = FakeSessionFactory::new();
    factory.push_response(
        "/system/resource/print",
        Ok(vec![row(&[
            ("uptime", "3d2h"),
            ("cpu-load", "5"),
            ("board-name", "RB750"),
            ("version", "7.1"),
            ("total-memory", "134217728"),
            ("free-memory", "67108864"),
        ])]),
    );
    let mut session = factory
        .dial(
            &fleet_core::Router {
                id: RouterId::new(1),
                name: "r".into(),
                host: "h".into(),
                port: 8728,
                username: "u".into(),
                password: "p".into(),
            },
            std::time::Duration::from_secs(5),
        )
        .await
        .unwrap();

    let resources = get_system_resource(&mut session).await.unwrap();
    assert_eq!(resources.total_memory, 134_217_728);
    assert_eq!(resources.free_memory, 67_108_864);
    assert_eq!(resources.board_name, "RB750");
}
