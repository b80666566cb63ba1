// SPDX-License-Identifier: MIT

use super::*;

#[test]
fn isolate_action_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&IsolateAction::Add).unwrap(), "\"add\"");
    assert_eq!(
        serde_json::to_string(&IsolateAction::Remove).unwrap(),
        "\"remove\""
    );
}

#[test]
fn isolate_action_deserializes_from_lowercase() {
    let add: IsolateAction = serde_json::from_str("\"add\"").unwrap();
    assert_eq!(add, IsolateAction::Add);
}

#[test]
fn active_user_round_trips_through_json() {
    let user = ActiveUser {
        name: "alice".into(),
        address: "10.0.0.5".into(),
        caller_id: "AA:BB:CC:DD:EE:FF".into(),
        uptime: "1h2m3s".into(),
        router_id: RouterId::new(1),
    };
    let json = serde_json::to_string(&user).unwrap();
    let back: ActiveUser = serde_json::from_str(&json).unwrap();
    assert_eq!(user, back);
}
