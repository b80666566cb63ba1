// SPDX-License-Identifier: MIT

use super::*;
use fleet_core::RouterId;

#[test]
fn router_up_has_no_data_payload() {
    let event = WebhookEvent::router_up(RouterId::new(3), "10.0.0.1");
    assert_eq!(event.event, "router.up");
    assert_eq!(event.router_id, 3);
    assert!(event.data.is_none());
}

#[test]
fn router_down_carries_reason() {
    let event = WebhookEvent::router_down(RouterId::new(3), "10.0.0.1", "dial timeout");
    assert_eq!(event.event, "router.down");
    assert_eq!(event.data.unwrap()["reason"], "dial timeout");
}

#[test]
fn timestamp_is_rfc3339() {
    let event = WebhookEvent::router_up(RouterId::new(1), "h");
    assert!(chrono::DateTime::parse_from_rfc3339(&event.timestamp).is_ok());
}

#[test]
fn serializes_without_data_field_when_none() {
    let event = WebhookEvent::router_up(RouterId::new(1), "h");
    let json = serde_json::to_value(&event).unwrap();
    assert!(json.get("data").is_none());
}

#[test]
fn serializes_with_data_field_when_present() {
    let event = WebhookEvent::router_down(RouterId::new(1), "h", "dial timeout");
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["data"]["reason"], "dial timeout");
}
