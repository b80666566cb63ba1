// SPDX-License-Identifier: MIT

//! The webhook wire payload.

use chrono::Utc;
use fleet_core::RouterId;
use serde::Serialize;
use serde_json::Value;

/// One outbound event, ready to serialize as the webhook request body.
///
/// `data` is intentionally an untyped [`Value`] — unlike the typed
/// command payloads inside the worker, this is the one place a loose map
/// is the right shape: every event kind attaches a different shape of
/// extra detail, and the receiving side is a separate system the sender
/// does not control the schema of.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WebhookEvent {
    pub event: &'static str,
    pub router_id: i64,
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    pub timestamp: String,
}

impl WebhookEvent {
    pub fn new(event: &'static str, router_id: RouterId, host: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            event,
            router_id: router_id.get(),
            host: host.into(),
            data,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn router_up(router_id: RouterId, host: impl Into<String>) -> Self {
        Self::new("router.up", router_id, host, None)
    }

    pub fn router_down(router_id: RouterId, host: impl Into<String>, reason: &str) -> Self {
        Self::new(
            "router.down",
            router_id,
            host,
            Some(serde_json::json!({ "reason": reason })),
        )
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
