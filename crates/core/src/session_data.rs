// SPDX-License-Identifier: MIT

//! Value types read from or written to a device session.

use crate::router::RouterId;
use serde::{Deserialize, Serialize};

/// One PPPoE session currently active on a router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveUser {
    pub name: String,
    pub address: String,
    pub caller_id: String,
    pub uptime: String,
    pub router_id: RouterId,
}

/// Point-in-time device health snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceResources {
    pub uptime: String,
    pub cpu_load: String,
    pub board_name: String,
    pub version: String,
    pub total_memory: i64,
    pub free_memory: i64,
}

/// Instantaneous traffic rate for one subscriber's queue, in bits per second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficStats {
    pub name: String,
    pub rx: i64,
    pub tx: i64,
}

/// One PPPoE secret as read back during a SYNC fetch, ready to upsert
/// into the inventory store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberRecord {
    pub user: String,
    pub profile: String,
    pub disabled: bool,
}

/// Whether an ISOLATE command should add or remove the IP from the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IsolateAction {
    Add,
    Remove,
}

#[cfg(test)]
#[path = "session_data_tests.rs"]
mod tests;
