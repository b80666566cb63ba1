// SPDX-License-Identifier: MIT

//! Router identity and inventory record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a router, backed by the inventory table's
/// integer primary key rather than an opaque string — routers are
/// addressed by the id an operator typed into a URL, not a generated id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouterId(pub i64);

impl RouterId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RouterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RouterId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Immutable inventory record for one managed router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Router {
    pub id: RouterId,
    pub name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
