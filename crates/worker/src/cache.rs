// SPDX-License-Identifier: MIT

//! The hot read cache a worker's lifecycle task keeps warm.

use fleet_core::{ActiveUser, DeviceResources};
use parking_lot::RwLock;

struct CacheInner {
    active_users: Vec<ActiveUser>,
    resources: Option<DeviceResources>,
}

/// Many-reader/single-writer cache of the last successful refresh.
///
/// Only the owning worker's lifecycle task ever takes the write side;
/// HTTP handlers and [`crate::Pool::get_all_active_users`] only read.
/// Each field is updated independently so a failure fetching one (say,
/// active users) during a REFRESH_METRICS cycle never clobbers a still-
/// good value for the other.
pub struct WorkerCache {
    inner: RwLock<CacheInner>,
}

impl Default for WorkerCache {
    fn default() -> Self {
        Self {
            inner: RwLock::new(CacheInner {
                active_users: Vec::new(),
                resources: None,
            }),
        }
    }
}

impl WorkerCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_users(&self) -> Vec<ActiveUser> {
        self.inner.read().active_users.clone()
    }

    pub fn resources(&self) -> Option<DeviceResources> {
        self.inner.read().resources.clone()
    }

    /// Apply whichever of the two refresh results succeeded. Both
    /// writes happen under one write-lock acquisition so a reader never
    /// observes a half-applied refresh.
    pub fn apply_refresh(&self, active_users: Option<Vec<ActiveUser>>, resources: Option<DeviceResources>) {
        let mut inner = self.inner.write();
        if let Some(users) = active_users {
            inner.active_users = users;
        }
        if let Some(resources) = resources {
            inner.resources = Some(resources);
        }
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
