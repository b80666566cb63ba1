// SPDX-License-Identifier: MIT

//! Startup readiness barrier shared by every worker in a pool.

use std::time::Duration;
use tokio::sync::{Mutex, Notify};
use tokio::time::timeout;

/// Counts down from the number of workers a pool started; each worker
/// signals it exactly once, on whichever comes first: a successful
/// warmup, or a failed first dial attempt. `wait` returns as soon as the
/// count reaches zero, or when `deadline` elapses, whichever is first —
/// one slow or unreachable router can never block startup forever.
pub struct ReadyBarrier {
    remaining: Mutex<usize>,
    notify: Notify,
}

impl ReadyBarrier {
    pub fn new(total: usize) -> Self {
        Self {
            remaining: Mutex::new(total),
            notify: Notify::new(),
        }
    }

    pub async fn signal(&self) {
        let mut remaining = self.remaining.lock().await;
        if *remaining > 0 {
            *remaining -= 1;
            if *remaining == 0 {
                self.notify.notify_waiters();
            }
        }
    }

    pub async fn wait(&self, deadline: Duration) {
        let _ = timeout(deadline, self.wait_for_zero()).await;
    }

    async fn wait_for_zero(&self) {
        loop {
            // Subscribe before checking so a notify fired between the
            // check and the await is never missed.
            let notified = self.notify.notified();
            if *self.remaining.lock().await == 0 {
                return;
            }
            notified.await;
        }
    }
}

#[cfg(test)]
#[path = "ready_tests.rs"]
mod tests;
