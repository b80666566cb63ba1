// SPDX-License-Identifier: MIT

//! The seam a SYNC command's fetched records are handed across.
//!
//! Kept as a trait here, implemented by `fleet-store`, so this crate
//! never needs to know about SQL or connection pools — it only needs
//! somewhere to hand off a batch of records without waiting on it.

use async_trait::async_trait;
use fleet_core::{RouterId, SubscriberRecord};

#[async_trait]
pub trait SubscriberSink: Send + Sync + 'static {
    async fn upsert_many(&self, router_id: RouterId, records: Vec<SubscriberRecord>);
}

/// Discards every batch. Used when no inventory store is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSubscriberSink;

#[async_trait]
impl SubscriberSink for NoopSubscriberSink {
    async fn upsert_many(&self, _router_id: RouterId, _records: Vec<SubscriberRecord>) {}
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    pub struct FakeSubscriberSink {
        calls: Arc<Mutex<Vec<(RouterId, Vec<SubscriberRecord>)>>>,
    }

    impl FakeSubscriberSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn calls(&self) -> Vec<(RouterId, Vec<SubscriberRecord>)> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl SubscriberSink for FakeSubscriberSink {
        async fn upsert_many(&self, router_id: RouterId, records: Vec<SubscriberRecord>) {
            self.calls.lock().push((router_id, records));
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeSubscriberSink;

#[cfg(test)]
#[path = "subscriber_sink_tests.rs"]
mod tests;
