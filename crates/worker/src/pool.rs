// SPDX-License-Identifier: MIT

//! Registry of workers keyed by router id.

use crate::ready::ReadyBarrier;
use crate::subscriber_sink::SubscriberSink;
use crate::worker::{self, Worker};
use fleet_core::{ActiveUser, Router, RouterId};
use fleet_protocol::DeviceSessionFactory;
use fleet_webhook::WebhookSink;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// How long [`Pool::wait_for_ready`] is willing to block before giving
/// up and letting the server start anyway.
pub const READY_DEADLINE: Duration = Duration::from_secs(5);

/// Fixed registry of one worker per router, built once at startup. The
/// map itself is never mutated after [`Pool::init`] returns — later
/// lookups need no lock of their own.
pub struct Pool {
    workers: HashMap<RouterId, Arc<Worker>>,
    ready: Arc<ReadyBarrier>,
}

impl Pool {
    /// Spawn one worker per router and return the pool together with
    /// the readiness barrier those workers will signal.
    pub fn init<F: DeviceSessionFactory>(
        routers: Vec<Router>,
        factory: Arc<F>,
        subscriber_sink: Arc<dyn SubscriberSink>,
        webhook: Arc<dyn WebhookSink>,
        refresh_interval: Duration,
    ) -> Self {
        let ready = Arc::new(ReadyBarrier::new(routers.len()));
        let mut workers = HashMap::with_capacity(routers.len());

        for router in routers {
            let id = router.id;
            let handle = worker::spawn(
                router,
                factory.clone(),
                subscriber_sink.clone(),
                webhook.clone(),
                ready.clone(),
                refresh_interval,
            );
            workers.insert(id, handle);
        }

        tracing::info!(workers = workers.len(), "worker pool initialized");
        Self { workers, ready }
    }

    pub fn get(&self, id: RouterId) -> Option<Arc<Worker>> {
        self.workers.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Concatenate every worker's cached active-user snapshot. Order
    /// across workers is unspecified; within one worker's contribution
    /// it is preserved.
    pub fn get_all_active_users(&self) -> Vec<ActiveUser> {
        let mut all = Vec::new();
        for worker in self.workers.values() {
            all.extend(worker.cache().active_users());
        }
        all
    }

    /// Block until every worker has signaled ready or `deadline` has
    /// elapsed, whichever comes first.
    pub async fn wait_for_ready(&self, deadline: Duration) {
        tracing::info!("waiting for routers to warm up");
        self.ready.wait(deadline).await;
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
