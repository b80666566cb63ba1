// SPDX-License-Identifier: MIT

//! Fake device session and factory for testing workers without a router.

use crate::error::SessionError;
use crate::session::{DeviceSession, DeviceSessionFactory, Row};
use async_trait::async_trait;
use fleet_core::Router;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

/// One recorded interaction with a [`FakeSession`] or [`FakeSessionFactory`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCall {
    Dial { router_id: i64 },
    Run { path: String, args: Vec<String> },
}

struct FakeState {
    calls: Vec<SessionCall>,
    dial_results: VecDeque<Result<(), SessionError>>,
    responses: HashMap<String, VecDeque<Result<Vec<Row>, SessionError>>>,
    default_response: Result<Vec<Row>, SessionError>,
}

/// A scriptable [`DeviceSessionFactory`] that never touches the network.
///
/// Queue dial outcomes with [`FakeSessionFactory::push_dial_error`] and
/// per-path run outcomes with [`FakeSessionFactory::push_response`];
/// anything left unconfigured for a path returns an empty row set, so
/// tests only need to wire up the paths they actually assert on.
#[derive(Clone)]
pub struct FakeSessionFactory {
    inner: Arc<Mutex<FakeState>>,
}

impl Default for FakeSessionFactory {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeState {
                calls: Vec::new(),
                dial_results: VecDeque::new(),
                responses: HashMap::new(),
                default_response: Ok(Vec::new()),
            })),
        }
    }
}

impl FakeSessionFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SessionCall> {
        self.inner.lock().calls.clone()
    }

    /// Queue one dial outcome; dials consume the queue in FIFO order and
    /// succeed once it is empty.
    pub fn push_dial_error(&self, err: SessionError) {
        self.inner.lock().dial_results.push_back(Err(err));
    }

    pub fn push_dial_ok(&self) {
        self.inner.lock().dial_results.push_back(Ok(()));
    }

    /// Queue one response for the given command path; responses for a
    /// path consume in FIFO order and repeat the last one once drained.
    pub fn push_response(&self, path: &str, response: Result<Vec<Row>, SessionError>) {
        self.inner
            .lock()
            .responses
            .entry(path.to_string())
            .or_default()
            .push_back(response);
    }
}

#[async_trait]
impl DeviceSessionFactory for FakeSessionFactory {
    type Session = FakeSession;

    async fn dial(&self, router: &Router, _timeout: Duration) -> Result<Self::Session, SessionError> {
        let mut inner = self.inner.lock();
        inner.calls.push(SessionCall::Dial {
            router_id: router.id.get(),
        });
        if let Some(result) = inner.dial_results.pop_front() {
            result?;
        }
        Ok(FakeSession {
            inner: self.inner.clone(),
        })
    }
}

/// The session half of [`FakeSessionFactory`]. Not `Clone`, matching the
/// exclusivity contract real sessions have.
pub struct FakeSession {
    inner: Arc<Mutex<FakeState>>,
}

#[async_trait]
impl DeviceSession for FakeSession {
    async fn run(&mut self, path: &str, args: &[String]) -> Result<Vec<Row>, SessionError> {
        let mut inner = self.inner.lock();
        inner.calls.push(SessionCall::Run {
            path: path.to_string(),
            args: args.to_vec(),
        });
        if let Some(queue) = inner.responses.get_mut(path) {
            if let Some(response) = queue.pop_front() {
                if queue.is_empty() {
                    // keep the last value around so later calls to this
                    // path see a stable answer instead of the default
                    queue.push_back(response.clone());
                }
                return response;
            }
        }
        inner.default_response.clone()
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
