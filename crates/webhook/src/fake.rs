// SPDX-License-Identifier: MIT

//! Fake webhook sink for testing.

use crate::{WebhookError, WebhookEvent, WebhookSink};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

/// One recorded send attempt.
pub type WebhookCall = WebhookEvent;

struct FakeState {
    calls: Vec<WebhookCall>,
    fail_next: bool,
}

#[derive(Clone)]
pub struct FakeWebhookSink {
    inner: Arc<Mutex<FakeState>>,
}

impl Default for FakeWebhookSink {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeState {
                calls: Vec::new(),
                fail_next: false,
            })),
        }
    }
}

impl FakeWebhookSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<WebhookCall> {
        self.inner.lock().calls.clone()
    }

    pub fn fail_next(&self) {
        self.inner.lock().fail_next = true;
    }
}

#[async_trait]
impl WebhookSink for FakeWebhookSink {
    async fn send(&self, event: WebhookEvent) -> Result<(), WebhookError> {
        let mut inner = self.inner.lock();
        inner.calls.push(event);
        if inner.fail_next {
            inner.fail_next = false;
            return Err(WebhookError::SendFailed("fake failure".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
