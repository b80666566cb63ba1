// SPDX-License-Identifier: MIT

//! No-op webhook sink, used when no upstream URL is configured.

use crate::{WebhookError, WebhookEvent, WebhookSink};
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopWebhookSink;

impl NoopWebhookSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WebhookSink for NoopWebhookSink {
    async fn send(&self, _event: WebhookEvent) -> Result<(), WebhookError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
