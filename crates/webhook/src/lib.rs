// SPDX-License-Identifier: MIT

//! Outbound event notifications to the control plane's upstream consumer.

mod event;
mod http;
mod noop;

pub use event::WebhookEvent;
pub use http::HttpWebhookSink;
pub use noop::NoopWebhookSink;

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeWebhookSink, WebhookCall};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from webhook delivery.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("webhook delivery failed: {0}")]
    SendFailed(String),
}

/// Delivers router lifecycle and command-outcome events to an external
/// listener. Implementations never retry internally: callers that care
/// about delivery treat every emission as fire-and-forget, matching the
/// upstream consumer's own tolerance for missed events.
#[async_trait]
pub trait WebhookSink: Send + Sync + 'static {
    async fn send(&self, event: WebhookEvent) -> Result<(), WebhookError>;
}
