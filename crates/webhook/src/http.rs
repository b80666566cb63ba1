// SPDX-License-Identifier: MIT

//! Real [`WebhookSink`] that POSTs the event as JSON to a fixed URL.

use crate::{WebhookError, WebhookEvent, WebhookSink};
use async_trait::async_trait;

/// Delivers events over HTTP. Failures are logged by the caller, not
/// retried here — the control plane treats webhook delivery as
/// best-effort, the same as the system this replaces.
pub struct HttpWebhookSink {
    client: reqwest::Client,
    url: String,
}

impl HttpWebhookSink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl WebhookSink for HttpWebhookSink {
    async fn send(&self, event: WebhookEvent) -> Result<(), WebhookError> {
        let response = self
            .client
            .post(&self.url)
            .json(&event)
            .send()
            .await
            .map_err(|e| WebhookError::SendFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(WebhookError::SendFailed(format!(
                "upstream returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
