// SPDX-License-Identifier: MIT

//! Errors from device session operations.

use thiserror::Error;

/// Errors surfaced by a [`crate::DeviceSession`].
///
/// Not every variant is fatal to the session — see [`SessionError::is_terminal`]
/// for which ones force a reconnect versus which ones are just reported
/// back to the caller while the connection stays open.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("connection failed: {0}")]
    Io(String),
    #[error("operation timed out after {0:?}")]
    Timeout(std::time::Duration),
    #[error("device rejected request: {0}")]
    Protocol(String),
    #[error("device reported an error: {0}")]
    DeviceError(String),
    #[error("{0} not found")]
    NotFound(String),
}

impl SessionError {
    /// True for failures that leave the session itself unusable: a
    /// transport error, a stalled read/write, or a framing desync severe
    /// enough that the sentence boundary can no longer be trusted.
    /// `DeviceError` and `NotFound` are application-level outcomes (the
    /// device rejected the command, a lookup came back empty) — the
    /// connection underneath them is still healthy and serving continues.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Timeout(_) | Self::Protocol(_))
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
