// SPDX-License-Identifier: MIT

//! Errors surfaced to a command's caller.

use fleet_protocol::SessionError;
use thiserror::Error;

/// Reported to a command's sink, or returned to a submitter that could
/// not enqueue at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkerError {
    /// The device session rejected the command or the device itself
    /// reported an error.
    #[error(transparent)]
    Session(#[from] SessionError),
    /// The worker's session died while this command was still queued
    /// behind others; it was never sent to the device.
    #[error("router went offline before this command could run")]
    Offline,
}

/// Returned when a command cannot be handed to a worker at all.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("command mailbox is full")]
    MailboxFull,
    #[error("worker is no longer accepting commands")]
    WorkerGone,
}
