// SPDX-License-Identifier: MIT

//! Submit a command to a router's worker and wait on its sink with a
//! deadline, translating every outcome into the one [`ApiError`] shape
//! every handler returns.

use super::error::ApiError;
use fleet_worker::{Command, CommandOutcome, SubmitError, WorkerError};
use std::time::Duration;
use tokio::sync::oneshot;

/// Bound applied to every sink wait except [`TRAFFIC_DEADLINE`]. A write
/// path that could otherwise block a request thread forever on a dead
/// device gets a 504 instead, uniformly.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(10);

/// GET_TRAFFIC keeps its own shorter deadline.
pub const TRAFFIC_DEADLINE: Duration = Duration::from_secs(3);

pub async fn submit_and_wait(
    worker: &fleet_worker::Worker,
    command: Command,
    rx: oneshot::Receiver<Result<CommandOutcome, WorkerError>>,
    deadline: Duration,
) -> Result<CommandOutcome, ApiError> {
    worker.try_submit(command).map_err(|err| match err {
        SubmitError::MailboxFull => ApiError::MailboxFull,
        SubmitError::WorkerGone => ApiError::Device("router worker is no longer running".into()),
    })?;

    match tokio::time::timeout(deadline, rx).await {
        Ok(Ok(Ok(outcome))) => Ok(outcome),
        Ok(Ok(Err(WorkerError::Session(err)))) => Err(ApiError::Device(err.to_string())),
        Ok(Ok(Err(WorkerError::Offline))) => Err(ApiError::Device("router went offline before this command ran".into())),
        Ok(Err(_)) => Err(ApiError::Device("worker dropped the command before replying".into())),
        Err(_) => Err(ApiError::Timeout),
    }
}
