// SPDX-License-Identifier: MIT

//! The unit of work a worker's mailbox carries.

use crate::error::WorkerError;
use fleet_core::{IsolateAction, TrafficStats};
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub struct CreateSecretPayload {
    pub user: String,
    pub password: String,
    pub profile: String,
    pub local_ip: Option<String>,
    pub remote_ip: Option<String>,
    pub comment: String,
}

#[derive(Debug, Clone)]
pub struct UpdateSecretPayload {
    pub user: String,
    pub profile: String,
}

#[derive(Debug, Clone)]
pub struct IsolatePayload {
    pub ip: String,
    pub list: String,
    pub action: IsolateAction,
    pub comment: String,
}

/// One operation a worker can be asked to perform, with its own typed
/// payload per variant — a mis-shaped request cannot be constructed.
#[derive(Debug, Clone)]
pub enum CommandKind {
    Sync,
    CreateSecret(CreateSecretPayload),
    UpdateSecret(UpdateSecretPayload),
    Isolate(IsolatePayload),
    GetTraffic { user: String },
    Backup { filename: String },
    /// Internal: refresh the active-user and resource cache. Never
    /// carries a sink; only the ticker task enqueues it.
    RefreshMetrics,
}

impl CommandKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sync => "SYNC",
            Self::CreateSecret(_) => "CREATE_SECRET",
            Self::UpdateSecret(_) => "UPDATE_SECRET",
            Self::Isolate(_) => "ISOLATE",
            Self::GetTraffic { .. } => "GET_TRAFFIC",
            Self::Backup { .. } => "BACKUP",
            Self::RefreshMetrics => "REFRESH_METRICS",
        }
    }
}

/// What a successful command reports back on its sink.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Success,
    Synced,
    Traffic(TrafficStats),
}

/// A single-shot reply channel. Collapsing the two sinks the original
/// design describes (`result_sink`/`error_sink`) into one
/// `oneshot::Sender<Result<..>>` makes "exactly one value, success xor
/// failure" a property the type checker enforces instead of a
/// convention the dispatcher has to uphold by hand.
pub type CommandSink = oneshot::Sender<Result<CommandOutcome, WorkerError>>;

pub struct Command {
    pub kind: CommandKind,
    pub sink: Option<CommandSink>,
}

impl Command {
    /// Build a command paired with the receiver its caller awaits.
    pub fn with_sink(kind: CommandKind) -> (Self, oneshot::Receiver<Result<CommandOutcome, WorkerError>>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                kind,
                sink: Some(tx),
            },
            rx,
        )
    }

    /// Build a sink-less command, for internal self-enqueueing.
    pub fn fire_and_forget(kind: CommandKind) -> Self {
        Self { kind, sink: None }
    }

    /// Deliver exactly one outcome, if anyone is still listening.
    pub fn reply(self, outcome: Result<CommandOutcome, WorkerError>) {
        if let Some(sink) = self.sink {
            let _ = sink.send(outcome);
        }
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
