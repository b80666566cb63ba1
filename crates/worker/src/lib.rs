// SPDX-License-Identifier: MIT

//! fleet-worker: the per-router persistent worker and pool.
//!
//! This is the concurrency engine the rest of the workspace exists to
//! serve: one long-lived device session per router, one command
//! mailbox serializing every interaction with it, a periodically
//! refreshed cache, and bounded reconnect backoff on disconnect.

mod cache;
mod command;
mod error;
mod pool;
mod ready;
mod subscriber_sink;
mod worker;

pub use cache::WorkerCache;
pub use command::{Command, CommandKind, CommandOutcome, CommandSink, CreateSecretPayload, IsolatePayload, UpdateSecretPayload};
pub use error::{SubmitError, WorkerError};
pub use pool::{Pool, READY_DEADLINE};
pub use ready::ReadyBarrier;
pub use subscriber_sink::{NoopSubscriberSink, SubscriberSink};
pub use worker::{Worker, MAILBOX_CAPACITY};

#[cfg(any(test, feature = "test-support"))]
pub use subscriber_sink::FakeSubscriberSink;
