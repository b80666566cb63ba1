// SPDX-License-Identifier: MIT

//! The Device Session contract.

use crate::error::SessionError;
use async_trait::async_trait;
use fleet_core::Router;
use std::collections::HashMap;
use std::time::Duration;

/// One reply row: an ordered-by-arrival, string-keyed map, matching what
/// the device's wire protocol actually returns (attribute names are not
/// known statically — callers pick the keys they asked for out of this map).
pub type Row = HashMap<String, String>;

/// A single open administration session against one router.
///
/// `run` is the entire contract: fetch/mutate operations are expressed as
/// a command path plus positional `key=value` arguments and an ordered
/// sequence of result rows. The session is not `Clone` or `Sync` — only
/// `Send`, so it can be moved into a worker's lifecycle task, never
/// shared. That makes exclusive ownership ("no other task may issue
/// requests on this session concurrently") a property of the type system
/// rather than a convention callers have to honor.
#[async_trait]
pub trait DeviceSession: Send {
    /// Run one command against the device and collect its reply rows.
    ///
    /// Whether a returned error means the session itself is broken is not
    /// this method's concern — see [`SessionError::is_terminal`] for that.
    async fn run(&mut self, path: &str, args: &[String]) -> Result<Vec<Row>, SessionError>;
}

/// Dials new [`DeviceSession`]s for a router.
///
/// Split out from `DeviceSession` itself so a worker can be generic over
/// "how do I get a session" independently of "what does a session look
/// like".
#[async_trait]
pub trait DeviceSessionFactory: Send + Sync + 'static {
    type Session: DeviceSession + 'static;

    async fn dial(&self, router: &Router, timeout: Duration) -> Result<Self::Session, SessionError>;
}
