// SPDX-License-Identifier: MIT

//! fleet-protocol: the device session contract and its implementations.
//!
//! [`DeviceSession`] is intentionally tiny — one `run` method — a thin
//! synchronous request/response primitive. Everything a worker needs to
//! *say* to a router (add a secret, read active users, ...) is built on
//! top of `run` in [`commands`], kept separate from the trait so the
//! trait itself stays exhaustive-dispatch friendly and mock-free.

pub mod commands;
pub mod error;
pub mod ros;
pub mod session;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use error::SessionError;
pub use ros::RosSessionFactory;
pub use session::{DeviceSession, DeviceSessionFactory, Row};

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeSession, FakeSessionFactory, SessionCall};
