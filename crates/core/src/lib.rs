// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fleet-core: shared domain types for the router control plane.
//!
//! No I/O lives here. Every other crate in the workspace depends on this
//! one, so its own dependency list stays minimal.

pub mod router;
pub mod session_data;

pub use router::{Router, RouterId};
pub use session_data::{ActiveUser, DeviceResources, IsolateAction, SubscriberRecord, TrafficStats};
