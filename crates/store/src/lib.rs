// SPDX-License-Identifier: MIT

//! fleet-store: the MySQL-backed router inventory and subscriber upsert.
//!
//! Kept separate from `fleet-worker` so the worker's concurrency core
//! never has to know what a connection pool is — it only depends on the
//! [`fleet_worker::SubscriberSink`] trait this crate implements.

mod error;
mod inventory;
mod subscriber_store;

pub use error::StoreError;
pub use inventory::load_all;
pub use subscriber_store::SqlSubscriberStore;
