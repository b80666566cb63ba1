// SPDX-License-Identifier: MIT

//! Errors from the inventory and subscriber store.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
