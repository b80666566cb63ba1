// SPDX-License-Identifier: MIT

//! Fatal startup errors — anything here aborts the process before it
//! starts serving traffic.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("http server error: {0}")]
    Serve(std::io::Error),
    #[error("database URL is unusable: {0}")]
    Database(sqlx::Error),
}
