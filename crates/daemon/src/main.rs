// SPDX-License-Identifier: MIT

//! fleetd: the control-plane daemon. Spawns one persistent worker per
//! managed router, then serves the HTTP API the rest of the stack talks
//! to.

mod config;
mod error;
mod http;
mod logging;

use std::sync::Arc;

use config::Config;
use error::StartupError;
use fleet_protocol::RosSessionFactory;
use fleet_store::SqlSubscriberStore;
use fleet_webhook::{HttpWebhookSink, NoopWebhookSink, WebhookSink};
use fleet_worker::Pool;
use sqlx::mysql::MySqlPoolOptions;
use tokio::signal::unix::{signal, SignalKind};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = Config::load()?;
    info!("starting fleetd");
    if config.api_secret == config::DEFAULT_API_SECRET {
        warn!("API_SECRET not set, running with the development default — set it before exposing this daemon");
    }

    let db = connect_database(&config.database_url).await?;
    let routers = match fleet_store::load_all(&db).await {
        Ok(routers) => routers,
        Err(err) => {
            error!(error = %err, "failed to load router inventory, starting with an empty pool");
            Vec::new()
        }
    };

    let webhook: Arc<dyn WebhookSink> = match &config.webhook_url {
        Some(url) => Arc::new(HttpWebhookSink::new(url.clone())),
        None => Arc::new(NoopWebhookSink),
    };
    let subscriber_sink = Arc::new(SqlSubscriberStore::new(db.clone()));

    let pool = Arc::new(Pool::init(
        routers,
        Arc::new(RosSessionFactory),
        subscriber_sink,
        webhook.clone(),
        config.refresh_interval,
    ));
    pool.wait_for_ready(fleet_worker::READY_DEADLINE).await;

    let state = http::AppState {
        pool,
        webhook,
        db,
        api_secret: config.api_secret.clone(),
    };
    let app = http::router(state);

    let listener = tokio::net::TcpListener::bind(&config.http_bind_addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: config.http_bind_addr.clone(),
            source,
        })?;
    info!(addr = %config.http_bind_addr, "listening");

    let mut sigterm = signal(SignalKind::terminate()).map_err(StartupError::Serve)?;
    let mut sigint = signal(SignalKind::interrupt()).map_err(StartupError::Serve)?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = sigterm.recv() => info!("received SIGTERM, shutting down"),
                _ = sigint.recv() => info!("received SIGINT, shutting down"),
            }
        })
        .await
        .map_err(StartupError::Serve)?;

    info!("fleetd stopped");
    Ok(())
}

/// Connect to MySQL without blocking startup on it: a down database means
/// the control plane runs with a stale or empty inventory rather than
/// refusing to start. Only a malformed URL is treated as fatal.
async fn connect_database(database_url: &str) -> Result<sqlx::MySqlPool, StartupError> {
    match MySqlPoolOptions::new().max_connections(10).connect(database_url).await {
        Ok(pool) => {
            info!("database connected");
            Ok(pool)
        }
        Err(err) => {
            warn!(error = %err, "failed to connect to database, running in offline mode");
            MySqlPoolOptions::new().connect_lazy(database_url).map_err(StartupError::Database)
        }
    }
}
