//! Backend entry-point: loads settings, prepares storage, and serves the API.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use lunchmate::inbound::http::health::HealthState;
use lunchmate::inbound::http::session_config::fingerprint::key_fingerprint;
use lunchmate::inbound::http::session_config::{BuildMode, session_settings_from_env};
use lunchmate::outbound::persistence::{DbPool, run_pending_migrations};
use lunchmate::server::{AppSettings, ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(io::Error::other)?;
    info!(
        fingerprint = %key_fingerprint(&session.key),
        cookie_secure = session.cookie_secure,
        "session key loaded"
    );

    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;
    let utc_offset = settings.utc_offset().map_err(io::Error::other)?;
    let mut config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        session.same_site,
        bind_addr,
    )
    .with_utc_offset(utc_offset);

    if let Some(pool_config) = settings.pool_config() {
        if settings.run_migrations {
            let url = pool_config.database_url().to_owned();
            tokio::task::spawn_blocking(move || run_pending_migrations(&url))
                .await
                .map_err(|err| io::Error::other(format!("migration task failed: {err}")))?
                .map_err(io::Error::other)?;
        }
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|err| io::Error::other(format!("create database pool: {err}")))?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting server");
    create_server(health_state, config)?.await
}
