//! Process settings loaded via OrthoConfig and the server configuration
//! object built from them.

use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use chrono::{FixedOffset, Offset, Utc};
use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::DEFAULT_UTC_OFFSET_MINUTES;
use crate::outbound::persistence::{DbPool, PoolConfig};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors raised while turning raw settings into typed values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr { value: String, message: String },
    #[error("utc offset {minutes} minutes is out of range")]
    UtcOffset { minutes: i32 },
}

/// Settings read from `LUNCHMATE_*` environment variables, configuration
/// files, and command-line flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LUNCHMATE")]
pub struct AppSettings {
    /// Socket address to listen on. Defaults to `0.0.0.0:8080`.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Without one the server keeps data in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_pool_size: Option<u32>,
    /// Apply embedded migrations before accepting traffic.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
    /// Minutes east of UTC used to decide which calendar day is "today".
    pub utc_offset_minutes: Option<i32>,
}

impl AppSettings {
    /// Parse the configured bind address, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: value.to_owned(),
            message: err.to_string(),
        })
    }

    /// Offset applied to the clock, defaulting to +09:00.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UtcOffset`] when the offset is a day or more.
    pub fn utc_offset(&self) -> Result<FixedOffset, SettingsError> {
        let minutes = self.utc_offset_minutes.unwrap_or(DEFAULT_UTC_OFFSET_MINUTES);
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(SettingsError::UtcOffset { minutes })
    }

    /// Pool configuration when a database URL is set.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        self.database_url.as_deref().map(|url| {
            let config = PoolConfig::new(url);
            match self.db_pool_size {
                Some(size) => config.with_max_size(size),
                None => config,
            }
        })
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) utc_offset: FixedOffset,
}

impl ServerConfig {
    /// Construct a server configuration with in-memory persistence and the
    /// default +09:00 calendar.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool: None,
            utc_offset: default_offset(),
        }
    }

    /// Attach a database connection pool; repositories switch to Diesel.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[must_use]
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = offset;
        self
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

/// The +09:00 offset used when nothing else is configured.
fn default_offset() -> FixedOffset {
    FixedOffset::east_opt(DEFAULT_UTC_OFFSET_MINUTES * 60).unwrap_or_else(|| Utc.fix())
}
