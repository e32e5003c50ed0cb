//! Server configuration read from command-line flags and the environment.

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use thiserror::Error;

/// Persistence backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreBackend {
    /// Process-local store; contents are lost on restart.
    Memory,
    /// `PostgreSQL` store reached through `--database-url`.
    Postgres,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Runtime configuration for `taskboard-server`.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "taskboard-server", about = "HTTP backend for task records")]
pub struct ServerConfig {
    /// Socket address the HTTP listener binds to.
    #[arg(long, env = "TASKBOARD_BIND", default_value = "0.0.0.0:5000")]
    pub bind: SocketAddr,

    /// Persistence backend.
    #[arg(long, env = "TASKBOARD_STORE", value_enum, default_value_t = StoreBackend::Memory)]
    pub store: StoreBackend,

    /// `PostgreSQL` connection URL, required when `--store postgres`.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled `PostgreSQL` connections.
    #[arg(long, env = "TASKBOARD_POOL_SIZE", default_value_t = 8)]
    pub pool_size: u32,

    /// Log output format.
    #[arg(long, env = "TASKBOARD_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// Errors returned for inconsistent configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The `PostgreSQL` backend was selected without a connection URL.
    #[error("--database-url (DATABASE_URL) is required when --store is postgres")]
    MissingDatabaseUrl,

    /// The connection pool cannot hold any connection.
    #[error("--pool-size must be at least 1")]
    EmptyPool,
}

impl ServerConfig {
    /// Checks option combinations that clap cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configuration cannot start a server.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store != StoreBackend::Postgres {
            return Ok(());
        }
        if self
            .database_url
            .as_deref()
            .is_none_or(|url| url.trim().is_empty())
        {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        if self.pool_size == 0 {
            return Err(ConfigError::EmptyPool);
        }
        Ok(())
    }
}
