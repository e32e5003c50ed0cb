//! Composition root: wires repository, service, and router, then serves.

use std::net::SocketAddr;
use std::sync::Arc;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use mockable::DefaultClock;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{ConfigError, ServerConfig, StoreBackend};
use crate::http::{self, SharedTaskUseCases};
use crate::task::{
    adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    ports::TaskRepositoryError,
    services::TaskService,
};

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The configuration is inconsistent.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The `PostgreSQL` connection pool could not be built.
    #[error("failed to build database pool: {0}")]
    Pool(#[source] PoolError),

    /// A blocking startup task panicked or was cancelled.
    #[error("startup task failed: {0}")]
    Startup(#[source] tokio::task::JoinError),

    /// The repository rejected startup work such as schema creation.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Requested listen address.
        addr: SocketAddr,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an I/O failure.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

/// Builds the task use cases for the configured backend.
///
/// # Errors
///
/// Returns [`ServerError`] when the configuration is invalid or the
/// `PostgreSQL` backend cannot be prepared.
pub async fn build_use_cases(config: &ServerConfig) -> Result<SharedTaskUseCases, ServerError> {
    config.validate()?;
    let clock = Arc::new(DefaultClock);

    match config.store {
        StoreBackend::Memory => {
            let repository = Arc::new(InMemoryTaskRepository::new());
            Ok(Arc::new(TaskService::new(repository, clock)))
        }
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .clone()
                .ok_or(ConfigError::MissingDatabaseUrl)?;
            let pool_size = config.pool_size;
            let pool = tokio::task::spawn_blocking(move || {
                Pool::builder()
                    .max_size(pool_size)
                    .build(ConnectionManager::<PgConnection>::new(url))
            })
            .await
            .map_err(ServerError::Startup)?
            .map_err(ServerError::Pool)?;

            let repository = PostgresTaskRepository::new(pool);
            repository.ensure_schema().await?;
            Ok(Arc::new(TaskService::new(Arc::new(repository), clock)))
        }
    }
}

/// Runs the HTTP server until Ctrl-C is received.
///
/// # Errors
///
/// Returns [`ServerError`] when startup fails or the listener stops with an
/// I/O error.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let use_cases = build_use_cases(&config).await?;
    let app = http::router(use_cases);

    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind,
            source,
        })?;
    let address = listener.local_addr().map_err(ServerError::Serve)?;
    tracing::info!(%address, store = ?config.store, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for Ctrl-C");
        return;
    }
    tracing::info!("shutdown requested");
}
