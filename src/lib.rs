//! Taskboard: a small task-management backend.
//!
//! Tasks are created, listed, fetched, partially updated, and deleted over
//! HTTP and persisted either in memory or in `PostgreSQL`.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: the task entity and its invariants, no infrastructure
//! - **Ports**: the repository trait the services depend on
//! - **Adapters**: in-memory and `PostgreSQL` repositories, the HTTP router
//!
//! # Modules
//!
//! - [`task`]: task domain, repository port, adapters, and use cases
//! - [`http`]: axum router exposing the task use cases
//! - [`config`]: command-line and environment configuration
//! - [`server`]: startup wiring and the serve loop
//! - [`telemetry`]: tracing subscriber setup

pub mod config;
pub mod http;
pub mod server;
pub mod task;
pub mod telemetry;
