//! Starts the task HTTP server.
//!
//! Usage:
//!
//! ```text
//! taskboard-server [--bind ADDR] [--store memory|postgres] [--database-url URL]
//! ```
//!
//! Every flag can also be supplied through its environment variable; see
//! `taskboard-server --help`.

use clap::Parser;
use std::process::ExitCode;
use taskboard::{config::ServerConfig, server, telemetry};

#[tokio::main]
async fn main() -> ExitCode {
    let config = ServerConfig::parse();
    telemetry::init(config.log_format);

    match server::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "taskboard-server exited with an error");
            ExitCode::FAILURE
        }
    }
}
