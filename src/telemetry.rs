//! Tracing subscriber initialisation.

use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;

/// Installs the process-wide tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`. Calling this
/// more than once leaves the first subscriber in place.
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
    if let Err(err) = installed {
        tracing::debug!(error = %err, "tracing subscriber already installed");
    }
}
