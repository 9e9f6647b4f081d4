//! Sets up `tracing` output for the command line front end.

use std::{fs::OpenOptions, path::Path, sync::Arc};

use tracing_subscriber::{EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::Error;

/// The filter used for terminal output when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the global tracing subscriber.
///
/// Terminal output goes to stderr so that it never mixes with command
/// output, and is filtered by `RUST_LOG` (default [DEFAULT_LOG_FILTER]).
/// If `log_file` is given, every event at `debug` level or above is also
/// appended to it.
///
/// # Errors
/// Returns an [Error::LogFileError] if `log_file` cannot be opened.
pub fn setup_logging(log_file: Option<&Path>) -> Result<(), Error> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    let debug_log = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|error| Error::LogFileError(format!("{}: {error}", path.display())))?;

            Some(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_ansi(false)
                    .with_writer(Arc::new(file))
                    .with_filter(filter::LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_log)
        .with(debug_log)
        .init();

    Ok(())
}
