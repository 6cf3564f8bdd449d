//! Subscriber setup for the binary. Library code only emits `tracing` events.

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{Error, Result};

/// Install a stderr subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init(level: &str, json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("corpus_search={level}")))
        .map_err(|e| Error::Logging(e.to_string()))?;

    let builder = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_ansi(false);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };

    installed.map_err(|e| Error::Logging(e.to_string()))
}
