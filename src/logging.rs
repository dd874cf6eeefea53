//! Tracing setup
//!
//! `RUST_LOG` overrides the default filter of either setup, e.g.
//! `RUST_LOG=bv::nav=trace`.
//!
//! The viewer owns the terminal, so it logs to a daily-rolling file
//! (`<dir>/bv.log.YYYY-MM-DD`). The server logs to stderr.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// File logging for the terminal viewer.
pub fn init_file(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::daily(dir, "bv.log");

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter("debug"))
        .try_init()?;
    Ok(())
}

/// Console logging for the HTTP server.
pub fn init_console() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(filter("info"))
        .try_init()?;
    Ok(())
}
