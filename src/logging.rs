//! Diagnostic tracing for the session.
//!
//! The TUI owns the terminal while it runs, so events never go to
//! stdout/stderr. With a log file configured they are appended there,
//! filtered by `RUST_LOG` (default `warn`). Without one no subscriber is
//! installed and the `tracing` macros are no-ops.
//!
//! # Example
//! ```bash
//! RUST_LOG=sortty=debug sortty --log-file sortty.log
//! ```

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber, writing to `log_file` if given.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .compact(),
        )
        .init();
    Ok(())
}
