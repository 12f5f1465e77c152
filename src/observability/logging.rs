//! Structured logging initialization.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for binaries embedding the engine
//! - Respect `RUST_LOG` over the configured level
//!
//! # Design Decisions
//! - Library code only emits events; subscriber setup is opt-in and lives
//!   here so the CLI and embedding hosts share one entry point

use tracing_subscriber::EnvFilter;

/// Initialize stdout logging at `log_level` (trace, debug, info, warn,
/// error). `RUST_LOG` takes precedence when set.
pub fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
