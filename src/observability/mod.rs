//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! parser / negotiator / middleware produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters for negotiations, truncation, fallbacks)
//!
//! Consumers:
//!     → log aggregation (stdout, env-filter controlled)
//!     → whatever metrics recorder the embedding host installs
//! ```
//!
//! # Design Decisions
//! - Metric updates are cheap counter increments and no-ops until the host
//!   installs a recorder
//! - No exporter is bundled; this is a library, the host owns exposition

pub mod logging;
pub mod metrics;
