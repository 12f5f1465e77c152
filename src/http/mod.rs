//! HTTP integration subsystem.
//!
//! # Data Flow
//! ```text
//! incoming request
//!     → middleware.rs (read Accept header)
//!     → negotiate::Negotiator (canonicalize, or filter to preferred types)
//!     → Accept header rewritten in place
//!     → inner service (cache keys / handlers see canonical text)
//! ```

pub mod middleware;

pub use middleware::{NormalizeAccept, NormalizeAcceptLayer};
