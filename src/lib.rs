//! Accept header normalization and content negotiation library.

pub mod accept;
pub mod config;
pub mod http;
pub mod negotiate;
pub mod observability;

pub use accept::entry::{MediaRange, MediaRangeList, DEFAULT_MAX_ENTRIES};
pub use config::schema::AcceptNormConfig;
pub use http::NormalizeAcceptLayer;
pub use negotiate::Negotiator;
