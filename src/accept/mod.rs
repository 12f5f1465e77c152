//! Accept header parsing and manipulation subsystem.
//!
//! # Data Flow
//! ```text
//! raw Accept header text
//!     → parser.rs (tokenize into (media type, quality) entries)
//!     → entry.rs (bounded MediaRangeList, encounter order)
//!     → matcher.rs (wildcard-aware pattern matching)
//!     → order.rs (quality desc, type asc total order)
//!     → render.rs (canonical header text)
//! ```
//!
//! # Design Decisions
//! - All types are lowercased at parse time; later comparisons are bytewise
//! - Entry lists are capacity-bounded with silent truncation on overflow
//! - No operation in this subsystem can fail; malformed input degrades to
//!   documented fallbacks instead of errors

pub mod entry;
pub mod matcher;
pub mod order;
pub mod parser;
pub mod render;

pub use entry::{MediaRange, MediaRangeList, DEFAULT_MAX_ENTRIES};
pub use matcher::media_range_matches;
pub use order::sort_media_ranges;
pub use parser::{parse_accept_header, parse_preferred_types};
pub use render::render_accept_header;
