//! Media range matching logic.
//!
//! # Responsibilities
//! - Match `*/*` against anything
//! - Match `type/*` against any concrete type with the same top-level token
//! - Fall back to full string equality everywhere else
//!
//! # Design Decisions
//! - Inputs are assumed lowercase (the parser normalizes), so comparisons
//!   are bytewise
//! - A side without a `/` degrades to plain string equality

/// Returns true when `pattern` (a media range, possibly wildcarded) accepts
/// the concrete `media_type`.
pub fn media_range_matches(pattern: &str, media_type: &str) -> bool {
    if pattern == "*/*" {
        return true;
    }

    let (pattern_top, pattern_sub) = match pattern.split_once('/') {
        Some(parts) => parts,
        None => return pattern == media_type,
    };
    let (type_top, _) = match media_type.split_once('/') {
        Some(parts) => parts,
        None => return pattern == media_type,
    };

    if pattern_sub == "*" {
        return pattern_top == type_top;
    }

    pattern == media_type
}
