//! Canonical ordering of media ranges.
//!
//! # Design Decisions
//! - Composite sort key: quality descending, then type ascending
//! - Unstable sort; duplicate (type, quality) pairs are interchangeable so
//!   their relative order is left unspecified
//! - Qualities are clamped to [0.0, 1.0] at parse time, so `total_cmp`
//!   agrees with the numeric order

use crate::accept::entry::MediaRangeList;

/// Sort `list` into canonical order: quality descending, type ascending.
pub fn sort_media_ranges(list: &mut MediaRangeList) {
    if list.len() > 1 {
        list.entries_mut().sort_unstable_by(|a, b| {
            b.quality
                .total_cmp(&a.quality)
                .then_with(|| a.media_type.cmp(&b.media_type))
        });
    }
}
