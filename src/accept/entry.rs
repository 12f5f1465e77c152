//! Media range entries and the bounded list that holds them.
//!
//! # Responsibilities
//! - Represent a single parsed media range with its quality weight
//! - Hold parsed entries in a capacity-bounded, reusable buffer
//!
//! # Design Decisions
//! - Capacity is fixed at construction; pushes past it are silently dropped
//!   so adversarial headers cannot grow memory without bound
//! - The list is cleared and refilled in place by each parse, so one buffer
//!   serves every call within a request

/// Default maximum number of media ranges parsed from a single header.
pub const DEFAULT_MAX_ENTRIES: usize = 64;

/// A single media range from an Accept header, e.g. `text/html` at q=0.9.
///
/// The type string is lowercase and of the form `type/subtype`, `type/*`
/// or `*/*`; token characters are not validated further. Quality is clamped
/// to [0.0, 1.0] at parse time and defaults to 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaRange {
    pub media_type: String,
    pub quality: f64,
}

impl MediaRange {
    pub fn new(media_type: impl Into<String>, quality: f64) -> Self {
        Self {
            media_type: media_type.into(),
            quality: quality.clamp(0.0, 1.0),
        }
    }
}

/// A capacity-bounded list of media ranges in encounter order.
///
/// Acts as the reusable per-request buffer: parsing clears and refills it,
/// so values read from it are invalidated by the next parse.
#[derive(Debug, Clone)]
pub struct MediaRangeList {
    entries: Vec<MediaRange>,
    max_entries: usize,
}

impl MediaRangeList {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::with_capacity(max_entries.min(DEFAULT_MAX_ENTRIES)),
            max_entries,
        }
    }

    /// Drop all entries, keeping the allocation for the next parse.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Append an entry. Returns false once the list is full; the entry is
    /// dropped in that case and the caller should stop scanning.
    pub fn push(&mut self, entry: MediaRange) -> bool {
        if self.entries.len() >= self.max_entries {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.max_entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MediaRange> {
        self.entries.iter()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Vec<MediaRange> {
        &mut self.entries
    }
}

impl Default for MediaRangeList {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}
