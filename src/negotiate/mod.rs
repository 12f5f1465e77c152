//! Content negotiation strategies.
//!
//! # Data Flow
//! ```text
//! accept header text (+ optional preference CSV)
//!     → accept::parser (refills the negotiator's entry buffer)
//!     → accept::matcher (score preferences against header entries)
//!     → accept::order / accept::render (canonical text output)
//!     → strategy result (text, single type, quality, or boolean)
//! ```
//!
//! # Design Decisions
//! - The negotiator owns exactly one reusable entry buffer; every call that
//!   parses a header clears and refills it in place, so nothing derived from
//!   a previous call survives the next one
//! - `&mut self` on every strategy makes the single-owner, one-thread-per-
//!   request discipline a compile-time property instead of a convention
//! - No error channel: every strategy is total and degrades to a documented
//!   fallback (empty string, 0.0, false, or raw passthrough)
//! - No memoization; repeated calls within a request redo the parse

use crate::accept::entry::{MediaRange, MediaRangeList, DEFAULT_MAX_ENTRIES};
use crate::accept::matcher::media_range_matches;
use crate::accept::order::sort_media_ranges;
use crate::accept::parser::{parse_accept_header, parse_preferred_types};
use crate::accept::render::render_accept_header;
use crate::config::schema::AcceptNormConfig;
use crate::observability::metrics;

/// Request-scoped content negotiation engine.
///
/// Owns a single reusable media range buffer. Create one per logical
/// request (or per worker) and never share it across threads; the `&mut`
/// receivers enforce exclusive access.
#[derive(Debug, Clone)]
pub struct Negotiator {
    entries: MediaRangeList,
}

impl Negotiator {
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }

    /// Create a negotiator with a custom entry capacity. Headers and
    /// preference lists parse at most this many items per call.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: MediaRangeList::new(max_entries),
        }
    }

    pub fn from_config(config: &AcceptNormConfig) -> Self {
        Self::with_max_entries(config.max_entries)
    }

    /// Parse, sort and re-render `header` into canonical form.
    ///
    /// Returns the empty string for an empty header. Canonical output is
    /// quality-descending, type-ascending, with `q` rendered at one decimal
    /// digit and omitted at 1.0.
    pub fn canonicalize(&mut self, header: &str) -> String {
        metrics::record_negotiation("canonicalize");
        if header.is_empty() {
            return String::new();
        }

        parse_accept_header(header, &mut self.entries);
        sort_media_ranges(&mut self.entries);
        render_accept_header(&self.entries)
    }

    /// Restrict `header` to the preferred types the client accepts, in
    /// canonical form.
    ///
    /// Empty preferences degrade to [`canonicalize`](Self::canonicalize).
    /// An empty header short-circuits to the first preference verbatim.
    /// When no preference is accepted, the first preference is synthesized
    /// at q=1.0 so a non-empty preference list never filters to nothing.
    pub fn filter(&mut self, header: &str, preferred: &str) -> String {
        metrics::record_negotiation("filter");
        if preferred.is_empty() {
            return self.canonicalize(header);
        }

        let max_entries = self.entries.max_entries();
        if header.is_empty() {
            return parse_preferred_types(preferred, max_entries)
                .into_iter()
                .next()
                .unwrap_or_default();
        }

        parse_accept_header(header, &mut self.entries);
        let preferred_types = parse_preferred_types(preferred, max_entries);

        let mut kept = MediaRangeList::new(max_entries);
        for candidate in &preferred_types {
            if kept.is_full() {
                break;
            }
            let quality = self.max_matching_quality(candidate);
            if quality > 0.0 {
                kept.push(MediaRange::new(candidate.clone(), quality));
            }
        }

        if kept.is_empty() {
            if let Some(first) = preferred_types.first() {
                metrics::record_fallback("filter");
                tracing::debug!(fallback = %first, "no preferred type accepted, keeping first");
                kept.push(MediaRange::new(first.clone(), 1.0));
            }
        }

        sort_media_ranges(&mut kept);
        render_accept_header(&kept)
    }

    /// Pick the single preferred type the client likes best.
    ///
    /// Ties go to the earlier preference. Returns the first preference when
    /// the header is empty or nothing matches, and the empty string when the
    /// preference list is empty. The result is never quality-annotated.
    pub fn best_match(&mut self, header: &str, preferred: &str) -> String {
        metrics::record_negotiation("best_match");
        let preferred_types = parse_preferred_types(preferred, self.entries.max_entries());
        let first = match preferred_types.first() {
            Some(first) => first,
            None => return String::new(),
        };

        if header.is_empty() {
            return first.clone();
        }

        parse_accept_header(header, &mut self.entries);

        let mut best: Option<&str> = None;
        let mut best_quality = -1.0_f64;
        for candidate in &preferred_types {
            let quality = self.max_matching_quality(candidate);
            // Strictly greater: earlier preferences win ties.
            if quality > best_quality {
                best_quality = quality;
                best = Some(candidate.as_str());
            }
        }

        best.unwrap_or(first.as_str()).to_string()
    }

    /// Return the first preferred type the client accepts with quality > 0.
    ///
    /// First-match, not best-match. Empty header returns the empty string;
    /// empty preferences or no accepted preference pass the original header
    /// text through unchanged.
    pub fn prefer(&mut self, header: &str, preferred: &str) -> String {
        metrics::record_negotiation("prefer");
        if header.is_empty() {
            return String::new();
        }

        let preferred_types = parse_preferred_types(preferred, self.entries.max_entries());
        if preferred_types.is_empty() {
            return header.to_string();
        }

        parse_accept_header(header, &mut self.entries);

        for candidate in &preferred_types {
            let accepted = self
                .entries
                .iter()
                .any(|e| e.quality > 0.0 && media_range_matches(&e.media_type, candidate));
            if accepted {
                return candidate.clone();
            }
        }

        metrics::record_fallback("prefer");
        tracing::debug!("no preferred type accepted, passing header through");
        header.to_string()
    }

    /// Quality the client assigns to `media_type` under `header`.
    ///
    /// Entries are scanned in header order: the first exact match wins
    /// immediately; otherwise the most specific wildcard (`type/*` before
    /// `*/*`) applies. 0.0 when nothing matches or either input is empty.
    pub fn quality(&mut self, header: &str, media_type: &str) -> f64 {
        metrics::record_negotiation("quality");
        if header.is_empty() || media_type.is_empty() {
            return 0.0;
        }

        parse_accept_header(header, &mut self.entries);

        let wanted = media_type.to_ascii_lowercase();
        let top_wildcard = wanted
            .split_once('/')
            .map(|(top, _)| format!("{}/*", top));

        let mut type_wildcard_quality = None;
        let mut full_wildcard_quality = None;
        for entry in self.entries.iter() {
            if entry.media_type == wanted {
                return entry.quality;
            }
            if entry.media_type == "*/*" {
                full_wildcard_quality = Some(entry.quality);
            } else if top_wildcard.as_deref() == Some(entry.media_type.as_str()) {
                type_wildcard_quality = Some(entry.quality);
            }
        }

        type_wildcard_quality
            .or(full_wildcard_quality)
            .unwrap_or(0.0)
    }

    /// Whether the client accepts `media_type` at all (quality > 0).
    pub fn accepts(&mut self, header: &str, media_type: &str) -> bool {
        self.quality(header, media_type) > 0.0
    }

    /// Highest quality among header entries whose range matches `candidate`;
    /// 0.0 when none match.
    fn max_matching_quality(&self, candidate: &str) -> f64 {
        let mut quality = 0.0_f64;
        for entry in self.entries.iter() {
            if media_range_matches(&entry.media_type, candidate) && entry.quality > quality {
                quality = entry.quality;
            }
        }
        quality
    }
}

impl Default for Negotiator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_sorts_and_renders() {
        let mut neg = Negotiator::new();
        assert_eq!(
            neg.canonicalize("*/*;q=0.1, application/json, text/html;q=0.9"),
            "application/json, text/html;q=0.9, */*;q=0.1"
        );
    }

    #[test]
    fn test_canonicalize_empty_header() {
        let mut neg = Negotiator::new();
        assert_eq!(neg.canonicalize(""), "");
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        let mut neg = Negotiator::new();
        let once = neg.canonicalize("text/html;q=0.85, image/*;q=0.3, */*;q=0.1");
        let twice = neg.canonicalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_keeps_accepted_preferences() {
        let mut neg = Negotiator::new();
        assert_eq!(
            neg.filter("text/*;q=0.8, application/json;q=0.9", "text/html,application/json,image/png"),
            "application/json;q=0.9, text/html;q=0.8"
        );
    }

    #[test]
    fn test_filter_empty_preferences_canonicalizes() {
        let mut neg = Negotiator::new();
        assert_eq!(neg.filter("b/c, a/b;q=0.5", ""), "b/c, a/b;q=0.5");
    }

    #[test]
    fn test_filter_empty_header_returns_first_preference() {
        let mut neg = Negotiator::new();
        assert_eq!(neg.filter("", "a/b,c/d"), "a/b");
    }

    #[test]
    fn test_filter_fallback_when_nothing_accepted() {
        let mut neg = Negotiator::new();
        assert_eq!(neg.filter("text/html", "image/png,image/jpeg"), "image/png");
    }

    #[test]
    fn test_best_match_picks_highest_quality() {
        let mut neg = Negotiator::new();
        assert_eq!(
            neg.best_match("text/html;q=0.8, application/json;q=0.9", "text/html,application/json"),
            "application/json"
        );
    }

    #[test]
    fn test_best_match_tie_goes_to_earlier_preference() {
        let mut neg = Negotiator::new();
        assert_eq!(
            neg.best_match("text/html;q=0.9, application/json;q=0.9", "text/html,application/json"),
            "text/html"
        );
    }

    #[test]
    fn test_best_match_empty_preferences() {
        let mut neg = Negotiator::new();
        assert_eq!(neg.best_match("text/html", ""), "");
    }

    #[test]
    fn test_best_match_empty_header_returns_first_preference() {
        let mut neg = Negotiator::new();
        assert_eq!(neg.best_match("", "a/b,c/d"), "a/b");
    }

    #[test]
    fn test_best_match_no_match_returns_first_preference() {
        let mut neg = Negotiator::new();
        assert_eq!(neg.best_match("text/html", "image/png,image/jpeg"), "image/png");
    }

    #[test]
    fn test_prefer_first_match_wins() {
        let mut neg = Negotiator::new();
        // image/png scores lower than image/jpeg but comes first.
        assert_eq!(
            neg.prefer("image/png;q=0.2, image/jpeg;q=0.9", "image/png,image/jpeg"),
            "image/png"
        );
    }

    #[test]
    fn test_prefer_zero_quality_is_not_a_match() {
        let mut neg = Negotiator::new();
        assert_eq!(
            neg.prefer("image/png;q=0", "image/png,image/jpeg"),
            "image/png;q=0"
        );
    }

    #[test]
    fn test_prefer_empty_header() {
        let mut neg = Negotiator::new();
        assert_eq!(neg.prefer("", "a/b"), "");
    }

    #[test]
    fn test_prefer_empty_preferences_passes_header_through() {
        let mut neg = Negotiator::new();
        assert_eq!(neg.prefer("text/html;q=0.5", ""), "text/html;q=0.5");
    }

    #[test]
    fn test_quality_exact_match() {
        let mut neg = Negotiator::new();
        assert_eq!(neg.quality("*/*;q=0.5, text/html;q=0.9", "text/html"), 0.9);
    }

    #[test]
    fn test_quality_falls_back_to_wildcards() {
        let mut neg = Negotiator::new();
        assert_eq!(neg.quality("*/*;q=0.5, text/html;q=0.9", "text/plain"), 0.5);
        assert_eq!(
            neg.quality("*/*;q=0.1, text/*;q=0.6", "text/plain"),
            0.6
        );
    }

    #[test]
    fn test_quality_first_exact_occurrence_wins() {
        let mut neg = Negotiator::new();
        assert_eq!(
            neg.quality("text/html;q=0.3, text/html;q=0.9", "text/html"),
            0.3
        );
    }

    #[test]
    fn test_quality_empty_inputs() {
        let mut neg = Negotiator::new();
        assert_eq!(neg.quality("", "text/html"), 0.0);
        assert_eq!(neg.quality("text/html", ""), 0.0);
    }

    #[test]
    fn test_quality_no_match() {
        let mut neg = Negotiator::new();
        assert_eq!(neg.quality("text/html", "image/png"), 0.0);
    }

    #[test]
    fn test_accepts_tracks_quality() {
        let mut neg = Negotiator::new();
        assert!(neg.accepts("text/html;q=0.1", "text/html"));
        assert!(!neg.accepts("text/html;q=0", "text/html"));
        assert!(!neg.accepts("text/html", "image/png"));
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let mut neg = Negotiator::new();
        assert_eq!(neg.quality("Text/HTML;q=0.4", "TEXT/html"), 0.4);
    }
}
