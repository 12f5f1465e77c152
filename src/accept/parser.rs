//! Accept header tokenization.
//!
//! # Responsibilities
//! - Split header text on top-level commas into media range items
//! - Extract the `q` parameter; skip all other parameters
//! - Normalize types (trim, lowercase) at the boundary
//!
//! # Design Decisions
//! - Cursor over the input instead of pointer arithmetic; all delimiters are
//!   ASCII so byte positions are always char boundaries
//! - An empty type token terminates parsing: entries collected so far are
//!   kept and the remaining text is treated as trailing garbage
//! - Quality values use a longest-numeric-prefix parse, so `q=0.5junk`
//!   reads as 0.5 and `q=abc` reads as 0.0
//! - Capacity overflow stops the scan without error

use crate::accept::entry::{MediaRange, MediaRangeList};
use crate::observability::metrics;

/// Parse an Accept header into `list`, clearing it first.
///
/// Empty input yields an empty list. Scanning stops once the list is full;
/// excess media ranges are silently dropped.
pub fn parse_accept_header(header: &str, list: &mut MediaRangeList) {
    list.clear();
    if header.is_empty() {
        return;
    }

    let bytes = header.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() && !list.is_full() {
        match parse_media_range(header, pos) {
            Some((entry, next)) => {
                list.push(entry);
                pos = next;
            }
            // Empty type token: keep what we have, drop the rest.
            None => break,
        }
    }

    if list.is_full() && !header[pos.min(header.len())..].trim().is_empty() {
        metrics::record_truncated("accept");
        tracing::debug!(
            max_entries = list.max_entries(),
            "accept header truncated at capacity"
        );
    }
}

/// Parse a comma-separated preference list into lowercased, trimmed tokens.
///
/// Empty tokens are skipped. At most `max_entries` tokens are returned;
/// the rest of the input is not scanned.
pub fn parse_preferred_types(preferred: &str, max_entries: usize) -> Vec<String> {
    let mut types = Vec::new();
    if preferred.is_empty() {
        return types;
    }

    for raw in preferred.split(',') {
        if types.len() >= max_entries {
            metrics::record_truncated("preferred");
            tracing::debug!(max_entries, "preference list truncated at capacity");
            break;
        }
        let token = raw.trim();
        if !token.is_empty() {
            types.push(token.to_ascii_lowercase());
        }
    }

    types
}

/// Parse one media range starting at `pos`. Returns the entry and the
/// position after its trailing comma, or None when the type token is empty
/// (including end of input).
fn parse_media_range(input: &str, mut pos: usize) -> Option<(MediaRange, usize)> {
    let bytes = input.as_bytes();

    pos = skip_ws(bytes, pos);
    let start = pos;
    while pos < bytes.len() && bytes[pos] != b';' && bytes[pos] != b',' {
        pos += 1;
    }

    let token = input[start..pos].trim_end();
    if token.is_empty() {
        return None;
    }
    let media_type = token.to_ascii_lowercase();

    let mut quality = 1.0_f64;
    while pos < bytes.len() && bytes[pos] == b';' {
        pos = skip_ws(bytes, pos + 1);

        let name_start = pos;
        while pos < bytes.len()
            && bytes[pos] != b'='
            && bytes[pos] != b';'
            && bytes[pos] != b','
        {
            pos += 1;
        }
        let name = &input[name_start..pos];

        if pos < bytes.len() && bytes[pos] == b'=' {
            pos += 1;
            let value_start = pos;
            while pos < bytes.len() && bytes[pos] != b';' && bytes[pos] != b',' {
                pos += 1;
            }
            if name.eq_ignore_ascii_case("q") {
                quality = parse_quality_value(&input[value_start..pos]);
            }
            // Other parameters are recognized but their values are dropped.
        }
    }

    pos = skip_ws(bytes, pos);
    if pos < bytes.len() && bytes[pos] == b',' {
        pos += 1;
    }

    Some((MediaRange::new(media_type, quality), pos))
}

/// Permissive quality parse: read as much of the value as looks numeric,
/// parse that prefix, clamp to [0.0, 1.0]. No digits at all reads as 0.0.
fn parse_quality_value(value: &str) -> f64 {
    let value = value.trim_start();
    let numeric_len = value
        .bytes()
        .take_while(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        .count();

    // Longest prefix of the numeric run that parses as a float wins, so a
    // stray trailing exponent marker ("0.5e") falls back to the digits
    // before it.
    let mut quality = 0.0_f64;
    for end in 1..=numeric_len {
        if let Ok(v) = value[..end].parse::<f64>() {
            quality = v;
        }
    }

    quality.clamp(0.0, 1.0)
}

fn skip_ws(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}
