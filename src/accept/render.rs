//! Canonical header text rendering.
//!
//! # Design Decisions
//! - `q` is omitted at 1.0 and rendered with exactly one decimal digit
//!   otherwise; this is a lossy display policy, re-parsing rendered text
//!   yields the rounded quality
//! - Entries are rendered in list order; callers sort first when they want
//!   canonical output

use std::fmt::Write;

use crate::accept::entry::MediaRangeList;

/// Render `list` as Accept header text, e.g. `text/html, */*;q=0.1`.
pub fn render_accept_header(list: &MediaRangeList) -> String {
    let mut out = String::new();
    for (i, entry) in list.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&entry.media_type);
        if entry.quality < 1.0 {
            // String formatting is infallible.
            let _ = write!(out, ";q={:.1}", entry.quality);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accept::entry::MediaRange;

    fn list_of(entries: &[(&str, f64)]) -> MediaRangeList {
        let mut list = MediaRangeList::default();
        for (t, q) in entries {
            list.push(MediaRange::new(*t, *q));
        }
        list
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_accept_header(&MediaRangeList::default()), "");
    }

    #[test]
    fn test_render_omits_full_quality() {
        let list = list_of(&[("text/html", 1.0)]);
        assert_eq!(render_accept_header(&list), "text/html");
    }

    #[test]
    fn test_render_one_decimal_digit() {
        let list = list_of(&[("text/html", 0.9), ("*/*", 0.1)]);
        assert_eq!(render_accept_header(&list), "text/html;q=0.9, */*;q=0.1");
    }

    #[test]
    fn test_render_rounds_quality_display() {
        let list = list_of(&[("text/html", 0.88)]);
        assert_eq!(render_accept_header(&list), "text/html;q=0.9");
    }

    #[test]
    fn test_render_zero_quality() {
        let list = list_of(&[("image/png", 0.0)]);
        assert_eq!(render_accept_header(&list), "image/png;q=0.0");
    }
}
