pub mod footer;
pub mod form_overlay;
pub mod header;
pub mod list;
pub mod notice_overlay;
pub mod render;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Unicode-width-aware truncation with ellipsis.
/// Returns `""` when `max_width` is 0.
pub fn truncate(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let cw = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + cw + 1 > max_width {
            break;
        }
        result.push(c);
        width += cw;
    }
    result.push('\u{2026}');
    result
}

/// Keeps the tail of `s` that fits in `max_width`, for text being typed.
pub fn tail(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let mut width = 0;
    let mut start = s.len();
    for (i, c) in s.char_indices().rev() {
        let cw = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + cw > max_width {
            break;
        }
        width += cw;
        start = i;
    }
    s[start..].to_string()
}
