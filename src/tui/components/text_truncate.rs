//! Width-aware truncation for single terminal rows.
//!
//! Widths are measured in terminal columns, so wide characters count
//! double.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Truncates `text` to `max_width` columns, appending `...` when cut.
///
/// Widths of three columns or less cannot hold any text next to the
/// ellipsis and are filled with dots instead.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= ELLIPSIS.len() {
        return ".".repeat(max_width);
    }

    let target_width = max_width.saturating_sub(ELLIPSIS.len());
    let mut truncated = String::new();
    let mut used = 0_usize;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(char_width) > target_width {
            break;
        }
        truncated.push(ch);
        used = used.saturating_add(char_width);
    }
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Collapses multi-line text onto one row, then truncates it.
pub(crate) fn single_line(text: &str, max_width: usize) -> String {
    let joined = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_to_width(&joined, max_width)
}
