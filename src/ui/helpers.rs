//! Cursor positioning and text fitting shared by the components.
//!
//! All widths are counted in `char`s. The catalog only holds single-width
//! text plus a few symbols (`•`, `★`), so this matches terminal columns.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `(row, col)`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to `width` columns, ending in `…` when something was dropped.
///
/// ```rust
/// use rentalizer::ui::helpers::truncate;
///
/// assert_eq!(truncate("Tesla Model 3", 20), "Tesla Model 3");
/// assert_eq!(truncate("Tesla Model 3", 6), "Tesla…");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Lays out `left` and `right` on one line of `width` columns.
///
/// The right side wins: the left side is truncated to leave room for it
/// and at least one space.
#[must_use]
pub fn spread(left: &str, right: &str, width: usize) -> String {
    let right_width = display_width(right);
    let left = truncate(left, width.saturating_sub(right_width + 1));
    let gap = width.saturating_sub(display_width(&left) + right_width);
    format!("{left}{}{right}", " ".repeat(gap))
}

/// Left-aligns `text` in exactly `width` columns.
#[must_use]
pub fn pad(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let fill = width.saturating_sub(display_width(&text));
    format!("{text}{}", " ".repeat(fill))
}

/// Centers `text` in exactly `width` columns.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let left = width.saturating_sub(display_width(&text)) / 2;
    pad(&format!("{}{text}", " ".repeat(left)), width)
}

/// Wraps the char ranges of a fuzzy match in highlight colors.
///
/// On a selected row the highlight is skipped so the selection colors stay
/// intact. Ranges are `(start, end)` char indices, end exclusive, ascending.
#[must_use]
pub fn highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
    base_fg: &str,
) -> String {
    if ranges.is_empty() || is_selected {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < pos || start >= end {
            continue;
        }
        out.extend(&chars[pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(base_fg));
        pos = end;
    }
    out.extend(&chars[pos..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_keeps_right_side_whole() {
        assert_eq!(spread("Tesla", "$85/day", 16), "Tesla    $85/day");
        assert_eq!(spread("Tesla Model 3", "$85/day", 12), "Tes… $85/day");
    }

    #[test]
    fn center_and_pad_fill_width() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(pad("abc", 5), "abc  ");
        assert_eq!(pad("abcdef", 3), "ab…");
    }

    #[test]
    fn truncate_to_zero_is_empty() {
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn highlight_wraps_only_matched_chars() {
        let theme = Theme::default();
        let base = theme.colors.text_normal.clone();
        let out = highlighted_text("Tesla", &[(0, 2)], &theme, false, &base);

        assert!(out.starts_with(&Theme::fg(&theme.colors.match_highlight_fg)));
        assert!(out.ends_with(&format!("{}sla", Theme::fg(&base))));
        assert!(out.contains("Te"));
    }

    #[test]
    fn selected_rows_are_not_highlighted() {
        let theme = Theme::default();
        let out = highlighted_text("Tesla", &[(0, 2)], &theme, true, "#ffffff");
        assert_eq!(out, "Tesla");
    }
}
