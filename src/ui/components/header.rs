//! Title bar with an optional subtitle and a request status on the right.

use crate::ui::helpers::{center, position_cursor, spread};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Draws the title line and the subtitle line. Returns the row after them.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", center(&header.title, cols));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    let subtitle = header.subtitle.as_deref().unwrap_or("");
    let status = header.status.as_deref().unwrap_or("");
    let line = spread(&format!(" {subtitle}"), &format!("{status} "), cols);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{line}");
    if !status.is_empty() {
        // Re-draw the status in the accent color over the dim one.
        let col = cols.saturating_sub(status.chars().count());
        position_cursor(row + 1, col);
        print!("{}", Theme::fg(&theme.colors.accent));
        print!("{status}");
    }
    print!("{}", Theme::reset());

    row + 2
}
