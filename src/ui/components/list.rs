//! Two-line card rows for cars and vendor listings.
//!
//! ```text
//! Best Priced                          <- section heading, when present
//! 2023 Tesla Model 3          $85/day  <- title, price
//!   Electric • Sedan   ★ 4.9   3 vendors
//! ```

use crate::ui::helpers::{display_width, highlighted_text, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

pub fn render_items(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |current, item| render_item(current, item, theme, cols))
}

fn render_item(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let mut row = row;

    if let Some(section) = &item.section {
        position_cursor(row, 1);
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.header_fg));
        print!("{}", pad(&format!(" {section}"), cols));
        print!("{}", Theme::reset());
        row += 1;
    }

    let (fg, bg) = if item.is_selected {
        (&theme.colors.selection_fg, Some(&theme.colors.selection_bg))
    } else {
        (&theme.colors.text_normal, None)
    };
    let style = || {
        let mut s = Theme::fg(fg);
        if let Some(bg) = bg {
            s.push_str(&Theme::bg(bg));
        }
        s
    };

    // Title line.
    let marker = if item.is_selected { "▸ " } else { "  " };
    let price_width = display_width(&item.price_label);
    let title_width = cols.saturating_sub(price_width + 3);
    let title = truncate(&item.title, title_width);
    let gap = cols.saturating_sub(2 + display_width(&title) + price_width + 1);

    position_cursor(row, 1);
    print!("{}", style());
    print!("{marker}");
    print!("{}", Theme::bold());
    print!(
        "{}",
        highlighted_text(&title, &item.highlight_ranges, theme, item.is_selected, fg)
    );
    print!("{}", Theme::reset());
    print!("{}", style());
    print!("{}", " ".repeat(gap));
    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.accent));
    }
    print!("{} ", item.price_label);
    print!("{}", Theme::reset());

    // Detail line.
    let mut detail = format!("    {}", item.subtitle);
    for extra in [&item.detail, &item.trailing] {
        if !extra.is_empty() {
            detail.push_str("   ");
            detail.push_str(extra);
        }
    }
    position_cursor(row + 1, 1);
    print!("{}", style());
    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", pad(&detail, cols));
    print!("{}", Theme::reset());

    row + 2
}
