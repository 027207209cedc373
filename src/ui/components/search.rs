//! Boxed search input.

use crate::ui::helpers::{pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const SEARCH_BOX_MARGIN: usize = 2;

pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_focused {
        Theme::fg(&theme.colors.search_bar_border)
    } else {
        Theme::fg(&theme.colors.border)
    };
    let margin = " ".repeat(SEARCH_BOX_MARGIN);

    position_cursor(row, 1);
    print!("{margin}{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let (text, color) = if search.query.is_empty() && !search.is_focused {
        (" Search make or model".to_string(), &theme.colors.text_dim)
    } else if search.is_focused {
        (format!(" {}▏", search.query), &theme.colors.text_normal)
    } else {
        (format!(" {}", search.query), &theme.colors.text_normal)
    };

    position_cursor(row + 1, 1);
    print!("{margin}{border}│");
    print!("{}", Theme::fg(color));
    print!("{}", pad(&text, inner_width));
    print!("{border}│{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{margin}{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    row + 3
}
