//! Car details: styled text lines above the vendor listing cards.

use super::list::render_items;
use crate::ui::helpers::{pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailLine, DisplayItem, LineStyle};

pub fn render_details(
    row: usize,
    lines: &[DetailLine],
    items: &[DisplayItem],
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current = row;
    for line in lines {
        position_cursor(current, 1);
        match line.style {
            LineStyle::Title => {
                print!("{}", Theme::bold());
                print!("{}", Theme::fg(&theme.colors.header_fg));
            }
            LineStyle::Heading => {
                print!("{}", Theme::bold());
                print!("{}", Theme::fg(&theme.colors.accent));
            }
            LineStyle::Text => print!("{}", Theme::fg(&theme.colors.text_normal)),
            LineStyle::Dim => print!("{}", Theme::fg(&theme.colors.text_dim)),
        }
        print!("{}", pad(&format!(" {}", line.text), cols));
        print!("{}", Theme::reset());
        current += 1;
    }
    render_items(current, items, theme, cols)
}
