//! Label/value rows used by the booking form, the account tab and the
//! location picker.

use crate::ui::helpers::{center, pad, position_cursor, spread, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormRow;

/// Draws each row with a blank line after it. `left` is the 1-indexed column
/// the rows start in and `width` their width.
pub fn render_form(row: usize, rows: &[FormRow], theme: &Theme, left: usize, width: usize) -> usize {
    let mut current = row;
    for form_row in rows {
        render_form_row(current, form_row, theme, left, width);
        current += 2;
    }
    current
}

fn render_form_row(row: usize, form_row: &FormRow, theme: &Theme, left: usize, width: usize) {
    position_cursor(row, left);

    if form_row.is_button {
        if form_row.is_selected {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.accent));
        }
        print!("{}", center(&format!("[ {} ]", form_row.label), width));
        print!("{}", Theme::reset());
        return;
    }

    if form_row.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!("{}", spread(&format!(" {}", form_row.label), &format!("{} ", form_row.value), width));
    } else {
        let label_width = width / 2;
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", pad(&format!(" {}", form_row.label), label_width));
        let value_color = if form_row.is_placeholder {
            &theme.colors.text_dim
        } else {
            &theme.colors.text_normal
        };
        print!("{}", Theme::fg(value_color));
        let value_width = width.saturating_sub(label_width);
        let value = format!("{} ", form_row.value);
        print!("{}", " ".repeat(value_width.saturating_sub(value.chars().count())));
        print!("{}", truncate(&value, value_width));
    }
    print!("{}", Theme::reset());
}
