//! Tab bar and browse category chips.

use crate::ui::helpers::{pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ChipBar, TabBar};

pub fn render_tabs(row: usize, tabs: &TabBar, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let slot = (cols / tabs.labels.len().max(1)).max(1);

    for (i, label) in tabs.labels.iter().enumerate() {
        let text = format!("{} {label}", i + 1);
        if i == tabs.active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.accent));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{}", pad(&format!(" {text}"), slot));
        print!("{}", Theme::reset());
    }
    row + 1
}

pub fn render_chips(row: usize, chips: &ChipBar, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let mut used = 1;
    print!(" ");

    for (i, label) in chips.labels.iter().enumerate() {
        let chip = format!(" {label} ");
        let width = chip.chars().count() + 1;
        if used + width > cols {
            break;
        }
        if i == chips.active {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{chip}");
        print!("{} ", Theme::reset());
        used += width;
    }
    row + 1
}

/// One dim line such as `8 results  •  Sort: Recommended`.
pub fn render_summary(row: usize, summary: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", pad(&format!(" {summary}"), cols));
    print!("{}", Theme::reset());
    row + 1
}
