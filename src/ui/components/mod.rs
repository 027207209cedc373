//! Component renderers.
//!
//! Each component positions the cursor, prints ANSI-styled text and returns
//! the next free row, so the layout in [`render_screen`] reads top to bottom:
//!
//! ```text
//! header · border · [tabs] · [chips] · [summary] · [search] · body ··· border · footer
//! ```
//!
//! Overlays are drawn last, in a centered box over whatever is underneath.

mod details;
mod empty;
mod footer;
mod form;
mod header;
mod landing;
mod list;
mod modal;
mod nav;
mod search;

pub use modal::render_overlay;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

use details::render_details;
use empty::render_empty_state;
use footer::render_footer;
use form::render_form;
use header::render_header;
use landing::render_landing;
use list::render_items;
use nav::{render_chips, render_summary, render_tabs};
use search::render_search_bar;

/// Widest the booking and account forms get.
const FORM_WIDTH: usize = 56;

fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Draws every part of the view model except the overlay.
pub fn render_screen(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    // Row 1 stays blank.
    let mut row = render_header(2, &vm.header, theme, cols);
    row = render_border(row, &theme.colors.border, cols);

    if let Some(tabs) = &vm.tabs {
        row = render_tabs(row, tabs, theme, cols);
    }
    if let Some(chips) = &vm.chips {
        row = render_chips(row, chips, theme, cols);
    }
    if let Some(summary) = &vm.summary {
        row = render_summary(row, summary, theme, cols);
    }
    if let Some(search) = &vm.search_bar {
        row = render_search_bar(row, search, theme, cols);
    }

    match &vm.body {
        Body::List { items } => {
            render_items(row, items, theme, cols);
        }
        Body::Form { rows: form_rows } => {
            let width = FORM_WIDTH.min(cols);
            let left = cols.saturating_sub(width) / 2 + 1;
            render_form(row + 1, form_rows, theme, left, width);
        }
        Body::Details { lines, items } => {
            render_details(row, lines, items, theme, cols);
        }
        Body::Landing(landing) => {
            render_landing(row, landing, theme, cols);
        }
        Body::Empty(empty) => {
            render_empty_state(row, empty, theme, cols);
        }
    }

    let footer_row = rows;
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
