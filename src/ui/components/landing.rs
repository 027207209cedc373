//! Onboarding carousel with the sign-in buttons.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LandingView;

pub fn render_landing(row: usize, landing: &LandingView, theme: &Theme, cols: usize) -> usize {
    let mut current = row + 1;

    position_cursor(current, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.accent));
    print!("{}", center(&landing.title, cols));
    print!("{}", Theme::reset());
    current += 1;

    position_cursor(current, 1);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", center(&landing.subtitle, cols));
    print!("{}", Theme::reset());
    current += 2;

    let dots: String = (0..landing.slide_count)
        .map(|i| if i == landing.slide_index { '●' } else { '○' })
        .flat_map(|dot| [dot, ' '])
        .collect();
    position_cursor(current, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", center(dots.trim_end(), cols));
    print!("{}", Theme::reset());
    current += 2;

    let button_width = 24.min(cols);
    let left = cols.saturating_sub(button_width) / 2 + 1;
    for (i, label) in landing.buttons.iter().enumerate() {
        position_cursor(current, left);
        if i == landing.selected_button {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{}", center(label, button_width));
        print!("{}", Theme::reset());
        current += 2;
    }
    current
}
