//! Rendering entry point.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → stdout
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the current state to stdout. Zellij clears the pane before each
/// call, so only non-blank cells are written.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    components::render_screen(vm, theme, rows, cols);

    if let Some(overlay) = &vm.overlay {
        components::render_overlay(overlay, theme, rows, cols);
    }
}
