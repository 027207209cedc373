//! Side effects requested by the event handler.
//!
//! The handler never talks to the host directly. It returns actions and the
//! plugin shim in `main.rs` carries them out.
//!
//! ```
//! use rentalizer::app::Action;
//! use std::time::Duration;
//!
//! let actions = vec![Action::StartTimer(Duration::from_millis(1000))];
//! assert_ne!(actions[0], Action::CloseFocus);
//! ```

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Schedules a timer tick after the delay. Each tick resolves the oldest
    /// pending mock request.
    StartTimer(Duration),
}
