//! Navigation and input mode types.
//!
//! The plugin shows one [`Screen`] at a time, taken from the top of a
//! navigation stack. At most one [`Overlay`] sits on top of it and captures
//! all input while open.
//!
//! ```
//! use rentalizer::app::modes::{InputMode, Screen, SearchFocus, Tab};
//!
//! let screen = Screen::Main(Tab::Browse);
//! let input_mode = InputMode::Search(SearchFocus::Typing);
//! assert_eq!(Tab::Browse.next(), Tab::Reservations);
//! # let _ = (screen, input_mode);
//! ```

use super::booking::VehicleSearchParams;
use crate::filter::FiltersDraft;
use crate::picker::{DateRangePicker, LocationPicker};

/// Bottom tabs of the main screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Home,
    Book,
    Browse,
    Reservations,
    Account,
}

impl Tab {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Book,
        Self::Browse,
        Self::Reservations,
        Self::Account,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Book => "Book",
            Self::Browse => "Browse",
            Self::Reservations => "Reservations",
            Self::Account => "Account",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + len - 1) % len]
    }
}

/// A full-screen view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Onboarding carousel with sign-in buttons.
    Landing,
    Main(Tab),
    /// Search results for a submitted booking form.
    Vehicles(VehicleSearchParams),
    /// Details for the car with this id.
    CarDetails(String),
}

/// Short message box, dismissed with Enter or Esc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// Modal layer on top of the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Filters(FiltersDraft),
    DatePicker(DateRangePicker),
    LocationPicker(LocationPicker),
    Notice(Notice),
}

impl Overlay {
    /// Whether printable keys should be delivered as text.
    #[must_use]
    pub const fn accepts_text(&self) -> bool {
        matches!(self, Self::LocationPicker(_))
    }
}

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Characters go to the query.
    Typing,
    /// Arrow keys move through the results.
    Navigating,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    Search(SearchFocus),
}
