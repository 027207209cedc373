//! Application layer: state, navigation, and event handling.
//!
//! Sits between the plugin shim in `main.rs` and the domain, catalog, filter
//! and picker layers. Data flows one way:
//!
//! ```text
//! Key press → Event → handle_event → AppState mutation → Actions → main.rs
//!                ↑                                          │
//!                └─────────────── Timer tick ───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effects the plugin shim carries out
//! - [`booking`]: the Book tab form and the vehicle search parameters
//! - [`handler`]: [`Event`] and [`handle_event`]
//! - [`modes`]: screens, tabs, overlays and input modes
//! - [`session`]: mock authentication and queued mock requests
//! - [`state`]: [`AppState`]
//! - `view`: view model computation for the renderer

pub mod actions;
pub mod booking;
pub mod handler;
pub mod modes;
pub mod session;
pub mod state;
mod view;

pub use actions::Action;
pub use booking::{BookingField, BookingForm, DriverAge, RentalPeriod, VehicleSearchParams};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, Notice, Overlay, Screen, SearchFocus, Tab};
pub use session::{PendingRequest, Session, User};
pub use state::AppState;
