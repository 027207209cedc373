//! Terminal UI: view models, components and themes.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: plain data describing one frame
//! - [`renderer`]: [`render`], the entry point called from the plugin shim
//! - [`components`]: header, tabs, lists, forms, overlays
//! - [`helpers`]: cursor positioning, text fitting, match highlighting
//! - [`theme`]: color schemes and ANSI escapes
//!
//! ```rust
//! use rentalizer::app::{AppState, Tab};
//! use rentalizer::catalog::{CatalogSource, MockCatalog};
//! use rentalizer::ui::{Body, Theme};
//! use chrono::NaiveDate;
//!
//! let catalog = MockCatalog::builtin();
//! let mut state = AppState::new(
//!     catalog.get_cars_with_listings().unwrap(),
//!     catalog.featured_collections().unwrap(),
//!     Theme::default(),
//!     NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
//! );
//! state.show_tab(Tab::Browse);
//!
//! let vm = state.compute_viewmodel(40, 100);
//! assert_eq!(vm.header.title, "Browse");
//! assert!(matches!(vm.body, Body::List { .. }));
//! ```

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    Body, DisplayItem, EmptyState, FooterInfo, FormRow, HeaderInfo, OverlayView, SearchBarInfo,
    UIViewModel,
};
