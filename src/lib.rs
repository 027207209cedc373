//! Rentalizer: a Zellij plugin for browsing rental cars.
//!
//! Rentalizer is a terminal front-end over a static catalog of cars, rental
//! vendors and their per-day offers. It provides:
//! - A home screen of featured collections and a browse screen with category
//!   chips and fuzzy search
//! - A booking form with a location picker and a date-range picker
//! - A vehicle list narrowed by price, transmission, passenger and
//!   vehicle-type filters, with sort orders and rental totals
//! - A car details screen comparing every vendor's offer, cheapest first
//! - Mock sign-in and booking confirmation resolved on a timer

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← keys, timers
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Screens, tabs and overlays                       │
//! │  - Event handling → Actions                         │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Filter Engine │   │ Pickers       │   │ UI Layer      │
//! │ (filter/)     │   │ (picker/)     │   │ (ui/)         │
//! │ - Predicates  │   │ - Date range  │   │ - Components  │
//! │ - Search/sort │   │ - Calendar    │   │ - Theming     │
//! │ - Pricing     │   │ - Location    │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog (catalog/) and Domain (domain/)            │
//! │  - Cars, vendors, listings and their join           │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← best effort
//! │  - tracing → OpenTelemetry → OTLP/JSON file         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/rentalizer.wasm" {
//!         theme "catppuccin-mocha"
//!         catalog_file "~/.config/rentalizer/catalog.toml"
//!         mock_delay_ms "500"
//!         default_location "Oakland, CA"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use rentalizer::{handle_event, initialize, Config, Event};
//! use rentalizer::app::{Screen, Tab};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
//! let mut state = initialize(&Config::default(), today);
//!
//! for event in [Event::ContinueAsGuest, Event::ShowTab(Tab::Browse), Event::Select] {
//!     let (_should_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! assert!(matches!(state.screen(), Screen::CarDetails(_)));
//! # Ok::<(), rentalizer::RentalError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod filter;
pub mod infrastructure;
pub mod observability;
pub mod picker;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{RentalError, Result};
pub use ui::Theme;

use catalog::{CatalogSource, MockCatalog};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::time::Duration;

/// Plugin configuration parsed from the Zellij layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme: `neon`, `catppuccin-mocha` or `catppuccin-latte`.
    /// Ignored when `theme_file` is set.
    pub theme_name: Option<String>,

    /// Custom TOML theme. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Custom catalog TOML replacing the built-in cars, vendors and listings.
    pub catalog_file: Option<String>,

    /// `trace`, `debug`, `info`, `warn` or `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// How long mocked sign-in and booking calls take.
    pub mock_delay: Duration,

    /// Filled in by "Use current location".
    pub default_location: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            catalog_file: None,
            trace_level: None,
            mock_delay: app::state::DEFAULT_MOCK_DELAY,
            default_location: app::state::DEFAULT_LOCATION.to_string(),
        }
    }
}

impl Config {
    /// Reads the plugin options. Missing, blank or unparseable values keep
    /// their defaults.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use rentalizer::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    /// map.insert("mock_delay_ms".to_string(), "250".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.mock_delay, Duration::from_millis(250));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let mock_delay = config
            .get("mock_delay_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map_or(defaults.mock_delay, Duration::from_millis);

        Self {
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            catalog_file: text("catalog_file"),
            trace_level: text("trace_level"),
            mock_delay,
            default_location: text("default_location").unwrap_or(defaults.default_location),
        }
    }
}

fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        return Theme::from_file(theme_file).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |name| {
        Theme::from_name(name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %name, "unknown theme, using default");
            Theme::default()
        })
    })
}

fn load_catalog(config: &Config) -> MockCatalog {
    let Some(path) = &config.catalog_file else {
        return MockCatalog::builtin();
    };

    infrastructure::read_host_file(path)
        .and_then(|content| MockCatalog::from_toml_str(&content))
        .unwrap_or_else(|e| {
            tracing::debug!(catalog_file = %path, error = %e, "failed to load catalog file, using built-in");
            MockCatalog::builtin()
        })
}

/// Builds the application state. The landing screen shows first.
///
/// A custom theme or catalog that fails to load is logged and replaced by
/// the built-in one. `today` is the first day the date picker offers.
#[must_use]
pub fn initialize(config: &Config, today: NaiveDate) -> AppState {
    tracing::debug!("initializing rentalizer plugin");

    let theme = load_theme(config);
    let catalog = load_catalog(config);

    // A catalog that passed validation on load joins again without error;
    // the built-in tables back up anything that slips through.
    let (cars, collections) = match (catalog.get_cars_with_listings(), catalog.featured_collections()) {
        (Ok(cars), Ok(collections)) => (cars, collections),
        (Err(e), _) | (_, Err(e)) => {
            tracing::debug!(error = %e, "catalog join failed, using built-in");
            let builtin = MockCatalog::builtin();
            (
                builtin.get_cars_with_listings().unwrap_or_default(),
                builtin.featured_collections().unwrap_or_default(),
            )
        }
    };

    tracing::debug!(cars = cars.len(), collections = collections.len(), theme = %theme.name, "catalog ready");

    let mut state = AppState::new(cars, collections, theme, today);
    state.mock_delay = config.mock_delay;
    state.default_location.clone_from(&config.default_location);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    #[test]
    fn from_zellij_falls_back_on_bad_values() {
        let mut map = BTreeMap::new();
        map.insert("mock_delay_ms".to_string(), "soon".to_string());
        map.insert("default_location".to_string(), "   ".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.mock_delay, Duration::from_millis(1000));
        assert_eq!(config.default_location, "San Francisco, CA");
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.catalog_file, None);
    }

    #[test]
    fn initialize_applies_config() {
        let config = Config {
            theme_name: Some("catppuccin-mocha".to_string()),
            mock_delay: Duration::from_millis(10),
            default_location: "Oakland, CA".to_string(),
            ..Config::default()
        };

        let state = initialize(&config, today());
        assert_eq!(state.theme.name, "catppuccin-mocha");
        assert_eq!(state.mock_delay, Duration::from_millis(10));
        assert_eq!(state.default_location, "Oakland, CA");
        assert_eq!(state.catalog.len(), 8);
        assert_eq!(state.screen(), &app::Screen::Landing);
    }

    #[test]
    fn unknown_theme_and_missing_files_use_builtins() {
        let config = Config {
            theme_name: Some("nope".to_string()),
            catalog_file: Some("/missing/catalog.toml".to_string()),
            ..Config::default()
        };
        let state = initialize(&config, today());
        assert_eq!(state.theme, Theme::default());
        assert_eq!(state.catalog.len(), 8);

        let config = Config {
            theme_file: Some("/missing/theme.toml".to_string()),
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config, today()).theme, Theme::default());
    }

    #[test]
    fn custom_catalog_file_replaces_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[cars]]
id = "c1"
make = "Honda"
model = "Fit"
year = 2020
image = ""
category = "Economy"
type = "Hatchback"
features = []
specs = {{ seats = 5, transmission = "Automatic", fuel_type = "Gas" }}
"#
        )
        .unwrap();

        let config = Config {
            catalog_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };
        let state = initialize(&config, today());
        assert_eq!(state.catalog.len(), 1);
        assert_eq!(state.catalog[0].car.model, "Fit");
        assert!(state.catalog[0].listings.is_empty());
    }
}
