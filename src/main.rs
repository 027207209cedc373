//! Zellij plugin entry point.
//!
//! A thin shim between Zellij and the library: it decodes key presses into
//! [`Event`]s, forwards timer ticks, and carries out the [`Action`]s the
//! library returns. All state lives in [`rentalizer::AppState`].
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, build `AppState`
//! 2. **Subscribe**: `Key` and `Timer`
//! 3. **Update**: map the Zellij event, call `handle_event`, run actions
//! 4. **Render**: call the library renderer
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: move down / up
//!
//! While a text field has focus (search query, location inputs), printable
//! keys are typed and only `Esc`, `Enter`, `Tab`, `Backspace` and the arrows
//! keep their meaning.
//!
//! Otherwise:
//! - `j`/`k`/arrows: move, `h`/`l`: change value or month day
//! - `Enter`: select, `Esc`: back, `Space`: toggle, `Tab`/`Shift+Tab`: next/previous field
//! - `1`–`5`: Home, Book, Browse, Reservations, Account
//! - `/`: search, `f`: filters, `r`: reset filters, `s`: cycle sort, `a`: apply
//! - `d`: pick dates, `o`: pick location, `[`/`]`: previous/next month
//! - `q`: hide the plugin

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use std::collections::BTreeMap;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
use rentalizer::app::AppState;
#[cfg(target_family = "wasm")]
use rentalizer::{handle_event, Action, Config, Event};

#[cfg(target_family = "wasm")]
register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
#[cfg(target_family = "wasm")]
struct State {
    app: AppState,
}

#[cfg(target_family = "wasm")]
impl Default for State {
    fn default() -> Self {
        Self {
            app: rentalizer::initialize(&Config::default(), local_today()),
        }
    }
}

#[cfg(target_family = "wasm")]
fn local_today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(target_family = "wasm")]
impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        rentalizer::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = rentalizer::initialize(&config, local_today());
        self.app.set_clock(local_today);

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
        ]);
        subscribe(&[EventType::Key, EventType::Timer]);

        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_) => Event::TimerElapsed,
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled"
                );
                for action in actions {
                    Self::execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        rentalizer::ui::render(&self.app, rows, cols);
    }
}

#[cfg(target_family = "wasm")]
impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        let shared = match key.bare_key {
            BareKey::Down => Some(Event::KeyDown),
            BareKey::Up => Some(Event::KeyUp),
            BareKey::Left => Some(Event::KeyLeft),
            BareKey::Right => Some(Event::KeyRight),
            BareKey::Enter => Some(Event::Select),
            BareKey::Esc => Some(Event::Back),
            BareKey::Backspace => Some(Event::Backspace),
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Some(Event::PrevField),
            BareKey::Tab => Some(Event::NextField),
            _ => None,
        };
        if shared.is_some() {
            return shared;
        }

        let BareKey::Char(c) = key.bare_key else {
            return None;
        };
        if self.app.accepts_text() {
            return Some(Event::Char(c));
        }

        Some(match c {
            'j' => Event::KeyDown,
            'k' => Event::KeyUp,
            'h' => Event::KeyLeft,
            'l' => Event::KeyRight,
            ' ' => Event::Toggle,
            '/' => Event::SearchMode,
            'f' => Event::OpenFilters,
            'r' => Event::ResetFilters,
            's' => Event::CycleSort,
            'a' => Event::Apply,
            'd' => Event::OpenDatePicker,
            'o' => Event::OpenLocationPicker,
            '[' => Event::PrevMonth,
            ']' => Event::NextMonth,
            'q' => Event::CloseFocus,
            '1'..='5' => {
                let index = c as usize - '1' as usize;
                Event::ShowTab(rentalizer::app::Tab::ALL[index])
            }
            other => Event::Char(other),
        })
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin");
                hide_self();
            }
            Action::StartTimer(delay) => {
                tracing::debug!(delay_ms = delay.as_millis() as u64, "starting mock request timer");
                set_timeout(delay.as_secs_f64());
            }
        }
    }
}

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("rentalizer is a Zellij plugin; build it with `--target wasm32-wasip1` and load the .wasm from a layout");
}
