//! Event handling and state transitions.
//!
//! [`handle_event`] is the only place state changes. Input is routed in this
//! order:
//!
//! 1. global events (quit, timer ticks, session commands)
//! 2. the open overlay, which captures everything else while it is shown
//! 3. search mode on list screens
//! 4. the current screen
//!
//! Each call returns whether a re-render is needed and the side effects to run.
//!
//! ```
//! use rentalizer::app::{handle_event, AppState, Event, Screen, Tab};
//! use rentalizer::catalog::{CatalogSource, MockCatalog};
//! use rentalizer::ui::Theme;
//! use chrono::NaiveDate;
//!
//! let catalog = MockCatalog::builtin();
//! let mut state = AppState::new(
//!     catalog.get_cars_with_listings()?,
//!     catalog.featured_collections()?,
//!     Theme::default(),
//!     NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
//! );
//! let (should_render, actions) = handle_event(&mut state, &Event::ContinueAsGuest)?;
//! assert!(should_render && actions.is_empty());
//! assert_eq!(state.screen(), &Screen::Main(Tab::Home));
//! # Ok::<(), rentalizer::RentalError>(())
//! ```

use super::booking::BookingField;
use super::modes::{InputMode, Notice, Overlay, Screen, SearchFocus, Tab};
use super::session::PendingRequest;
use super::state::{AppState, GUEST_EMAIL, GUEST_NAME};
use super::Action;
use crate::domain::Result;
use crate::filter::{FilterState, FiltersDraft};
use crate::picker::{DateRangePicker, LocationField, LocationPicker, PickerFocus};

/// Input and system events, already decoded from raw keys by the plugin shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Down arrow, `j` or Ctrl+n.
    KeyDown,
    /// Up arrow, `k` or Ctrl+p.
    KeyUp,
    /// Left arrow or `h`.
    KeyLeft,
    /// Right arrow or `l`.
    KeyRight,
    /// Enter.
    Select,
    /// Esc. Closes the overlay, leaves search, or pops the screen.
    Back,
    /// Space.
    Toggle,
    /// Tab.
    NextField,
    /// Shift+Tab.
    PrevField,
    /// A printable character while text input is active.
    Char(char),
    Backspace,
    /// Hides the plugin.
    CloseFocus,

    /// Enters search mode, or returns focus to the query while navigating results.
    SearchMode,
    ShowTab(Tab),

    OpenFilters,
    /// Resets the filters draft, or the applied filters outside the modal.
    ResetFilters,
    CycleSort,
    /// Confirms the open overlay.
    Apply,

    OpenDatePicker,
    OpenLocationPicker,
    PrevMonth,
    NextMonth,

    SignIn {
        email: String,
    },
    SignUp {
        email: String,
        name: String,
    },
    ContinueAsGuest,
    SignOut,

    /// A timer started by [`Action::StartTimer`] fired.
    TimerElapsed,
}

/// Processes an event, mutates `state`, and returns `(should_render, actions)`.
///
/// # Errors
///
/// Currently infallible for well-formed state; the `Result` lets state
/// transitions propagate catalog or booking errors.
#[allow(clippy::cognitive_complexity, clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::CloseFocus => return Ok((false, vec![Action::CloseFocus])),
        Event::TimerElapsed => return Ok(complete_pending(state)),
        Event::SignIn { email } => {
            let actions = state.enqueue(PendingRequest::SignIn {
                email: email.clone(),
            });
            return Ok((true, actions));
        }
        Event::SignUp { email, name } => {
            let actions = state.enqueue(PendingRequest::SignUp {
                email: email.clone(),
                name: name.clone(),
            });
            return Ok((true, actions));
        }
        Event::ContinueAsGuest => {
            tracing::debug!("continuing as guest");
            state.reset_to(Screen::Main(Tab::Home));
            return Ok((true, vec![]));
        }
        Event::SignOut => {
            state.session.sign_out();
            state.reset_to(Screen::Landing);
            return Ok((true, vec![]));
        }
        _ => {}
    }

    if let Some(overlay) = state.overlay.take() {
        return handle_overlay_event(state, overlay, event);
    }

    if let InputMode::Search(focus) = state.input_mode {
        if let Some(outcome) = handle_search_event(state, focus, event) {
            return Ok(outcome);
        }
    }

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::KeyLeft | Event::KeyRight => {
            let forward = *event == Event::KeyRight;
            match state.screen() {
                Screen::Landing => state.step_slide(forward),
                Screen::Main(Tab::Browse) => state.cycle_category(forward),
                Screen::Main(Tab::Book) if state.booking.focused_field() == BookingField::DriverAge => {
                    state.booking.cycle_driver_age(forward);
                }
                _ => return Ok((false, vec![])),
            }
            Ok((true, vec![]))
        }
        Event::NextField | Event::PrevField => {
            let Some(tab) = state.active_tab() else {
                return Ok((false, vec![]));
            };
            let next = if *event == Event::NextField {
                tab.next()
            } else {
                tab.prev()
            };
            state.show_tab(next);
            Ok((true, vec![]))
        }
        Event::ShowTab(tab) => {
            if state.screen() == &Screen::Landing {
                return Ok((false, vec![]));
            }
            state.show_tab(*tab);
            Ok((true, vec![]))
        }
        Event::Select => select(state),
        Event::Back => {
            let popped = state.pop_screen();
            Ok((popped, vec![]))
        }
        Event::SearchMode => {
            if !state.is_searchable() {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query.clear();
            Ok((true, vec![]))
        }
        Event::OpenFilters => {
            if !matches!(state.screen(), Screen::Vehicles(_)) {
                return Ok((false, vec![]));
            }
            state.overlay = Some(Overlay::Filters(FiltersDraft::open(&state.filters)));
            Ok((true, vec![]))
        }
        Event::ResetFilters => {
            if !matches!(state.screen(), Screen::Vehicles(_)) {
                return Ok((false, vec![]));
            }
            state.filters = FilterState::default();
            state.refresh_list();
            Ok((true, vec![]))
        }
        Event::CycleSort => {
            if !matches!(state.screen(), Screen::Vehicles(_)) {
                return Ok((false, vec![]));
            }
            state.sort = state.sort.next();
            tracing::debug!(sort = ?state.sort, "sort order changed");
            state.refresh_list();
            Ok((true, vec![]))
        }
        Event::OpenDatePicker => Ok((open_date_picker(state), vec![])),
        Event::OpenLocationPicker => Ok((open_location_picker(state), vec![])),
        Event::Toggle
        | Event::Char(_)
        | Event::Backspace
        | Event::Apply
        | Event::PrevMonth
        | Event::NextMonth => Ok((false, vec![])),
        Event::CloseFocus
        | Event::TimerElapsed
        | Event::SignIn { .. }
        | Event::SignUp { .. }
        | Event::ContinueAsGuest
        | Event::SignOut => Ok((false, vec![])),
    }
}

/// Enter on the current screen.
fn select(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    match state.screen().clone() {
        Screen::Landing => match state.landing.button {
            0 => Ok((
                true,
                state.enqueue(PendingRequest::SignIn {
                    email: GUEST_EMAIL.to_string(),
                }),
            )),
            1 => Ok((
                true,
                state.enqueue(PendingRequest::SignUp {
                    email: GUEST_EMAIL.to_string(),
                    name: GUEST_NAME.to_string(),
                }),
            )),
            _ => {
                state.reset_to(Screen::Main(Tab::Home));
                Ok((true, vec![]))
            }
        },
        Screen::Main(Tab::Home | Tab::Browse) | Screen::Vehicles(_) => {
            let Some(car) = state.selected_car() else {
                tracing::debug!("no car selected");
                return Ok((false, vec![]));
            };
            let id = car.car.id.clone();
            tracing::debug!(car_id = %id, "opening car details");
            state.push_screen(Screen::CarDetails(id));
            Ok((true, vec![]))
        }
        Screen::Main(Tab::Book) => match state.booking.focused_field() {
            BookingField::Location => Ok((open_location_picker(state), vec![])),
            BookingField::Dates => Ok((open_date_picker(state), vec![])),
            BookingField::DriverAge => {
                state.booking.cycle_driver_age(true);
                Ok((true, vec![]))
            }
            BookingField::Search => {
                match state.booking.search_params() {
                    Ok(params) => {
                        tracing::debug!(params = ?params, "searching vehicles");
                        state.push_screen(Screen::Vehicles(params));
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "search blocked");
                        state.overlay = Some(Overlay::Notice(Notice {
                            title: "Missing details".to_string(),
                            message: "Choose a location and dates before searching.".to_string(),
                        }));
                    }
                }
                Ok((true, vec![]))
            }
        },
        Screen::Main(Tab::Account) => {
            if state.session.is_signed_in() {
                state.session.sign_out();
            }
            state.reset_to(Screen::Landing);
            Ok((true, vec![]))
        }
        Screen::Main(Tab::Reservations) => Ok((false, vec![])),
        Screen::CarDetails(_) => {
            let Some(car) = state.selected_car() else {
                return Ok((false, vec![]));
            };
            let Some(offer) = car.listings.get(state.selected_index) else {
                tracing::debug!("no vendor selected");
                return Ok((false, vec![]));
            };
            let request = PendingRequest::ConfirmBooking {
                car: format!("{} {} {}", car.car.year, car.car.make, car.car.model),
                vendor: offer.vendor.name.clone(),
                price_per_day: offer.listing.price_per_day,
            };
            Ok((true, state.enqueue(request)))
        }
    }
}

fn open_date_picker(state: &mut AppState) -> bool {
    if state.active_tab() != Some(Tab::Book) {
        return false;
    }
    state.refresh_today();
    state.overlay = Some(Overlay::DatePicker(DateRangePicker::open(state.today)));
    true
}

fn open_location_picker(state: &mut AppState) -> bool {
    if state.active_tab() != Some(Tab::Book) {
        return false;
    }
    state.overlay = Some(Overlay::LocationPicker(LocationPicker::open(
        state.booking.location.as_ref(),
    )));
    true
}

/// Search-mode input. Returns `None` for events that fall through to the screen.
fn handle_search_event(
    state: &mut AppState,
    focus: SearchFocus,
    event: &Event,
) -> Option<(bool, Vec<Action>)> {
    match (focus, event) {
        (_, Event::Back) => {
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.search_query.clear();
            state.refresh_list();
            Some((true, vec![]))
        }
        (SearchFocus::Typing, Event::Char(c)) => {
            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, "search query updated");
            state.selected_index = 0;
            state.refresh_list();
            Some((true, vec![]))
        }
        (SearchFocus::Typing, Event::Backspace) => {
            state.search_query.pop();
            state.refresh_list();
            Some((true, vec![]))
        }
        (SearchFocus::Typing, Event::Select) => {
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
            } else {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            state.refresh_list();
            Some((true, vec![]))
        }
        (SearchFocus::Navigating, Event::SearchMode) => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Some((true, vec![]))
        }
        // While typing, only list navigation and quitting reach the screen.
        (SearchFocus::Typing, Event::KeyDown | Event::KeyUp | Event::CloseFocus) => None,
        (SearchFocus::Typing, _) => Some((false, vec![])),
        (SearchFocus::Navigating, _) => None,
    }
}

fn handle_overlay_event(
    state: &mut AppState,
    overlay: Overlay,
    event: &Event,
) -> Result<(bool, Vec<Action>)> {
    match overlay {
        Overlay::Notice(notice) => {
            if matches!(event, Event::Select | Event::Back) {
                tracing::debug!(title = %notice.title, "notice dismissed");
                return Ok((true, vec![]));
            }
            state.overlay = Some(Overlay::Notice(notice));
            Ok((false, vec![]))
        }
        Overlay::Filters(mut draft) => {
            match event {
                Event::Back => {
                    tracing::debug!("filters cancelled");
                    return Ok((true, vec![]));
                }
                Event::Apply => {
                    state.filters = draft.apply();
                    state.selected_index = 0;
                    state.refresh_list();
                    return Ok((true, vec![]));
                }
                Event::KeyDown => draft.move_down(),
                Event::KeyUp => draft.move_up(),
                Event::KeyLeft => draft.adjust(false),
                Event::KeyRight => draft.adjust(true),
                Event::Toggle | Event::Select => draft.toggle(),
                Event::ResetFilters => draft.reset(),
                _ => {
                    state.overlay = Some(Overlay::Filters(draft));
                    return Ok((false, vec![]));
                }
            }
            state.overlay = Some(Overlay::Filters(draft));
            Ok((true, vec![]))
        }
        Overlay::DatePicker(mut picker) => {
            let confirm = match (picker.focus(), event) {
                (_, Event::Back) => {
                    tracing::debug!("date picker cancelled");
                    return Ok((true, vec![]));
                }
                (_, Event::Apply) | (PickerFocus::PickupTime | PickerFocus::DropoffTime, Event::Select) => true,
                (_, Event::NextField) => {
                    picker.cycle_focus();
                    false
                }
                (_, Event::PrevMonth) => {
                    picker.prev_month();
                    false
                }
                (_, Event::NextMonth) => {
                    picker.next_month();
                    false
                }
                (PickerFocus::Calendar, Event::Select | Event::Toggle) => {
                    picker.select_cursor();
                    false
                }
                (PickerFocus::Calendar, Event::KeyLeft) => {
                    picker.move_cursor(-1);
                    false
                }
                (PickerFocus::Calendar, Event::KeyRight) => {
                    picker.move_cursor(1);
                    false
                }
                (PickerFocus::Calendar, Event::KeyUp) => {
                    picker.move_cursor(-7);
                    false
                }
                (PickerFocus::Calendar, Event::KeyDown) => {
                    picker.move_cursor(7);
                    false
                }
                (PickerFocus::PickupTime, Event::KeyLeft | Event::KeyUp) => {
                    picker.step_pickup_time(false);
                    false
                }
                (PickerFocus::PickupTime, Event::KeyRight | Event::KeyDown) => {
                    picker.step_pickup_time(true);
                    false
                }
                (PickerFocus::DropoffTime, Event::KeyLeft | Event::KeyUp) => {
                    picker.step_dropoff_time(false);
                    false
                }
                (PickerFocus::DropoffTime, Event::KeyRight | Event::KeyDown) => {
                    picker.step_dropoff_time(true);
                    false
                }
                _ => {
                    state.overlay = Some(Overlay::DatePicker(picker));
                    return Ok((false, vec![]));
                }
            };

            if confirm {
                if let Some(selection) = picker.confirm() {
                    tracing::debug!(selection = %selection.summary(), "dates confirmed");
                    state.booking.dates = Some(selection);
                    return Ok((true, vec![]));
                }
                state.overlay = Some(Overlay::DatePicker(picker));
                return Ok((false, vec![]));
            }

            state.overlay = Some(Overlay::DatePicker(picker));
            Ok((true, vec![]))
        }
        Overlay::LocationPicker(mut picker) => {
            let confirm = match (picker.focus(), event) {
                (_, Event::Back) => {
                    tracing::debug!("location picker cancelled");
                    return Ok((true, vec![]));
                }
                (_, Event::Apply)
                | (LocationField::Pickup | LocationField::Dropoff, Event::Select) => true,
                (LocationField::SameLocation, Event::Select | Event::Toggle | Event::Char(' ')) => {
                    picker.toggle_same_location();
                    false
                }
                (LocationField::CurrentLocation, Event::Select) => {
                    picker.use_current_location(&state.default_location);
                    false
                }
                (_, Event::Char(c)) => {
                    picker.push_char(*c);
                    false
                }
                (_, Event::Backspace) => {
                    picker.backspace();
                    false
                }
                (_, Event::KeyDown | Event::NextField) => {
                    picker.focus_next();
                    false
                }
                (_, Event::KeyUp | Event::PrevField) => {
                    picker.focus_prev();
                    false
                }
                _ => {
                    state.overlay = Some(Overlay::LocationPicker(picker));
                    return Ok((false, vec![]));
                }
            };

            if confirm {
                if let Some(selection) = picker.confirm() {
                    tracing::debug!(pickup = %selection.pickup, "location confirmed");
                    state.booking.location = Some(selection);
                    return Ok((true, vec![]));
                }
                state.overlay = Some(Overlay::LocationPicker(picker));
                return Ok((false, vec![]));
            }

            state.overlay = Some(Overlay::LocationPicker(picker));
            Ok((true, vec![]))
        }
    }
}

/// Resolves the oldest pending request.
fn complete_pending(state: &mut AppState) -> (bool, Vec<Action>) {
    let Some(request) = state.pending.pop_front() else {
        tracing::debug!("timer fired with no pending request");
        return (false, vec![]);
    };
    tracing::debug!(request = ?request, remaining = state.pending.len(), "request completed");

    match request {
        PendingRequest::SignIn { email } => {
            state.session.sign_in(&email);
            if state.screen() == &Screen::Landing {
                state.reset_to(Screen::Main(Tab::Home));
            }
        }
        PendingRequest::SignUp { email, name } => {
            state.session.sign_up(&email, &name);
            if state.screen() == &Screen::Landing {
                state.reset_to(Screen::Main(Tab::Home));
            }
        }
        PendingRequest::ConfirmBooking {
            car,
            vendor,
            price_per_day,
        } => {
            state.overlay = Some(Overlay::Notice(Notice {
                title: "Booking Confirmed".to_string(),
                message: format!(
                    "You're booking the {car} from {vendor} for ${price_per_day}/day"
                ),
            }));
        }
    }
    (true, vec![])
}
