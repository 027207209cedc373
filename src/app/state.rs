//! Application state.
//!
//! [`AppState`] owns everything the plugin knows between events: the joined
//! catalog, the navigation stack, the open overlay, the booking form, the
//! applied filters and the auth session. The visible car list is derived
//! state, recomputed by [`AppState::refresh_list`] whenever one of its inputs
//! changes. View models are computed from it on demand (see `view.rs`).
//!
//! ```
//! use rentalizer::app::{AppState, Screen, Tab};
//! use rentalizer::catalog::{CatalogSource, MockCatalog};
//! use rentalizer::ui::Theme;
//! use chrono::NaiveDate;
//!
//! let catalog = MockCatalog::builtin();
//! let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
//! let mut state = AppState::new(
//!     catalog.get_cars_with_listings().unwrap(),
//!     catalog.featured_collections().unwrap(),
//!     Theme::default(),
//!     today,
//! );
//! state.show_tab(Tab::Browse);
//! assert_eq!(state.screen(), &Screen::Main(Tab::Browse));
//! assert_eq!(state.visible.len(), 8);
//! ```

use super::booking::{BookingForm, RentalPeriod};
use super::modes::{InputMode, Overlay, Screen, SearchFocus, Tab};
use super::session::{PendingRequest, Session};
use super::Action;
use crate::catalog::FeaturedCollection;
use crate::domain::{CarWithListings, Result};
use crate::filter::{
    filter_catalog, matches_category, CarSearch, FilterState, SortOrder, BROWSE_CATEGORIES,
};
use crate::ui::theme::Theme;
use chrono::NaiveDate;
use std::collections::VecDeque;
use std::time::Duration;

/// Delay before a mocked request completes.
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(1000);

/// Location offered by "Use current location".
pub const DEFAULT_LOCATION: &str = "San Francisco, CA";

/// Account used by the landing screen's Sign In and Sign Up buttons.
pub const GUEST_EMAIL: &str = "guest@example.com";
pub const GUEST_NAME: &str = "Guest";

/// Onboarding carousel as `(title, subtitle)`.
pub const LANDING_SLIDES: [(&str, &str); 3] = [
    ("Welcome!", "Smart car rentals for the modern traveler."),
    ("Compare & Save", "One search. Multiple agencies. Best price."),
    ("Book with Confidence", "Rent with peace of mind."),
];

pub const LANDING_BUTTONS: [&str; 3] = ["Sign In", "Sign Up", "Enter as Guest"];

/// Carousel position and focused button on the landing screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LandingState {
    pub slide: usize,
    pub button: usize,
}

/// A screen on the navigation stack with the selection it had when covered.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NavEntry {
    screen: Screen,
    selected_index: usize,
}

/// Central application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active color theme.
    pub theme: Theme,

    /// First selectable day in the date picker.
    pub today: NaiveDate,

    /// Wall clock read when the date picker opens. `None` keeps `today` fixed.
    clock: Option<fn() -> NaiveDate>,

    /// How long mocked requests take.
    pub mock_delay: Duration,

    /// Filled in by the location picker's "Use current location".
    pub default_location: String,

    /// Every car with its price-sorted listings.
    pub catalog: Vec<CarWithListings>,

    /// Sections of the Home tab.
    pub collections: Vec<FeaturedCollection>,

    nav: Vec<NavEntry>,

    /// Modal on top of the current screen. At most one.
    pub overlay: Option<Overlay>,

    pub input_mode: InputMode,

    pub search_query: String,

    /// Index into [`BROWSE_CATEGORIES`].
    pub browse_category: usize,

    /// Cursor within the current screen's list.
    pub selected_index: usize,

    /// Cars listed on the current screen after category, filters, search and sort.
    ///
    /// Derived from the fields above by [`refresh_list`](Self::refresh_list).
    pub visible: Vec<CarWithListings>,

    pub booking: BookingForm,

    /// Filters applied on the vehicles screen.
    pub filters: FilterState,

    pub sort: SortOrder,

    pub session: Session,

    /// Mocked requests waiting for a timer tick, oldest first.
    pub pending: VecDeque<PendingRequest>,

    pub landing: LandingState,
}

impl AppState {
    /// Creates the state with the landing screen showing.
    #[must_use]
    pub fn new(
        catalog: Vec<CarWithListings>,
        collections: Vec<FeaturedCollection>,
        theme: Theme,
        today: NaiveDate,
    ) -> Self {
        let mut state = Self {
            theme,
            today,
            clock: None,
            mock_delay: DEFAULT_MOCK_DELAY,
            default_location: DEFAULT_LOCATION.to_string(),
            catalog,
            collections,
            nav: vec![NavEntry {
                screen: Screen::Landing,
                selected_index: 0,
            }],
            overlay: None,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            browse_category: 0,
            selected_index: 0,
            visible: Vec::new(),
            booking: BookingForm::default(),
            filters: FilterState::default(),
            sort: SortOrder::default(),
            session: Session::default(),
            pending: VecDeque::new(),
            landing: LandingState::default(),
        };
        state.refresh_list();
        state
    }

    /// Sets the clock that keeps `today` current across midnight.
    pub fn set_clock(&mut self, clock: fn() -> NaiveDate) {
        self.clock = Some(clock);
    }

    /// Advances `today` to the clock's date. Never moves it backwards.
    pub fn refresh_today(&mut self) {
        let Some(clock) = self.clock else {
            return;
        };
        let now = clock();
        if now > self.today {
            tracing::debug!(from = %self.today, to = %now, "date changed");
            self.today = now;
        }
    }

    /// The screen on top of the navigation stack.
    #[must_use]
    pub fn screen(&self) -> &Screen {
        // The stack always holds its root entry.
        &self.nav[self.nav.len() - 1].screen
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.nav.len()
    }

    /// Covers the current screen, remembering its selection for when it is uncovered.
    pub fn push_screen(&mut self, screen: Screen) {
        tracing::debug!(screen = ?screen, depth = self.nav.len() + 1, "push screen");
        if let Some(top) = self.nav.last_mut() {
            top.selected_index = self.selected_index;
        }
        self.nav.push(NavEntry {
            screen,
            selected_index: 0,
        });
        self.leave_screen(0);
    }

    /// Returns to the previous screen. `false` at the root.
    pub fn pop_screen(&mut self) -> bool {
        if self.nav.len() <= 1 {
            return false;
        }
        self.nav.pop();
        let restored = self.nav.last().map_or(0, |top| top.selected_index);
        tracing::debug!(screen = ?self.screen(), "pop screen");
        self.leave_screen(restored);
        true
    }

    /// Replaces the whole stack with a single screen.
    pub fn reset_to(&mut self, screen: Screen) {
        tracing::debug!(screen = ?screen, "reset navigation");
        self.nav = vec![NavEntry {
            screen,
            selected_index: 0,
        }];
        self.leave_screen(0);
    }

    fn leave_screen(&mut self, selected_index: usize) {
        self.overlay = None;
        self.input_mode = InputMode::Normal;
        self.search_query.clear();
        self.selected_index = selected_index;
        self.refresh_list();
    }

    #[must_use]
    pub fn active_tab(&self) -> Option<Tab> {
        match self.screen() {
            Screen::Main(tab) => Some(*tab),
            _ => None,
        }
    }

    /// Switches tabs on the main screen, dropping any screens stacked above it.
    pub fn show_tab(&mut self, tab: Tab) {
        if self.active_tab() == Some(tab) && self.nav.len() == 1 {
            return;
        }
        self.reset_to(Screen::Main(tab));
    }

    /// Whether printable keys should be delivered as text rather than commands.
    #[must_use]
    pub fn accepts_text(&self) -> bool {
        match &self.overlay {
            Some(overlay) => overlay.accepts_text(),
            None => self.input_mode == InputMode::Search(SearchFocus::Typing),
        }
    }

    /// Whether the current screen has a searchable car list.
    #[must_use]
    pub fn is_searchable(&self) -> bool {
        matches!(self.screen(), Screen::Main(Tab::Browse) | Screen::Vehicles(_))
    }

    #[must_use]
    pub fn browse_category_name(&self) -> &'static str {
        BROWSE_CATEGORIES[self.browse_category % BROWSE_CATEGORIES.len()]
    }

    pub fn cycle_category(&mut self, forward: bool) {
        let len = BROWSE_CATEGORIES.len();
        self.browse_category = if forward {
            (self.browse_category + 1) % len
        } else {
            (self.browse_category + len - 1) % len
        };
        self.selected_index = 0;
        self.refresh_list();
    }

    /// Recomputes [`visible`](Self::visible) for the current screen and clamps the selection.
    pub fn refresh_list(&mut self) {
        let _span = tracing::debug_span!(
            "refresh_list",
            screen = ?self.screen(),
            query_len = self.search_query.len()
        )
        .entered();

        let search = CarSearch::new(&self.search_query);
        self.visible = match self.screen() {
            Screen::Main(Tab::Home) => self
                .collections
                .iter()
                .flat_map(|c| c.cars.iter().cloned())
                .collect(),
            Screen::Main(Tab::Browse) => {
                let category = self.browse_category_name();
                let in_category: Vec<CarWithListings> = self
                    .catalog
                    .iter()
                    .filter(|car| matches_category(car, category))
                    .cloned()
                    .collect();
                search.filter(&in_category)
            }
            Screen::Vehicles(_) => {
                let mut cars = search.filter(&filter_catalog(&self.catalog, &self.filters));
                self.sort.apply(&mut cars);
                cars
            }
            Screen::CarDetails(id) => self.find_car(id).cloned().into_iter().collect(),
            Screen::Landing | Screen::Main(_) => Vec::new(),
        };

        let len = self.list_len();
        self.selected_index = if len == 0 {
            0
        } else {
            self.selected_index.min(len - 1)
        };

        tracing::debug!(visible = self.visible.len(), "list refreshed");
    }

    /// Number of selectable rows on the current screen.
    #[must_use]
    pub fn list_len(&self) -> usize {
        match self.screen() {
            Screen::CarDetails(_) => self.visible.first().map_or(0, |car| car.listings.len()),
            Screen::Main(Tab::Account) => 1,
            _ => self.visible.len(),
        }
    }

    pub fn move_selection_down(&mut self) {
        match self.screen() {
            Screen::Landing => {
                self.landing.button = (self.landing.button + 1) % LANDING_BUTTONS.len();
            }
            Screen::Main(Tab::Book) => self.booking.move_down(),
            _ => {
                let len = self.list_len();
                if len > 0 {
                    self.selected_index = (self.selected_index + 1) % len;
                }
            }
        }
    }

    pub fn move_selection_up(&mut self) {
        match self.screen() {
            Screen::Landing => {
                let len = LANDING_BUTTONS.len();
                self.landing.button = (self.landing.button + len - 1) % len;
            }
            Screen::Main(Tab::Book) => self.booking.move_up(),
            _ => {
                let len = self.list_len();
                if len == 0 {
                    return;
                }
                self.selected_index = if self.selected_index == 0 {
                    len - 1
                } else {
                    self.selected_index - 1
                };
            }
        }
    }

    /// Steps the landing carousel, wrapping at either end.
    pub fn step_slide(&mut self, forward: bool) {
        let len = LANDING_SLIDES.len();
        self.landing.slide = if forward {
            (self.landing.slide + 1) % len
        } else {
            (self.landing.slide + len - 1) % len
        };
    }

    /// The highlighted car on list screens, or the car being viewed on the details screen.
    #[must_use]
    pub fn selected_car(&self) -> Option<&CarWithListings> {
        match self.screen() {
            Screen::CarDetails(_) => self.visible.first(),
            _ => self.visible.get(self.selected_index),
        }
    }

    #[must_use]
    pub fn find_car(&self, id: &str) -> Option<&CarWithListings> {
        self.catalog.iter().find(|car| car.car.id == id)
    }

    /// Rental period of the vehicles screen, if it is showing.
    #[must_use]
    pub fn current_period(&self) -> Option<Result<RentalPeriod>> {
        match self.screen() {
            Screen::Vehicles(params) => Some(params.to_period()),
            _ => None,
        }
    }

    /// Queues a mocked request; each request gets its own timer tick.
    pub fn enqueue(&mut self, request: PendingRequest) -> Vec<Action> {
        tracing::debug!(request = ?request, queued = self.pending.len() + 1, "request queued");
        self.pending.push_back(request);
        vec![Action::StartTimer(self.mock_delay)]
    }

    /// Status line for the oldest outstanding request.
    #[must_use]
    pub fn pending_status(&self) -> Option<&'static str> {
        self.pending.front().map(PendingRequest::status)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::{CatalogSource, MockCatalog};

    pub(crate) fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    pub(crate) fn state() -> AppState {
        let catalog = MockCatalog::builtin();
        AppState::new(
            catalog.get_cars_with_listings().unwrap(),
            catalog.featured_collections().unwrap(),
            Theme::default(),
            today(),
        )
    }

    #[test]
    fn refresh_today_follows_the_clock_forward_only() {
        let mut state = state();
        state.refresh_today();
        assert_eq!(state.today, today());

        state.set_clock(|| NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        state.refresh_today();
        assert_eq!(state.today, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());

        state.set_clock(today);
        state.refresh_today();
        assert_eq!(state.today, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
    }

    #[test]
    fn starts_on_landing() {
        let state = state();
        assert_eq!(state.screen(), &Screen::Landing);
        assert_eq!(state.depth(), 1);
        assert!(state.visible.is_empty());
    }

    #[test]
    fn home_lists_collection_cars_in_order() {
        let mut state = state();
        state.show_tab(Tab::Home);
        let ids: Vec<&str> = state.visible.iter().map(|c| c.car.id.as_str()).collect();
        assert_eq!(ids, ["3", "6", "4", "8", "2", "5", "7"]);
    }

    #[test]
    fn browse_category_narrows_the_list() {
        let mut state = state();
        state.show_tab(Tab::Browse);
        assert_eq!(state.browse_category_name(), "All");
        state.cycle_category(true);
        let category = state.browse_category_name();
        assert!(state.visible.iter().all(|c| c.car.category == category));
        state.cycle_category(false);
        assert_eq!(state.visible.len(), state.catalog.len());
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = state();
        state.show_tab(Tab::Browse);
        state.move_selection_up();
        assert_eq!(state.selected_index, state.visible.len() - 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn back_restores_previous_selection() {
        let mut state = state();
        state.show_tab(Tab::Browse);
        state.move_selection_down();
        state.move_selection_down();
        let id = state.selected_car().unwrap().car.id.clone();

        state.push_screen(Screen::CarDetails(id.clone()));
        assert_eq!(state.selected_car().unwrap().car.id, id);
        assert_eq!(state.selected_index, 0);

        assert!(state.pop_screen());
        assert_eq!(state.selected_index, 2);
        assert!(!state.pop_screen());
    }

    #[test]
    fn search_narrows_browse_list() {
        let mut state = state();
        state.show_tab(Tab::Browse);
        state.input_mode = InputMode::Search(SearchFocus::Typing);
        state.search_query = "tesla".to_string();
        state.refresh_list();
        assert_eq!(state.visible.len(), 1);
        assert!(state.accepts_text());
    }

    #[test]
    fn enqueue_starts_one_timer_per_request() {
        let mut state = state();
        let actions = state.enqueue(PendingRequest::SignIn {
            email: GUEST_EMAIL.to_string(),
        });
        assert_eq!(actions, vec![Action::StartTimer(DEFAULT_MOCK_DELAY)]);
        assert_eq!(state.pending_status(), Some("Signing in..."));
    }
}
