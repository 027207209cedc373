//! View model computation for [`AppState`].
//!
//! Turns the current screen, overlay and list into a [`UIViewModel`] sized to
//! the terminal. List windowing keeps the selection near the middle of the
//! visible window and fills the window when the selection is near the end.

use super::booking::BookingField;
use super::modes::{InputMode, Overlay, Screen, SearchFocus, Tab};
use super::state::{AppState, LANDING_BUTTONS, LANDING_SLIDES};
use crate::domain::{CarWithListings, VendorListing};
use crate::filter::{format_days, total_price, CarSearch, DraftRow, FiltersDraft, BROWSE_CATEGORIES};
use crate::picker::{short_date, CalendarMonth, DateRangePicker, LocationField, LocationPicker};
use crate::ui::viewmodel::{
    Body, CalendarView, ChipBar, DetailLine, DisplayItem, EmptyState, FilterRowView, FiltersView,
    FooterInfo, FormRow, HeaderInfo, LandingView, LineStyle, LocationView, NoticeView,
    OverlayView, SearchBarInfo, TabBar, UIViewModel,
};

/// Rows taken by the header block: blank line, title, subtitle, border.
const HEADER_ROWS: usize = 4;
/// Rows taken by the footer block: border and keybindings.
const FOOTER_ROWS: usize = 2;
const SEARCH_BAR_ROWS: usize = 3;

/// Subtitle shown under a Home section title.
fn collection_subtitle(title: &str) -> &'static str {
    match title {
        "Best Priced" => "Great value for your money",
        "Weekly Deals" => "Save more on 7+ day rentals",
        "Luxury Picks" => "Premium experience guaranteed",
        _ => "",
    }
}

/// First index of a window of `capacity` items around `selected`.
fn window_start(selected: usize, len: usize, capacity: usize) -> usize {
    let mut start = selected.saturating_sub(capacity / 2);
    let end = (start + capacity).min(len);
    if end - start < capacity && len >= capacity {
        start = end.saturating_sub(capacity);
    }
    start
}

impl AppState {
    /// Computes everything the renderer needs for a `rows` x `cols` terminal.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols).entered();

        let tabs = self.compute_tabs();
        let summary = self.compute_summary();
        let chips = self.compute_chips();
        let search_bar = self.compute_search_bar();

        let mut chrome = HEADER_ROWS + FOOTER_ROWS;
        chrome += usize::from(tabs.is_some());
        chrome += usize::from(summary.is_some());
        chrome += usize::from(chips.is_some());
        if search_bar.is_some() {
            chrome += SEARCH_BAR_ROWS;
        }
        let available_rows = rows.saturating_sub(chrome);

        UIViewModel {
            header: self.compute_header(),
            tabs,
            summary,
            chips,
            search_bar,
            body: self.compute_body(available_rows, cols),
            footer: self.compute_footer(),
            overlay: self.overlay.as_ref().map(|o| self.compute_overlay(o)),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let (title, subtitle) = match self.screen() {
            Screen::Landing => ("Rentalizer".to_string(), None),
            Screen::Main(Tab::Home) => {
                let title = self.session.user().map_or_else(
                    || "Welcome back!".to_string(),
                    |user| format!("Welcome back, {}!", user.name),
                );
                (title, Some("Find your perfect ride".to_string()))
            }
            Screen::Main(Tab::Book) => (
                "Book Your Ride".to_string(),
                Some("Get started by filling in the details below".to_string()),
            ),
            Screen::Main(Tab::Browse) => (
                "Browse".to_string(),
                Some(format!("{} vehicles", self.visible.len())),
            ),
            Screen::Main(Tab::Reservations) => (
                "My Reservations".to_string(),
                Some("Your bookings will appear here".to_string()),
            ),
            Screen::Main(Tab::Account) => (
                "Account".to_string(),
                Some("Manage your profile and settings".to_string()),
            ),
            Screen::Vehicles(params) => {
                let subtitle = match self.current_period() {
                    Some(Ok(period)) => format!("{} • {}", period.location, format_days(period.days)),
                    _ => params.location.clone(),
                };
                ("Available Vehicles".to_string(), Some(subtitle))
            }
            Screen::CarDetails(_) => match self.selected_car() {
                Some(car) => (
                    format!("{} {} {}", car.car.year, car.car.make, car.car.model),
                    Some(format!("{} • {}", car.car.car_type, car.car.category)),
                ),
                None => ("Car not found".to_string(), None),
            },
        };

        HeaderInfo {
            title,
            subtitle,
            status: self.pending_status().map(str::to_string),
        }
    }

    fn compute_tabs(&self) -> Option<TabBar> {
        let tab = self.active_tab()?;
        Some(TabBar {
            labels: Tab::ALL.iter().map(|t| t.label()).collect(),
            active: Tab::ALL.iter().position(|t| *t == tab).unwrap_or(0),
        })
    }

    fn compute_summary(&self) -> Option<String> {
        let Screen::Vehicles(_) = self.screen() else {
            return None;
        };
        let active = self.filters.active_count();
        let filters = if active == 0 {
            "Filters".to_string()
        } else {
            format!("Filters ({active})")
        };
        Some(format!(
            "{} results  •  Sort: {}  •  {filters}",
            self.visible.len(),
            self.sort.label()
        ))
    }

    fn compute_chips(&self) -> Option<ChipBar> {
        if self.active_tab() != Some(Tab::Browse) {
            return None;
        }
        Some(ChipBar {
            labels: BROWSE_CATEGORIES.iter().map(ToString::to_string).collect(),
            active: self.browse_category % BROWSE_CATEGORIES.len(),
        })
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: self.search_query.clone(),
                is_focused: focus == SearchFocus::Typing,
            }),
            InputMode::Normal => None,
        }
    }

    fn compute_body(&self, available_rows: usize, cols: usize) -> Body {
        match self.screen() {
            Screen::Landing => {
                let (title, subtitle) = LANDING_SLIDES[self.landing.slide % LANDING_SLIDES.len()];
                Body::Landing(LandingView {
                    title: title.to_string(),
                    subtitle: subtitle.to_string(),
                    slide_index: self.landing.slide,
                    slide_count: LANDING_SLIDES.len(),
                    buttons: LANDING_BUTTONS.to_vec(),
                    selected_button: self.landing.button,
                })
            }
            Screen::Main(Tab::Home) => self.compute_home_body(available_rows),
            Screen::Main(Tab::Book) => Body::Form {
                rows: self.compute_booking_rows(),
            },
            Screen::Main(Tab::Browse) => {
                if self.visible.is_empty() {
                    let message = if self.search_query.is_empty() {
                        "No vehicles in this category"
                    } else {
                        "No vehicles match your search"
                    };
                    return Body::Empty(EmptyState {
                        message: message.to_string(),
                        subtitle: "Try browsing other categories".to_string(),
                    });
                }
                self.compute_car_list(available_rows, cols, |car| {
                    let highlights = car.highlights();
                    (
                        format!("★ {} ({} trips)", highlights.rating_label, highlights.trip_count),
                        car.vendor_count_label(),
                    )
                })
            }
            Screen::Main(Tab::Reservations) => Body::Empty(EmptyState {
                message: "No reservations yet".to_string(),
                subtitle: "Search from the Book tab to find a car".to_string(),
            }),
            Screen::Main(Tab::Account) => Body::Form {
                rows: self.compute_account_rows(),
            },
            Screen::Vehicles(_) => self.compute_vehicles_body(available_rows, cols),
            Screen::CarDetails(_) => self.compute_details_body(available_rows),
        }
    }

    fn compute_home_body(&self, available_rows: usize) -> Body {
        if self.visible.is_empty() {
            return Body::Empty(EmptyState {
                message: "No featured cars".to_string(),
                subtitle: "Browse the full catalog instead".to_string(),
            });
        }

        let mut sections: Vec<Option<String>> = Vec::with_capacity(self.visible.len());
        for collection in &self.collections {
            for idx in 0..collection.cars.len() {
                sections.push((idx == 0).then(|| {
                    format!(
                        "{}  {}",
                        collection.title,
                        collection_subtitle(&collection.title)
                    )
                }));
            }
        }

        // Section headings make every item up to three rows tall.
        let capacity = (available_rows / 3).max(1);
        let start = window_start(self.selected_index, self.visible.len(), capacity);
        let end = (start + capacity).min(self.visible.len());

        let items = (start..end)
            .map(|idx| {
                let car = &self.visible[idx];
                let highlights = car.highlights();
                let mut section = sections.get(idx).cloned().flatten();
                if idx == start && section.is_none() {
                    section = self.section_title_for(idx);
                }
                DisplayItem {
                    section,
                    title: car.car.display_name(),
                    subtitle: format!("{} • {}", car.car.category, car.car.car_type),
                    price_label: format!("${}/day", car.min_price()),
                    detail: format!("★ {} ({} trips)", highlights.rating_label, highlights.trip_count),
                    trailing: highlights.distance.unwrap_or_default(),
                    is_selected: idx == self.selected_index,
                    highlight_ranges: vec![],
                }
            })
            .collect();

        Body::List { items }
    }

    /// Title of the collection containing the `idx`-th Home item.
    fn section_title_for(&self, idx: usize) -> Option<String> {
        let mut seen = 0;
        for collection in &self.collections {
            seen += collection.cars.len();
            if idx < seen {
                return Some(collection.title.clone());
            }
        }
        None
    }

    fn compute_car_list(
        &self,
        available_rows: usize,
        cols: usize,
        extra: impl Fn(&CarWithListings) -> (String, String),
    ) -> Body {
        let capacity = (available_rows / 2).max(1);
        let start = window_start(self.selected_index, self.visible.len(), capacity);
        let end = (start + capacity).min(self.visible.len());

        let search = (!self.search_query.is_empty()).then(|| CarSearch::new(&self.search_query));

        let items = self.visible[start..end]
            .iter()
            .enumerate()
            .map(|(relative, car)| {
                let absolute = start + relative;
                let title = car.car.display_name();
                let highlight_ranges = search
                    .as_ref()
                    .map(|s| s.highlight_ranges(&title))
                    .unwrap_or_default();
                let (detail, trailing) = extra(car);
                let specs = format!(
                    "{} seats • {} • {}",
                    car.car.specs.seats, car.car.specs.transmission, car.car.specs.fuel_type
                );
                // Narrow terminals drop the category from the subtitle.
                let subtitle = if cols >= 100 {
                    format!("{} • {}", car.car.category, specs)
                } else {
                    specs
                };
                DisplayItem {
                    section: None,
                    title,
                    subtitle,
                    price_label: format!("${}/day", car.min_price()),
                    detail,
                    trailing,
                    is_selected: absolute == self.selected_index,
                    highlight_ranges,
                }
            })
            .collect();

        Body::List { items }
    }

    fn compute_vehicles_body(&self, available_rows: usize, cols: usize) -> Body {
        let period = match self.current_period() {
            Some(Ok(period)) => period,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "vehicles screen has invalid search parameters");
                return Body::Empty(EmptyState {
                    message: "Invalid search".to_string(),
                    subtitle: e.to_string(),
                });
            }
            None => return Body::List { items: vec![] },
        };

        if self.visible.is_empty() {
            return Body::Empty(EmptyState {
                message: "No vehicles match your filters".to_string(),
                subtitle: "Press f to adjust or reset the filters".to_string(),
            });
        }

        self.compute_car_list(available_rows, cols, |car| {
            (
                format!("Total: ${}", total_price(car.min_price(), period.days)),
                car.vendor_count_label(),
            )
        })
    }

    fn compute_details_body(&self, available_rows: usize) -> Body {
        let Some(car) = self.selected_car() else {
            return Body::Empty(EmptyState {
                message: "Car not found".to_string(),
                subtitle: "It may have been removed from the catalog".to_string(),
            });
        };

        let specs = &car.car.specs;
        let mut spec_line = format!(
            "Seats: {}   Transmission: {}   Fuel Type: {}",
            specs.seats, specs.transmission, specs.fuel_type
        );
        if let Some(mpg) = &specs.mpg {
            spec_line.push_str(&format!("   Efficiency: {mpg}"));
        }

        let vendor_heading = match car.listings.len() {
            1 => "Available from 1 vendor".to_string(),
            n => format!("Available from {n} vendors"),
        };

        let lines = vec![
            DetailLine::new("Specifications", LineStyle::Heading),
            DetailLine::new(spec_line, LineStyle::Text),
            DetailLine::new("Features", LineStyle::Heading),
            DetailLine::new(car.car.features.join(" • "), LineStyle::Text),
            DetailLine::new(vendor_heading, LineStyle::Heading),
            DetailLine::new("Sorted by price (lowest first)", LineStyle::Dim),
        ];

        let rows_for_vendors = available_rows.saturating_sub(lines.len() + 1);
        let capacity = (rows_for_vendors / 2).max(1);
        let start = window_start(self.selected_index, car.listings.len(), capacity);
        let end = (start + capacity).min(car.listings.len());

        let items = car.listings[start..end]
            .iter()
            .enumerate()
            .map(|(relative, offer)| vendor_item(offer, start + relative == self.selected_index))
            .collect();

        Body::Details { lines, items }
    }

    fn compute_booking_rows(&self) -> Vec<FormRow> {
        let cursor = self.booking.cursor();
        BookingField::ALL
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                let is_selected = idx == cursor;
                match field {
                    BookingField::Location => FormRow {
                        label: match &self.booking.location {
                            Some(sel) if !sel.same_location => "Pickup / Dropoff Location".to_string(),
                            _ => "Pickup and Dropoff Location".to_string(),
                        },
                        value: self.booking.location_label(),
                        is_placeholder: self.booking.location.is_none(),
                        is_selected,
                        is_button: false,
                    },
                    BookingField::Dates => FormRow {
                        label: "Dates & Times".to_string(),
                        value: self.booking.dates_label(),
                        is_placeholder: self.booking.dates.is_none(),
                        is_selected,
                        is_button: false,
                    },
                    BookingField::DriverAge => FormRow {
                        label: "Driver Age".to_string(),
                        value: self.booking.driver_age_label().to_string(),
                        is_placeholder: self.booking.driver_age.is_none(),
                        is_selected,
                        is_button: false,
                    },
                    BookingField::Search => FormRow {
                        label: "Search Vehicles".to_string(),
                        value: String::new(),
                        is_placeholder: !self.booking.can_search(),
                        is_selected,
                        is_button: true,
                    },
                }
            })
            .collect()
    }

    fn compute_account_rows(&self) -> Vec<FormRow> {
        let info = |label: &str, value: String, is_placeholder: bool| FormRow {
            label: label.to_string(),
            value,
            is_placeholder,
            is_selected: false,
            is_button: false,
        };

        let (mut rows, button) = match self.session.user() {
            Some(user) => (
                vec![
                    info("Name", user.name.clone(), false),
                    info("Email", user.email.clone(), false),
                ],
                "Sign Out",
            ),
            None => (
                vec![info("Status", "Browsing as guest".to_string(), true)],
                "Sign In",
            ),
        };

        rows.push(FormRow {
            label: button.to_string(),
            value: String::new(),
            is_placeholder: false,
            is_selected: true,
            is_button: true,
        });
        rows
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (&self.overlay, self.input_mode, self.screen()) {
            (Some(Overlay::Filters(_)), _, _) => {
                "j/k: move  h/l: adjust  Space: toggle  r: reset  a: apply  Esc: cancel"
            }
            (Some(Overlay::DatePicker(picker)), _, _) => match picker.focus() {
                crate::picker::PickerFocus::Calendar => {
                    "arrows: move  Enter: pick date  [/]: month  Tab: times  a: confirm  Esc: cancel"
                }
                _ => "h/l: change time  Tab: next  Enter/a: confirm  Esc: cancel",
            },
            (Some(Overlay::LocationPicker(_)), _, _) => {
                "Type to edit  Tab/↑↓: field  Enter: select  Esc: cancel"
            }
            (Some(Overlay::Notice(_)), _, _) => "Enter: OK",
            (None, InputMode::Search(SearchFocus::Typing), _) => {
                "ESC: exit search  Enter: results  Ctrl+n/p: navigate  Type to filter"
            }
            (None, InputMode::Search(SearchFocus::Navigating), _) => {
                "ESC: exit search  /: edit query  j/k or Ctrl+n/p: navigate  Enter: select"
            }
            (None, InputMode::Normal, Screen::Landing) => {
                "h/l: slides  j/k: choose  Enter: select  q: quit"
            }
            (None, InputMode::Normal, Screen::Main(Tab::Book)) => {
                "j/k: move  Enter: edit  h/l: driver age  Tab: next tab  q: quit"
            }
            (None, InputMode::Normal, Screen::Main(Tab::Browse)) => {
                "j/k: navigate  h/l: category  /: search  Enter: details  Tab: next tab  q: quit"
            }
            (None, InputMode::Normal, Screen::Main(Tab::Account)) => {
                "Enter: select  Tab: next tab  q: quit"
            }
            (None, InputMode::Normal, Screen::Main(_)) => {
                "j/k or Ctrl+n/p: navigate  Enter: details  1-5/Tab: tabs  q: quit"
            }
            (None, InputMode::Normal, Screen::Vehicles(_)) => {
                "j/k: navigate  /: search  f: filters  s: sort  Enter: details  Esc: back"
            }
            (None, InputMode::Normal, Screen::CarDetails(_)) => {
                "j/k: choose vendor  Enter: book  Esc: back  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_overlay(&self, overlay: &Overlay) -> OverlayView {
        match overlay {
            Overlay::Filters(draft) => OverlayView::Filters(filters_view(draft)),
            Overlay::DatePicker(picker) => OverlayView::Calendar(calendar_view(picker)),
            Overlay::LocationPicker(picker) => OverlayView::Location(location_view(picker)),
            Overlay::Notice(notice) => OverlayView::Notice(NoticeView {
                title: notice.title.clone(),
                message: notice.message.clone(),
            }),
        }
    }
}

fn vendor_item(offer: &VendorListing, is_selected: bool) -> DisplayItem {
    let vendor = &offer.vendor;
    DisplayItem {
        section: None,
        title: vendor.name.clone(),
        subtitle: format!(
            "★ {:.1} ({} reviews) • {} trips",
            vendor.rating, vendor.review_count, vendor.trip_count
        ),
        price_label: format!("${}/day", offer.listing.price_per_day),
        detail: format!("{} away", offer.listing.distance),
        trailing: format!("Responds {}", vendor.response_time),
        is_selected,
        highlight_ranges: vec![],
    }
}

fn filters_view(draft: &FiltersDraft) -> FiltersView {
    let filters = draft.filters();
    let mut previous_group = None;
    let rows = draft
        .rows()
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let (group, label) = match row {
                DraftRow::MinPrice => (
                    "Price per Day",
                    format!("Minimum: ${}", filters.price_range.min()),
                ),
                DraftRow::MaxPrice => (
                    "Price per Day",
                    format!("Maximum: ${}", filters.price_range.max()),
                ),
                DraftRow::Transmission(t) => ("Transmission", checkbox(draft.is_checked(*row), t.label())),
                DraftRow::Passengers => (
                    "Passengers",
                    format!("◀ {} ▶", filters.passengers.label()),
                ),
                DraftRow::VehicleType(name) => ("Vehicle Type", checkbox(draft.is_checked(*row), name)),
            };
            let starts_group = previous_group != Some(group);
            previous_group = Some(group);
            FilterRowView {
                group: starts_group.then_some(group),
                label,
                is_selected: idx == draft.cursor(),
            }
        })
        .collect();

    FiltersView {
        rows,
        active_count: filters.active_count(),
    }
}

fn checkbox(checked: bool, label: &str) -> String {
    if checked {
        format!("[x] {label}")
    } else {
        format!("[ ] {label}")
    }
}

fn calendar_view(picker: &DateRangePicker) -> CalendarView {
    CalendarView {
        month: CalendarMonth::build(picker),
        pickup_label: short_date(picker.pickup_date()),
        dropoff_label: short_date(picker.dropoff_date()),
        pickup_time: picker.pickup_time().label(),
        dropoff_time: picker.dropoff_time().label(),
        focus: picker.focus(),
        time_conflict: picker.is_dropoff_slot_disabled(picker.dropoff_time()),
        can_confirm: picker.confirm().is_some(),
    }
}

fn location_view(picker: &LocationPicker) -> LocationView {
    let rows = picker
        .fields()
        .into_iter()
        .map(|field| {
            let is_selected = field == picker.focus();
            match field {
                LocationField::Pickup => FormRow {
                    label: if picker.same_location() {
                        "Pickup and Dropoff Location".to_string()
                    } else {
                        "Pickup Location".to_string()
                    },
                    value: text_or_placeholder(picker.pickup(), "Enter pickup location"),
                    is_placeholder: picker.pickup().is_empty(),
                    is_selected,
                    is_button: false,
                },
                LocationField::Dropoff => FormRow {
                    label: "Dropoff Location".to_string(),
                    value: text_or_placeholder(picker.dropoff(), "Enter dropoff location"),
                    is_placeholder: picker.dropoff().is_empty(),
                    is_selected,
                    is_button: false,
                },
                LocationField::SameLocation => FormRow {
                    label: "Return to same location".to_string(),
                    value: if picker.same_location() { "On" } else { "Off" }.to_string(),
                    is_placeholder: false,
                    is_selected,
                    is_button: false,
                },
                LocationField::CurrentLocation => FormRow {
                    label: "Use My Current Location".to_string(),
                    value: String::new(),
                    is_placeholder: false,
                    is_selected,
                    is_button: true,
                },
            }
        })
        .collect();

    LocationView {
        rows,
        can_confirm: picker.confirm().is_some(),
    }
}

fn text_or_placeholder(text: &str, placeholder: &str) -> String {
    if text.is_empty() {
        placeholder.to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::booking::VehicleSearchParams;
    use crate::app::state::tests::state;

    fn vehicles_params() -> VehicleSearchParams {
        VehicleSearchParams {
            location: "San Francisco, CA".to_string(),
            pickup_date: "2026-03-10".to_string(),
            dropoff_date: "2026-03-12".to_string(),
            pickup_time: "10:00 AM".to_string(),
            dropoff_time: "10:00 AM".to_string(),
        }
    }

    #[test]
    fn window_centers_selection_and_fills_at_end() {
        assert_eq!(window_start(0, 20, 5), 0);
        assert_eq!(window_start(10, 20, 5), 8);
        assert_eq!(window_start(19, 20, 5), 15);
        assert_eq!(window_start(2, 3, 5), 0);
    }

    #[test]
    fn landing_view_shows_first_slide() {
        let vm = state().compute_viewmodel(24, 80);
        let Body::Landing(landing) = vm.body else {
            panic!("expected landing body");
        };
        assert_eq!(landing.title, "Welcome!");
        assert_eq!(landing.buttons, vec!["Sign In", "Sign Up", "Enter as Guest"]);
        assert!(vm.tabs.is_none());
    }

    #[test]
    fn home_items_carry_section_headings() {
        let mut state = state();
        state.show_tab(Tab::Home);
        let vm = state.compute_viewmodel(60, 80);
        let Body::List { items } = vm.body else {
            panic!("expected list body");
        };
        assert_eq!(items.len(), 7);
        assert!(items[0].section.as_deref().unwrap().starts_with("Best Priced"));
        assert!(items[1].section.is_none());
        assert!(items[2].section.as_deref().unwrap().starts_with("Weekly Deals"));
        assert!(items[0].is_selected);
        assert_eq!(vm.tabs.unwrap().active, 0);
    }

    #[test]
    fn browse_window_fits_terminal() {
        let mut state = state();
        state.show_tab(Tab::Browse);
        // 12 rows: 4 header + 1 chips + 1 tabs + 2 footer leaves 4 rows, two items.
        let vm = state.compute_viewmodel(12, 80);
        let Body::List { items } = vm.body else {
            panic!("expected list body");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(vm.chips.unwrap().labels[0], "All");
    }

    #[test]
    fn vehicles_rows_show_totals_for_the_period() {
        let mut state = state();
        state.push_screen(Screen::Vehicles(vehicles_params()));
        let vm = state.compute_viewmodel(80, 120);
        assert_eq!(vm.header.subtitle.as_deref(), Some("San Francisco, CA • 2 days"));

        let Body::List { items } = vm.body else {
            panic!("expected list body");
        };
        let first = &state.visible[0];
        assert_eq!(items[0].price_label, format!("${}/day", first.min_price()));
        assert_eq!(items[0].detail, format!("Total: ${}", first.min_price() * 2));
        assert!(vm.summary.unwrap().contains("Sort: Recommended"));
    }

    #[test]
    fn invalid_params_render_an_error_state() {
        let mut state = state();
        let mut params = vehicles_params();
        params.pickup_date = "not-a-date".to_string();
        state.push_screen(Screen::Vehicles(params));
        let vm = state.compute_viewmodel(40, 80);
        assert!(matches!(vm.body, Body::Empty(ref e) if e.message == "Invalid search"));
    }

    #[test]
    fn details_list_vendors_cheapest_first() {
        let mut state = state();
        state.push_screen(Screen::CarDetails("1".to_string()));
        let vm = state.compute_viewmodel(40, 80);
        assert_eq!(vm.header.title, "2023 Tesla Model 3");
        let Body::Details { lines, items } = vm.body else {
            panic!("expected details body");
        };
        assert_eq!(lines[4].text, "Available from 3 vendors");
        assert_eq!(items[0].price_label, "$85/day");
        assert!(items[0].is_selected);
    }

    #[test]
    fn filters_overlay_groups_rows() {
        let mut state = state();
        state.overlay = Some(Overlay::Filters(FiltersDraft::open(&state.filters)));
        let vm = state.compute_viewmodel(40, 80);
        let Some(OverlayView::Filters(view)) = vm.overlay else {
            panic!("expected filters overlay");
        };
        assert_eq!(view.rows[0].group, Some("Price per Day"));
        assert_eq!(view.rows[1].group, None);
        assert_eq!(view.rows[2].label, "[ ] Automatic");
        assert_eq!(view.active_count, 0);
    }
}
