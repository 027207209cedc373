//! View model types for UI rendering.
//!
//! Everything the renderer draws is computed up front by
//! `AppState::compute_viewmodel` into a [`UIViewModel`]. Strings are already
//! formatted, lists are already windowed to the terminal height, and each
//! row knows whether it is selected. The renderer only positions text and
//! applies theme colors.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ header (title, subtitle)     │
//! │ ─────────────────────────────│
//! │ summary / chips / search bar │  optional
//! │ body                         │
//! │ ─────────────────────────────│
//! │ tab bar                      │  main screen only
//! │ footer (keybindings)         │
//! └──────────────────────────────┘
//! ```
//!
//! An [`OverlayView`] is drawn as a centered box on top of the body.

use crate::picker::{CalendarMonth, PickerFocus};

/// Complete, pre-formatted contents of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Bottom tab bar, present on the main screen.
    pub tabs: Option<TabBar>,

    /// One-line context under the header, such as the rental period on the
    /// vehicles screen.
    pub summary: Option<String>,

    /// Category chips on the Browse tab.
    pub chips: Option<ChipBar>,

    /// Present only in search mode.
    pub search_bar: Option<SearchBarInfo>,

    pub body: Body,

    pub footer: FooterInfo,

    /// Modal drawn over the body.
    pub overlay: Option<OverlayView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: Option<String>,
    /// Right-aligned status such as a pending request, dimmed.
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBar {
    pub labels: Vec<&'static str>,
    pub active: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipBar {
    pub labels: Vec<String>,
    pub active: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// True while characters go to the query rather than the list.
    pub is_focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Main content area.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Windowed car list. Items are already sliced to what fits.
    List { items: Vec<DisplayItem> },
    /// Booking form or account rows.
    Form { rows: Vec<FormRow> },
    /// Car details: descriptive lines followed by selectable vendor rows.
    Details { lines: Vec<DetailLine>, items: Vec<DisplayItem> },
    Landing(LandingView),
    Empty(EmptyState),
}

/// One car or vendor row in a list.
///
/// Rendered as two lines: `title ... price_label` and
/// `subtitle ... trailing`, with `detail` appended to the second line when it
/// fits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Section heading drawn above this item (first item of a section only).
    pub section: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub price_label: String,
    pub detail: String,
    pub trailing: String,
    pub is_selected: bool,
    /// Character ranges of `title` matched by the search query.
    pub highlight_ranges: Vec<(usize, usize)>,
}

impl DisplayItem {
    /// Screen lines this item occupies.
    #[must_use]
    pub const fn height(&self) -> usize {
        if self.section.is_some() {
            3
        } else {
            2
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow {
    pub label: String,
    pub value: String,
    /// Value is a placeholder such as "Select dates".
    pub is_placeholder: bool,
    pub is_selected: bool,
    /// Rendered as a centered button instead of `label: value`.
    pub is_button: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Heading,
    Text,
    Dim,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    pub text: String,
    pub style: LineStyle,
}

impl DetailLine {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingView {
    pub title: String,
    pub subtitle: String,
    pub slide_index: usize,
    pub slide_count: usize,
    pub buttons: Vec<&'static str>,
    pub selected_button: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayView {
    Calendar(CalendarView),
    Filters(FiltersView),
    Location(LocationView),
    Notice(NoticeView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    pub month: CalendarMonth,
    /// `"3/10"` or `"Select"`.
    pub pickup_label: String,
    pub dropoff_label: String,
    pub pickup_time: &'static str,
    pub dropoff_time: &'static str,
    pub focus: PickerFocus,
    /// Same-day range whose dropoff slot is not after pickup.
    pub time_conflict: bool,
    pub can_confirm: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiltersView {
    pub rows: Vec<FilterRowView>,
    pub active_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRowView {
    /// Group heading drawn above the row, if it starts a group.
    pub group: Option<&'static str>,
    pub label: String,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationView {
    pub rows: Vec<FormRow>,
    pub can_confirm: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeView {
    pub title: String,
    pub message: String,
}
