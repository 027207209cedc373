//! Date-range picker state machine.
//!
//! The picker moves between three states as dates are selected:
//!
//! ```text
//!            select(d)                 select(d), d >= pickup
//!   Empty ─────────────▶ PickupOnly ─────────────────────────▶ RangeComplete
//!                         │    ▲                                      │
//!                         └────┘ select(d), d < pickup                │
//!                         ▲         (restart with d)                  │
//!                         └───────────────────────────────────────────┘
//!                                   select(d) (restart with d)
//! ```
//!
//! Dates before `today` are never selectable. Pickup and dropoff times are
//! chosen from the twelve [`TimeSlot`]s; on a same-day range the dropoff slot
//! must come strictly after the pickup slot. [`DateRangePicker::confirm`] is the
//! authoritative check and yields a [`DateRangeSelection`] only for a valid range.

use crate::domain::TimeSlot;
use crate::filter::rental_days;
use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Selection progress of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeState {
    Empty,
    PickupOnly { pickup: NaiveDate },
    /// Invariant: `dropoff >= pickup`.
    RangeComplete { pickup: NaiveDate, dropoff: NaiveDate },
}

/// Which part of the picker receives keyboard input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PickerFocus {
    #[default]
    Calendar,
    PickupTime,
    DropoffTime,
}

impl PickerFocus {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Calendar => Self::PickupTime,
            Self::PickupTime => Self::DropoffTime,
            Self::DropoffTime => Self::Calendar,
        }
    }
}

/// A confirmed rental period: two dates and two time slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeSelection {
    pub pickup_date: NaiveDate,
    pub dropoff_date: NaiveDate,
    pub pickup_time: TimeSlot,
    pub dropoff_time: TimeSlot,
}

impl DateRangeSelection {
    #[must_use]
    pub fn pickup_at(&self) -> NaiveDateTime {
        at_slot(self.pickup_date, self.pickup_time)
    }

    #[must_use]
    pub fn dropoff_at(&self) -> NaiveDateTime {
        at_slot(self.dropoff_date, self.dropoff_time)
    }

    /// Billed days for this period, counted over dates only, at least one.
    #[must_use]
    pub fn rental_days(&self) -> u32 {
        rental_days(self.pickup_date, self.dropoff_date)
    }

    /// Short form used in the booking form, e.g. `"3/10 10:00 AM → 3/12 2:00 PM"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} {} → {} {}",
            short_date(Some(self.pickup_date)),
            self.pickup_time,
            short_date(Some(self.dropoff_date)),
            self.dropoff_time
        )
    }
}

fn at_slot(date: NaiveDate, slot: TimeSlot) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(slot.hour(), 0, 0).unwrap_or(NaiveTime::MIN))
}

/// `month/day`, or `"Select"` when no date is chosen.
#[must_use]
pub fn short_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| "Select".to_string(), |d| format!("{}/{}", d.month(), d.day()))
}

/// First day of the month containing `date`.
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangePicker {
    today: NaiveDate,
    state: RangeState,
    pickup_time: TimeSlot,
    dropoff_time: TimeSlot,
    visible_month: NaiveDate,
    cursor: NaiveDate,
    focus: PickerFocus,
}

impl DateRangePicker {
    /// Opens a fresh picker: nothing selected, both times at the default slot,
    /// calendar on today's month.
    #[must_use]
    pub fn open(today: NaiveDate) -> Self {
        tracing::debug!(%today, "date picker opened");
        Self {
            today,
            state: RangeState::Empty,
            pickup_time: TimeSlot::default(),
            dropoff_time: TimeSlot::default(),
            visible_month: first_of_month(today),
            cursor: today,
            focus: PickerFocus::Calendar,
        }
    }

    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    #[must_use]
    pub const fn state(&self) -> RangeState {
        self.state
    }

    #[must_use]
    pub const fn pickup_date(&self) -> Option<NaiveDate> {
        match self.state {
            RangeState::Empty => None,
            RangeState::PickupOnly { pickup } | RangeState::RangeComplete { pickup, .. } => Some(pickup),
        }
    }

    #[must_use]
    pub const fn dropoff_date(&self) -> Option<NaiveDate> {
        match self.state {
            RangeState::RangeComplete { dropoff, .. } => Some(dropoff),
            RangeState::Empty | RangeState::PickupOnly { .. } => None,
        }
    }

    #[must_use]
    pub const fn pickup_time(&self) -> TimeSlot {
        self.pickup_time
    }

    #[must_use]
    pub const fn dropoff_time(&self) -> TimeSlot {
        self.dropoff_time
    }

    /// First day of the month shown in the calendar.
    #[must_use]
    pub const fn visible_month(&self) -> NaiveDate {
        self.visible_month
    }

    #[must_use]
    pub const fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    #[must_use]
    pub const fn focus(&self) -> PickerFocus {
        self.focus
    }

    #[must_use]
    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        date >= self.today
    }

    /// Applies a date tap. Returns `false` and leaves the state untouched for a past date.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        if !self.is_selectable(date) {
            tracing::debug!(%date, "rejected past date");
            return false;
        }

        self.state = match self.state {
            RangeState::PickupOnly { pickup } if date >= pickup => RangeState::RangeComplete {
                pickup,
                dropoff: date,
            },
            RangeState::Empty | RangeState::PickupOnly { .. } | RangeState::RangeComplete { .. } => {
                RangeState::PickupOnly { pickup: date }
            }
        };
        tracing::debug!(state = ?self.state, "date selected");
        true
    }

    /// Shows the previous month, unless today's month is already visible.
    pub fn prev_month(&mut self) {
        if self.visible_month <= first_of_month(self.today) {
            return;
        }
        if let Some(prev) = self.visible_month.checked_sub_months(Months::new(1)) {
            self.visible_month = prev;
        }
    }

    pub fn next_month(&mut self) {
        if let Some(next) = self.visible_month.checked_add_months(Months::new(1)) {
            self.visible_month = next;
        }
    }

    /// Moves the keyboard cursor by `days`, paging the calendar to follow it.
    ///
    /// Moves that would land before today are ignored.
    pub fn move_cursor(&mut self, days: i64) {
        let magnitude = Days::new(days.unsigned_abs());
        let target = if days >= 0 {
            self.cursor.checked_add_days(magnitude)
        } else {
            self.cursor.checked_sub_days(magnitude)
        };

        if let Some(date) = target.filter(|d| *d >= self.today) {
            self.cursor = date;
            self.visible_month = first_of_month(date);
        }
    }

    /// Selects the date under the keyboard cursor.
    pub fn select_cursor(&mut self) -> bool {
        self.select_date(self.cursor)
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    #[must_use]
    pub fn is_same_day(&self) -> bool {
        matches!(self.state, RangeState::RangeComplete { pickup, dropoff } if pickup == dropoff)
    }

    /// Always accepted. A dropoff time invalidated by the new pickup time is kept
    /// as is; rendering re-validates it and `confirm` rejects it.
    pub fn select_pickup_time(&mut self, slot: TimeSlot) {
        self.pickup_time = slot;
    }

    /// `true` when `slot` cannot be chosen as dropoff time for the current range.
    #[must_use]
    pub fn is_dropoff_slot_disabled(&self, slot: TimeSlot) -> bool {
        self.is_same_day() && slot <= self.pickup_time
    }

    /// Sets the dropoff time unless the slot is disabled; returns whether it was accepted.
    pub fn select_dropoff_time(&mut self, slot: TimeSlot) -> bool {
        if self.is_dropoff_slot_disabled(slot) {
            tracing::debug!(slot = %slot, pickup_time = %self.pickup_time, "rejected dropoff time");
            return false;
        }
        self.dropoff_time = slot;
        true
    }

    /// Moves the pickup time one slot forward or back, stopping at the ends.
    pub fn step_pickup_time(&mut self, forward: bool) {
        if let Some(slot) = step(self.pickup_time, forward) {
            self.select_pickup_time(slot);
        }
    }

    /// Moves the dropoff time to the nearest enabled slot in the given direction.
    pub fn step_dropoff_time(&mut self, forward: bool) {
        let mut candidate = step(self.dropoff_time, forward);
        while let Some(slot) = candidate {
            if self.select_dropoff_time(slot) {
                return;
            }
            candidate = step(slot, forward);
        }
    }

    /// Returns the selection when both dates are set and, for a same-day range,
    /// the dropoff slot is after the pickup slot. Otherwise `None`, and the
    /// picker should stay open.
    #[must_use]
    pub fn confirm(&self) -> Option<DateRangeSelection> {
        let RangeState::RangeComplete { pickup, dropoff } = self.state else {
            tracing::debug!(state = ?self.state, "confirm ignored: range incomplete");
            return None;
        };

        if pickup == dropoff && self.dropoff_time <= self.pickup_time {
            tracing::debug!(
                pickup_time = %self.pickup_time,
                dropoff_time = %self.dropoff_time,
                "confirm ignored: same-day dropoff not after pickup"
            );
            return None;
        }

        Some(DateRangeSelection {
            pickup_date: pickup,
            dropoff_date: dropoff,
            pickup_time: self.pickup_time,
            dropoff_time: self.dropoff_time,
        })
    }
}

fn step(slot: TimeSlot, forward: bool) -> Option<TimeSlot> {
    if forward {
        TimeSlot::from_index(slot.index() + 1)
    } else {
        slot.index().checked_sub(1).and_then(TimeSlot::from_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn slot(label: &str) -> TimeSlot {
        TimeSlot::parse_label(label).unwrap()
    }

    #[test]
    fn opens_empty_on_todays_month() {
        let picker = DateRangePicker::open(day(15));
        assert_eq!(picker.state(), RangeState::Empty);
        assert_eq!(picker.visible_month(), day(1));
        assert_eq!(picker.pickup_time(), TimeSlot::default());
        assert!(picker.confirm().is_none());
    }

    #[test]
    fn transitions_follow_the_range_rules() {
        let mut picker = DateRangePicker::open(day(1));
        assert!(picker.select_date(day(10)));
        assert_eq!(picker.state(), RangeState::PickupOnly { pickup: day(10) });

        picker.select_date(day(12));
        assert_eq!(
            picker.state(),
            RangeState::RangeComplete { pickup: day(10), dropoff: day(12) }
        );

        picker.select_date(day(20));
        assert_eq!(picker.state(), RangeState::PickupOnly { pickup: day(20) });
    }

    #[test]
    fn earlier_second_date_restarts_range() {
        let mut picker = DateRangePicker::open(day(1));
        picker.select_date(day(10));
        picker.select_date(day(5));
        assert_eq!(picker.state(), RangeState::PickupOnly { pickup: day(5) });
        assert!(picker.dropoff_date().is_none());
    }

    #[test]
    fn same_date_twice_completes_a_same_day_range() {
        let mut picker = DateRangePicker::open(day(1));
        picker.select_date(day(10));
        picker.select_date(day(10));
        assert!(picker.is_same_day());
    }

    #[test]
    fn past_dates_are_rejected() {
        let mut picker = DateRangePicker::open(day(15));
        assert!(!picker.select_date(day(14)));
        assert_eq!(picker.state(), RangeState::Empty);
        assert!(picker.select_date(day(15)));
    }

    #[test]
    fn prev_month_stops_at_todays_month() {
        let mut picker = DateRangePicker::open(day(15));
        picker.prev_month();
        assert_eq!(picker.visible_month(), day(1));

        picker.next_month();
        picker.next_month();
        assert_eq!(picker.visible_month(), NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());
        picker.prev_month();
        assert_eq!(picker.visible_month(), NaiveDate::from_ymd_opt(2026, 4, 1).unwrap());
    }

    #[test]
    fn month_navigation_keeps_selection() {
        let mut picker = DateRangePicker::open(day(1));
        picker.select_date(day(3));
        picker.next_month();
        assert_eq!(picker.pickup_date(), Some(day(3)));
    }

    #[test]
    fn same_day_confirm_requires_later_dropoff() {
        let mut picker = DateRangePicker::open(day(1));
        picker.select_date(day(10));
        picker.select_date(day(10));
        picker.select_pickup_time(slot("2:00 PM"));

        assert!(!picker.select_dropoff_time(slot("1:00 PM")));
        assert!(!picker.select_dropoff_time(slot("2:00 PM")));
        assert!(picker.confirm().is_none());

        assert!(picker.select_dropoff_time(slot("3:00 PM")));
        let selection = picker.confirm().unwrap();
        assert_eq!(selection.pickup_time, slot("2:00 PM"));
        assert_eq!(selection.dropoff_time, slot("3:00 PM"));
        assert_eq!(selection.rental_days(), 1);
    }

    #[test]
    fn later_pickup_time_leaves_stale_dropoff() {
        let mut picker = DateRangePicker::open(day(1));
        picker.select_date(day(10));
        picker.select_date(day(10));
        picker.select_pickup_time(slot("11:00 AM"));
        assert!(picker.select_dropoff_time(slot("1:00 PM")));

        picker.select_pickup_time(slot("4:00 PM"));
        assert_eq!(picker.dropoff_time(), slot("1:00 PM"));
        assert!(picker.is_dropoff_slot_disabled(slot("1:00 PM")));
        assert!(picker.confirm().is_none());
    }

    #[test]
    fn multi_day_range_allows_any_times() {
        let mut picker = DateRangePicker::open(day(1));
        picker.select_date(day(10));
        picker.select_date(day(11));
        picker.select_pickup_time(slot("5:00 PM"));
        assert!(picker.select_dropoff_time(slot("9:00 AM")));
        assert!(picker.confirm().is_some());
    }

    #[test]
    fn cursor_pages_calendar_but_not_into_the_past() {
        let mut picker = DateRangePicker::open(day(30));
        picker.move_cursor(-1);
        assert_eq!(picker.cursor(), day(30));
        picker.move_cursor(7);
        assert_eq!(picker.visible_month(), NaiveDate::from_ymd_opt(2026, 4, 1).unwrap());
        picker.move_cursor(-7);
        assert_eq!(picker.visible_month(), day(1));
        assert!(picker.select_cursor());
        assert_eq!(picker.pickup_date(), Some(day(30)));
    }

    #[test]
    fn dropoff_step_skips_disabled_slots() {
        let mut picker = DateRangePicker::open(day(1));
        picker.select_date(day(10));
        picker.select_date(day(10));
        picker.select_pickup_time(slot("2:00 PM"));
        picker.step_dropoff_time(true);
        assert_eq!(picker.dropoff_time(), slot("3:00 PM"));
        picker.step_dropoff_time(false);
        assert_eq!(picker.dropoff_time(), slot("3:00 PM"));
    }

    #[test]
    fn focus_cycles_through_sections() {
        let mut picker = DateRangePicker::open(day(1));
        picker.cycle_focus();
        assert_eq!(picker.focus(), PickerFocus::PickupTime);
        picker.cycle_focus();
        assert_eq!(picker.focus(), PickerFocus::DropoffTime);
        picker.cycle_focus();
        assert_eq!(picker.focus(), PickerFocus::Calendar);
    }

    #[test]
    fn summary_uses_short_dates() {
        let selection = DateRangeSelection {
            pickup_date: day(10),
            dropoff_date: day(12),
            pickup_time: TimeSlot::default(),
            dropoff_time: slot("2:00 PM"),
        };
        assert_eq!(selection.summary(), "3/10 10:00 AM → 3/12 2:00 PM");
        assert_eq!(selection.rental_days(), 2);
        assert_eq!(short_date(None), "Select");
    }

    #[test]
    fn later_dropoff_slot_does_not_add_a_day() {
        let selection = DateRangeSelection {
            pickup_date: day(10),
            dropoff_date: day(11),
            pickup_time: slot("9:00 AM"),
            dropoff_time: slot("8:00 PM"),
        };
        assert_eq!(selection.rental_days(), 1);
    }
}
