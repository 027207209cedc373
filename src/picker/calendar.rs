//! Month grid for the date picker's calendar.

use super::date_range::DateRangePicker;
use chrono::{Datelike, Months, NaiveDate};

/// Column headers, Sunday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// How a day cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    /// Before today; not selectable.
    Disabled,
    Pickup,
    Dropoff,
    /// Strictly between pickup and dropoff.
    InRange,
    Available,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub state: DayState,
    pub is_cursor: bool,
    pub is_today: bool,
}

/// The visible month laid out as Sunday-first weeks.
///
/// Cells before day 1 and after the last day are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    pub title: String,
    pub weeks: Vec<[Option<CalendarDay>; 7]>,
}

impl CalendarMonth {
    #[must_use]
    pub fn build(picker: &DateRangePicker) -> Self {
        let first = picker.visible_month();
        let title = format!("{} {}", MONTH_NAMES[first.month0() as usize], first.year());

        let leading = first.weekday().num_days_from_sunday() as usize;
        let mut cells: Vec<Option<CalendarDay>> = vec![None; leading];

        let mut date = first;
        while date.month() == first.month() {
            cells.push(Some(CalendarDay {
                date,
                state: day_state(picker, date),
                is_cursor: date == picker.cursor(),
                is_today: date == picker.today(),
            }));
            match date.succ_opt() {
                Some(next) => date = next,
                None => break,
            }
        }

        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        let weeks = cells
            .chunks(7)
            .map(|chunk| {
                let mut week = [None; 7];
                week.copy_from_slice(chunk);
                week
            })
            .collect();

        Self { title, weeks }
    }
}

/// Number of days in the month containing `date`.
#[must_use]
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = super::date_range::first_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day())
}

fn day_state(picker: &DateRangePicker, date: NaiveDate) -> DayState {
    if !picker.is_selectable(date) {
        return DayState::Disabled;
    }
    match (picker.pickup_date(), picker.dropoff_date()) {
        (Some(pickup), _) if date == pickup => DayState::Pickup,
        (_, Some(dropoff)) if date == dropoff => DayState::Dropoff,
        (Some(pickup), Some(dropoff)) if pickup < date && date < dropoff => DayState::InRange,
        _ => DayState::Available,
    }
}
