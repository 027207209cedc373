//! Date-range picker transitions and rental-day arithmetic.

use chrono::NaiveDate;
use rentalizer::domain::TimeSlot;
use rentalizer::filter::rental_days;
use rentalizer::picker::{DateRangePicker, RangeState};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

fn slot(label: &str) -> TimeSlot {
    TimeSlot::parse_label(label).unwrap()
}

#[test]
fn earlier_second_tap_restarts_the_range() {
    let mut picker = DateRangePicker::open(day(1));
    assert!(picker.select_date(day(10)));
    assert!(picker.select_date(day(5)));
    assert_eq!(picker.state(), RangeState::PickupOnly { pickup: day(5) });

    assert!(picker.select_date(day(8)));
    assert_eq!(
        picker.state(),
        RangeState::RangeComplete {
            pickup: day(5),
            dropoff: day(8)
        }
    );

    // A third tap starts over.
    assert!(picker.select_date(day(20)));
    assert_eq!(picker.state(), RangeState::PickupOnly { pickup: day(20) });
}

#[test]
fn past_dates_are_rejected() {
    let mut picker = DateRangePicker::open(day(10));
    assert!(!picker.select_date(day(9)));
    assert_eq!(picker.state(), RangeState::Empty);
}

#[test]
fn same_day_needs_a_later_dropoff_time() {
    let mut picker = DateRangePicker::open(day(1));
    picker.select_date(day(3));
    picker.select_date(day(3));
    assert!(picker.is_same_day());

    picker.select_pickup_time(slot("2:00 PM"));
    assert!(!picker.select_dropoff_time(slot("1:00 PM")));
    assert!(!picker.select_dropoff_time(slot("2:00 PM")));
    assert!(picker.confirm().is_none());

    assert!(picker.select_dropoff_time(slot("3:00 PM")));
    let selection = picker.confirm().unwrap();
    assert_eq!(selection.pickup_date, day(3));
    assert_eq!(selection.dropoff_time.label(), "3:00 PM");
    assert_eq!(selection.rental_days(), 1);
}

#[test]
fn month_navigation_keeps_selection() {
    let mut picker = DateRangePicker::open(day(1));
    picker.select_date(day(4));

    picker.prev_month();
    assert_eq!(picker.visible_month(), day(1));

    picker.next_month();
    picker.next_month();
    assert_eq!(picker.visible_month(), NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());
    assert_eq!(picker.pickup_date(), Some(day(4)));
}

#[test]
fn rental_days_count_dates_with_a_one_day_floor() {
    assert_eq!(rental_days(day(3), day(3)), 1);
    assert_eq!(rental_days(day(3), day(4)), 1);
    assert_eq!(rental_days(day(10), day(12)), 2);
    assert_eq!(rental_days(day(12), day(10)), 1);
}
