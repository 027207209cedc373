//! Rental duration and total price.

use chrono::NaiveDate;

/// Number of billed days between the pickup and dropoff dates.
///
/// Only the calendar dates count; time slots never add a day. The result is
/// never below one, so same-day and reversed ranges bill one day.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rentalizer::filter::rental_days;
///
/// let pickup = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
/// let dropoff = NaiveDate::from_ymd_opt(2026, 3, 12).unwrap();
/// assert_eq!(rental_days(pickup, dropoff), 2);
/// assert_eq!(rental_days(pickup, pickup), 1);
/// ```
#[must_use]
pub fn rental_days(pickup: NaiveDate, dropoff: NaiveDate) -> u32 {
    u32::try_from((dropoff - pickup).num_days()).unwrap_or(0).max(1)
}

/// Total price of a rental, saturating instead of overflowing.
#[must_use]
pub const fn total_price(min_price: u32, days: u32) -> u32 {
    min_price.saturating_mul(days)
}

/// `"1 day"` or `"N days"`.
#[must_use]
pub fn format_days(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
    }

    #[test]
    fn same_day_rental_is_one_day() {
        assert_eq!(rental_days(day(4), day(4)), 1);
    }

    #[test]
    fn whole_days_between_dates() {
        assert_eq!(rental_days(day(4), day(7)), 3);
        assert_eq!(rental_days(day(4), day(5)), 1);
    }

    #[test]
    fn reversed_range_still_bills_a_day() {
        assert_eq!(rental_days(day(7), day(4)), 1);
    }

    #[test]
    fn totals_and_labels() {
        assert_eq!(total_price(85, 2), 170);
        assert_eq!(total_price(u32::MAX, 2), u32::MAX);
        assert_eq!(format_days(1), "1 day");
        assert_eq!(format_days(4), "4 days");
    }
}
