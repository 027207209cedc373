//! Booking form state and the search parameters it produces.
//!
//! The form collects a location, a date range and an optional driver age.
//! Submitting it yields [`VehicleSearchParams`], a plain-string snapshot that
//! travels with the vehicles screen and is turned back into a typed
//! [`RentalPeriod`] there.

use crate::domain::{RentalError, Result, TimeSlot};
use crate::filter::rental_days;
use crate::picker::{DateRangeSelection, LocationSelection};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

const ISO_DATE: &str = "%Y-%m-%d";

/// Driver age bracket, which agencies use for young-driver surcharges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverAge {
    #[serde(rename = "18-19")]
    Teen,
    #[serde(rename = "20-24")]
    Young,
    #[serde(rename = "25+")]
    Standard,
}

impl DriverAge {
    pub const ALL: [Self; 3] = [Self::Teen, Self::Young, Self::Standard];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Teen => "18-19",
            Self::Young => "20-24",
            Self::Standard => "25+",
        }
    }

    /// Steps through the brackets, starting from either end when nothing is chosen yet.
    #[must_use]
    pub fn cycle(current: Option<Self>, forward: bool) -> Self {
        let len = Self::ALL.len();
        let idx = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(age), forward) => {
                let pos = Self::ALL.iter().position(|a| *a == age).unwrap_or(0);
                if forward {
                    (pos + 1) % len
                } else {
                    (pos + len - 1) % len
                }
            }
        };
        Self::ALL[idx]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    Location,
    Dates,
    DriverAge,
    Search,
}

impl BookingField {
    pub const ALL: [Self; 4] = [Self::Location, Self::Dates, Self::DriverAge, Self::Search];
}

/// The Book tab's form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub location: Option<LocationSelection>,
    pub dates: Option<DateRangeSelection>,
    pub driver_age: Option<DriverAge>,
    cursor: usize,
}

impl BookingForm {
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub const fn focused_field(&self) -> BookingField {
        BookingField::ALL[self.cursor]
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % BookingField::ALL.len();
    }

    pub fn move_up(&mut self) {
        let len = BookingField::ALL.len();
        self.cursor = (self.cursor + len - 1) % len;
    }

    pub fn cycle_driver_age(&mut self, forward: bool) {
        self.driver_age = Some(DriverAge::cycle(self.driver_age, forward));
    }

    /// Location and dates are both required; driver age is optional.
    #[must_use]
    pub const fn can_search(&self) -> bool {
        self.location.is_some() && self.dates.is_some()
    }

    #[must_use]
    pub fn location_label(&self) -> String {
        match &self.location {
            None => "Select location".to_string(),
            Some(sel) if sel.same_location => sel.pickup.clone(),
            Some(sel) => format!("{} → {}", sel.pickup, sel.dropoff),
        }
    }

    #[must_use]
    pub fn dates_label(&self) -> String {
        self.dates
            .as_ref()
            .map_or_else(|| "Select dates".to_string(), DateRangeSelection::summary)
    }

    #[must_use]
    pub fn driver_age_label(&self) -> &'static str {
        self.driver_age.map_or("Select age", DriverAge::label)
    }

    /// Builds the vehicles-screen parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::Booking`] when the location or dates are missing.
    pub fn search_params(&self) -> Result<VehicleSearchParams> {
        let location = self
            .location
            .as_ref()
            .ok_or_else(|| RentalError::Booking("pickup location is required".to_string()))?;
        let dates = self
            .dates
            .as_ref()
            .ok_or_else(|| RentalError::Booking("pickup and dropoff dates are required".to_string()))?;
        Ok(VehicleSearchParams::new(location, dates))
    }
}

/// Search parameters passed to the vehicles screen.
///
/// Dates are ISO `YYYY-MM-DD` strings and times are slot labels such as
/// `"10:00 AM"`, so the value can be logged or serialized as-is.
///
/// ```
/// use rentalizer::app::VehicleSearchParams;
///
/// let params = VehicleSearchParams {
///     location: "San Francisco, CA".to_string(),
///     pickup_date: "2026-03-10".to_string(),
///     dropoff_date: "2026-03-12".to_string(),
///     pickup_time: "10:00 AM".to_string(),
///     dropoff_time: "2:00 PM".to_string(),
/// };
/// let period = params.to_period().unwrap();
/// assert_eq!(period.days, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSearchParams {
    pub location: String,
    pub pickup_date: String,
    pub dropoff_date: String,
    pub pickup_time: String,
    pub dropoff_time: String,
}

impl VehicleSearchParams {
    #[must_use]
    pub fn new(location: &LocationSelection, dates: &DateRangeSelection) -> Self {
        Self {
            location: location.pickup.clone(),
            pickup_date: dates.pickup_date.format(ISO_DATE).to_string(),
            dropoff_date: dates.dropoff_date.format(ISO_DATE).to_string(),
            pickup_time: dates.pickup_time.label().to_string(),
            dropoff_time: dates.dropoff_time.label().to_string(),
        }
    }

    /// Parses the string fields back into a typed rental period.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::InvalidDate`] for a malformed date or time label.
    /// A dropoff before pickup is not an error; it bills one day.
    pub fn to_period(&self) -> Result<RentalPeriod> {
        let pickup = parse_moment(&self.pickup_date, &self.pickup_time)?;
        let dropoff = parse_moment(&self.dropoff_date, &self.dropoff_time)?;
        Ok(RentalPeriod {
            location: self.location.clone(),
            pickup,
            dropoff,
            days: rental_days(pickup.date(), dropoff.date()),
        })
    }
}

fn parse_moment(date: &str, time: &str) -> Result<NaiveDateTime> {
    let day = NaiveDate::parse_from_str(date, ISO_DATE)
        .map_err(|e| RentalError::InvalidDate(format!("{date}: {e}")))?;
    let slot = TimeSlot::parse_label(time)
        .ok_or_else(|| RentalError::InvalidDate(format!("unknown time slot {time:?}")))?;
    let clock = NaiveTime::from_hms_opt(slot.hour(), 0, 0)
        .ok_or_else(|| RentalError::InvalidDate(format!("invalid hour for {time:?}")))?;
    Ok(day.and_time(clock))
}

/// A typed rental window reconstructed from [`VehicleSearchParams`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalPeriod {
    pub location: String,
    pub pickup: NaiveDateTime,
    pub dropoff: NaiveDateTime,
    /// Billed days, at least 1.
    pub days: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> (LocationSelection, DateRangeSelection) {
        let location = LocationSelection {
            pickup: "Oakland, CA".to_string(),
            dropoff: "Oakland, CA".to_string(),
            same_location: true,
        };
        let dates = DateRangeSelection {
            pickup_date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            dropoff_date: NaiveDate::from_ymd_opt(2026, 3, 12).unwrap(),
            pickup_time: TimeSlot::default(),
            dropoff_time: TimeSlot::parse_label("2:00 PM").unwrap(),
        };
        (location, dates)
    }

    #[test]
    fn search_requires_location_and_dates() {
        let (location, dates) = selection();
        let mut form = BookingForm::default();
        assert!(matches!(form.search_params(), Err(RentalError::Booking(_))));

        form.location = Some(location);
        assert!(!form.can_search());
        assert!(matches!(form.search_params(), Err(RentalError::Booking(_))));

        form.dates = Some(dates);
        let params = form.search_params().unwrap();
        assert_eq!(params.pickup_date, "2026-03-10");
        assert_eq!(params.dropoff_time, "2:00 PM");
        assert!(form.driver_age.is_none());
    }

    #[test]
    fn params_round_trip_to_period() {
        let (location, dates) = selection();
        let period = VehicleSearchParams::new(&location, &dates).to_period().unwrap();
        assert_eq!(period.location, "Oakland, CA");
        assert_eq!(period.pickup, dates.pickup_at());
        assert_eq!(period.dropoff, dates.dropoff_at());
        assert_eq!(period.days, dates.rental_days());
    }

    #[test]
    fn malformed_params_are_invalid_dates() {
        let (location, dates) = selection();
        let mut params = VehicleSearchParams::new(&location, &dates);
        params.pickup_date = "2026-13-40".to_string();
        assert!(matches!(params.to_period(), Err(RentalError::InvalidDate(_))));

        let mut params = VehicleSearchParams::new(&location, &dates);
        params.dropoff_time = "midnight".to_string();
        assert!(matches!(params.to_period(), Err(RentalError::InvalidDate(_))));

    }

    #[test]
    fn reversed_dates_bill_one_day() {
        let (location, dates) = selection();
        let mut params = VehicleSearchParams::new(&location, &dates);
        params.dropoff_date = "2026-03-01".to_string();
        assert_eq!(params.to_period().unwrap().days, 1);
    }

    #[test]
    fn days_ignore_time_slots() {
        let (location, dates) = selection();
        let mut params = VehicleSearchParams::new(&location, &dates);
        params.pickup_date = "2026-03-10".to_string();
        params.pickup_time = "10:00 AM".to_string();
        params.dropoff_date = "2026-03-12".to_string();
        params.dropoff_time = "2:00 PM".to_string();
        assert_eq!(params.to_period().unwrap().days, 2);

        params.pickup_time = "9:00 AM".to_string();
        params.dropoff_date = "2026-03-11".to_string();
        params.dropoff_time = "8:00 PM".to_string();
        assert_eq!(params.to_period().unwrap().days, 1);
    }

    #[test]
    fn params_serialize_with_camel_case_keys() {
        let (location, dates) = selection();
        let json = serde_json::to_value(VehicleSearchParams::new(&location, &dates)).unwrap();
        assert_eq!(json["pickupDate"], "2026-03-10");
        assert_eq!(json["location"], "Oakland, CA");
    }

    #[test]
    fn driver_age_cycles_from_either_end() {
        assert_eq!(DriverAge::cycle(None, true), DriverAge::Teen);
        assert_eq!(DriverAge::cycle(None, false), DriverAge::Standard);
        assert_eq!(DriverAge::cycle(Some(DriverAge::Standard), true), DriverAge::Teen);
        assert_eq!(DriverAge::cycle(Some(DriverAge::Young), false), DriverAge::Teen);

        let mut form = BookingForm::default();
        form.cycle_driver_age(true);
        assert_eq!(form.driver_age_label(), "18-19");
    }

    #[test]
    fn cursor_wraps() {
        let mut form = BookingForm::default();
        form.move_up();
        assert_eq!(form.focused_field(), BookingField::Search);
        form.move_down();
        assert_eq!(form.focused_field(), BookingField::Location);
    }
}
