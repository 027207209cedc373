//! Modal pickers used by the booking form.
//!
//! - [`date_range`]: the pickup/dropoff date and time state machine
//! - [`calendar`]: month grid derived from a picker for rendering
//! - [`location`]: pickup/dropoff location form

pub mod calendar;
pub mod date_range;
pub mod location;

pub use calendar::{CalendarDay, CalendarMonth, DayState, WEEKDAY_HEADERS};
pub use date_range::{short_date, DateRangePicker, DateRangeSelection, PickerFocus, RangeState};
pub use location::{LocationField, LocationPicker, LocationSelection};
