//! Domain layer for the Rentalizer plugin.
//!
//! Core value types shared by the catalog, the filter engine, the pickers and
//! the UI. Nothing here depends on Zellij or on rendering.
//!
//! # Organization
//!
//! - [`car`]: cars, vendors, listings and the joined [`CarWithListings`] record
//! - [`time_slot`]: the twelve hourly pickup/dropoff slots
//! - [`error`]: error type and result alias
//!
//! # Examples
//!
//! ```
//! use rentalizer::domain::{Result, TimeSlot};
//!
//! fn default_pickup() -> Result<TimeSlot> {
//!     Ok(TimeSlot::default())
//! }
//!
//! assert_eq!(default_pickup().unwrap().label(), "10:00 AM");
//! ```

pub mod car;
pub mod error;
pub mod time_slot;

pub use car::{
    Car, CarListing, CarSpecs, CarWithListings, ListingHighlights, Transmission, Vendor,
    VendorListing,
};
pub use error::{RentalError, Result};
pub use time_slot::TimeSlot;
