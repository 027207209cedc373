//! Error types for the Rentalizer plugin.
//!
//! This module defines the centralized error type [`RentalError`] and a type alias
//! [`Result`] used throughout the crate. All variants are derived with `thiserror`.
//!
//! Validation outcomes that the UI simply blocks (a same-day range whose dropoff
//! time is not after the pickup time, a blank pickup location) are not errors:
//! those operations return `None` or `false` and leave the state untouched.

use thiserror::Error;

/// The main error type for Rentalizer operations.
///
/// # Examples
///
/// ```
/// use rentalizer::RentalError;
///
/// let err = RentalError::Catalog("listing l9 references unknown vendor v9".to_string());
/// assert_eq!(err.to_string(), "Catalog error: listing l9 references unknown vendor v9");
/// ```
#[derive(Debug, Error)]
pub enum RentalError {
    /// The catalog tables are inconsistent or could not be parsed.
    ///
    /// Raised when a listing references a vendor that does not exist, or when a
    /// custom catalog file is malformed.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A date crossing a screen boundary could not be reconstructed.
    ///
    /// Dates travel between the booking form and the vehicle list as ISO strings;
    /// this variant carries the offending input.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The booking form was submitted without the fields a search needs.
    #[error("Booking error: {0}")]
    Booking(String),
}

/// A specialized `Result` type for Rentalizer operations.
pub type Result<T> = std::result::Result<T, RentalError>;
