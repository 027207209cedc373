//! Filter predicate engine.
//!
//! Decides which cars are shown for a set of user-chosen criteria, and derives
//! the per-rental values (billed days, totals) the vehicle list displays.
//!
//! # Modules
//!
//! - [`state`]: [`FilterState`] and its parts ([`PriceRange`], [`Passengers`])
//! - [`predicate`]: [`matches`], [`filter_catalog`], browse categories
//! - [`search`]: fuzzy name search with highlight ranges
//! - [`sort`]: vehicle list [`SortOrder`]
//! - [`draft`]: [`FiltersDraft`], the editable copy behind the filters modal
//! - [`pricing`]: [`rental_days`], [`total_price`], [`format_days`]

pub mod draft;
pub mod predicate;
pub mod pricing;
pub mod search;
pub mod sort;
pub mod state;

pub use draft::{DraftRow, FiltersDraft, VEHICLE_TYPE_OPTIONS};
pub use predicate::{filter_catalog, matches, matches_category, ALL_CATEGORIES, BROWSE_CATEGORIES};
pub use pricing::{format_days, rental_days, total_price};
pub use search::CarSearch;
pub use sort::SortOrder;
pub use state::{FilterState, Passengers, PriceRange, PRICE_CEILING, PRICE_FLOOR};
