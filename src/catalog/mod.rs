//! Mock data store for cars, vendors and listings.
//!
//! # Modules
//!
//! - `source`: the [`CatalogSource`] trait and [`FeaturedCollection`]
//! - `mock`: [`MockCatalog`], static tables parsed from TOML
//! - `join`: [`join_listings`], the car/vendor/listing join

pub mod join;
pub mod mock;
pub mod source;

pub use join::join_listings;
pub use mock::{CatalogTables, CollectionSpec, MockCatalog};
pub use source::{CatalogSource, FeaturedCollection};
