//! Catalog source abstraction.
//!
//! The rest of the plugin only ever reads the catalog through [`CatalogSource`],
//! so a different backing store can replace the built-in tables without touching
//! the filter engine or the UI.

use crate::domain::{CarWithListings, Result};
use serde::Serialize;

/// A named group of cars shown on the home screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedCollection {
    pub title: String,
    pub cars: Vec<CarWithListings>,
}

/// Read-only access to the rental catalog.
///
/// # Implementations
///
/// - [`MockCatalog`](super::MockCatalog): static TOML tables, built in or loaded from a file
pub trait CatalogSource {
    /// Returns every car joined with its vendor listings.
    ///
    /// Must be deterministic: repeated calls return equal sequences.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying tables are inconsistent.
    fn get_cars_with_listings(&self) -> Result<Vec<CarWithListings>>;

    /// Returns the featured collections, each resolved against the joined catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying tables are inconsistent.
    fn featured_collections(&self) -> Result<Vec<FeaturedCollection>>;
}
