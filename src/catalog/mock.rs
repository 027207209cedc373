//! Static in-memory catalog.
//!
//! The built-in tables ship inside the plugin binary (`data/catalog.toml`). A
//! custom catalog with the same layout can be loaded from disk through the
//! `catalog_file` configuration key.
//!
//! # File Format
//!
//! ```toml
//! [[cars]]
//! id = "1"
//! make = "Tesla"
//! model = "Model 3"
//! year = 2023
//! image = "https://..."
//! category = "Electric"
//! type = "Sedan"
//! features = ["Autopilot"]
//! specs = { seats = 5, transmission = "Automatic", fuel_type = "Electric", mpg = "130 MPGe" }
//!
//! [[vendors]]
//! id = "v1"
//! name = "Enterprise Rent-A-Car"
//! rating = 4.9
//! review_count = 87
//! trip_count = 120
//! response_time = "~1 hour"
//! location = "San Francisco, CA"
//!
//! [[listings]]
//! id = "l1"
//! car_id = "1"
//! vendor_id = "v1"
//! price_per_day = 89
//! available = true
//! distance = "2.3 mi"
//!
//! [[collections]]
//! title = "Best Priced"
//! car_ids = ["1"]
//! ```

use super::join::join_listings;
use super::source::{CatalogSource, FeaturedCollection};
use crate::domain::{Car, CarListing, CarWithListings, RentalError, Result, Vendor};
use serde::Deserialize;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.toml");

/// Collection declaration as it appears in the catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CollectionSpec {
    pub title: String,
    pub car_ids: Vec<String>,
}

/// The raw catalog tables before joining.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogTables {
    pub cars: Vec<Car>,
    #[serde(default)]
    pub vendors: Vec<Vendor>,
    #[serde(default)]
    pub listings: Vec<CarListing>,
    #[serde(default)]
    pub collections: Vec<CollectionSpec>,
}

/// Catalog backed by static tables held in memory.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    tables: CatalogTables,
}

impl MockCatalog {
    /// Loads the catalog embedded in the plugin.
    ///
    /// # Panics
    ///
    /// Panics if the embedded tables fail to parse or to join. They are part of
    /// the binary, so this only happens when the shipped data file is broken.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_CATALOG)
            .unwrap_or_else(|e| panic!("Built-in catalog should always load: {e}"))
    }

    /// Parses and validates catalog tables from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::Catalog`] when the text is not a valid catalog or a
    /// listing references an unknown vendor.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let tables: CatalogTables = toml::from_str(content)
            .map_err(|e| RentalError::Catalog(format!("failed to parse catalog: {e}")))?;

        join_listings(&tables.cars, &tables.vendors, &tables.listings)?;

        tracing::debug!(
            cars = tables.cars.len(),
            vendors = tables.vendors.len(),
            listings = tables.listings.len(),
            "catalog tables loaded"
        );

        Ok(Self { tables })
    }

    /// Loads a custom catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::Io`] when the file cannot be read, or
    /// [`RentalError::Catalog`] when its content is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading catalog file");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    #[must_use]
    pub const fn tables(&self) -> &CatalogTables {
        &self.tables
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CatalogSource for MockCatalog {
    fn get_cars_with_listings(&self) -> Result<Vec<CarWithListings>> {
        join_listings(&self.tables.cars, &self.tables.vendors, &self.tables.listings)
    }

    fn featured_collections(&self) -> Result<Vec<FeaturedCollection>> {
        let joined = self.get_cars_with_listings()?;

        Ok(self
            .tables
            .collections
            .iter()
            .map(|spec| {
                let cars = spec
                    .car_ids
                    .iter()
                    .filter_map(|id| {
                        let found = joined.iter().find(|c| &c.car.id == id).cloned();
                        if found.is_none() {
                            tracing::debug!(collection = %spec.title, car_id = %id, "skipping unknown car in collection");
                        }
                        found
                    })
                    .collect();
                FeaturedCollection {
                    title: spec.title.clone(),
                    cars,
                }
            })
            .collect())
    }
}
