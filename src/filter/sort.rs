//! Sort orders for the vehicle list.

use crate::domain::CarWithListings;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How the vehicle list is ordered. All orders are stable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Recommended,
    PriceLowToHigh,
    PriceHighToLow,
    /// Ascending distance of each car's closest listing; cars without a
    /// parseable distance go last.
    Nearest,
}

impl SortOrder {
    pub const ALL: [Self; 4] = [
        Self::Recommended,
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
        Self::Nearest,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Recommended => "Recommended",
            Self::PriceLowToHigh => "Price: low to high",
            Self::PriceHighToLow => "Price: high to low",
            Self::Nearest => "Nearest",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Sorts `cars` in place.
    pub fn apply(self, cars: &mut [CarWithListings]) {
        match self {
            Self::Recommended => {}
            Self::PriceLowToHigh => cars.sort_by_key(CarWithListings::min_price),
            Self::PriceHighToLow => cars.sort_by(|a, b| b.min_price().cmp(&a.min_price())),
            Self::Nearest => cars.sort_by(|a, b| compare_distance(nearest_miles(a), nearest_miles(b))),
        }
    }
}

fn nearest_miles(car: &CarWithListings) -> Option<f64> {
    car.closest_listing()
        .map(|l| l.listing.distance_miles())
        .filter(|d| !d.is_nan())
}

fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
