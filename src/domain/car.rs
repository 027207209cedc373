//! Car, vendor and listing domain models.
//!
//! A [`Car`] is a model offered for rent, a [`Vendor`] is a rental agency, and a
//! [`CarListing`] is one vendor's price/availability offer for one car. The catalog
//! joins them into [`CarWithListings`] records, whose listings are kept sorted by
//! ascending daily price so that the first listing is always the cheapest offer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rating shown for a car that has no listing to take a vendor rating from.
pub const FALLBACK_RATING: &str = "5.0";

/// Trip count shown for a car that has no listing to take a vendor trip count from.
pub const FALLBACK_TRIP_COUNT: u32 = 0;

/// Gearbox type of a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Transmission {
    Automatic,
    Manual,
}

impl Transmission {
    /// All transmission options, in the order the filters modal lists them.
    pub const ALL: [Self; 2] = [Self::Automatic, Self::Manual];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Automatic => "Automatic",
            Self::Manual => "Manual",
        }
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Transmission {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "Automatic" => Ok(Self::Automatic),
            "Manual" => Ok(Self::Manual),
            other => Err(format!("unknown transmission: {other}")),
        }
    }
}

/// Technical specification of a car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarSpecs {
    /// Number of seats, at least one.
    pub seats: u8,
    pub transmission: Transmission,
    pub fuel_type: String,
    /// Formatted fuel economy (e.g. "32 MPG"), absent for some models.
    #[serde(default)]
    pub mpg: Option<String>,
}

/// A car model offered for rent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    /// Image reference (URL in the built-in catalog).
    pub image: String,
    /// Marketing category (Economy, Luxury, Electric, ...).
    pub category: String,
    /// Body type (Sedan, SUV, Sports, ...).
    #[serde(rename = "type")]
    pub car_type: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub specs: CarSpecs,
}

impl Car {
    /// Returns `"make model"`, the text shown as a row title and matched by search.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

/// A rental agency offering cars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    /// Average rating in `[0, 5]`.
    pub rating: f32,
    pub review_count: u32,
    pub trip_count: u32,
    /// Formatted typical response time (e.g. "~30 min").
    pub response_time: String,
    pub location: String,
}

/// One vendor's offer for one car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarListing {
    pub id: String,
    pub car_id: String,
    pub vendor_id: String,
    /// Daily price in whole dollars, always positive.
    pub price_per_day: u32,
    pub available: bool,
    /// Formatted distance to the pickup point (e.g. "2.3 mi").
    pub distance: String,
}

impl CarListing {
    /// Parses the leading number of the formatted distance.
    ///
    /// `"2.3 mi"` yields `2.3`. A distance without a leading number yields NaN, so
    /// it never compares as closer than any other listing.
    #[must_use]
    pub fn distance_miles(&self) -> f64 {
        let trimmed = self.distance.trim_start();
        let end = trimmed
            .char_indices()
            .find(|(i, c)| !(c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+'))))
            .map_or(trimmed.len(), |(i, _)| i);

        // Longest prefix that still parses, mirroring lenient float parsing.
        (1..=end)
            .rev()
            .find_map(|len| trimmed[..len].parse::<f64>().ok())
            .unwrap_or(f64::NAN)
    }
}

/// A listing enriched with the vendor that offers it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorListing {
    #[serde(flatten)]
    pub listing: CarListing,
    pub vendor: Vendor,
}

/// A car joined with all of its listings.
///
/// Listings are sorted by ascending `price_per_day`; `listings[0]` is the cheapest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarWithListings {
    #[serde(flatten)]
    pub car: Car,
    pub listings: Vec<VendorListing>,
}

/// Display values derived from a car's closest listing.
///
/// This is the single place where the fallback policy for cars without listings
/// lives: rating [`FALLBACK_RATING`], trips [`FALLBACK_TRIP_COUNT`], no vendor name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingHighlights {
    pub rating_label: String,
    pub trip_count: u32,
    pub vendor_name: Option<String>,
    pub distance: Option<String>,
}

impl CarWithListings {
    /// Daily price of the first (cheapest) listing, or 0 when there are none.
    #[must_use]
    pub fn min_price(&self) -> u32 {
        self.listings.first().map_or(0, |l| l.listing.price_per_day)
    }

    /// Minimum daily price across all listings, or 0 when there are none.
    ///
    /// Equal to [`min_price`](Self::min_price) whenever the sort invariant holds;
    /// computed independently for records built outside the catalog join.
    #[must_use]
    pub fn lowest_price(&self) -> u32 {
        self.listings
            .iter()
            .map(|l| l.listing.price_per_day)
            .min()
            .unwrap_or(0)
    }

    /// Listing with the smallest parsed distance.
    ///
    /// Ties keep the first listing encountered. Returns `None` without listings.
    #[must_use]
    pub fn closest_listing(&self) -> Option<&VendorListing> {
        let mut iter = self.listings.iter();
        let first = iter.next()?;
        Some(iter.fold(first, |closest, current| {
            if current.listing.distance_miles() < closest.listing.distance_miles() {
                current
            } else {
                closest
            }
        }))
    }

    #[must_use]
    pub fn highlights(&self) -> ListingHighlights {
        self.closest_listing().map_or_else(
            || ListingHighlights {
                rating_label: FALLBACK_RATING.to_string(),
                trip_count: FALLBACK_TRIP_COUNT,
                vendor_name: None,
                distance: None,
            },
            |closest| ListingHighlights {
                rating_label: format!("{:.1}", closest.vendor.rating),
                trip_count: closest.vendor.trip_count,
                vendor_name: Some(closest.vendor.name.clone()),
                distance: Some(closest.listing.distance.clone()),
            },
        )
    }

    /// Number of vendors offering this car, formatted for list rows.
    #[must_use]
    pub fn vendor_count_label(&self) -> String {
        match self.listings.len() {
            1 => "1 vendor".to_string(),
            n => format!("{n} vendors"),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn vendor(id: &str, rating: f32, trips: u32) -> Vendor {
        Vendor {
            id: id.to_string(),
            name: format!("Vendor {id}"),
            rating,
            review_count: 10,
            trip_count: trips,
            response_time: "~1 hour".to_string(),
            location: "San Francisco, CA".to_string(),
        }
    }

    pub fn car(id: &str, category: &str, seats: u8, transmission: Transmission) -> Car {
        Car {
            id: id.to_string(),
            make: "Make".to_string(),
            model: format!("Model {id}"),
            year: 2024,
            image: String::new(),
            category: category.to_string(),
            car_type: "Sedan".to_string(),
            features: vec![],
            specs: CarSpecs {
                seats,
                transmission,
                fuel_type: "Gas".to_string(),
                mpg: None,
            },
        }
    }

    pub fn offer(car_id: &str, vendor: &Vendor, price: u32, distance: &str) -> VendorListing {
        VendorListing {
            listing: CarListing {
                id: format!("l-{car_id}-{}-{price}", vendor.id),
                car_id: car_id.to_string(),
                vendor_id: vendor.id.clone(),
                price_per_day: price,
                available: true,
                distance: distance.to_string(),
            },
            vendor: vendor.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn distance_parses_leading_number() {
        let v = vendor("v1", 4.9, 120);
        assert!((offer("1", &v, 10, "2.3 mi").listing.distance_miles() - 2.3).abs() < f64::EPSILON);
        assert!((offer("1", &v, 10, "12 mi").listing.distance_miles() - 12.0).abs() < f64::EPSILON);
        assert!(offer("1", &v, 10, "nearby").listing.distance_miles().is_nan());
    }

    #[test]
    fn min_and_lowest_price_default_to_zero() {
        let empty = CarWithListings {
            car: car("1", "Economy", 5, Transmission::Automatic),
            listings: vec![],
        };
        assert_eq!(empty.min_price(), 0);
        assert_eq!(empty.lowest_price(), 0);
        assert!(empty.closest_listing().is_none());
    }

    #[test]
    fn closest_listing_keeps_first_on_ties() {
        let a = vendor("a", 4.5, 1);
        let b = vendor("b", 4.8, 2);
        let c = vendor("c", 4.9, 3);
        let record = CarWithListings {
            car: car("1", "Economy", 5, Transmission::Automatic),
            listings: vec![
                offer("1", &a, 50, "3.1 mi"),
                offer("1", &b, 60, "2.3 mi"),
                offer("1", &c, 70, "2.3 mi"),
            ],
        };
        assert_eq!(record.closest_listing().map(|l| l.vendor.id.as_str()), Some("b"));
    }

    #[test]
    fn highlights_use_fallbacks_without_listings() {
        let empty = CarWithListings {
            car: car("1", "Economy", 5, Transmission::Automatic),
            listings: vec![],
        };
        let h = empty.highlights();
        assert_eq!(h.rating_label, "5.0");
        assert_eq!(h.trip_count, 0);
        assert!(h.vendor_name.is_none());
    }

    #[test]
    fn highlights_come_from_closest_vendor() {
        let far = vendor("far", 4.2, 10);
        let near = vendor("near", 4.9, 120);
        let record = CarWithListings {
            car: car("1", "Economy", 5, Transmission::Automatic),
            listings: vec![offer("1", &far, 40, "8.2 mi"), offer("1", &near, 45, "2.3 mi")],
        };
        let h = record.highlights();
        assert_eq!(h.rating_label, "4.9");
        assert_eq!(h.trip_count, 120);
        assert_eq!(h.vendor_name.as_deref(), Some("Vendor near"));
    }

    #[test]
    fn transmission_round_trips_through_labels() {
        for t in Transmission::ALL {
            assert_eq!(t.label().parse::<Transmission>(), Ok(t));
        }
        assert!("CVT".parse::<Transmission>().is_err());
    }
}
