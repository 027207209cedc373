//! Joining the raw catalog tables into [`CarWithListings`] records.

use crate::domain::{Car, CarListing, CarWithListings, RentalError, Result, Vendor, VendorListing};
use std::collections::HashMap;

/// Joins cars, vendors and listings into one record per car.
///
/// Records follow the order of `cars`. Each record carries every listing whose
/// `car_id` matches, resolved to its vendor and sorted by ascending
/// `price_per_day`. The sort is stable, so listings with equal prices keep their
/// table order. A car without listings yields a record with an empty list.
///
/// # Errors
///
/// Returns [`RentalError::Catalog`] when a listing for a known car references a
/// vendor id that is not in `vendors`.
///
/// # Examples
///
/// ```
/// use rentalizer::catalog::{join_listings, MockCatalog};
///
/// let catalog = MockCatalog::builtin();
/// let tables = catalog.tables();
/// let joined = join_listings(&tables.cars, &tables.vendors, &tables.listings)?;
///
/// let tesla = &joined[0];
/// let prices: Vec<u32> = tesla.listings.iter().map(|l| l.listing.price_per_day).collect();
/// assert_eq!(prices, vec![85, 89, 92]);
/// # Ok::<(), rentalizer::RentalError>(())
/// ```
pub fn join_listings(
    cars: &[Car],
    vendors: &[Vendor],
    listings: &[CarListing],
) -> Result<Vec<CarWithListings>> {
    let _span = tracing::debug_span!(
        "join_listings",
        cars = cars.len(),
        vendors = vendors.len(),
        listings = listings.len()
    )
    .entered();

    let vendors_by_id: HashMap<&str, &Vendor> =
        vendors.iter().map(|v| (v.id.as_str(), v)).collect();

    cars.iter()
        .map(|car| {
            let mut offers = listings
                .iter()
                .filter(|listing| listing.car_id == car.id)
                .map(|listing| {
                    let vendor = vendors_by_id.get(listing.vendor_id.as_str()).ok_or_else(|| {
                        RentalError::Catalog(format!(
                            "listing {} references unknown vendor {}",
                            listing.id, listing.vendor_id
                        ))
                    })?;
                    Ok(VendorListing {
                        listing: listing.clone(),
                        vendor: (*vendor).clone(),
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            offers.sort_by_key(|offer| offer.listing.price_per_day);

            tracing::trace!(car_id = %car.id, listing_count = offers.len(), "joined car");

            Ok(CarWithListings {
                car: car.clone(),
                listings: offers,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::car::fixtures::{car, vendor};
    use crate::domain::Transmission;

    fn listing(id: &str, car_id: &str, vendor_id: &str, price: u32) -> CarListing {
        CarListing {
            id: id.to_string(),
            car_id: car_id.to_string(),
            vendor_id: vendor_id.to_string(),
            price_per_day: price,
            available: true,
            distance: "1.0 mi".to_string(),
        }
    }

    #[test]
    fn records_follow_car_order_and_sort_listings() {
        let cars = vec![
            car("b", "Economy", 5, Transmission::Automatic),
            car("a", "Luxury", 5, Transmission::Manual),
        ];
        let vendors = vec![vendor("v1", 4.5, 1), vendor("v2", 4.6, 2)];
        let listings = vec![
            listing("l1", "a", "v1", 120),
            listing("l2", "b", "v1", 70),
            listing("l3", "b", "v2", 40),
        ];

        let joined = join_listings(&cars, &vendors, &listings).unwrap();
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].car.id, "b");
        assert_eq!(joined[0].listings[0].listing.id, "l3");
        assert_eq!(joined[0].listings[0].vendor.id, "v2");
        assert_eq!(joined[1].listings.len(), 1);
    }

    #[test]
    fn equal_prices_keep_table_order() {
        let cars = vec![car("a", "Economy", 5, Transmission::Automatic)];
        let vendors = vec![vendor("v1", 4.5, 1), vendor("v2", 4.6, 2)];
        let listings = vec![
            listing("first", "a", "v2", 50),
            listing("second", "a", "v1", 50),
        ];

        let joined = join_listings(&cars, &vendors, &listings).unwrap();
        let ids: Vec<_> = joined[0].listings.iter().map(|l| l.listing.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn car_without_listings_is_kept() {
        let cars = vec![car("lonely", "Economy", 5, Transmission::Automatic)];
        let joined = join_listings(&cars, &[], &[]).unwrap();
        assert_eq!(joined.len(), 1);
        assert!(joined[0].listings.is_empty());
        assert_eq!(joined[0].min_price(), 0);
    }

    #[test]
    fn unknown_vendor_is_an_integrity_error() {
        let cars = vec![car("a", "Economy", 5, Transmission::Automatic)];
        let listings = vec![listing("l9", "a", "v9", 50)];

        let err = join_listings(&cars, &[], &listings).unwrap_err();
        assert!(matches!(err, RentalError::Catalog(_)));
        assert!(err.to_string().contains("v9"));
    }
}
