//! The filter predicate and the browse-screen category filter.

use super::state::FilterState;
use crate::domain::CarWithListings;

/// Category chip that disables the category filter.
pub const ALL_CATEGORIES: &str = "All";

/// Category chips offered on the browse screen, in display order.
pub const BROWSE_CATEGORIES: [&str; 7] = [
    ALL_CATEGORIES,
    "Economy",
    "Luxury",
    "SUV",
    "Electric",
    "Adventure",
    "Sports",
];

/// Returns `true` when `car` satisfies every active criterion in `filters`.
///
/// The criteria are combined with AND:
///
/// 1. the car's lowest daily price lies within `price_range` (inclusive)
/// 2. if `transmission` is non-empty, the car's transmission is a member
/// 3. unless `passengers` is `Any`, the car seats at least that many
/// 4. if `vehicle_types` is non-empty, the car's category is a member
///
/// Pure and total: every car/filter pair yields a boolean.
///
/// # Examples
///
/// ```
/// use rentalizer::catalog::{CatalogSource, MockCatalog};
/// use rentalizer::filter::{matches, FilterState, PriceRange};
///
/// let cars = MockCatalog::builtin().get_cars_with_listings()?;
/// let tesla = &cars[0];
///
/// let mut filters = FilterState::default();
/// assert!(matches(tesla, &filters));
///
/// filters.price_range = PriceRange::new(0, 80).unwrap();
/// assert!(!matches(tesla, &filters));
/// # Ok::<(), rentalizer::RentalError>(())
/// ```
#[must_use]
pub fn matches(car: &CarWithListings, filters: &FilterState) -> bool {
    if !filters.price_range.contains(car.min_price()) {
        return false;
    }

    if !filters.transmission.is_empty()
        && !filters.transmission.contains(&car.car.specs.transmission)
    {
        return false;
    }

    if let Some(min_seats) = filters.passengers.min_seats() {
        if car.car.specs.seats < min_seats {
            return false;
        }
    }

    filters.vehicle_types.is_empty() || filters.vehicle_types.contains(&car.car.category)
}

/// Keeps the cars that satisfy `filters`, preserving input order.
#[must_use]
pub fn filter_catalog(cars: &[CarWithListings], filters: &FilterState) -> Vec<CarWithListings> {
    let _span = tracing::debug_span!(
        "filter_catalog",
        total = cars.len(),
        active_criteria = filters.active_count()
    )
    .entered();

    let kept: Vec<CarWithListings> = cars.iter().filter(|c| matches(c, filters)).cloned().collect();

    tracing::debug!(kept = kept.len(), "filters applied");
    kept
}

/// Browse-screen category test: `"All"`, or an exact match on category or body type.
#[must_use]
pub fn matches_category(car: &CarWithListings, selected: &str) -> bool {
    selected == ALL_CATEGORIES || car.car.category == selected || car.car.car_type == selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::car::fixtures::{car, offer, vendor};
    use crate::domain::Transmission;
    use crate::filter::state::{Passengers, PriceRange};

    fn record(id: &str, category: &str, seats: u8, transmission: Transmission, prices: &[u32]) -> CarWithListings {
        let v = vendor("v1", 4.5, 1);
        CarWithListings {
            car: car(id, category, seats, transmission),
            listings: prices.iter().map(|p| offer(id, &v, *p, "1.0 mi")).collect(),
        }
    }

    #[test]
    fn default_filters_keep_cars_within_default_range() {
        let cheap = record("1", "Economy", 5, Transmission::Automatic, &[40]);
        let pricey = record("2", "Luxury", 2, Transmission::Manual, &[650]);
        let filters = FilterState::default();
        assert!(matches(&cheap, &filters));
        assert!(!matches(&pricey, &filters));
    }

    #[test]
    fn car_without_listings_counts_as_zero_price() {
        let empty = record("1", "Economy", 5, Transmission::Automatic, &[]);
        let mut filters = FilterState::default();
        assert!(matches(&empty, &filters));

        filters.price_range = PriceRange::new(10, 500).unwrap();
        assert!(!matches(&empty, &filters));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let car = record("1", "Economy", 5, Transmission::Automatic, &[100]);
        let mut filters = FilterState::default();
        filters.price_range = PriceRange::new(100, 100).unwrap();
        assert!(matches(&car, &filters));
    }

    #[test]
    fn transmission_set_is_membership() {
        let manual = record("1", "Adventure", 4, Transmission::Manual, &[98]);
        let mut filters = FilterState::default();
        filters.transmission.insert(Transmission::Automatic);
        assert!(!matches(&manual, &filters));
        filters.transmission.insert(Transmission::Manual);
        assert!(matches(&manual, &filters));
    }

    #[test]
    fn passengers_require_minimum_seats() {
        let coupe = record("1", "Luxury", 2, Transmission::Manual, &[299]);
        let suv = record("2", "Luxury", 7, Transmission::Automatic, &[139]);
        let mut filters = FilterState::default();
        filters.passengers = Passengers::SixPlus;
        assert!(!matches(&coupe, &filters));
        assert!(matches(&suv, &filters));
        filters.passengers = Passengers::TwoPlus;
        assert!(matches(&coupe, &filters));
    }

    #[test]
    fn vehicle_types_match_category() {
        let economy = record("1", "Economy", 5, Transmission::Automatic, &[52]);
        let mut filters = FilterState::default();
        filters.vehicle_types.insert("Budget".to_string());
        assert!(!matches(&economy, &filters));
        filters.vehicle_types.insert("Economy".to_string());
        assert!(matches(&economy, &filters));
    }

    #[test]
    fn filter_catalog_preserves_order() {
        let cars = vec![
            record("a", "Economy", 5, Transmission::Automatic, &[60]),
            record("b", "Luxury", 5, Transmission::Manual, &[700]),
            record("c", "Economy", 5, Transmission::Automatic, &[30]),
        ];
        let kept = filter_catalog(&cars, &FilterState::default());
        let ids: Vec<_> = kept.iter().map(|c| c.car.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn category_matches_category_or_type() {
        let mut suv = record("1", "Luxury", 7, Transmission::Automatic, &[139]);
        suv.car.car_type = "SUV".to_string();
        assert!(matches_category(&suv, "All"));
        assert!(matches_category(&suv, "Luxury"));
        assert!(matches_category(&suv, "SUV"));
        assert!(!matches_category(&suv, "Electric"));
    }
}
