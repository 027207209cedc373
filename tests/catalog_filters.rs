//! Catalog join and filter engine properties over the built-in catalog.

use rentalizer::catalog::{join_listings, CatalogSource, MockCatalog};
use rentalizer::domain::{CarWithListings, Transmission};
use rentalizer::filter::{
    filter_catalog, matches, total_price, CarSearch, FilterState, Passengers, PriceRange,
    SortOrder,
};

fn catalog() -> Vec<CarWithListings> {
    MockCatalog::builtin().get_cars_with_listings().unwrap()
}

fn tesla(cars: &[CarWithListings]) -> &CarWithListings {
    cars.iter().find(|c| c.car.id == "1").unwrap()
}

#[test]
fn every_car_lists_offers_cheapest_first() {
    for car in catalog() {
        let prices: Vec<u32> = car.listings.iter().map(|l| l.listing.price_per_day).collect();
        let mut sorted = prices.clone();
        sorted.sort_unstable();
        assert_eq!(prices, sorted, "{} listings out of order", car.car.display_name());
        assert!(car.listings.iter().all(|l| l.listing.car_id == car.car.id));
    }
}

#[test]
fn join_is_repeatable() {
    let source = MockCatalog::builtin();
    let tables = source.tables();
    let first = join_listings(&tables.cars, &tables.vendors, &tables.listings).unwrap();
    let second = source.get_cars_with_listings().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), tables.cars.len());
}

#[test]
fn default_filters_keep_everything() {
    let cars = catalog();
    let kept = filter_catalog(&cars, &FilterState::default());
    assert_eq!(kept, cars);
}

#[test]
fn price_filter_tracks_min_price() {
    let cars = catalog();
    for (min, max) in [(0, 80), (80, 100), (100, 200), (150, 500), (90, 90)] {
        let filters = FilterState {
            price_range: PriceRange::new(min, max).unwrap(),
            ..FilterState::default()
        };
        for car in &cars {
            let expected = (min..=max).contains(&car.min_price());
            assert_eq!(matches(car, &filters), expected, "{} in [{min}, {max}]", car.car.id);
        }
    }
}

#[test]
fn tesla_price_window() {
    let cars = catalog();
    let tesla = tesla(&cars);
    let prices: Vec<u32> = tesla.listings.iter().map(|l| l.listing.price_per_day).collect();
    assert_eq!(prices, vec![85, 89, 92]);
    assert_eq!(tesla.min_price(), 85);

    let narrow = FilterState {
        price_range: PriceRange::new(0, 80).unwrap(),
        ..FilterState::default()
    };
    assert!(!matches(tesla, &narrow));

    let wide = FilterState {
        price_range: PriceRange::new(80, 100).unwrap(),
        ..FilterState::default()
    };
    assert!(matches(tesla, &wide));
}

#[test]
fn criteria_combine_with_and() {
    let cars = catalog();
    let filters = FilterState {
        transmission: [Transmission::Automatic].into_iter().collect(),
        passengers: Passengers::SixPlus,
        ..FilterState::default()
    };

    let kept = filter_catalog(&cars, &filters);
    assert!(!kept.is_empty());
    for car in &kept {
        assert_eq!(car.car.specs.transmission, Transmission::Automatic);
        assert!(car.car.specs.seats >= 6);
    }
    let manual_count = cars
        .iter()
        .filter(|c| c.car.specs.transmission == Transmission::Manual)
        .count();
    assert_eq!(manual_count, 2);
}

#[test]
fn filtering_preserves_catalog_order() {
    let cars = catalog();
    let filters = FilterState {
        passengers: Passengers::FourPlus,
        ..FilterState::default()
    };
    let positions: Vec<usize> = filter_catalog(&cars, &filters)
        .iter()
        .map(|kept| cars.iter().position(|c| c.car.id == kept.car.id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn price_sort_orders_by_min_price() {
    let mut cars = catalog();
    SortOrder::PriceLowToHigh.apply(&mut cars);
    assert!(cars.windows(2).all(|w| w[0].min_price() <= w[1].min_price()));

    SortOrder::PriceHighToLow.apply(&mut cars);
    assert!(cars.windows(2).all(|w| w[0].min_price() >= w[1].min_price()));
}

#[test]
fn search_narrows_by_make_and_model() {
    let cars = catalog();
    let hits = CarSearch::new("tesla").filter(&cars);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].car.model, "Model 3");

    assert_eq!(CarSearch::new("").filter(&cars).len(), cars.len());
}

#[test]
fn totals_scale_with_days() {
    let cars = catalog();
    assert_eq!(total_price(tesla(&cars).min_price(), 3), 255);
}
