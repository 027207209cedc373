//! Filter criteria applied to the vehicle list.

use crate::domain::Transmission;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Lowest bound of the price slider, in dollars per day.
pub const PRICE_FLOOR: u32 = 0;

/// Highest bound of the price slider, in dollars per day.
pub const PRICE_CEILING: u32 = 500;

/// Inclusive daily price bounds with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    /// Builds a range, or `None` when `min > max`.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Option<Self> {
        if min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn min(self) -> u32 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> u32 {
        self.max
    }

    #[must_use]
    pub const fn contains(self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: PRICE_FLOOR,
            max: PRICE_CEILING,
        }
    }
}

impl TryFrom<(u32, u32)> for PriceRange {
    type Error = String;

    fn try_from((min, max): (u32, u32)) -> std::result::Result<Self, Self::Error> {
        Self::new(min, max).ok_or_else(|| format!("price range min {min} exceeds max {max}"))
    }
}

impl From<PriceRange> for (u32, u32) {
    fn from(range: PriceRange) -> Self {
        (range.min, range.max)
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${} - ${}", self.min, self.max)
    }
}

/// Minimum passenger capacity option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Passengers {
    #[default]
    Any,
    TwoPlus,
    FourPlus,
    SixPlus,
}

impl Passengers {
    pub const ALL: [Self; 4] = [Self::Any, Self::TwoPlus, Self::FourPlus, Self::SixPlus];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::TwoPlus => "2+",
            Self::FourPlus => "4+",
            Self::SixPlus => "6+",
        }
    }

    /// Minimum seat count, read from the numeric prefix of the label.
    ///
    /// `None` for [`Passengers::Any`], which places no constraint.
    #[must_use]
    pub fn min_seats(self) -> Option<u8> {
        let label = self.label();
        let digits: String = label.chars().take_while(char::is_ascii_digit).collect();
        digits.parse().ok()
    }

    /// The option after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The option before this one, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Passengers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The active filter criteria.
///
/// Empty sets mean "no constraint" for their criterion. The default keeps every
/// car whose lowest daily price lies in `[0, 500]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub price_range: PriceRange,
    pub transmission: BTreeSet<Transmission>,
    pub passengers: Passengers,
    pub vehicle_types: BTreeSet<String>,
}

impl FilterState {
    /// Number of criteria that differ from the default, shown next to the filter button.
    #[must_use]
    pub fn active_count(&self) -> usize {
        usize::from(self.price_range != PriceRange::default())
            + usize::from(!self.transmission.is_empty())
            + usize::from(self.passengers != Passengers::Any)
            + usize::from(!self.vehicle_types.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_range_rejects_inverted_bounds() {
        assert!(PriceRange::new(100, 50).is_none());
        let range = PriceRange::new(50, 50).unwrap();
        assert!(range.contains(50));
        assert!(!range.contains(51));
    }

    #[test]
    fn price_range_deserialization_validates() {
        let ok: PriceRange = serde_json::from_str("[10, 20]").unwrap();
        assert_eq!((ok.min(), ok.max()), (10, 20));
        assert!(serde_json::from_str::<PriceRange>("[30, 20]").is_err());
    }

    #[test]
    fn passenger_minimums_come_from_label_prefix() {
        assert_eq!(Passengers::Any.min_seats(), None);
        assert_eq!(Passengers::TwoPlus.min_seats(), Some(2));
        assert_eq!(Passengers::FourPlus.min_seats(), Some(4));
        assert_eq!(Passengers::SixPlus.min_seats(), Some(6));
    }

    #[test]
    fn passengers_cycle_both_ways() {
        assert_eq!(Passengers::SixPlus.next(), Passengers::Any);
        assert_eq!(Passengers::Any.prev(), Passengers::SixPlus);
        assert_eq!(Passengers::TwoPlus.next().prev(), Passengers::TwoPlus);
    }

    #[test]
    fn default_filters_have_no_active_criteria() {
        let filters = FilterState::default();
        assert_eq!(filters.price_range, PriceRange::new(0, 500).unwrap());
        assert_eq!(filters.active_count(), 0);

        let mut narrowed = filters;
        narrowed.passengers = Passengers::FourPlus;
        narrowed.transmission.insert(Transmission::Manual);
        assert_eq!(narrowed.active_count(), 2);
    }
}
