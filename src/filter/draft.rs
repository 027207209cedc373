//! Editable copy of the filters, backing the filters modal.
//!
//! A [`FiltersDraft`] is opened from the caller's [`FilterState`] and edits its
//! own copy. [`FiltersDraft::apply`] hands the edited criteria back; dropping
//! the draft cancels, leaving the caller's filters untouched.

use super::state::{FilterState, Passengers, PriceRange, PRICE_CEILING, PRICE_FLOOR};
use crate::domain::Transmission;

/// Price slider increment, in dollars.
pub const PRICE_STEP: u32 = 10;

/// Minimum distance between the two price handles, in dollars.
pub const PRICE_GAP: u32 = 10;

/// Vehicle-type chips offered in the filters modal.
pub const VEHICLE_TYPE_OPTIONS: [&str; 5] = ["Budget", "Standard", "Luxury", "SUV", "Sporty"];

/// One focusable row of the filters modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftRow {
    MinPrice,
    MaxPrice,
    Transmission(Transmission),
    Passengers,
    VehicleType(&'static str),
}

impl DraftRow {
    /// All rows in display order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut rows = vec![Self::MinPrice, Self::MaxPrice];
        rows.extend(Transmission::ALL.into_iter().map(Self::Transmission));
        rows.push(Self::Passengers);
        rows.extend(VEHICLE_TYPE_OPTIONS.into_iter().map(Self::VehicleType));
        rows
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiltersDraft {
    filters: FilterState,
    rows: Vec<DraftRow>,
    cursor: usize,
}

impl FiltersDraft {
    #[must_use]
    pub fn open(current: &FilterState) -> Self {
        tracing::debug!(active_criteria = current.active_count(), "filters draft opened");
        Self {
            filters: current.clone(),
            rows: DraftRow::all(),
            cursor: 0,
        }
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    #[must_use]
    pub fn rows(&self) -> &[DraftRow] {
        &self.rows
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn focused_row(&self) -> DraftRow {
        self.rows[self.cursor]
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % self.rows.len();
    }

    pub fn move_up(&mut self) {
        self.cursor = (self.cursor + self.rows.len() - 1) % self.rows.len();
    }

    /// Moves the focused slider or cycles the focused choice.
    ///
    /// Price handles move by [`PRICE_STEP`] and stop [`PRICE_GAP`] short of the
    /// other handle. Option rows ignore this; they toggle instead.
    pub fn adjust(&mut self, increase: bool) {
        let range = self.filters.price_range;
        match self.focused_row() {
            DraftRow::MinPrice => {
                let upper = range.max().saturating_sub(PRICE_GAP);
                let min = if increase {
                    (range.min() + PRICE_STEP).min(upper).max(range.min())
                } else {
                    range.min().saturating_sub(PRICE_STEP).max(PRICE_FLOOR)
                };
                self.set_price(min, range.max());
            }
            DraftRow::MaxPrice => {
                let lower = range.min() + PRICE_GAP;
                let max = if increase {
                    (range.max() + PRICE_STEP).min(PRICE_CEILING).max(range.max())
                } else {
                    range.max().saturating_sub(PRICE_STEP).max(lower).min(range.max())
                };
                self.set_price(range.min(), max);
            }
            DraftRow::Passengers => {
                self.filters.passengers = if increase {
                    self.filters.passengers.next()
                } else {
                    self.filters.passengers.prev()
                };
            }
            DraftRow::Transmission(_) | DraftRow::VehicleType(_) => {}
        }
    }

    fn set_price(&mut self, min: u32, max: u32) {
        if let Some(range) = PriceRange::new(min, max) {
            self.filters.price_range = range;
        }
    }

    /// Toggles the focused option; on other rows behaves like a forward [`adjust`](Self::adjust).
    pub fn toggle(&mut self) {
        match self.focused_row() {
            DraftRow::Transmission(t) => {
                if !self.filters.transmission.remove(&t) {
                    self.filters.transmission.insert(t);
                }
            }
            DraftRow::VehicleType(name) => {
                if !self.filters.vehicle_types.remove(name) {
                    self.filters.vehicle_types.insert(name.to_string());
                }
            }
            DraftRow::MinPrice | DraftRow::MaxPrice | DraftRow::Passengers => self.adjust(true),
        }
    }

    /// `true` when the option on `row` is currently selected.
    #[must_use]
    pub fn is_checked(&self, row: DraftRow) -> bool {
        match row {
            DraftRow::Transmission(t) => self.filters.transmission.contains(&t),
            DraftRow::VehicleType(name) => self.filters.vehicle_types.contains(name),
            DraftRow::MinPrice | DraftRow::MaxPrice | DraftRow::Passengers => false,
        }
    }

    /// Restores the default criteria in the draft only.
    pub fn reset(&mut self) {
        tracing::debug!("filters draft reset");
        self.filters = FilterState::default();
    }

    /// Consumes the draft and returns the edited criteria.
    #[must_use]
    pub fn apply(self) -> FilterState {
        tracing::debug!(active_criteria = self.filters.active_count(), "filters draft applied");
        self.filters
    }
}
