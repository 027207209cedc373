//! Hourly pickup/dropoff time slots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of selectable slots in a day.
pub const SLOT_COUNT: usize = 12;

const LABELS: [&str; SLOT_COUNT] = [
    "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM",
    "5:00 PM", "6:00 PM", "7:00 PM", "8:00 PM",
];

/// One of the twelve hourly slots from 9:00 AM to 8:00 PM.
///
/// Slots are totally ordered by their index in the day, which is what same-day
/// range validation compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(usize);

impl TimeSlot {
    /// Returns the slot at `index`, or `None` past the last slot.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < SLOT_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        LABELS[self.0]
    }

    /// Hour of day on a 24-hour clock (9 through 20).
    #[must_use]
    pub const fn hour(self) -> u32 {
        // usize -> u32 cannot truncate: index < 12
        #[allow(clippy::cast_possible_truncation)]
        let offset = self.0 as u32;
        9 + offset
    }

    /// Looks up a slot by its display label, e.g. `"2:00 PM"`.
    #[must_use]
    pub fn parse_label(label: &str) -> Option<Self> {
        let label = label.trim();
        LABELS.iter().position(|l| *l == label).map(Self)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..SLOT_COUNT).map(Self)
    }
}

impl Default for TimeSlot {
    /// 10:00 AM, the default for both pickup and dropoff.
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::parse_label(&value).ok_or_else(|| format!("unknown time slot: {value}"))
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten_am() {
        assert_eq!(TimeSlot::default().label(), "10:00 AM");
        assert_eq!(TimeSlot::default().hour(), 10);
    }

    #[test]
    fn slots_span_nine_to_eight() {
        let all: Vec<_> = TimeSlot::all().collect();
        assert_eq!(all.len(), 12);
        assert_eq!(all[0].label(), "9:00 AM");
        assert_eq!(all[11].label(), "8:00 PM");
        assert_eq!(all[11].hour(), 20);
        assert!(TimeSlot::from_index(12).is_none());
    }

    #[test]
    fn ordering_follows_the_day() {
        let one_pm = TimeSlot::parse_label("1:00 PM").unwrap();
        let two_pm = TimeSlot::parse_label("2:00 PM").unwrap();
        let eleven_am = TimeSlot::parse_label("11:00 AM").unwrap();
        assert!(eleven_am < one_pm);
        assert!(one_pm < two_pm);
    }

    #[test]
    fn serializes_as_label() {
        let slot = TimeSlot::parse_label("3:00 PM").unwrap();
        let json = serde_json::to_string(&slot).unwrap();
        assert_eq!(json, "\"3:00 PM\"");
        let back: TimeSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slot);
        assert!(serde_json::from_str::<TimeSlot>("\"3:30 PM\"").is_err());
    }
}
