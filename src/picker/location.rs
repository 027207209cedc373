//! Pickup/dropoff location picker.

use serde::{Deserialize, Serialize};

/// A confirmed location choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSelection {
    pub pickup: String,
    /// Equal to `pickup` when `same_location` is set.
    pub dropoff: String,
    pub same_location: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocationField {
    #[default]
    Pickup,
    Dropoff,
    SameLocation,
    CurrentLocation,
}

/// Editable location form.
///
/// Opened from the caller's previous selection (or blank). Cancelling is
/// dropping the picker; the caller's selection is only replaced by a
/// successful [`confirm`](Self::confirm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationPicker {
    pickup: String,
    dropoff: String,
    same_location: bool,
    focus: LocationField,
}

impl Default for LocationPicker {
    fn default() -> Self {
        Self {
            pickup: String::new(),
            dropoff: String::new(),
            same_location: true,
            focus: LocationField::Pickup,
        }
    }
}

impl LocationPicker {
    #[must_use]
    pub fn open(previous: Option<&LocationSelection>) -> Self {
        previous.map_or_else(Self::default, |sel| Self {
            pickup: sel.pickup.clone(),
            dropoff: sel.dropoff.clone(),
            same_location: sel.same_location,
            focus: LocationField::Pickup,
        })
    }

    #[must_use]
    pub fn pickup(&self) -> &str {
        &self.pickup
    }

    #[must_use]
    pub fn dropoff(&self) -> &str {
        &self.dropoff
    }

    #[must_use]
    pub const fn same_location(&self) -> bool {
        self.same_location
    }

    #[must_use]
    pub const fn focus(&self) -> LocationField {
        self.focus
    }

    /// Fields the cursor can visit; the dropoff field is skipped while it mirrors pickup.
    #[must_use]
    pub fn fields(&self) -> Vec<LocationField> {
        let mut fields = vec![LocationField::Pickup];
        if !self.same_location {
            fields.push(LocationField::Dropoff);
        }
        fields.push(LocationField::SameLocation);
        fields.push(LocationField::CurrentLocation);
        fields
    }

    pub fn focus_next(&mut self) {
        self.shift_focus(1);
    }

    pub fn focus_prev(&mut self) {
        let len = self.fields().len();
        self.shift_focus(len - 1);
    }

    fn shift_focus(&mut self, by: usize) {
        let fields = self.fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + by) % fields.len()];
    }

    /// Types a character into the focused text field.
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            LocationField::Pickup => self.pickup.push(c),
            LocationField::Dropoff => self.dropoff.push(c),
            LocationField::SameLocation | LocationField::CurrentLocation => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            LocationField::Pickup => {
                self.pickup.pop();
            }
            LocationField::Dropoff => {
                self.dropoff.pop();
            }
            LocationField::SameLocation | LocationField::CurrentLocation => {}
        }
    }

    pub fn toggle_same_location(&mut self) {
        self.same_location = !self.same_location;
        if self.same_location && self.focus == LocationField::Dropoff {
            self.focus = LocationField::SameLocation;
        }
    }

    /// Fills the pickup field with the device location.
    pub fn use_current_location(&mut self, location: &str) {
        self.pickup = location.to_string();
    }

    /// Returns the selection when the pickup field is not blank.
    #[must_use]
    pub fn confirm(&self) -> Option<LocationSelection> {
        if self.pickup.trim().is_empty() {
            tracing::debug!("location confirm ignored: blank pickup");
            return None;
        }
        let dropoff = if self.same_location {
            self.pickup.clone()
        } else {
            self.dropoff.clone()
        };
        Some(LocationSelection {
            pickup: self.pickup.clone(),
            dropoff,
            same_location: self.same_location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(picker: &mut LocationPicker, text: &str) {
        for c in text.chars() {
            picker.push_char(c);
        }
    }

    #[test]
    fn blank_pickup_cannot_confirm() {
        let mut picker = LocationPicker::open(None);
        assert!(picker.same_location());
        assert!(picker.confirm().is_none());
        typed(&mut picker, "   ");
        assert!(picker.confirm().is_none());
    }

    #[test]
    fn same_location_mirrors_pickup() {
        let mut picker = LocationPicker::open(None);
        typed(&mut picker, "Oakland, CA");
        let sel = picker.confirm().unwrap();
        assert_eq!(sel.dropoff, "Oakland, CA");
        assert!(sel.same_location);
    }

    #[test]
    fn separate_dropoff_is_kept() {
        let mut picker = LocationPicker::open(None);
        typed(&mut picker, "SFO");
        picker.toggle_same_location();
        picker.focus_next();
        assert_eq!(picker.focus(), LocationField::Dropoff);
        typed(&mut picker, "OAK");
        picker.backspace();
        let sel = picker.confirm().unwrap();
        assert_eq!(sel.pickup, "SFO");
        assert_eq!(sel.dropoff, "OA");
        assert!(!sel.same_location);
    }

    #[test]
    fn reopening_restores_previous_selection() {
        let previous = LocationSelection {
            pickup: "San Jose, CA".to_string(),
            dropoff: "Berkeley, CA".to_string(),
            same_location: false,
        };
        let picker = LocationPicker::open(Some(&previous));
        assert_eq!(picker.confirm(), Some(previous));
    }

    #[test]
    fn focus_skips_dropoff_while_mirrored() {
        let mut picker = LocationPicker::open(None);
        picker.focus_next();
        assert_eq!(picker.focus(), LocationField::SameLocation);
        picker.focus_prev();
        assert_eq!(picker.focus(), LocationField::Pickup);
        picker.focus_prev();
        assert_eq!(picker.focus(), LocationField::CurrentLocation);
        picker.use_current_location("San Francisco, CA");
        assert_eq!(picker.pickup(), "San Francisco, CA");
    }
}
