//! Color themes and ANSI escape helpers.
//!
//! Built-in themes are embedded TOML files:
//!
//! - `neon`: indigo accent on a dark background (default)
//! - `catppuccin-mocha`
//! - `catppuccin-latte`
//!
//! A custom theme uses the same format:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#ffffff"
//! header_bg = "#5b67f1"        # optional
//! selection_fg = "#ffffff"
//! selection_bg = "#5b67f1"
//! text_normal = "#e4e6f0"
//! text_dim = "#8a8fa8"
//! border = "#3a3f5c"
//! accent = "#7c86ff"
//! search_bar_border = "#7c86ff"
//! match_highlight_fg = "#1a1c2c"
//! match_highlight_bg = "#ffd166"
//! empty_state_fg = "#7c86ff"
//! range_bg = "#2e3470"
//! disabled_fg = "#4a4f6a"
//! success_fg = "#3ddc97"
//! ```

use crate::domain::{RentalError, Result};
use serde::{Deserialize, Serialize};

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "neon";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for every styled element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Secondary text: subtitles, footer, placeholders.
    pub text_dim: String,

    pub border: String,

    /// Prices, active tab, focused overlay section.
    pub accent: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Days strictly between pickup and dropoff in the calendar.
    pub range_bg: String,
    /// Past days and unavailable time slots.
    pub disabled_fg: String,
    /// Confirmation notices.
    pub success_fg: String,
}

impl Theme {
    /// Looks up a built-in theme.
    ///
    /// ```rust
    /// use rentalizer::ui::Theme;
    ///
    /// assert_eq!(Theme::from_name("catppuccin-latte").unwrap().name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let source = match name {
            "neon" => include_str!("../../themes/neon.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(source).ok()
    }

    /// Parses a theme from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::Theme`] when the text is not a complete theme.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RentalError::Theme(format!("invalid theme: {e}")))
    }

    /// Loads a custom theme file. `~` resolves to the sandbox home mount.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::Io`] if the file cannot be read and
    /// [`RentalError::Theme`] if it does not parse.
    pub fn from_file(path: &str) -> Result<Self> {
        let content = crate::infrastructure::read_host_file(path)?;
        Self::from_toml_str(&content)
    }

    /// Falls back to white on anything that is not `#rrggbb`.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).unwrap_or(255)
        };
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn strikethrough() -> &'static str {
        "\u{001b}[9m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The `neon` theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme file is broken.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME)
            .unwrap_or_else(|| panic!("Built-in {DEFAULT_THEME} theme should always parse"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn every_builtin_parses() {
        for name in ["neon", "catppuccin-mocha", "catppuccin-latte"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn header_bg_is_optional() {
        assert!(Theme::from_name("neon").unwrap().colors.header_bg.is_some());
        assert!(Theme::from_name("catppuccin-mocha").unwrap().colors.header_bg.is_none());
    }

    #[test]
    fn loads_custom_theme_file() {
        let source = include_str!("../../themes/catppuccin-latte.toml")
            .replace("catppuccin-latte", "custom");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(source.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(theme.name, "custom");
        assert_eq!(theme.colors.accent, "#1e66f5");
    }

    #[test]
    fn incomplete_theme_is_a_theme_error() {
        let err = Theme::from_toml_str("name = \"broken\"").unwrap_err();
        assert!(matches!(err, RentalError::Theme(_)));
    }

    #[test]
    fn escapes_from_hex() {
        assert_eq!(Theme::fg("#5b67f1"), "\u{1b}[38;2;91;103;241m");
        assert_eq!(Theme::bg("not-a-color"), "\u{1b}[48;2;255;255;255m");
    }
}
