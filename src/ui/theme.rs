//! Theme management and ANSI escape sequence generation.
//!
//! Two built-in themes ship with the plugin, a light and a dark one; the user
//! can switch between them at runtime or load a custom palette from a TOML
//! file. Colors are hex strings converted to 24-bit ANSI sequences at render
//! time.
//!
//! # Built-in Themes
//!
//! - `staffboard-light`: Light palette (default)
//! - `staffboard-dark`: Dark palette
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//! mode = "dark"
//!
//! [colors]
//! header_fg = "#e5e7eb"
//! selection_fg = "#111827"
//! selection_bg = "#a5b4fc"
//! text_normal = "#f3f4f6"
//! text_dim = "#9ca3af"
//! border = "#374151"
//! focus_fg = "#a5b4fc"
//! error_fg = "#f87171"
//! success_fg = "#4ade80"
//! warning_fg = "#fbbf24"
//! empty_state_fg = "#60a5fa"
//! ```
//!
//! # Example
//!
//! ```
//! use staffboard::ui::theme::{Theme, ThemeMode};
//!
//! let theme = Theme::from_name("staffboard-dark").unwrap();
//! assert_eq!(theme.mode, ThemeMode::Dark);
//! print!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::error::{Result, StaffboardError};

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "staffboard-light";

/// Whether a palette is meant for a light or a dark terminal background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    #[serde(default)]
    pub mode: ThemeMode,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. "#4f46e5").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Highlighted table row.
    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, labels and secondary info.
    pub text_dim: String,

    pub border: String,

    /// Label of the form field receiving input.
    pub focus_fg: String,

    /// Inline validation errors and failure dialogs.
    pub error_fg: String,
    pub success_fg: String,
    /// Loading and busy indicators.
    pub warning_fg: String,

    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is not a built-in theme.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "staffboard-light" => include_str!("../../themes/staffboard-light.toml"),
            "staffboard-dark" => include_str!("../../themes/staffboard-dark.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`StaffboardError::Theme`] if the file cannot be read or its
    /// content is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| StaffboardError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| StaffboardError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Returns the built-in theme for `mode`.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        let name = match mode {
            ThemeMode::Light => "staffboard-light",
            ThemeMode::Dark => "staffboard-dark",
        };
        Self::from_name(name).unwrap_or_default()
    }

    /// Returns the built-in theme of the opposite mode.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self::for_mode(self.mode.opposite())
    }

    /// Parses `#rrggbb`, falling back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background sequence for a hex color.
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

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the light built-in theme.
    ///
    /// # Panics
    ///
    /// Panics if the bundled light theme fails to parse.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in staffboard-light theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        let light = Theme::from_name("staffboard-light").unwrap();
        let dark = Theme::from_name("staffboard-dark").unwrap();

        assert_eq!(light.mode, ThemeMode::Light);
        assert_eq!(dark.mode, ThemeMode::Dark);
        assert!(light.colors.header_bg.is_some());
        assert!(dark.colors.header_bg.is_none());
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn toggling_flips_mode() {
        let theme = Theme::default();
        let toggled = theme.toggled();

        assert_eq!(toggled.name, "staffboard-dark");
        assert_eq!(toggled.toggled(), theme);
    }

    #[test]
    fn fg_and_bg_emit_truecolor_sequences() {
        assert_eq!(Theme::fg("#ff8000"), "\u{001b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("000000"), "\u{001b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("nope"), "\u{001b}[38;2;255;255;255m");
    }

    #[test]
    fn loads_custom_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(include_bytes!("../../themes/staffboard-dark.toml")).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "staffboard-dark");
    }

    #[test]
    fn malformed_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = 3").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, StaffboardError::Theme(_)));
    }
}
