//! Named color palettes, loadable from TOML.

use serde::Deserialize;

use crate::color::Color;
use crate::error::ThemeError;

/// The colors a UI pulls its defaults from.
///
/// Loadable from a TOML table of hex strings; entries left out fall
/// back to [`Theme::DARK`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Window background.
    pub background: Color,
    /// Raised surfaces (panels, cards).
    pub surface: Color,
    /// Accent color for primary actions.
    pub primary: Color,
    /// Body text.
    pub text: Color,
    /// Secondary text.
    pub text_muted: Color,
    /// Outlines and separators.
    pub border: Color,
    /// Warning accents.
    pub warning: Color,
    /// Error accents.
    pub error: Color,
}

/// TOML shape of a theme file: every entry is an optional hex string.
#[derive(Debug, Deserialize)]
struct RawTheme {
    background: Option<String>,
    surface: Option<String>,
    primary: Option<String>,
    text: Option<String>,
    text_muted: Option<String>,
    border: Option<String>,
    warning: Option<String>,
    error: Option<String>,
}

impl Theme {
    /// The built-in dark palette.
    pub const DARK: Self = Self {
        background: Color::new(0x12, 0x12, 0x18, 0xFF),
        surface: Color::new(0x1E, 0x1E, 0x28, 0xFF),
        primary: Color::new(0x4A, 0x8F, 0xE7, 0xFF),
        text: Color::new(0xEE, 0xEE, 0xF2, 0xFF),
        text_muted: Color::new(0x9A, 0x9A, 0xA6, 0xFF),
        border: Color::new(0x34, 0x34, 0x40, 0xFF),
        warning: Color::new(0xE7, 0xA1, 0x4A, 0xFF),
        error: Color::new(0xE7, 0x4A, 0x5A, 0xFF),
    };

    /// Parses a theme from TOML, filling missing entries from
    /// [`Theme::DARK`].
    ///
    /// # Errors
    ///
    /// [`ThemeError::Toml`] for malformed TOML, [`ThemeError::Color`]
    /// for an entry that is not a valid hex color (the variant names
    /// the offending entry).
    pub fn from_toml_str(input: &str) -> Result<Self, ThemeError> {
        let raw: RawTheme = toml::from_str(input)?;
        Ok(Self {
            background: entry("background", raw.background.as_deref(), Self::DARK.background)?,
            surface: entry("surface", raw.surface.as_deref(), Self::DARK.surface)?,
            primary: entry("primary", raw.primary.as_deref(), Self::DARK.primary)?,
            text: entry("text", raw.text.as_deref(), Self::DARK.text)?,
            text_muted: entry("text_muted", raw.text_muted.as_deref(), Self::DARK.text_muted)?,
            border: entry("border", raw.border.as_deref(), Self::DARK.border)?,
            warning: entry("warning", raw.warning.as_deref(), Self::DARK.warning)?,
            error: entry("error", raw.error.as_deref(), Self::DARK.error)?,
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DARK
    }
}

/// Parses one theme entry, tagging failures with the entry name.
fn entry(name: &str, value: Option<&str>, fallback: Color) -> Result<Color, ThemeError> {
    match value {
        Some(hex) => Color::from_hex(hex).map_err(|source| ThemeError::Color {
            entry: name.to_owned(),
            source,
        }),
        None => Ok(fallback),
    }
}
