//! # Color Model
//!
//! Colors are stored as four 8-bit channels and packed into ARGB for
//! the rendering backend. The model has two layers:
//!
//! - [`Color`]: immutable, value-equal, hashable. What themes and
//!   constructors hand around.
//! - [`MutableColor`]: a mutable color a component owns, animatable in
//!   place. Its [`ColorKind`] tag selects plain, gradient or chroma
//!   behavior; each variant declares which operations it supports and
//!   rejects the rest with a typed error instead of relying on
//!   override dispatch.
//!
//! The host loop calls [`MutableColor::update`] once per tick, before
//! the layout pass and the render pass.

mod mutable;

pub use mutable::{Blend, ColorKind, MutableColor};

use crate::error::{ColorError, ColorResult};

/// A packed 32-bit ARGB color value, alpha in the highest byte.
///
/// This is the wire format handed to rendering backends; it is plain
/// bytes so GPU-bound hosts can upload buffers of them directly.
#[repr(transparent)]
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    bytemuck::Pod,
    bytemuck::Zeroable,
)]
pub struct Argb(pub u32);

/// An immutable RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Solid black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Solid white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Slightly dimmed white.
    pub const WHITE_90: Self = Self::rgb(229, 229, 229);
    /// Half-transparent mid gray.
    pub const GRAY: Self = Self::new(127, 127, 127, 127);

    /// Creates a color from four 8-bit channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from three 8-bit channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Creates a color from normalized channels in [0, 1].
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn from_normalized(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new(
            (r * 255.0) as u8,
            (g * 255.0) as u8,
            (b * 255.0) as u8,
            (a * 255.0) as u8,
        )
    }

    /// Parses a hex color string.
    ///
    /// - A leading `#` is stripped.
    /// - 1 digit is repeated six times (`f` -> `ffffff`).
    /// - 2 digits are repeated three times (`0f` -> `0f0f0f`).
    /// - 3 digits have each digit doubled (`0fe` -> `00ffee`).
    /// - 6 digits are `RRGGBB`, alpha 255.
    /// - 8 digits are `RRGGBBAA`.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidHexLength`] for any other length, and
    /// [`ColorError::InvalidHexDigit`] when a channel pair is not valid
    /// hexadecimal.
    pub fn from_hex(hex: &str) -> ColorResult<Self> {
        let body: String = hex.chars().filter(|c| *c != '#').collect();
        let body = match body.chars().count() {
            1 => body.repeat(6),
            2 => body.repeat(3),
            3 => body.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => body,
            len => return Err(ColorError::InvalidHexLength { len }),
        };

        let digits: Vec<char> = body.chars().collect();
        let channel = |index: usize| -> ColorResult<u8> {
            let pair: String = digits[index * 2..index * 2 + 2].iter().collect();
            u8::from_str_radix(&pair, 16).map_err(ColorError::InvalidHexDigit)
        };

        let r = channel(0)?;
        let g = channel(1)?;
        let b = channel(2)?;
        let a = if digits.len() == 8 { channel(3)? } else { 255 };
        Ok(Self::new(r, g, b, a))
    }

    /// Parses a hex color string and appends an explicit alpha byte.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Color::from_hex`].
    pub fn from_hex_with_alpha(hex: &str, alpha: u8) -> ColorResult<Self> {
        Self::from_hex(&format!("{hex}{alpha:02x}"))
    }

    /// Packs the channels into a 32-bit ARGB value.
    #[must_use]
    pub const fn argb(self) -> Argb {
        Argb(
            ((self.a as u32) << 24)
                | ((self.r as u32) << 16)
                | ((self.g as u32) << 8)
                | (self.b as u32),
        )
    }

    /// Creates a mutable, animatable copy of this color.
    #[must_use]
    pub fn to_mutable(self) -> MutableColor {
        MutableColor::new(self.r, self.g, self.b, self.a)
    }
}

/// Converts hue/saturation/brightness (each effective in [0, 1], hue
/// wrapping) into 8-bit RGB channels.
///
/// Sector decomposition with half-up rounding, so a full hue cycle
/// returns to the starting channels exactly.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub(crate) fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> (u8, u8, u8) {
    if saturation <= 0.0 {
        let v = (brightness * 255.0 + 0.5) as u8;
        return (v, v, v);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match h as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };

    (
        (r * 255.0 + 0.5) as u8,
        (g * 255.0 + 0.5) as u8,
        (b * 255.0 + 0.5) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_packing() {
        let color = Color::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(color.argb(), Argb(0x7812_3456));
    }

    #[test]
    fn test_from_hex_six_digits() {
        let color = Color::from_hex("#1a2b3c").unwrap();
        assert_eq!(color, Color::rgb(0x1a, 0x2b, 0x3c));
        assert_eq!(color.argb().0 & 0x00FF_FFFF, 0x001a_2b3c);
        assert_eq!(color.a, 255);
    }

    #[test]
    fn test_from_hex_eight_digits() {
        let color = Color::from_hex("1a2b3c4d").unwrap();
        assert_eq!(color, Color::new(0x1a, 0x2b, 0x3c, 0x4d));
    }

    #[test]
    fn test_from_hex_shorthand_expansion() {
        // 1 digit: the whole string repeated six times.
        assert_eq!(Color::from_hex("f").unwrap(), Color::from_hex("ffffff").unwrap());
        // 2 digits: repeated three times.
        assert_eq!(Color::from_hex("0f").unwrap(), Color::from_hex("0f0f0f").unwrap());
        // 3 digits: each digit doubled, not the pair repeated.
        assert_eq!(Color::from_hex("0fe").unwrap(), Color::from_hex("00ffee").unwrap());
    }

    #[test]
    fn test_from_hex_invalid_lengths() {
        for bad in ["", "abcd", "abcde", "abcdefa", "abcdefabc"] {
            assert!(
                matches!(Color::from_hex(bad), Err(ColorError::InvalidHexLength { .. })),
                "length {} should be rejected",
                bad.len()
            );
        }
    }

    #[test]
    fn test_from_hex_invalid_digits() {
        assert!(matches!(
            Color::from_hex("zzzzzz"),
            Err(ColorError::InvalidHexDigit(_))
        ));
        // Non-ASCII input is a digit error, not a crash.
        assert!(matches!(
            Color::from_hex("ééé"),
            Err(ColorError::InvalidHexDigit(_))
        ));
    }

    #[test]
    fn test_from_hex_with_alpha() {
        let color = Color::from_hex_with_alpha("#ffffff", 0x80).unwrap();
        assert_eq!(color, Color::new(255, 255, 255, 0x80));
    }

    #[test]
    fn test_hsb_primary_colors() {
        assert_eq!(hsb_to_rgb(0.0, 1.0, 1.0), (255, 0, 0));
        assert_eq!(hsb_to_rgb(1.0 / 3.0, 1.0, 1.0), (0, 255, 0));
        assert_eq!(hsb_to_rgb(2.0 / 3.0, 1.0, 1.0), (0, 0, 255));
        // Hue wraps: a full cycle lands back on red.
        assert_eq!(hsb_to_rgb(1.0, 1.0, 1.0), (255, 0, 0));
    }

    #[test]
    fn test_hsb_zero_saturation_is_gray() {
        assert_eq!(hsb_to_rgb(0.42, 0.0, 0.5), (128, 128, 128));
    }
}
