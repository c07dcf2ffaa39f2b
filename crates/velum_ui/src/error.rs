//! # Toolkit Error Types
//!
//! Recoverable failures in the color and theme subsystems. Fatal
//! precondition violations (reading an unresolved dynamic unit, sizing
//! queries before layout) panic instead - those are programmer errors,
//! not inputs to handle.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur in the color subsystem.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// A hex color string had a body length other than 1, 2, 3, 6 or 8.
    #[error("invalid hex color length: {len} (expected 1, 2, 3, 6 or 8 digits)")]
    InvalidHexLength {
        /// Number of digits after stripping `#`.
        len: usize,
    },

    /// A hex color string contained a non-hex digit.
    #[error("invalid hex digit in color string")]
    InvalidHexDigit(#[source] ParseIntError),

    /// A gradient was recolored through the single-target path. Gradients
    /// have two endpoint colors; use the endpoint-addressed recolor.
    #[error("gradient colors cannot be recolored without an endpoint; use recolor_endpoint")]
    GradientEndpoint,

    /// An endpoint-addressed operation was called on a color that is not
    /// a gradient.
    #[error("color is not a gradient")]
    NotAGradient,

    /// A gradient endpoint index was not 1 or 2.
    #[error("invalid gradient endpoint index: {0} (expected 1 or 2)")]
    EndpointOutOfRange(u8),

    /// A radial blend was built with the inner radius larger than the
    /// outer radius.
    #[error("radial inner radius must not exceed outer radius ({inner} > {outer})")]
    RadialRadiusOrder {
        /// Inner radius (fully color 1).
        inner: f32,
        /// Outer radius (fully color 2).
        outer: f32,
    },
}

/// Non-fatal diagnostics raised while building blend geometry.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum BlendWarning {
    /// The radial radii are very close together; the result is close to
    /// a hard-edged circle in a box rather than a gradient.
    #[error("radial radii are very close together ({inner} vs {outer}); expect a circle in a box")]
    NarrowRadialBand {
        /// Inner radius.
        inner: f32,
        /// Outer radius.
        outer: f32,
    },
}

/// Errors that can occur while loading a theme file.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The TOML document failed to parse.
    #[error("theme file is not valid TOML")]
    Toml(#[from] toml::de::Error),

    /// A palette entry was not a valid hex color.
    #[error("theme entry {entry:?} is not a valid color")]
    Color {
        /// Name of the offending palette entry.
        entry: String,
        /// The underlying color parse failure.
        #[source]
        source: ColorError,
    },
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
