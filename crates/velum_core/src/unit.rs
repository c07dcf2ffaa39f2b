//! Measurement units for positioning and sizing.
//!
//! A [`Unit`] is either a concrete pixel value or a [`Dynamic`] fraction
//! of the owning parent's size. Dynamic units are two-phase: they start
//! unresolved, holding only the fraction, and gain a concrete value when
//! the layout pass resolves them against the parent's resolved size.
//! Resolution is an explicit, idempotent step - reading an unresolved
//! dynamic unit is a fatal precondition violation, not a recoverable
//! error.

/// A single-axis measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unit {
    /// A concrete pixel value.
    Px(f32),
    /// A fraction of the parent's resolved size on the same axis.
    Dynamic(Dynamic),
}

impl Unit {
    /// Creates a concrete pixel unit.
    #[must_use]
    pub const fn px(value: f32) -> Self {
        Self::Px(value)
    }

    /// Creates an unresolved dynamic unit covering `fraction` of the
    /// parent's size (1.0 = the whole parent).
    #[must_use]
    pub const fn dynamic(fraction: f32) -> Self {
        Self::Dynamic(Dynamic {
            fraction,
            resolved: None,
        })
    }

    /// Returns true if this is a dynamic unit.
    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic(_))
    }

    /// Returns the concrete pixel value.
    ///
    /// # Panics
    ///
    /// Panics if this is a dynamic unit that has not been resolved
    /// against a parent size yet. That is a programmer error: the layout
    /// pass must call [`Unit::resolve`] before any read.
    #[must_use]
    pub fn value(&self) -> f32 {
        match self {
            Self::Px(value) => *value,
            Self::Dynamic(dynamic) => dynamic
                .resolved
                .unwrap_or_else(|| panic!("dynamic unit read before resolution against a parent size")),
        }
    }

    /// Resolves a dynamic unit against the parent's size on this axis.
    ///
    /// Pixel units are untouched. Resolving an already-resolved dynamic
    /// unit recomputes the same `fraction * parent` product - it never
    /// double-scales.
    pub fn resolve(&mut self, parent: f32) {
        if let Self::Dynamic(dynamic) = self {
            dynamic.resolved = Some(dynamic.fraction * parent);
        }
    }

    /// Scales the unit multiplicatively.
    ///
    /// Pixel values and resolved dynamic values are multiplied by
    /// `factor`; the dynamic fraction is untouched, so a later
    /// re-resolve against the (equally rescaled) parent agrees with the
    /// scaled value.
    pub fn scale(&mut self, factor: f32) {
        match self {
            Self::Px(value) => *value *= factor,
            Self::Dynamic(dynamic) => {
                if let Some(resolved) = dynamic.resolved.as_mut() {
                    *resolved *= factor;
                }
            }
        }
    }
}

/// The two-phase payload of a dynamic unit: the fraction of the parent
/// it covers, and the concrete value once the layout pass has resolved
/// it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dynamic {
    /// Fraction of the parent's size (1.0 = the whole parent).
    fraction: f32,
    /// Concrete value, present only after resolution.
    resolved: Option<f32>,
}

impl Dynamic {
    /// Returns the fraction of the parent this unit covers.
    #[must_use]
    pub const fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Returns true once the layout pass has resolved this unit.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }
}

/// A two-axis measurement value.
///
/// The axes are named `a` and `b`: for a [`Point`] they are x and y,
/// for a [`Size`] width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    /// First axis (x / width).
    pub a: Unit,
    /// Second axis (y / height).
    pub b: Unit,
}

/// A position in the parent's coordinate space.
pub type Point = Vec2;

/// A two-dimensional extent.
pub type Size = Vec2;

impl Vec2 {
    /// Creates a vector from two units.
    #[must_use]
    pub const fn new(a: Unit, b: Unit) -> Self {
        Self { a, b }
    }

    /// Creates a vector of concrete pixel values.
    #[must_use]
    pub const fn px(a: f32, b: f32) -> Self {
        Self::new(Unit::px(a), Unit::px(b))
    }

    /// X position.
    ///
    /// # Panics
    ///
    /// Panics if the axis is an unresolved dynamic unit.
    #[must_use]
    pub fn x(&self) -> f32 {
        self.a.value()
    }

    /// Y position.
    ///
    /// # Panics
    ///
    /// Panics if the axis is an unresolved dynamic unit.
    #[must_use]
    pub fn y(&self) -> f32 {
        self.b.value()
    }

    /// Width (alias for the first axis).
    ///
    /// # Panics
    ///
    /// Panics if the axis is an unresolved dynamic unit.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.a.value()
    }

    /// Height (alias for the second axis).
    ///
    /// # Panics
    ///
    /// Panics if the axis is an unresolved dynamic unit.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.b.value()
    }

    /// Returns true if either axis is dynamic.
    #[must_use]
    pub const fn has_dynamic(&self) -> bool {
        self.a.is_dynamic() || self.b.is_dynamic()
    }

    /// Resolves both axes against the parent's resolved size.
    pub fn resolve(&mut self, parent_a: f32, parent_b: f32) {
        self.a.resolve(parent_a);
        self.b.resolve(parent_b);
    }

    /// Scales both axes multiplicatively.
    pub fn scale(&mut self, factor_a: f32, factor_b: f32) {
        self.a.scale(factor_a);
        self.b.scale(factor_b);
    }
}

/// Direction a component slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideDirection {
    /// Slide in from the left edge.
    #[default]
    FromLeft,
    /// Slide in from the right edge.
    FromRight,
    /// Slide in from the top edge.
    FromTop,
    /// Slide in from the bottom edge.
    FromBottom,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Align to the left edge.
    #[default]
    Left,
    /// Align to the right edge.
    Right,
    /// Center between the edges.
    Center,
}

/// Axis a container lays its children out along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}
