//! Mutable, animatable colors: plain, gradient and chroma variants.

use velum_core::{Animation, Easing};

use crate::color::{hsb_to_rgb, Argb, Color};
use crate::error::{BlendWarning, ColorError, ColorResult};

/// How a gradient blends between its two endpoint colors across the
/// shape it fills.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Blend {
    /// Color 1 at the top edge, color 2 at the bottom.
    TopToBottom,
    /// Color 1 at the left edge, color 2 at the right.
    LeftToRight,
    /// Color 1 at the top-left corner, color 2 at the bottom-right.
    #[default]
    TopLeftToBottomRight,
    /// Color 1 at the bottom-left corner, color 2 at the top-right.
    BottomLeftToTopRight,
    /// Radial blend from a center point outward.
    Radial {
        /// Radius inside which the shape is entirely color 1.
        inner_radius: f32,
        /// Radius beyond which the shape is entirely color 2.
        outer_radius: f32,
        /// Center x, or -1.0 for the center of the shape.
        center_x: f32,
        /// Center y, or -1.0 for the center of the shape.
        center_y: f32,
    },
    /// Box blend: a rounded box fading outward.
    Box {
        /// Corner radius of the box.
        radius: f32,
        /// Feather distance over which the blend falls off.
        feather: f32,
    },
}

impl Blend {
    /// Creates a radial blend centered on the shape.
    #[must_use]
    pub const fn radial(inner_radius: f32, outer_radius: f32) -> Self {
        Self::Radial {
            inner_radius,
            outer_radius,
            center_x: -1.0,
            center_y: -1.0,
        }
    }

    /// Checks the geometric invariants of this blend.
    ///
    /// # Errors
    ///
    /// [`ColorError::RadialRadiusOrder`] when a radial inner radius
    /// exceeds its outer radius.
    pub fn validate(&self) -> ColorResult<()> {
        if let Self::Radial {
            inner_radius,
            outer_radius,
            ..
        } = *self
        {
            if inner_radius > outer_radius {
                return Err(ColorError::RadialRadiusOrder {
                    inner: inner_radius,
                    outer: outer_radius,
                });
            }
        }
        Ok(())
    }

    /// Returns the non-fatal diagnostic for this blend, if any.
    ///
    /// Radial radii closer than 5 units produce a near-degenerate
    /// gradient; construction still succeeds but callers get a signal.
    #[must_use]
    pub fn warning(&self) -> Option<BlendWarning> {
        if let Self::Radial {
            inner_radius,
            outer_radius,
            ..
        } = *self
        {
            if inner_radius <= outer_radius && inner_radius + 5.0 > outer_radius {
                return Some(BlendWarning::NarrowRadialBand {
                    inner: inner_radius,
                    outer: outer_radius,
                });
            }
        }
        None
    }
}

/// The behavior tag of a [`MutableColor`].
///
/// Each variant declares which operations it supports; unsupported
/// operations are rejected with a typed error at the call site.
#[derive(Debug, Clone)]
pub enum ColorKind {
    /// A single animatable color.
    Plain,
    /// Two endpoint colors blended across the shape. The channels of
    /// the owning color are endpoint 1; `color2` is endpoint 2.
    Gradient {
        /// The second endpoint color.
        color2: Box<MutableColor>,
        /// Blend geometry between the endpoints.
        blend: Blend,
    },
    /// A color cycling through the hue circle over time. Channels are
    /// recomputed from the phase every tick; recoloring is a no-op.
    Chroma {
        /// Time for one full hue cycle, in nanoseconds.
        speed_nanos: u64,
        /// Saturation of the cycled color range (0.0 - 1.0).
        saturation: f32,
        /// Brightness of the cycled color range (0.0 - 1.0).
        brightness: f32,
        /// Accumulated time driving the hue phase.
        elapsed_nanos: u64,
    },
}

impl PartialEq for ColorKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Plain, Self::Plain) => true,
            (
                Self::Gradient { color2, blend },
                Self::Gradient {
                    color2: other_color2,
                    blend: other_blend,
                },
            ) => color2 == other_color2 && blend == other_blend,
            (
                Self::Chroma {
                    speed_nanos,
                    saturation,
                    brightness,
                    ..
                },
                Self::Chroma {
                    speed_nanos: other_speed,
                    saturation: other_saturation,
                    brightness: other_brightness,
                    ..
                },
            ) => {
                // Elapsed time is animation state, not identity.
                speed_nanos == other_speed
                    && saturation == other_saturation
                    && brightness == other_brightness
            }
            _ => false,
        }
    }
}

/// A mutable color a component owns, animatable in place.
///
/// The host loop calls [`MutableColor::update`] once per tick. An
/// in-flight recolor owns exactly four channel animations - the set is
/// always fully present or fully absent, never partial - and a new
/// recolor replaces the whole set.
#[derive(Debug, Clone)]
pub struct MutableColor {
    /// Red channel.
    r: u8,
    /// Green channel.
    g: u8,
    /// Blue channel.
    b: u8,
    /// Alpha channel.
    a: u8,
    /// Behavior tag.
    kind: ColorKind,
    /// In-flight recolor: one animation per channel (r, g, b, a).
    animation: Option<Box<[Animation; 4]>>,
}

impl MutableColor {
    /// Default recolor duration in nanoseconds.
    pub const DEFAULT_DURATION_NANOS: u64 = 1_000;

    /// Default chroma cycle time in nanoseconds.
    pub const DEFAULT_CHROMA_SPEED_NANOS: u64 = 5_000;

    /// Creates a plain mutable color from four 8-bit channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            a,
            kind: ColorKind::Plain,
            animation: None,
        }
    }

    /// Creates a gradient between two endpoint colors.
    ///
    /// A near-degenerate radial blend logs a warning but still
    /// constructs; query [`Blend::warning`] for the same signal without
    /// a subscriber.
    ///
    /// # Errors
    ///
    /// [`ColorError::RadialRadiusOrder`] when the blend's radial inner
    /// radius exceeds its outer radius.
    pub fn gradient(color1: Color, color2: Color, blend: Blend) -> ColorResult<Self> {
        blend.validate()?;
        if let Some(warning) = blend.warning() {
            tracing::warn!(%warning, "gradient blend is near-degenerate");
        }

        Ok(Self {
            r: color1.r,
            g: color1.g,
            b: color1.b,
            a: color1.a,
            kind: ColorKind::Gradient {
                color2: Box::new(color2.to_mutable()),
                blend,
            },
            animation: None,
        })
    }

    /// Creates a chroma color: hue cycles over `speed_nanos`, at the
    /// given saturation and brightness, with a fixed alpha.
    ///
    /// The cycle clock is seeded slightly ahead of zero so the first
    /// tick already has a meaningful phase.
    #[must_use]
    pub const fn chroma(speed_nanos: u64, saturation: f32, brightness: f32, alpha: u8) -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: alpha,
            kind: ColorKind::Chroma {
                speed_nanos,
                saturation,
                brightness,
                elapsed_nanos: 1_000,
            },
            animation: None,
        }
    }

    /// The current channel values as an immutable [`Color`].
    #[must_use]
    pub const fn as_color(&self) -> Color {
        Color::new(self.r, self.g, self.b, self.a)
    }

    /// The behavior tag of this color.
    #[must_use]
    pub const fn kind(&self) -> &ColorKind {
        &self.kind
    }

    /// Returns true if this color is a gradient.
    #[must_use]
    pub const fn is_gradient(&self) -> bool {
        matches!(self.kind, ColorKind::Gradient { .. })
    }

    /// The second endpoint color, if this color is a gradient.
    #[must_use]
    pub fn endpoint2(&self) -> Option<&Self> {
        match &self.kind {
            ColorKind::Gradient { color2, .. } => Some(color2),
            _ => None,
        }
    }

    /// The blend geometry, if this color is a gradient.
    #[must_use]
    pub const fn blend(&self) -> Option<Blend> {
        match self.kind {
            ColorKind::Gradient { blend, .. } => Some(blend),
            _ => None,
        }
    }

    /// Packs the current channels into ARGB.
    ///
    /// For a gradient this reports endpoint 1 only - use
    /// [`MutableColor::argb1`] / [`MutableColor::argb2`] to be explicit.
    #[must_use]
    pub const fn argb(&self) -> Argb {
        self.as_color().argb()
    }

    /// Packs gradient endpoint 1 (identical to [`MutableColor::argb`]).
    #[must_use]
    pub const fn argb1(&self) -> Argb {
        self.argb()
    }

    /// Packs gradient endpoint 2, or `None` for non-gradients.
    #[must_use]
    pub fn argb2(&self) -> Option<Argb> {
        self.endpoint2().map(Self::argb)
    }

    /// Returns true while a recolor animation is in flight.
    ///
    /// A gradient reports either endpoint animating; the removal gate
    /// counts every attached animating color. A chroma color always
    /// reports false so it never blocks removal of its component, even
    /// though it changes every tick.
    #[must_use]
    pub fn updating(&self) -> bool {
        match &self.kind {
            ColorKind::Chroma { .. } => false,
            ColorKind::Gradient { color2, .. } => self.animation.is_some() || color2.updating(),
            ColorKind::Plain => self.animation.is_some(),
        }
    }

    /// Returns true if the host must tick this color every frame
    /// regardless of removal eligibility. Only chroma colors qualify.
    #[must_use]
    pub const fn always_updates(&self) -> bool {
        matches!(self.kind, ColorKind::Chroma { .. })
    }

    /// Recolors this color toward `target`.
    ///
    /// With an easing, starts a four-channel animation set over
    /// `duration_nanos`, replacing any in-flight set wholesale. Without
    /// one, the channels snap to the target immediately and any
    /// in-flight set is dropped.
    ///
    /// # Errors
    ///
    /// - [`ColorError::GradientEndpoint`] for gradients: the
    ///   single-target path is rejected, use
    ///   [`MutableColor::recolor_endpoint`].
    ///
    /// A chroma color accepts the call and ignores it (its channels are
    /// recomputed from the hue phase every tick).
    pub fn recolor(
        &mut self,
        target: Color,
        easing: Option<Easing>,
        duration_nanos: u64,
    ) -> ColorResult<()> {
        match self.kind {
            ColorKind::Gradient { .. } => Err(ColorError::GradientEndpoint),
            ColorKind::Chroma { .. } => Ok(()),
            ColorKind::Plain => {
                self.apply_recolor(target, easing, duration_nanos);
                Ok(())
            }
        }
    }

    /// Recolors one gradient endpoint toward `target`. Endpoint 1 is
    /// the gradient's own channels, endpoint 2 the second color; both
    /// animate independently.
    ///
    /// # Errors
    ///
    /// - [`ColorError::NotAGradient`] when this color has no endpoints.
    /// - [`ColorError::EndpointOutOfRange`] for an index other than 1
    ///   or 2.
    pub fn recolor_endpoint(
        &mut self,
        endpoint: u8,
        target: Color,
        easing: Option<Easing>,
        duration_nanos: u64,
    ) -> ColorResult<()> {
        if !self.is_gradient() {
            return Err(ColorError::NotAGradient);
        }
        match endpoint {
            1 => {
                self.apply_recolor(target, easing, duration_nanos);
                Ok(())
            }
            2 => {
                if let ColorKind::Gradient { color2, .. } = &mut self.kind {
                    color2.apply_recolor(target, easing, duration_nanos);
                }
                Ok(())
            }
            other => Err(ColorError::EndpointOutOfRange(other)),
        }
    }

    /// Animates one gradient endpoint to match the other's current
    /// channels: merging into endpoint 1 recolors endpoint 2 toward it,
    /// and vice versa.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`MutableColor::recolor_endpoint`].
    pub fn merge_endpoints(
        &mut self,
        into: u8,
        easing: Option<Easing>,
        duration_nanos: u64,
    ) -> ColorResult<()> {
        if !self.is_gradient() {
            return Err(ColorError::NotAGradient);
        }
        match into {
            1 => {
                let target = self.as_color();
                if let ColorKind::Gradient { color2, .. } = &mut self.kind {
                    color2.apply_recolor(target, easing, duration_nanos);
                }
                Ok(())
            }
            2 => {
                let target = match self.endpoint2() {
                    Some(color2) => color2.as_color(),
                    None => return Err(ColorError::NotAGradient),
                };
                self.apply_recolor(target, easing, duration_nanos);
                Ok(())
            }
            other => Err(ColorError::EndpointOutOfRange(other)),
        }
    }

    /// Advances animation state by `delta_nanos`.
    ///
    /// Returns true exactly on the tick the recolor animation set is
    /// cleared, false otherwise (including when nothing is animating).
    ///
    /// The whole set completes when the **r-channel** animation reports
    /// finished: the check runs before the per-channel step, so the
    /// channels hold the values the previous tick left them at - the
    /// final eased values - and the g/b/a completion flags are never
    /// consulted. Hosts rely on this coupling; keep it.
    ///
    /// A gradient also ticks its second endpoint here, but only
    /// endpoint 1 governs the return value. A chroma color recomputes
    /// its channels from the hue phase and always returns false.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn update(&mut self, delta_nanos: u64) -> bool {
        if let ColorKind::Chroma {
            speed_nanos,
            saturation,
            brightness,
            elapsed_nanos,
        } = &mut self.kind
        {
            *elapsed_nanos = elapsed_nanos.saturating_add(delta_nanos);
            let phase = (*elapsed_nanos % *speed_nanos) as f32 / *speed_nanos as f32;
            let (r, g, b) = hsb_to_rgb(phase, *saturation, *brightness);
            self.r = r;
            self.g = g;
            self.b = b;
            return false;
        }

        if let ColorKind::Gradient { color2, .. } = &mut self.kind {
            // Endpoint 2 completion is not reported; endpoint 1 governs
            // the return value.
            let _ = color2.update(delta_nanos);
        }

        let Some(set) = self.animation.as_mut() else {
            return false;
        };
        if set[0].is_finished() {
            self.animation = None;
            return true;
        }
        self.r = set[0].update(delta_nanos) as u8;
        self.g = set[1].update(delta_nanos) as u8;
        self.b = set[2].update(delta_nanos) as u8;
        self.a = set[3].update(delta_nanos) as u8;
        false
    }

    /// Starts or replaces the channel animation set, or snaps without
    /// one. Callers have already passed the capability check for their
    /// variant.
    fn apply_recolor(&mut self, target: Color, easing: Option<Easing>, duration_nanos: u64) {
        match easing {
            Some(easing) => {
                self.animation = Some(Box::new([
                    easing.animate(duration_nanos, f32::from(self.r), f32::from(target.r)),
                    easing.animate(duration_nanos, f32::from(self.g), f32::from(target.g)),
                    easing.animate(duration_nanos, f32::from(self.b), f32::from(target.b)),
                    easing.animate(duration_nanos, f32::from(self.a), f32::from(target.a)),
                ]));
            }
            None => {
                self.r = target.r;
                self.g = target.g;
                self.b = target.b;
                self.a = target.a;
                self.animation = None;
            }
        }
    }
}

impl From<Color> for MutableColor {
    fn from(color: Color) -> Self {
        color.to_mutable()
    }
}

impl PartialEq for MutableColor {
    /// Value equality over the channels and the behavior tag; in-flight
    /// animation state is excluded. A gradient never equals a plain
    /// color, even with matching first-endpoint channels.
    fn eq(&self, other: &Self) -> bool {
        self.r == other.r
            && self.g == other.g
            && self.b == other.b
            && self.a == other.a
            && self.kind == other.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: u64 = 1_000_000;

    #[test]
    fn test_snap_recolor_has_no_pending_animation() {
        let mut color = Color::BLACK.to_mutable();
        color.recolor(Color::WHITE, None, DURATION).unwrap();

        assert_eq!(color.as_color(), Color::WHITE);
        assert!(!color.updating());
        assert!(!color.update(16));
    }

    #[test]
    fn test_snap_recolor_drops_in_flight_set() {
        let mut color = Color::BLACK.to_mutable();
        color
            .recolor(Color::WHITE, Some(Easing::Linear), DURATION)
            .unwrap();
        assert!(color.updating());

        color.recolor(Color::GRAY, None, DURATION).unwrap();
        assert!(!color.updating());
        assert_eq!(color.as_color(), Color::GRAY);
    }

    #[test]
    fn test_animated_recolor_completion_sequence() {
        let mut color = Color::BLACK.to_mutable();
        color
            .recolor(Color::WHITE, Some(Easing::Linear), DURATION)
            .unwrap();
        assert!(color.updating());

        // The tick that consumes the full duration leaves the channels
        // at the target but does not yet report completion...
        assert!(!color.update(DURATION));
        assert_eq!(color.as_color(), Color::WHITE);
        assert!(color.updating());

        // ...the next tick clears the set and reports it, exactly once.
        assert!(color.update(1));
        assert!(!color.updating());
        assert!(!color.update(1));
    }

    #[test]
    fn test_completion_is_driven_by_r_channel_only() {
        // All four channel animations share one duration, so the
        // r-channel flag deciding for everyone is observationally safe -
        // but it IS the r channel that decides. Documented coupling.
        let mut color = MutableColor::new(10, 200, 30, 255);
        color
            .recolor(Color::new(200, 10, 180, 255), Some(Easing::Linear), DURATION)
            .unwrap();

        assert!(!color.update(DURATION / 2));
        assert!(color.updating());
        assert!(!color.update(DURATION));
        assert!(color.update(1));
    }

    #[test]
    fn test_recolor_replaces_set_wholesale() {
        let mut color = Color::BLACK.to_mutable();
        color
            .recolor(Color::WHITE, Some(Easing::Linear), DURATION)
            .unwrap();
        let _ = color.update(DURATION / 2);

        // Restart toward a different target mid-flight.
        color
            .recolor(Color::new(0, 0, 255, 255), Some(Easing::Linear), DURATION)
            .unwrap();
        let _ = color.update(DURATION);
        assert!(color.update(1));
        assert_eq!(color.as_color(), Color::new(0, 0, 255, 255));
    }

    #[test]
    fn test_gradient_construction_and_accessors() {
        let gradient =
            MutableColor::gradient(Color::BLACK, Color::WHITE, Blend::default()).unwrap();
        assert!(gradient.is_gradient());
        assert_eq!(gradient.argb1(), Color::BLACK.argb());
        assert_eq!(gradient.argb2(), Some(Color::WHITE.argb()));
        assert_eq!(gradient.blend(), Some(Blend::TopLeftToBottomRight));
    }

    #[test]
    fn test_gradient_rejects_single_target_recolor() {
        let mut gradient =
            MutableColor::gradient(Color::BLACK, Color::WHITE, Blend::LeftToRight).unwrap();
        assert_eq!(
            gradient.recolor(Color::GRAY, None, DURATION),
            Err(ColorError::GradientEndpoint)
        );
    }

    #[test]
    fn test_gradient_endpoints_animate_independently() {
        let mut gradient =
            MutableColor::gradient(Color::BLACK, Color::WHITE, Blend::TopToBottom).unwrap();

        gradient
            .recolor_endpoint(2, Color::new(0, 0, 255, 255), Some(Easing::Linear), DURATION)
            .unwrap();
        let _ = gradient.update(DURATION);
        let _ = gradient.update(1);

        // Endpoint 1 untouched, endpoint 2 at its target.
        assert_eq!(gradient.argb1(), Color::BLACK.argb());
        assert_eq!(gradient.argb2(), Some(Color::new(0, 0, 255, 255).argb()));

        gradient
            .recolor_endpoint(1, Color::WHITE, None, DURATION)
            .unwrap();
        assert_eq!(gradient.argb1(), Color::WHITE.argb());
    }

    #[test]
    fn test_gradient_endpoint_index_validation() {
        let mut gradient =
            MutableColor::gradient(Color::BLACK, Color::WHITE, Blend::TopToBottom).unwrap();
        assert_eq!(
            gradient.recolor_endpoint(3, Color::GRAY, None, DURATION),
            Err(ColorError::EndpointOutOfRange(3))
        );
        assert_eq!(
            gradient.merge_endpoints(0, None, DURATION),
            Err(ColorError::EndpointOutOfRange(0))
        );

        let mut plain = Color::BLACK.to_mutable();
        assert_eq!(
            plain.recolor_endpoint(1, Color::GRAY, None, DURATION),
            Err(ColorError::NotAGradient)
        );
    }

    #[test]
    fn test_gradient_updating_counts_second_endpoint() {
        let mut gradient =
            MutableColor::gradient(Color::BLACK, Color::WHITE, Blend::TopToBottom).unwrap();
        gradient
            .recolor_endpoint(2, Color::GRAY, Some(Easing::Linear), DURATION)
            .unwrap();
        assert!(gradient.updating());
    }

    #[test]
    fn test_merge_endpoints() {
        let mut gradient =
            MutableColor::gradient(Color::BLACK, Color::WHITE, Blend::TopToBottom).unwrap();

        gradient.merge_endpoints(1, None, DURATION).unwrap();
        assert_eq!(gradient.argb2(), Some(Color::BLACK.argb()));

        let mut gradient =
            MutableColor::gradient(Color::BLACK, Color::WHITE, Blend::TopToBottom).unwrap();
        gradient.merge_endpoints(2, None, DURATION).unwrap();
        assert_eq!(gradient.argb1(), Color::WHITE.argb());
    }

    #[test]
    fn test_radial_blend_validation() {
        assert!(MutableColor::gradient(
            Color::BLACK,
            Color::WHITE,
            Blend::radial(50.0, 10.0)
        )
        .is_err());

        // Close radii: constructs, but carries a warning signal.
        let blend = Blend::radial(10.0, 12.0);
        assert!(blend.warning().is_some());
        assert!(MutableColor::gradient(Color::BLACK, Color::WHITE, blend).is_ok());

        let wide = Blend::radial(10.0, 100.0);
        assert!(wide.warning().is_none());
    }

    #[test]
    fn test_chroma_recolor_is_a_no_op() {
        let mut chroma = MutableColor::chroma(5_000, 1.0, 1.0, 255);
        let _ = chroma.update(500);
        let before = chroma.as_color();

        chroma
            .recolor(Color::WHITE, Some(Easing::Linear), DURATION)
            .unwrap();
        assert_eq!(chroma.as_color(), before);
        assert!(!chroma.updating());
    }

    #[test]
    fn test_chroma_cycles_back_over_one_period() {
        let speed = 10_000;
        let mut chroma = MutableColor::chroma(speed, 1.0, 1.0, 200);
        let _ = chroma.update(0);
        let start = chroma.as_color();

        let _ = chroma.update(speed);
        assert_eq!(chroma.as_color(), start);
        // Alpha stays fixed at the construction value.
        assert_eq!(chroma.as_color().a, 200);
    }

    #[test]
    fn test_chroma_update_flags() {
        let mut chroma = MutableColor::chroma(5_000, 1.0, 1.0, 255);
        assert!(chroma.always_updates());
        assert!(!chroma.updating());
        assert!(!chroma.update(1_000));
        assert!(!chroma.updating());
    }

    #[test]
    fn test_equality_ignores_animation_state() {
        let mut animating = Color::BLACK.to_mutable();
        animating
            .recolor(Color::WHITE, Some(Easing::Linear), DURATION)
            .unwrap();
        let still = Color::BLACK.to_mutable();
        assert_eq!(animating, still);
    }

    #[test]
    fn test_gradient_never_equals_plain() {
        let gradient =
            MutableColor::gradient(Color::BLACK, Color::WHITE, Blend::TopToBottom).unwrap();
        let plain = Color::BLACK.to_mutable();
        assert_ne!(gradient, plain);

        let same =
            MutableColor::gradient(Color::BLACK, Color::WHITE, Blend::TopToBottom).unwrap();
        assert_eq!(gradient, same);

        let other_blend =
            MutableColor::gradient(Color::BLACK, Color::WHITE, Blend::LeftToRight).unwrap();
        assert_ne!(gradient, other_blend);
    }
}
