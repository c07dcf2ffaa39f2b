//! The scalar animation primitive.
//!
//! An [`Animation`] interpolates one scalar from a start to an end value
//! over a fixed duration, shaped by an [`Easing`] curve. The host loop
//! drives it by calling [`Animation::update`] with elapsed nanoseconds
//! once per tick; there is no timer thread and no blocking wait.

/// Easing function applied to animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Exponential ease-out (sharp snap to target).
    #[default]
    ExponentialOut,
    /// Exponential ease-in (accelerating).
    ExponentialIn,
    /// Exponential ease-in-out.
    ExponentialInOut,
    /// Jump straight to the target.
    Instant,
}

impl Easing {
    /// Applies the easing function to a progress value, clamped to [0, 1].
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::ExponentialOut => {
                // 1 - 2^(-10t)
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Self::ExponentialIn => {
                // 2^(10(t-1))
                if t <= 0.0 {
                    0.0
                } else {
                    2.0_f32.powf(10.0 * (t - 1.0))
                }
            }
            Self::ExponentialInOut => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else if t < 0.5 {
                    2.0_f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0_f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Self::Instant => 1.0,
        }
    }

    /// Creates an animation from `start` to `end` over `duration_nanos`,
    /// shaped by this easing.
    ///
    /// This is the factory capability consumed by animatable values: one
    /// handle per scalar, owned exclusively by the value it animates.
    #[must_use]
    pub const fn animate(self, duration_nanos: u64, start: f32, end: f32) -> Animation {
        Animation {
            easing: self,
            start,
            end,
            duration_nanos,
            elapsed_nanos: 0,
        }
    }
}

/// A single time-driven scalar interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    /// Easing curve shaping the progress.
    easing: Easing,
    /// Value at progress 0.
    start: f32,
    /// Value at progress 1.
    end: f32,
    /// Total duration in nanoseconds.
    duration_nanos: u64,
    /// Elapsed time, saturating at the duration.
    elapsed_nanos: u64,
}

impl Animation {
    /// Advances the animation by `delta_nanos` and returns the current
    /// value.
    ///
    /// Elapsed time saturates at the duration, so driving a finished
    /// animation keeps returning the end value.
    pub fn update(&mut self, delta_nanos: u64) -> f32 {
        self.elapsed_nanos = self
            .elapsed_nanos
            .saturating_add(delta_nanos)
            .min(self.duration_nanos);
        self.value()
    }

    /// Returns the current value without advancing time.
    #[must_use]
    pub fn value(&self) -> f32 {
        let progress = if self.duration_nanos == 0 {
            1.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            {
                self.elapsed_nanos as f32 / self.duration_nanos as f32
            }
        };
        self.start + (self.end - self.start) * self.easing.apply(progress)
    }

    /// Returns true once the full duration has elapsed.
    ///
    /// A zero-duration animation is finished from the start.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.elapsed_nanos >= self.duration_nanos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_out_is_sharp() {
        // At 30% progress, exponential-out should be >80% done.
        let value = Easing::ExponentialOut.apply(0.3);
        assert!(value > 0.8, "exponential out should snap quickly: {value}");
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::ExponentialOut,
            Easing::ExponentialIn,
            Easing::ExponentialInOut,
        ] {
            assert!((easing.apply(0.0) - 0.0).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
        assert!((Easing::Instant.apply(0.0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_animation_reaches_end() {
        let mut anim = Easing::Linear.animate(1_000, 0.0, 100.0);
        assert!(!anim.is_finished());

        let value = anim.update(1_000);
        assert!((value - 100.0).abs() < 0.01);
        assert!(anim.is_finished());
    }

    #[test]
    fn test_animation_saturates_past_duration() {
        let mut anim = Easing::Linear.animate(1_000, 0.0, 10.0);
        let value = anim.update(5_000);
        assert!((value - 10.0).abs() < f32::EPSILON);
        assert!(anim.is_finished());
    }

    #[test]
    fn test_linear_midpoint() {
        let mut anim = Easing::Linear.animate(1_000, 0.0, 100.0);
        let value = anim.update(500);
        assert!((value - 50.0).abs() < 0.01);
        assert!(!anim.is_finished());
    }

    #[test]
    fn test_zero_duration_is_finished_immediately() {
        let anim = Easing::Linear.animate(0, 3.0, 7.0);
        assert!(anim.is_finished());
        assert!((anim.value() - 7.0).abs() < f32::EPSILON);
    }
}
