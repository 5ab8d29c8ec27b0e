//! Easing curves for bookmark transitions.
//!
//! Each curve maps normalized time in `[0, 1]` to normalized progress in
//! `[0, 1]`, hitting both endpoints exactly.

/// Easing curve variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Hermite smoothstep: slow start and slow end.
    SmoothStep,
    /// Cubic Bézier through (0, c1, c2, 1).
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First inner control value.
        c1: f32,
        /// Second inner control value.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default camera easing: smoothstep, so flights neither jerk away from
    /// the start nor slam into the destination.
    pub const DEFAULT: EasingFunction = EasingFunction::SmoothStep;

    /// Evaluate the curve at time `t`.
    ///
    /// Input is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match *self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::SmoothStep => t * t * (3.0 - 2.0 * t),
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
