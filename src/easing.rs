//! Time-remapping curves
//!
//! Each curve maps linear progress in `0.0..=1.0` onto eased progress in the
//! same range, with `apply(0.0) == 0.0` and `apply(1.0) == 1.0`.

use core::f32::consts::PI;

use libm::cosf;

/// Named easing curve stored in animation slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Identity curve
    #[default]
    Linear,
    /// Half cosine wave, slow at both ends
    SinusoidalInOut,
    /// Accelerating cubic
    CubicIn,
    /// Decelerating cubic
    CubicOut,
    /// Quadratic acceleration for the first half, deceleration for the second
    QuadraticInOut,
}

impl Easing {
    /// Apply the curve to `progress`, clamped to `0.0..=1.0`
    #[must_use]
    pub fn apply(self, progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);

        let eased = match self {
            Self::Linear => t,
            Self::SinusoidalInOut => -0.5 * (cosf(PI * t) - 1.0),
            Self::CubicIn => t * t * t,
            Self::CubicOut => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Self::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = 2.0 * t - 2.0;
                    1.0 - 0.5 * u * u
                }
            }
        };

        eased.clamp(0.0, 1.0)
    }
}
