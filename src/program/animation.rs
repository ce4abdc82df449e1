use crate::animator::Animator;
use crate::color::{Rgb, blend};
use crate::easing::Easing;
use crate::gamma::gamma_correct;

use super::{Param, Stage, comet, gradient, sweep};

/// Blend of a single pixel between two colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelBlend {
    pub from: Rgb,
    pub to: Rgb,
    pub pixel: usize,
    pub easing: Easing,
}

impl PixelBlend {
    /// Color at linear `progress`, after easing
    pub fn color_at(&self, progress: f32) -> Rgb {
        blend(self.from, self.to, self.easing.apply(progress))
    }
}

/// Animation record stored in a slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotAnimation {
    /// One pixel blending between two colors
    PixelBlend(PixelBlend),
    /// One pixel blending between two colors, gamma-corrected on output
    GammaFade(PixelBlend),
    /// Every pixel blending between two colors
    StripBlend { from: Rgb, to: Rgb },
    /// Repeating timer darkening the whole strip on completion
    FadeAll,
    /// Eye position of the bouncing sweep
    Sweep,
    /// Repeating timer moving the comet front
    TrailStep,
    /// Repeating timer rotating the strip by one pixel
    Rotate,
}

/// Apply one slot update to the stage
pub(super) fn animate<const N: usize, const SLOTS: usize>(
    animator: &mut Animator<SlotAnimation, SLOTS>,
    stage: &mut Stage<'_, N>,
    param: Param,
) {
    match param.animation {
        SlotAnimation::PixelBlend(pixel_blend) => {
            stage
                .pixels
                .set(pixel_blend.pixel, pixel_blend.color_at(param.progress));
        }
        SlotAnimation::GammaFade(pixel_blend) => {
            let color = gamma_correct(pixel_blend.color_at(param.progress));
            stage.pixels.set(pixel_blend.pixel, color);
        }
        SlotAnimation::StripBlend { from, to } => {
            stage.pixels.fill(blend(from, to, param.progress));
        }
        SlotAnimation::FadeAll => {
            if param.is_completed() {
                stage.pixels.darken_all(stage.config.sweep.fade_amount);
                let _ = animator.restart(param.handle, stage.now);
            }
        }
        SlotAnimation::Sweep => sweep::animate(animator, stage, param),
        SlotAnimation::TrailStep => comet::animate(animator, stage, param),
        SlotAnimation::Rotate => gradient::animate(animator, stage, param),
    }
}
