//! Rotating gradient tail
//!
//! Entry draws a hue-constant lightness ramp into the first pixels of an
//! otherwise dark strip. Afterwards a repeating timer slot rotates the whole
//! buffer by one pixel per completion; the colors are never recomputed.

use crate::animator::Animator;
use crate::color::hsl_to_rgb;
use crate::config::TailConfig;
use crate::gamma::gamma_correct;
use crate::pixels::PixelBuffer;

use super::{Param, ProgramContext, SlotAnimation, Stage};

/// Draw the gradient tail into the leading pixels
///
/// Pixel `i` of the tail gets lightness `i * max_lightness / length`, so the
/// ramp starts dark and brightens towards the head.
#[allow(clippy::cast_precision_loss)]
pub fn draw_tail<const N: usize>(pixels: &mut PixelBuffer<N>, hue: f32, tail: &TailConfig) {
    if tail.length == 0 {
        return;
    }
    for index in 0..tail.length.min(N) {
        let lightness = index as f32 * tail.max_lightness / tail.length as f32;
        pixels.set(index, gamma_correct(hsl_to_rgb(hue, 1.0, lightness)));
    }
}

pub(super) fn enter<const N: usize, const SLOTS: usize>(ctx: &mut ProgramContext<'_, N, SLOTS>) {
    ctx.pixels.clear();
    let hue = ctx.rng.hue();
    draw_tail(ctx.pixels, hue, &ctx.config.tail);

    let interval = ctx.config.tail.rotate_interval;
    let _ = ctx.start(interval, SlotAnimation::Rotate);
}

pub(super) fn animate<const N: usize, const SLOTS: usize>(
    animator: &mut Animator<SlotAnimation, SLOTS>,
    stage: &mut Stage<'_, N>,
    param: Param,
) {
    if param.is_completed() {
        let _ = animator.restart(param.handle, stage.now);
        stage.pixels.rotate_right(1);
    }
}
