//! Chasing comet with a trailing fade
//!
//! A repeating timer slot moves the front one pixel per completion. Each
//! move borrows a free slot to fade the new front pixel from the front color
//! to black; when none is free the fade is skipped and a gap shows in the
//! tail.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animator::Animator;
use crate::color::{BLACK, Rgb, hsl_to_rgb};
use crate::easing::Easing;
use crate::random::Random;

use super::{Param, PixelBlend, ProgramContext, SlotAnimation, Stage};

/// Front of the comet
#[derive(Debug, Clone, Copy)]
pub struct Trail {
    front: usize,
    color: Rgb,
}

impl Trail {
    pub const fn new(color: Rgb) -> Self {
        Self { front: 0, color }
    }

    pub const fn front(&self) -> usize {
        self.front
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Move the front by one pixel, wrapping at `pixel_count`
    ///
    /// A new random hue at `lightness` is picked each time the front wraps
    /// to pixel 0. Returns the new front.
    pub fn step(&mut self, pixel_count: usize, rng: &mut Random, lightness: f32) -> usize {
        if pixel_count == 0 {
            return 0;
        }
        self.front = (self.front + 1) % pixel_count;
        if self.front == 0 {
            self.color = hsl_to_rgb(rng.hue(), 1.0, lightness);
        }
        self.front
    }
}

pub(super) fn enter<const N: usize, const SLOTS: usize>(ctx: &mut ProgramContext<'_, N, SLOTS>) {
    let color = hsl_to_rgb(ctx.rng.hue(), 1.0, ctx.config.trail.lightness);
    ctx.scratch.trail = Trail::new(color);

    let step = ctx.config.trail.step(N);
    let _ = ctx.start(step, SlotAnimation::TrailStep);
}

pub(super) fn animate<const N: usize, const SLOTS: usize>(
    animator: &mut Animator<SlotAnimation, SLOTS>,
    stage: &mut Stage<'_, N>,
    param: Param,
) {
    if !param.is_completed() {
        return;
    }
    let _ = animator.restart(param.handle, stage.now);

    let trail = &mut stage.scratch.trail;
    let front = trail.step(N, stage.rng, stage.config.trail.lightness);
    let fade = PixelBlend {
        from: trail.color(),
        to: BLACK,
        pixel: front,
        easing: Easing::Linear,
    };

    let started = animator.start(
        stage.config.trail.pixel_fade,
        SlotAnimation::GammaFade(fade),
        stage.now,
    );
    #[cfg(feature = "esp32-log")]
    if let Err(err) = started {
        println!("[comet] fade of pixel {} skipped: {}", front, err);
    }
    #[cfg(not(feature = "esp32-log"))]
    let _ = started;
}
