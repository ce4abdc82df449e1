//! Bouncing eye sweep
//!
//! One slot moves the eye across the strip under an eased curve and reverses
//! direction with a new random color every time it completes. A second,
//! much faster slot darkens the whole strip on every completion, which turns
//! the painted streak into a fading tail.

use crate::animator::Animator;
use crate::color::Rgb;
use crate::easing::Easing;
use crate::pixels::PixelBuffer;

use super::{Param, ProgramContext, SlotAnimation, Stage};

const FADE_SLOT: usize = 0;
const MOVE_SLOT: usize = 1;

/// Direction of travel along the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards higher indices
    Forward,
    /// Towards lower indices
    Backward,
}

impl Direction {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Position, direction and color of the sweeping eye
#[derive(Debug, Clone)]
pub struct Sweep {
    position: usize,
    direction: Direction,
    color: Rgb,
    easing: Easing,
}

impl Sweep {
    /// Eye at pixel 0 moving forward
    pub const fn new(color: Rgb, easing: Easing) -> Self {
        Self {
            position: 0,
            direction: Direction::Forward,
            color,
            easing,
        }
    }

    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Pixel the eye occupies at linear `progress` on a strip of `pixel_count`
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn target(&self, progress: f32, pixel_count: usize) -> usize {
        if pixel_count == 0 {
            return 0;
        }
        let eased = self.easing.apply(progress);
        let travelled = match self.direction {
            Direction::Forward => eased,
            Direction::Backward => 1.0 - eased,
        };
        let index = (travelled * pixel_count as f32) as usize;
        index.min(pixel_count - 1)
    }

    /// Move the eye to its position at `progress`
    ///
    /// Every pixel between the previous and the new position, both included,
    /// is painted, so a fast eye leaves a continuous streak instead of
    /// isolated dots. Returns the new position.
    pub fn advance<const N: usize>(&mut self, progress: f32, pixels: &mut PixelBuffer<N>) -> usize {
        if N == 0 {
            return 0;
        }
        let next = self.target(progress, N);
        let (low, high) = if next >= self.position {
            (self.position, next)
        } else {
            (next, self.position)
        };
        for index in low..=high.min(N - 1) {
            pixels.set(index, self.color);
        }
        self.position = next;
        next
    }

    /// Turn around and continue with a new color
    pub fn reverse(&mut self, color: Rgb) {
        self.direction = self.direction.reversed();
        self.color = color;
    }

    /// Put the eye where a fresh crossing in the current direction begins
    pub fn rewind(&mut self, pixel_count: usize) {
        self.position = self.target(0.0, pixel_count);
    }
}

pub(super) fn enter<const N: usize, const SLOTS: usize>(ctx: &mut ProgramContext<'_, N, SLOTS>) {
    ctx.scratch.sweep.rewind(N);

    let sweep = ctx.config.sweep;
    let _ = ctx
        .animator
        .start_at(FADE_SLOT, sweep.fade_interval, SlotAnimation::FadeAll, ctx.now);
    let _ = ctx
        .animator
        .start_at(MOVE_SLOT, sweep.duration, SlotAnimation::Sweep, ctx.now);
}

pub(super) fn animate<const N: usize, const SLOTS: usize>(
    animator: &mut Animator<SlotAnimation, SLOTS>,
    stage: &mut Stage<'_, N>,
    param: Param,
) {
    stage.scratch.sweep.advance(param.progress, stage.pixels);

    if param.is_completed() {
        let color = Rgb::new(
            stage.rng.channel(255),
            stage.rng.channel(255),
            stage.rng.channel(255),
        );
        stage.scratch.sweep.reverse(color);
        let _ = animator.restart(param.handle, stage.now);
    }
}
