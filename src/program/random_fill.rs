//! Random fill followed by eased color sets
//!
//! Entry paints every pixel a random color. Whenever no slot is running,
//! every pixel gets its own slot blending from its current color to a new
//! random one, each with its own duration and easing curve.

use embassy_time::Duration;

use crate::color::Rgb;
use crate::easing::Easing;

use super::{PixelBlend, ProgramContext, SlotAnimation};

/// Upper bound (exclusive) of every target channel
const PEAK: u8 = 128;

const MIN_DURATION_MS: u32 = 500;
const MAX_DURATION_MS: u32 = 800;

const EASINGS: [Easing; 3] = [Easing::CubicIn, Easing::CubicOut, Easing::QuadraticInOut];

pub(super) fn enter<const N: usize, const SLOTS: usize>(ctx: &mut ProgramContext<'_, N, SLOTS>) {
    for pixel in 0..N {
        let color = Rgb::new(
            ctx.rng.channel(255),
            ctx.rng.channel(255),
            ctx.rng.channel(255),
        );
        ctx.pixels.set(pixel, color);
    }
}

pub(super) fn tick<const N: usize, const SLOTS: usize>(ctx: &mut ProgramContext<'_, N, SLOTS>) {
    if !ctx.animator.is_any_active() {
        start_color_set(ctx);
    }
    ctx.run_animations();
}

fn start_color_set<const N: usize, const SLOTS: usize>(ctx: &mut ProgramContext<'_, N, SLOTS>) {
    for pixel in 0..N {
        let duration = Duration::from_millis(u64::from(
            ctx.rng.uniform_range(MIN_DURATION_MS, MAX_DURATION_MS),
        ));
        let target = Rgb::new(
            ctx.rng.channel(PEAK),
            ctx.rng.channel(PEAK),
            ctx.rng.channel(PEAK),
        );
        let easing = EASINGS[ctx.rng.index(EASINGS.len())];
        let pixel_blend = PixelBlend {
            from: ctx.pixels.color(pixel),
            to: target,
            pixel,
            easing,
        };

        if ctx
            .start(duration, SlotAnimation::PixelBlend(pixel_blend))
            .is_err()
        {
            break;
        }
    }
}
