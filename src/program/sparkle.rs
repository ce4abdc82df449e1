//! Random subset sparkle
//!
//! Picks a random number of distinct pixels and blends each of them to a
//! random hue; all other pixels blend towards black at the same time. Every
//! pixel gets a slot on every round, with its own random duration.

use embassy_time::Duration;

use crate::color::{BLACK, hsl_to_rgb};
use crate::easing::Easing;

use super::{PixelBlend, ProgramContext, SlotAnimation};

const MIN_DURATION_MS: u32 = 100;
const MAX_DURATION_MS: u32 = 400;

pub(super) fn enter<const N: usize, const SLOTS: usize>(_ctx: &mut ProgramContext<'_, N, SLOTS>) {}

pub(super) fn tick<const N: usize, const SLOTS: usize>(ctx: &mut ProgramContext<'_, N, SLOTS>) {
    if !ctx.animator.is_any_active() {
        start_round(ctx);
    }
    ctx.run_animations();
}

fn start_round<const N: usize, const SLOTS: usize>(ctx: &mut ProgramContext<'_, N, SLOTS>) {
    let count = ctx.rng.index(N);
    let mut order: [usize; N] = core::array::from_fn(|index| index);
    ctx.rng.shuffle(&mut order);

    let mut selected = [false; N];
    for &pixel in &order[..count] {
        selected[pixel] = true;
    }

    let lightness = ctx.config.sparkle_lightness;
    for (pixel, is_selected) in selected.into_iter().enumerate() {
        let to = if is_selected {
            hsl_to_rgb(ctx.rng.hue(), 1.0, lightness)
        } else {
            BLACK
        };
        let duration = Duration::from_millis(u64::from(
            ctx.rng.uniform_range(MIN_DURATION_MS, MAX_DURATION_MS),
        ));
        let pixel_blend = PixelBlend {
            from: ctx.pixels.color(pixel),
            to,
            pixel,
            easing: Easing::Linear,
        };

        if ctx
            .start(duration, SlotAnimation::PixelBlend(pixel_blend))
            .is_err()
        {
            break;
        }
    }
}
