//! Whole-strip pulse
//!
//! Alternates between blending the strip to a random hue and blending it
//! back to black, each leg with a random duration.

use embassy_time::Duration;

use crate::color::{BLACK, hsl_to_rgb};

use super::{ProgramContext, SlotAnimation};

const TO_COLOR_MIN_MS: u32 = 800;
const TO_COLOR_MAX_MS: u32 = 2000;
const TO_BLACK_MIN_MS: u32 = 600;
const TO_BLACK_MAX_MS: u32 = 700;

pub(super) fn enter<const N: usize, const SLOTS: usize>(ctx: &mut ProgramContext<'_, N, SLOTS>) {
    ctx.scratch.fade_to_color = true;
}

pub(super) fn tick<const N: usize, const SLOTS: usize>(ctx: &mut ProgramContext<'_, N, SLOTS>) {
    if !ctx.animator.is_any_active() {
        start_pulse(ctx);
    }
    ctx.run_animations();
}

fn start_pulse<const N: usize, const SLOTS: usize>(ctx: &mut ProgramContext<'_, N, SLOTS>) {
    let from = ctx.pixels.color(0);
    let (to, millis) = if ctx.scratch.fade_to_color {
        let hue = ctx.rng.hue();
        (
            hsl_to_rgb(hue, 1.0, ctx.config.pulse_lightness),
            ctx.rng.uniform_range(TO_COLOR_MIN_MS, TO_COLOR_MAX_MS),
        )
    } else {
        (BLACK, ctx.rng.uniform_range(TO_BLACK_MIN_MS, TO_BLACK_MAX_MS))
    };

    let duration = Duration::from_millis(u64::from(millis));
    if ctx.start(duration, SlotAnimation::StripBlend { from, to }).is_ok() {
        ctx.scratch.fade_to_color = !ctx.scratch.fade_to_color;
    }
}
