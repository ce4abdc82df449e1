//! WS2812 gamma correction
//!
//! Thin wrappers over the gamma table shipped with `smart-leds`.

use core::iter;

use crate::color::Rgb;

/// Gamma-correct a single color
pub fn gamma_correct(color: Rgb) -> Rgb {
    smart_leds::gamma(iter::once(color))
        .next()
        .unwrap_or(color)
}

/// Gamma-correct a single channel value
pub fn ws2812_lut(value: u8) -> u8 {
    gamma_correct(Rgb::new(value, value, value)).r
}
