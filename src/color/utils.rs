use libm::roundf;

use crate::color::{Hsl, Rgb};

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Linear blend of two colors
///
/// # Arguments
/// * `a` - Color at `progress == 0.0`
/// * `b` - Color at `progress == 1.0`
/// * `progress` - Blend factor, clamped to `0.0..=1.0`
pub fn blend(a: Rgb, b: Rgb, progress: f32) -> Rgb {
    let progress = progress.clamp(0.0, 1.0);
    Rgb {
        r: blend_channel(a.r, b.r, progress),
        g: blend_channel(a.g, b.g, progress),
        b: blend_channel(a.b, b.b, progress),
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend_channel(a: u8, b: u8, progress: f32) -> u8 {
    let a = f32::from(a);
    let b = f32::from(b);
    roundf(a + (b - a) * progress).clamp(0.0, 255.0) as u8
}

/// Subtract `amount` from every channel, stopping at zero
#[inline]
pub const fn darken(color: Rgb, amount: u8) -> Rgb {
    Rgb {
        r: color.r.saturating_sub(amount),
        g: color.g.saturating_sub(amount),
        b: color.b.saturating_sub(amount),
    }
}

/// Shorthand for `Hsl::new(hue, saturation, lightness).to_rgb()`
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Rgb {
    Hsl::new(hue, saturation, lightness).to_rgb()
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
