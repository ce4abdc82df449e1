use libm::{fmodf, roundf};

use super::Rgb;

/// Color in HSL space with normalized components
///
/// `hue` is a fraction of a full turn (0.0 and 1.0 are both red),
/// `saturation` and `lightness` are in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert to 8-bit RGB
    ///
    /// Out-of-range components are clamped, hue is wrapped into `0.0..1.0`.
    pub fn to_rgb(self) -> Rgb {
        let hue = wrap_unit(self.hue);
        let saturation = self.saturation.clamp(0.0, 1.0);
        let lightness = self.lightness.clamp(0.0, 1.0);

        if saturation == 0.0 {
            let value = unit_to_u8(lightness);
            return Rgb::new(value, value, value);
        }

        let upper = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let lower = 2.0 * lightness - upper;

        Rgb::new(
            unit_to_u8(hue_to_channel(lower, upper, hue + 1.0 / 3.0)),
            unit_to_u8(hue_to_channel(lower, upper, hue)),
            unit_to_u8(hue_to_channel(lower, upper, hue - 1.0 / 3.0)),
        )
    }
}

impl From<Hsl> for Rgb {
    fn from(value: Hsl) -> Self {
        value.to_rgb()
    }
}

fn wrap_unit(value: f32) -> f32 {
    let wrapped = fmodf(value, 1.0);
    if wrapped < 0.0 { wrapped + 1.0 } else { wrapped }
}

fn hue_to_channel(lower: f32, upper: f32, hue: f32) -> f32 {
    let hue = wrap_unit(hue);
    if hue < 1.0 / 6.0 {
        lower + (upper - lower) * 6.0 * hue
    } else if hue < 0.5 {
        upper
    } else if hue < 2.0 / 3.0 {
        lower + (upper - lower) * (2.0 / 3.0 - hue) * 6.0
    } else {
        lower
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_u8(value: f32) -> u8 {
    roundf(value.clamp(0.0, 1.0) * 255.0) as u8
}
