mod hsl;
mod utils;

use smart_leds::RGB8;

pub use hsl::Hsl;
pub use utils::{BLACK, blend, darken, hsl_to_rgb, rgb_from_u32};

pub type Rgb = RGB8;
