use embassy_time::Duration;
use heapless::Vec;

use crate::color::{Rgb, rgb_from_u32};
use crate::easing::Easing;
use crate::program::{PROGRAM_COUNT, ProgramId};

/// Ordered list of programs the button cycles through
pub type Playlist = Vec<ProgramId, PROGRAM_COUNT>;

/// Tunables of the bouncing eye sweep
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    /// Time for the eye to cross the strip once
    pub duration: Duration,
    /// Curve applied to the crossing
    pub easing: Easing,
    /// Color of the eye before the first reversal
    pub color: Rgb,
    /// Interval of the fade-all timer that leaves the tail behind the eye
    pub fade_interval: Duration,
    /// Amount subtracted from every channel on each fade-all tick
    pub fade_amount: u8,
}

/// Tunables of the chasing comet
#[derive(Debug, Clone, Copy)]
pub struct TrailConfig {
    /// Time for the front to travel the whole strip
    pub cycle: Duration,
    /// Fade-out time of each pixel the front leaves behind
    pub pixel_fade: Duration,
    /// HSL lightness of the front color
    pub lightness: f32,
}

impl TrailConfig {
    /// Time the front stays on one pixel for a strip of `pixel_count` pixels
    pub fn step(&self, pixel_count: usize) -> Duration {
        let pixels = u64::try_from(pixel_count.max(1)).unwrap_or(u64::MAX);
        let millis = self.cycle.as_millis() / pixels;
        Duration::from_millis(millis.max(1))
    }
}

/// Tunables of the rotating gradient tail
#[derive(Debug, Clone, Copy)]
pub struct TailConfig {
    /// Number of pixels in the gradient, should be shorter than the strip
    pub length: usize,
    /// HSL lightness at the head of the tail (0.5 is full brightness)
    pub max_lightness: f32,
    /// Delay between single-pixel rotations
    pub rotate_interval: Duration,
}

/// Configuration for the animation engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub programs: Playlist,
    pub sweep: SweepConfig,
    pub trail: TrailConfig,
    pub tail: TailConfig,
    /// HSL lightness of the pulse colors (0.25 is normal)
    pub pulse_lightness: f32,
    /// HSL lightness of the sparkle colors
    pub sparkle_lightness: f32,
}

pub const DEFAULT_SWEEP: SweepConfig = SweepConfig {
    duration: Duration::from_millis(1500),
    easing: Easing::SinusoidalInOut,
    color: rgb_from_u32(0x7f_00_00),
    fade_interval: Duration::from_millis(20),
    fade_amount: 10,
};

pub const DEFAULT_TRAIL: TrailConfig = TrailConfig {
    cycle: Duration::from_millis(2000),
    pixel_fade: Duration::from_millis(300),
    lightness: 0.25,
};

pub const DEFAULT_TAIL: TailConfig = TailConfig {
    length: 20,
    max_lightness: 0.4,
    rotate_interval: Duration::from_millis(66),
};

impl EngineConfig {
    /// Default configuration with a custom playlist
    ///
    /// An empty playlist falls back to every program in order.
    pub fn with_programs(programs: &[ProgramId]) -> Self {
        let mut config = Self::default();
        if !programs.is_empty() {
            config.programs = programs.iter().copied().take(PROGRAM_COUNT).collect();
        }
        config
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            programs: ProgramId::ALL.iter().copied().collect(),
            sweep: DEFAULT_SWEEP,
            trail: DEFAULT_TRAIL,
            tail: DEFAULT_TAIL,
            pulse_lightness: 0.2,
            sparkle_lightness: 0.2,
        }
    }
}
