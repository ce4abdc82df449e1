//! Program system with compile-time known program variants
//!
//! Every program is a pair of plain functions, an entry action run once when
//! the program becomes active and a step action run on every tick. They are
//! looked up through [`ProgramId::handlers`], so switching programs never
//! allocates. Animations started by programs are stored in the slots as
//! [`SlotAnimation`] records and interpreted by a single dispatch function.

mod animation;
mod comet;
mod gradient;
mod machine;
mod off;
mod pulse;
mod random_fill;
mod sparkle;
mod sweep;

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use animation::{PixelBlend, SlotAnimation};
pub use comet::Trail;
pub use gradient::draw_tail;
pub use machine::ProgramMachine;
pub use sweep::{Direction, Sweep};

use crate::animator::{AnimationParam, Animator, AnimatorError, SlotHandle};
use crate::color::hsl_to_rgb;
use crate::config::EngineConfig;
use crate::pixels::PixelBuffer;
use crate::random::Random;

const PROGRAM_NAME_RANDOM_FILL: &str = "random_fill";
const PROGRAM_NAME_EYE_SWEEP: &str = "eye_sweep";
const PROGRAM_NAME_PULSE_FADE: &str = "pulse_fade";
const PROGRAM_NAME_COMET_TRAIL: &str = "comet_trail";
const PROGRAM_NAME_SPARKLE: &str = "sparkle";
const PROGRAM_NAME_GRADIENT_ROTATE: &str = "gradient_rotate";
const PROGRAM_NAME_OFF: &str = "off";

const PROGRAM_ID_RANDOM_FILL: u8 = 0;
const PROGRAM_ID_EYE_SWEEP: u8 = 1;
const PROGRAM_ID_PULSE_FADE: u8 = 2;
const PROGRAM_ID_COMET_TRAIL: u8 = 3;
const PROGRAM_ID_SPARKLE: u8 = 4;
const PROGRAM_ID_GRADIENT_ROTATE: u8 = 5;
const PROGRAM_ID_OFF: u8 = 6;

/// Number of known programs
pub const PROGRAM_COUNT: usize = 7;

/// Known programs, in button order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ProgramId {
    /// Random fill, then eased per-pixel color sets
    RandomFill = PROGRAM_ID_RANDOM_FILL,
    /// Bouncing eye leaving a fading streak
    EyeSweep = PROGRAM_ID_EYE_SWEEP,
    /// Whole strip pulsing between random hues and black
    PulseFade = PROGRAM_ID_PULSE_FADE,
    /// Chasing comet with a trailing fade
    CometTrail = PROGRAM_ID_COMET_TRAIL,
    /// Random pixel subsets blending to new hues
    Sparkle = PROGRAM_ID_SPARKLE,
    /// Static gradient tail rotated around the strip
    GradientRotate = PROGRAM_ID_GRADIENT_ROTATE,
    /// Everything off
    Off = PROGRAM_ID_OFF,
}

impl ProgramId {
    pub const ALL: [Self; PROGRAM_COUNT] = [
        Self::RandomFill,
        Self::EyeSweep,
        Self::PulseFade,
        Self::CometTrail,
        Self::Sparkle,
        Self::GradientRotate,
        Self::Off,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PROGRAM_ID_RANDOM_FILL => Self::RandomFill,
            PROGRAM_ID_EYE_SWEEP => Self::EyeSweep,
            PROGRAM_ID_PULSE_FADE => Self::PulseFade,
            PROGRAM_ID_COMET_TRAIL => Self::CometTrail,
            PROGRAM_ID_SPARKLE => Self::Sparkle,
            PROGRAM_ID_GRADIENT_ROTATE => Self::GradientRotate,
            PROGRAM_ID_OFF => Self::Off,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RandomFill => PROGRAM_NAME_RANDOM_FILL,
            Self::EyeSweep => PROGRAM_NAME_EYE_SWEEP,
            Self::PulseFade => PROGRAM_NAME_PULSE_FADE,
            Self::CometTrail => PROGRAM_NAME_COMET_TRAIL,
            Self::Sparkle => PROGRAM_NAME_SPARKLE,
            Self::GradientRotate => PROGRAM_NAME_GRADIENT_ROTATE,
            Self::Off => PROGRAM_NAME_OFF,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PROGRAM_NAME_RANDOM_FILL => Some(Self::RandomFill),
            PROGRAM_NAME_EYE_SWEEP => Some(Self::EyeSweep),
            PROGRAM_NAME_PULSE_FADE => Some(Self::PulseFade),
            PROGRAM_NAME_COMET_TRAIL => Some(Self::CometTrail),
            PROGRAM_NAME_SPARKLE => Some(Self::Sparkle),
            PROGRAM_NAME_GRADIENT_ROTATE => Some(Self::GradientRotate),
            PROGRAM_NAME_OFF => Some(Self::Off),
            _ => None,
        }
    }

    /// Entry and step actions of the program
    pub fn handlers<const N: usize, const SLOTS: usize>(self) -> ProgramHandlers<N, SLOTS> {
        match self {
            Self::RandomFill => ProgramHandlers {
                reseed: true,
                enter: random_fill::enter::<N, SLOTS>,
                tick: random_fill::tick::<N, SLOTS>,
            },
            Self::EyeSweep => ProgramHandlers {
                reseed: false,
                enter: sweep::enter::<N, SLOTS>,
                tick: run_animations::<N, SLOTS>,
            },
            Self::PulseFade => ProgramHandlers {
                reseed: true,
                enter: pulse::enter::<N, SLOTS>,
                tick: pulse::tick::<N, SLOTS>,
            },
            Self::CometTrail => ProgramHandlers {
                reseed: true,
                enter: comet::enter::<N, SLOTS>,
                tick: run_animations::<N, SLOTS>,
            },
            Self::Sparkle => ProgramHandlers {
                reseed: true,
                enter: sparkle::enter::<N, SLOTS>,
                tick: sparkle::tick::<N, SLOTS>,
            },
            Self::GradientRotate => ProgramHandlers {
                reseed: true,
                enter: gradient::enter::<N, SLOTS>,
                tick: run_animations::<N, SLOTS>,
            },
            Self::Off => ProgramHandlers {
                reseed: false,
                enter: off::enter::<N, SLOTS>,
                tick: off::tick::<N, SLOTS>,
            },
        }
    }
}

/// Entry or step action of a program
pub type ProgramFn<const N: usize, const SLOTS: usize> = fn(&mut ProgramContext<'_, N, SLOTS>);

/// Table row of a program
#[derive(Clone, Copy)]
pub struct ProgramHandlers<const N: usize, const SLOTS: usize> {
    /// Reseed the random source from entropy before `enter`
    pub reseed: bool,
    /// Runs once on the first tick after the program becomes active
    pub enter: ProgramFn<N, SLOTS>,
    /// Runs on every tick while the program is active
    pub tick: ProgramFn<N, SLOTS>,
}

/// Program-local state that outlives a single tick
#[derive(Debug, Clone)]
pub struct ProgramScratch {
    /// Eye position, direction and color
    pub sweep: Sweep,
    /// Comet front position and color
    pub trail: Trail,
    /// Next pulse fades towards a color rather than towards black
    pub fade_to_color: bool,
}

impl ProgramScratch {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            sweep: Sweep::new(config.sweep.color, config.sweep.easing),
            trail: Trail::new(hsl_to_rgb(0.0, 1.0, config.trail.lightness)),
            fade_to_color: true,
        }
    }
}

/// Everything a program may touch during one tick
pub struct ProgramContext<'a, const N: usize, const SLOTS: usize> {
    pub animator: &'a mut Animator<SlotAnimation, SLOTS>,
    pub pixels: &'a mut PixelBuffer<N>,
    pub scratch: &'a mut ProgramScratch,
    pub rng: &'a mut Random,
    pub config: &'a EngineConfig,
    pub now: Instant,
}

impl<const N: usize, const SLOTS: usize> ProgramContext<'_, N, SLOTS> {
    /// Start an animation in the lowest free slot
    ///
    /// Capacity exhaustion is reported but harmless: the effect is simply
    /// skipped for this tick.
    pub fn start(
        &mut self,
        duration: Duration,
        animation: SlotAnimation,
    ) -> Result<SlotHandle, AnimatorError> {
        let result = self.animator.start(duration, animation, self.now);
        #[cfg(feature = "esp32-log")]
        if let Err(err) = result {
            println!("[ProgramContext.start] skipping animation: {}", err);
        }
        result
    }

    /// Advance every running slot by one tick
    pub fn run_animations(&mut self) {
        let mut stage = Stage {
            pixels: &mut *self.pixels,
            scratch: &mut *self.scratch,
            rng: &mut *self.rng,
            config: self.config,
            now: self.now,
        };
        self.animator.update(self.now, |animator, param| {
            animation::animate(animator, &mut stage, param);
        });
    }
}

/// Step action of programs driven purely by their slots
fn run_animations<const N: usize, const SLOTS: usize>(ctx: &mut ProgramContext<'_, N, SLOTS>) {
    ctx.run_animations();
}

/// State visible to slot animations while the animator is being advanced
pub(crate) struct Stage<'a, const N: usize> {
    pub(crate) pixels: &'a mut PixelBuffer<N>,
    pub(crate) scratch: &'a mut ProgramScratch,
    pub(crate) rng: &'a mut Random,
    pub(crate) config: &'a EngineConfig,
    pub(crate) now: Instant,
}

pub(crate) type Param = AnimationParam<SlotAnimation>;
