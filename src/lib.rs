#![no_std]

pub mod animator;
pub mod color;
pub mod config;
pub mod easing;
pub mod engine;
pub mod frame_scheduler;
pub mod gamma;
pub mod input;
pub mod pixels;
pub mod program;
pub mod random;

pub use animator::{AnimationParam, AnimationState, Animator, AnimatorError, SlotHandle};
pub use config::{EngineConfig, Playlist};
pub use easing::Easing;
pub use engine::AnimationEngine;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use gamma::{gamma_correct, ws2812_lut};
pub use input::{Button, ButtonEvent, ButtonPoller, EdgeDetector, InputQueue};
pub use pixels::PixelBuffer;
pub use program::{PROGRAM_COUNT, ProgramId, SlotAnimation};
pub use random::{EntropySource, Random, gather_seed};

pub use color::{Hsl, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait and calls `write` once
/// per tick with the whole pixel buffer.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
