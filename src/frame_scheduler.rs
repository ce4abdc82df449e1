//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::engine::AnimationEngine;
use crate::input::InputReceiver;
use crate::random::EntropySource;
use crate::OutputDriver;

/// Default frame duration, the shortest yield of the frame loop.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Frame loop body: input, program step and output.
///
/// Each tick:
/// - Drains queued button events and switches programs accordingly
/// - Advances the engine by one tick
/// - Writes the pixel buffer to the output driver
/// - Tracks the next deadline with drift correction
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(engine, driver, INPUT.receiver());
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<
    'a,
    O: OutputDriver,
    E: EntropySource,
    const N: usize,
    const SLOTS: usize,
    const INPUT_QUEUE_SIZE: usize,
> {
    output: O,
    engine: AnimationEngine<E, N, SLOTS>,
    input: InputReceiver<'a, INPUT_QUEUE_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O, E, const N: usize, const SLOTS: usize, const INPUT_QUEUE_SIZE: usize>
    FrameScheduler<'a, O, E, N, SLOTS, INPUT_QUEUE_SIZE>
where
    O: OutputDriver,
    E: EntropySource,
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` for frame timing.
    pub fn new(
        engine: AnimationEngine<E, N, SLOTS>,
        driver: O,
        input: InputReceiver<'a, INPUT_QUEUE_SIZE>,
    ) -> Self {
        Self::with_frame_duration(engine, driver, input, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        engine: AnimationEngine<E, N, SLOTS>,
        driver: O,
        input: InputReceiver<'a, INPUT_QUEUE_SIZE>,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            engine,
            input,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Skip the backlog after long stalls instead of bursting to catch up
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        while let Ok(event) = self.input.try_receive() {
            self.engine.handle_event(event);
        }

        let frame = self.engine.tick(now);
        self.output.write(frame);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &AnimationEngine<E, N, SLOTS> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut AnimationEngine<E, N, SLOTS> {
        &mut self.engine
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }
}
