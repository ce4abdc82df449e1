use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animator::Animator;
use crate::color::Rgb;
use crate::config::EngineConfig;
use crate::input::ButtonEvent;
use crate::pixels::PixelBuffer;
use crate::program::{ProgramContext, ProgramId, ProgramMachine, ProgramScratch, SlotAnimation};
use crate::random::{EntropySource, Random, gather_seed};

/// Animation engine - owns the slots, the pixel buffer and the program state
///
/// `N` is the number of pixels on the strip, `SLOTS` the number of animation
/// slots. Programs that animate every pixel individually need `SLOTS >= N`;
/// with fewer slots the excess pixels are skipped on each round.
pub struct AnimationEngine<E: EntropySource, const N: usize, const SLOTS: usize> {
    // External dependencies and configuration
    entropy: E,
    config: EngineConfig,

    // Internal state
    machine: ProgramMachine,
    scratch: ProgramScratch,
    animator: Animator<SlotAnimation, SLOTS>,
    pixels: PixelBuffer<N>,
    rng: Random,
}

impl<E: EntropySource, const N: usize, const SLOTS: usize> AnimationEngine<E, N, SLOTS> {
    /// Create a new engine positioned on the first program of the playlist
    ///
    /// The random source is seeded from `entropy` right away; programs
    /// that reseed do so again on entry.
    pub fn new(mut entropy: E, config: EngineConfig) -> Self {
        let seed = gather_seed(&mut entropy);
        Self {
            entropy,
            machine: ProgramMachine::new(config.programs.clone()),
            scratch: ProgramScratch::new(&config),
            animator: Animator::new(),
            pixels: PixelBuffer::new(),
            rng: Random::with_seed(u64::from(seed)),
            config,
        }
    }

    /// Advance the active program by one tick
    ///
    /// Runs the entry action first if the program has just become active.
    /// Returns the pixel buffer to flush to the strip.
    pub fn tick(&mut self, now: Instant) -> &[Rgb] {
        let program = self.machine.current();
        let handlers = program.handlers::<N, SLOTS>();

        if self.machine.needs_entry() {
            #[cfg(feature = "esp32-log")]
            println!("[AnimationEngine.tick] running setup for {}", program.as_str());

            if handlers.reseed {
                let seed = gather_seed(&mut self.entropy);
                self.rng.reseed(u64::from(seed));
            }
            (handlers.enter)(&mut self.context(now));
            self.machine.mark_entered();
        }

        (handlers.tick)(&mut self.context(now));

        self.pixels.as_slice()
    }

    /// Apply an input event
    pub fn handle_event(&mut self, event: ButtonEvent) {
        match event {
            ButtonEvent::Pressed => {
                self.next_program();
            }
        }
    }

    /// Switch to the next program of the playlist
    ///
    /// Slots of the previous program are stopped. Wrapping back to the first
    /// program also resets all program-local state.
    pub fn next_program(&mut self) -> ProgramId {
        self.animator.stop_all();
        if self.machine.advance() {
            self.scratch = ProgramScratch::new(&self.config);
        }

        let program = self.machine.current();
        #[cfg(feature = "esp32-log")]
        println!("[AnimationEngine.next_program] switching to {}", program.as_str());
        program
    }

    /// Switch straight to a program of the playlist
    ///
    /// Returns `false` and keeps the current program if `program` is not in
    /// the playlist.
    pub fn select_program(&mut self, program: ProgramId) -> bool {
        if !self.machine.programs().contains(&program) {
            return false;
        }
        self.animator.stop_all();
        self.machine.select(program)
    }

    pub fn current_program(&self) -> ProgramId {
        self.machine.current()
    }

    pub fn machine(&self) -> &ProgramMachine {
        &self.machine
    }

    pub fn animator(&self) -> &Animator<SlotAnimation, SLOTS> {
        &self.animator
    }

    pub fn pixels(&self) -> &PixelBuffer<N> {
        &self.pixels
    }

    pub fn scratch(&self) -> &ProgramScratch {
        &self.scratch
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn context(&mut self, now: Instant) -> ProgramContext<'_, N, SLOTS> {
        ProgramContext {
            animator: &mut self.animator,
            pixels: &mut self.pixels,
            scratch: &mut self.scratch,
            rng: &mut self.rng,
            config: &self.config,
            now,
        }
    }
}
