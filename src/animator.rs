//! Fixed-capacity animation slots
//!
//! An [`Animator`] owns `SLOTS` reusable slots. Each running slot carries a
//! plain-data animation record `A`, a duration and the instant it was
//! (re)started. [`Animator::update`] computes the clamped progress of every
//! running slot and hands it to a single dispatch callback, which decides the
//! fate of the slot once it completes (restart, stop, or leave it to be
//! reclaimed).

use core::fmt;

use embassy_time::{Duration, Instant};

/// Handle to one slot of an [`Animator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotHandle(usize);

impl SlotHandle {
    /// Index of the slot
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Errors reported by the slot manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorError {
    /// No free slot is left
    CapacityExceeded,
    /// The requested slot index is not below the capacity
    SlotOutOfRange,
    /// The handle refers to a slot that is not running
    InactiveSlot,
    /// Running slots need a non-zero duration
    ZeroDuration,
}

impl fmt::Display for AnimatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded => write!(f, "no free animation slot"),
            Self::SlotOutOfRange => write!(f, "animation slot index out of range"),
            Self::InactiveSlot => write!(f, "animation slot is not active"),
            Self::ZeroDuration => write!(f, "animation duration is zero"),
        }
    }
}

/// Phase reported to the dispatch callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Progress is below 1.0
    Progress,
    /// Progress reached 1.0 on this update; reported once per activation
    Completed,
}

/// Snapshot of one running slot, passed to the dispatch callback
#[derive(Debug, Clone, Copy)]
pub struct AnimationParam<A> {
    pub handle: SlotHandle,
    /// Linear progress in `0.0..=1.0`
    pub progress: f32,
    pub state: AnimationState,
    pub animation: A,
}

impl<A> AnimationParam<A> {
    pub fn is_completed(&self) -> bool {
        self.state == AnimationState::Completed
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot<A: Copy> {
    animation: A,
    duration: Duration,
    started_at: Instant,
    completed: bool,
}

/// Clamped progress of an animation started at `started_at`
///
/// Returns 0.0 at `started_at` (or before it), 1.0 at `started_at + duration`
/// and later. Slots never run with a zero duration; for a bare zero duration
/// this returns 1.0.
#[allow(clippy::cast_precision_loss)]
pub fn progress(started_at: Instant, duration: Duration, now: Instant) -> f32 {
    let total = duration.as_ticks();
    if total == 0 {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(started_at).as_ticks();
    if elapsed >= total {
        return 1.0;
    }

    (elapsed as f32 / total as f32).clamp(0.0, 1.0)
}

/// Slot manager with `SLOTS` reusable animation slots
#[derive(Debug)]
pub struct Animator<A: Copy, const SLOTS: usize> {
    slots: [Option<Slot<A>>; SLOTS],
}

impl<A: Copy, const SLOTS: usize> Default for Animator<A, SLOTS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Copy, const SLOTS: usize> Animator<A, SLOTS> {
    /// Create an animator with every slot free
    pub const fn new() -> Self {
        Self {
            slots: [None; SLOTS],
        }
    }

    /// Number of slots
    pub const fn capacity(&self) -> usize {
        SLOTS
    }

    /// Start an animation in the lowest free slot
    pub fn start(
        &mut self,
        duration: Duration,
        animation: A,
        now: Instant,
    ) -> Result<SlotHandle, AnimatorError> {
        if duration.as_ticks() == 0 {
            return Err(AnimatorError::ZeroDuration);
        }
        let handle = self
            .next_available()
            .ok_or(AnimatorError::CapacityExceeded)?;
        self.start_at(handle.index(), duration, animation, now)
    }

    /// Start an animation in a specific slot
    ///
    /// Whatever was running in that slot is replaced. A zero `duration` is
    /// rejected and leaves the slot untouched.
    pub fn start_at(
        &mut self,
        index: usize,
        duration: Duration,
        animation: A,
        now: Instant,
    ) -> Result<SlotHandle, AnimatorError> {
        if duration.as_ticks() == 0 {
            return Err(AnimatorError::ZeroDuration);
        }
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(AnimatorError::SlotOutOfRange)?;
        *slot = Some(Slot {
            animation,
            duration,
            started_at: now,
            completed: false,
        });
        Ok(SlotHandle(index))
    }

    /// Restart a running slot from zero progress
    ///
    /// Keeps the stored animation and duration. Valid from inside the
    /// completion callback as well.
    pub fn restart(&mut self, handle: SlotHandle, now: Instant) -> Result<(), AnimatorError> {
        let slot = self
            .slots
            .get_mut(handle.index())
            .ok_or(AnimatorError::SlotOutOfRange)?
            .as_mut()
            .ok_or(AnimatorError::InactiveSlot)?;
        slot.started_at = now;
        slot.completed = false;
        Ok(())
    }

    /// Free a slot; stopping a free slot does nothing
    pub fn stop(&mut self, handle: SlotHandle) {
        if let Some(slot) = self.slots.get_mut(handle.index()) {
            *slot = None;
        }
    }

    /// Free every slot
    pub fn stop_all(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    /// Check if a slot is running
    pub fn is_active(&self, handle: SlotHandle) -> bool {
        matches!(self.slots.get(handle.index()), Some(Some(_)))
    }

    /// Check if any slot is running
    pub fn is_any_active(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }

    /// Number of running slots
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Lowest-index free slot, if any
    pub fn next_available(&self) -> Option<SlotHandle> {
        self.slots.iter().position(Option::is_none).map(SlotHandle)
    }

    /// Animation record stored in a running slot
    pub fn animation(&self, handle: SlotHandle) -> Option<&A> {
        self.slots
            .get(handle.index())
            .and_then(Option::as_ref)
            .map(|slot| &slot.animation)
    }

    /// Running slots and their animation records, in index order
    pub fn iter(&self) -> impl Iterator<Item = (SlotHandle, &A)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.as_ref()
                .map(|slot| (SlotHandle(index), &slot.animation))
        })
    }

    /// Advance every running slot
    ///
    /// `animate` is called once per running slot in index order and receives
    /// the animator itself, so it can restart or stop the slot, or start
    /// animations in other slots. A slot that reports
    /// [`AnimationState::Completed`] and is neither restarted nor replaced by
    /// the callback is freed when the callback returns.
    pub fn update<F>(&mut self, now: Instant, mut animate: F)
    where
        F: FnMut(&mut Self, AnimationParam<A>),
    {
        for index in 0..SLOTS {
            let Some(param) = self.advance(index, now) else {
                continue;
            };
            animate(self, param);

            if param.is_completed() {
                self.reclaim_completed(index);
            }
        }
    }

    fn advance(&mut self, index: usize, now: Instant) -> Option<AnimationParam<A>> {
        let slot = self.slots.get_mut(index)?.as_mut()?;
        let progress = progress(slot.started_at, slot.duration, now);
        let state = if progress >= 1.0 {
            slot.completed = true;
            AnimationState::Completed
        } else {
            AnimationState::Progress
        };

        Some(AnimationParam {
            handle: SlotHandle(index),
            progress,
            state,
            animation: slot.animation,
        })
    }

    fn reclaim_completed(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            if slot.is_some_and(|running| running.completed) {
                *slot = None;
            }
        }
    }
}
