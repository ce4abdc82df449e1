//! Button input
//!
//! The input loop samples the button level, turns rising edges into
//! [`ButtonEvent`]s and pushes them into an [`InputQueue`]. The frame loop
//! drains the queue once per tick, so the polling rate is independent of
//! the animation frame rate. The queue is guarded by `critical-section`,
//! which makes it safe to fill from an interrupt or another core.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Level source for the physical button
pub trait Button {
    /// Returns `true` while the button is held down
    fn is_pressed(&mut self) -> bool;
}

/// Discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// Rising edge of the button level
    Pressed,
}

/// Turns level samples into rising-edge events
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    last_level: bool,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self { last_level: false }
    }

    /// Feed one level sample
    ///
    /// Returns an event only on the low-to-high transition; holding the
    /// button down produces a single event.
    pub fn update(&mut self, level: bool) -> Option<ButtonEvent> {
        let rising = level && !self.last_level;
        self.last_level = level;
        rising.then_some(ButtonEvent::Pressed)
    }
}

/// Error returned when the queue is full; carries the rejected event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Error returned when the queue is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Bounded event queue shared between the input loop and the frame loop
pub struct InputQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<ButtonEvent, SIZE>>>,
}

impl<const SIZE: usize> InputQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a producer handle
    pub const fn sender(&self) -> InputSender<'_, SIZE> {
        InputSender { queue: self }
    }

    /// Get a consumer handle
    pub const fn receiver(&self) -> InputReceiver<'_, SIZE> {
        InputReceiver { queue: self }
    }

    pub fn try_send(&self, event: ButtonEvent) -> Result<(), TrySendError<ButtonEvent>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(TrySendError)
        })
    }

    pub fn try_receive(&self) -> Result<ButtonEvent, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }
}

impl<const SIZE: usize> Default for InputQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer side of an [`InputQueue`]
#[derive(Clone, Copy)]
pub struct InputSender<'a, const SIZE: usize> {
    queue: &'a InputQueue<SIZE>,
}

impl<const SIZE: usize> InputSender<'_, SIZE> {
    pub fn try_send(&self, event: ButtonEvent) -> Result<(), TrySendError<ButtonEvent>> {
        self.queue.try_send(event)
    }
}

/// Consumer side of an [`InputQueue`]
#[derive(Clone, Copy)]
pub struct InputReceiver<'a, const SIZE: usize> {
    queue: &'a InputQueue<SIZE>,
}

impl<const SIZE: usize> InputReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<ButtonEvent, TryReceiveError> {
        self.queue.try_receive()
    }
}

/// Input loop body: samples a [`Button`] and queues its rising edges
pub struct ButtonPoller<'a, B: Button, const SIZE: usize> {
    button: B,
    edges: EdgeDetector,
    events: InputSender<'a, SIZE>,
}

impl<'a, B: Button, const SIZE: usize> ButtonPoller<'a, B, SIZE> {
    pub const fn new(button: B, events: InputSender<'a, SIZE>) -> Self {
        Self {
            button,
            edges: EdgeDetector::new(),
            events,
        }
    }

    /// Sample the button once
    ///
    /// Returns `true` if a press was queued. A press that arrives while the
    /// queue is full is dropped.
    pub fn poll(&mut self) -> bool {
        let level = self.button.is_pressed();
        let Some(event) = self.edges.update(level) else {
            return false;
        };
        self.events.try_send(event).is_ok()
    }

    pub fn button_mut(&mut self) -> &mut B {
        &mut self.button
    }
}
