//! Boundary traits for everything the core does not own: time, input and
//! presentation.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::collision::Contact;
use crate::core::SimResult;
use crate::rigid_body::RigidBody;

use super::PerfTimer;

// === Clock ===

/// Monotonic time source, sampled once per frame.
pub trait Clock {
    /// Seconds since an arbitrary fixed origin.
    fn now_seconds(&mut self) -> f64;
}

/// Real elapsed time since construction.
///
/// Samples never go backwards: if the underlying timer steps back (a wall
/// clock fallback being adjusted), the last reading is repeated instead.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: PerfTimer,
    last: f64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: PerfTimer::start(), last: 0.0 }
    }

    fn hold_monotonic(&mut self, sample: f64) -> f64 {
        if sample > self.last {
            self.last = sample;
        }
        self.last
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_seconds(&mut self) -> f64 {
        let sample = self.origin.elapsed_ms() / 1000.0;
        self.hold_monotonic(sample)
    }
}

/// Clock under caller control.
///
/// Each sample returns the current time and then moves it forward by
/// `auto_advance` (zero unless set), so a driver loop sees evenly spaced
/// frames without anyone touching the clock.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ManualClock {
    now: f64,
    auto_advance: f64,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self { now: start, auto_advance: 0.0 }
    }

    /// Clock that advances by `step` seconds after every sample.
    pub fn stepping(start: f64, step: f64) -> Self {
        Self { now: start, auto_advance: step }
    }

    pub fn set(&mut self, seconds: f64) {
        self.now = seconds;
    }

    pub fn advance(&mut self, seconds: f64) {
        self.now += seconds;
    }

    pub fn peek(&self) -> f64 {
        self.now
    }
}

impl Clock for ManualClock {
    fn now_seconds(&mut self) -> f64 {
        let t = self.now;
        self.now += self.auto_advance;
        t
    }
}

// === Input ===

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Escape,
    /// Any other key, by platform key code
    Other(u32),
}

impl Key {
    /// DOM `keyCode` for Escape.
    pub const ESCAPE_CODE: u32 = 27;

    pub fn from_code(code: u32) -> Self {
        if code == Self::ESCAPE_CODE {
            Key::Escape
        } else {
            Key::Other(code)
        }
    }
}

/// Discrete input events. The core only cares whether one means "quit".
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window close request
    Close,
    KeyPressed(Key),
    MouseButtonPressed { x: f32, y: f32 },
    Other,
}

/// Which events end the run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuitPolicy {
    /// Window close or Escape
    #[default]
    EscapeOrClose,
    /// Window close or any key at all
    AnyKeyOrClose,
}

impl QuitPolicy {
    pub fn is_quit(self, event: &InputEvent) -> bool {
        match (self, event) {
            (_, InputEvent::Close) => true,
            (_, InputEvent::KeyPressed(Key::Escape)) => true,
            (QuitPolicy::AnyKeyOrClose, InputEvent::KeyPressed(_)) => true,
            _ => false,
        }
    }
}

/// Drainable input queue.
pub trait EventSource {
    /// Next pending event, or `None` once the queue is empty for this frame.
    fn poll_event(&mut self) -> Option<InputEvent>;
}

/// FIFO event source fed by the host.
#[derive(Clone, Debug, Default)]
pub struct QueuedEvents {
    pending: VecDeque<InputEvent>,
}

impl QueuedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl EventSource for QueuedEvents {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.pending.pop_front()
    }
}

// === Presentation ===

/// Read-only view handed to the renderer once per frame.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub index: u64,
    pub dt: f32,
    pub bodies: &'a [RigidBody],
    pub contacts: &'a [Contact],
}

/// Draws a frame. An error ends the run.
pub trait Renderer {
    fn present(&mut self, frame: &Frame<'_>) -> SimResult<()>;
}
