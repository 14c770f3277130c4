//! Integrator - semi-implicit Euler step for every body
//!
//! Per body, in this order:
//! 1. `velocity += acceleration * dt`
//! 2. `position += velocity * dt` (with the velocity from step 1)
//! 3. colour := baseline, so the collision pass starts from a clean slate

use crate::core::{SimError, SimResult};
use crate::rigid_body::{add_vectors, scale_vector, RigidBody, Rgba};

/// A validated, non-negative frame delta in seconds.
///
/// Negative deltas are rejected rather than clamped: a clock that runs
/// backwards is a caller bug and should surface, not turn into a silent
/// zero-length frame.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct TimeStep(f32);

impl TimeStep {
    pub const ZERO: TimeStep = TimeStep(0.0);

    pub fn new(dt: f64) -> SimResult<Self> {
        // Checked after narrowing: a finite f64 beyond f32::MAX becomes inf.
        let seconds = dt as f32;
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(SimError::InvalidTimeStep { dt });
        }
        Ok(Self(seconds))
    }

    /// Step from two clock samples (`t_now - t_prev`).
    pub fn between(t_prev: f64, t_now: f64) -> SimResult<Self> {
        Self::new(t_now - t_prev)
    }

    #[inline]
    pub fn seconds(self) -> f32 {
        self.0
    }
}

/// Advance one body by `dt`.
#[inline]
pub fn advance(body: &mut RigidBody, dt: TimeStep) {
    let dt = dt.seconds();
    body.velocity = add_vectors(body.velocity, scale_vector(body.acceleration, dt));
    body.pos = add_vectors(body.pos, scale_vector(body.velocity, dt));
    body.color = Rgba::BASELINE;
}

/// Advance every body by the same `dt`. Bodies do not interact here, so
/// iteration order does not matter.
pub fn advance_all(bodies: &mut [RigidBody], dt: TimeStep) {
    for body in bodies.iter_mut() {
        advance(body, dt);
    }
}
