use serde::{Deserialize, Serialize};

/// 2D vector for positions, velocities and accelerations.
///
/// Arithmetic goes through the named functions below; each takes its inputs
/// by value and returns a fresh vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Component-wise `a + b`.
#[inline]
pub fn add_vectors(a: Vec2, b: Vec2) -> Vec2 {
    Vec2 { x: a.x + b.x, y: a.y + b.y }
}

/// `v * s` for every component.
#[inline]
pub fn scale_vector(v: Vec2, s: f32) -> Vec2 {
    Vec2 { x: v.x * s, y: v.y * s }
}
