use crate::core::{SimError, SimResult};

use super::color::Rgba;
use super::vec2::Vec2;

/// Axis-aligned rectangular body.
///
/// `pos` is the top-left corner in screen convention (y grows downward).
/// Extents are fixed at construction. Position and velocity are read-only
/// outside the crate, so they cannot skip the finiteness checks:
///
/// ```compile_fail
/// use boxfall_engine::rigid_body::{RigidBody, Vec2};
///
/// let mut body = RigidBody::new_rect(0.0, 0.0, 1.0, 1.0, 0).unwrap();
/// body.velocity = Vec2::new(f32::NAN, 0.0);
/// ```
///
/// Acceleration stays public:
///
/// ```
/// use boxfall_engine::rigid_body::{RigidBody, Vec2};
///
/// let mut body = RigidBody::new_rect(0.0, 0.0, 1.0, 1.0, 0).unwrap();
/// body.acceleration = Vec2::new(0.0, 9.8);
/// assert_eq!(body.velocity(), Vec2::zero());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RigidBody {
    // === Kinematic State ===
    /// World position of the top-left corner
    pub(crate) pos: Vec2,
    /// Velocity (units per second)
    pub(crate) velocity: Vec2,
    /// Constant acceleration (units per second²), free to change between frames
    pub acceleration: Vec2,
    /// Index of this body in its scene
    pub id: u32,

    // === Shape ===
    width: f32,
    height: f32,

    // === Visual ===
    pub(crate) color: Rgba,
}

impl RigidBody {
    /// Create a rectangular body at rest.
    ///
    /// Fails with [`SimError::DegenerateBody`] unless both extents are finite
    /// and strictly positive.
    pub fn new_rect(x: f32, y: f32, width: f32, height: f32, id: u32) -> SimResult<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SimError::DegenerateBody { width, height });
        }
        let pos = Vec2::new(x, y);
        if !pos.is_finite() {
            return Err(SimError::NonFiniteState("position"));
        }

        Ok(Self {
            pos,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            id,
            width,
            height,
            color: Rgba::BASELINE,
        })
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> SimResult<Self> {
        if !velocity.is_finite() {
            return Err(SimError::NonFiniteState("velocity"));
        }
        self.velocity = velocity;
        Ok(self)
    }

    pub fn with_acceleration(mut self, acceleration: Vec2) -> SimResult<Self> {
        if !acceleration.is_finite() {
            return Err(SimError::NonFiniteState("acceleration"));
        }
        self.acceleration = acceleration;
        Ok(self)
    }

    /// Top-left corner. Only the integrator moves it.
    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Current visual tag.
    #[inline]
    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Right edge (exclusive for overlap purposes).
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.pos.x + self.width
    }

    /// Bottom edge (exclusive for overlap purposes).
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.pos.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rect_starts_at_rest_with_baseline_tag() {
        let body = RigidBody::new_rect(10.0, 20.0, 50.0, 75.0, 3).unwrap();
        assert_eq!(body.pos, Vec2::new(10.0, 20.0));
        assert_eq!(body.velocity, Vec2::zero());
        assert_eq!(body.acceleration, Vec2::zero());
        assert_eq!(body.color(), Rgba::BASELINE);
        assert_eq!(body.max_x(), 60.0);
        assert_eq!(body.max_y(), 95.0);
        assert_eq!(body.id, 3);
    }

    #[test]
    fn rejects_degenerate_extents() {
        for (w, h) in [(0.0, 10.0), (10.0, 0.0), (-1.0, 5.0), (f32::NAN, 5.0), (5.0, f32::INFINITY)] {
            let err = RigidBody::new_rect(0.0, 0.0, w, h, 0).unwrap_err();
            assert!(matches!(err, SimError::DegenerateBody { .. }), "{w}x{h}");
        }
    }

    #[test]
    fn rejects_non_finite_kinematics() {
        assert_eq!(
            RigidBody::new_rect(f32::NAN, 0.0, 1.0, 1.0, 0).unwrap_err(),
            SimError::NonFiniteState("position")
        );

        let body = RigidBody::new_rect(0.0, 0.0, 1.0, 1.0, 0).unwrap();
        assert_eq!(
            body.clone().with_velocity(Vec2::new(f32::INFINITY, 0.0)).unwrap_err(),
            SimError::NonFiniteState("velocity")
        );
        assert_eq!(
            body.with_acceleration(Vec2::new(0.0, f32::NAN)).unwrap_err(),
            SimError::NonFiniteState("acceleration")
        );
    }
}
