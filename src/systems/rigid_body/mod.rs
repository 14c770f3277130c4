//! RigidBody - an axis-aligned rectangle that falls as a unit
//!
//! Bodies are passive records. Only the integrator moves them, and only the
//! integrator (reset) and the collision pass (flash) touch their colour.

mod body;
mod color;
mod vec2;

pub use body::RigidBody;
pub use color::Rgba;
pub use vec2::{add_vectors, scale_vector, Vec2};
