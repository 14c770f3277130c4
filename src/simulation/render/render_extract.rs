use crate::core::SimResult;
use crate::rigid_body::RigidBody;

use super::{Frame, Renderer};

/// Floats per body in [`RenderBuffers::rects`]: x, y, width, height.
pub const RECT_STRIDE: usize = 4;

/// Flat, tightly packed copies of the last frame for a JS renderer.
///
/// `rects[i*4..i*4+4]` and `colors[i]` describe body `i`.
#[derive(Clone, Debug, Default)]
pub struct RenderBuffers {
    rects: Vec<f32>,
    colors: Vec<u32>,
    contacts: u32,
}

impl RenderBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extract(&mut self, bodies: &[RigidBody]) {
        self.rects.clear();
        self.colors.clear();
        self.rects.reserve(bodies.len() * RECT_STRIDE);
        self.colors.reserve(bodies.len());

        for body in bodies {
            self.rects.extend_from_slice(&[body.pos.x, body.pos.y, body.width(), body.height()]);
            self.colors.push(body.color().to_abgr_u32());
        }
    }

    pub fn rects(&self) -> &[f32] {
        &self.rects
    }

    pub fn colors(&self) -> &[u32] {
        &self.colors
    }

    /// Contact pairs in the extracted frame
    pub fn contacts(&self) -> u32 {
        self.contacts
    }

    pub fn body_count(&self) -> usize {
        self.colors.len()
    }
}

impl Renderer for RenderBuffers {
    fn present(&mut self, frame: &Frame<'_>) -> SimResult<()> {
        self.extract(frame.bodies);
        self.contacts = frame.contacts.len() as u32;
        Ok(())
    }
}
