use serde::{Deserialize, Serialize};

/// Opaque 4-channel visual tag carried by each body.
///
/// Has no physical meaning. The integrator resets it to [`Rgba::BASELINE`]
/// every frame and each contact brightens it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully opaque black.
    pub const BASELINE: Rgba = Rgba::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Adds `step` to r/g/b and forces alpha opaque.
    ///
    /// Channels saturate at 255, so a body touching many others (or the same
    /// body over a long stall) stays white instead of wrapping back to dark.
    #[inline]
    pub fn flashed(self, step: u8) -> Self {
        Self {
            r: self.r.saturating_add(step),
            g: self.g.saturating_add(step),
            b: self.b.saturating_add(step),
            a: 255,
        }
    }

    /// Packs as `0xAABBGGRR`, the little-endian RGBA byte order canvas
    /// `ImageData` expects.
    #[inline]
    pub fn to_abgr_u32(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BASELINE
    }
}
