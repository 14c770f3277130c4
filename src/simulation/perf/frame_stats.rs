use wasm_bindgen::prelude::*;

/// Snapshot of the last simulated frame.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub(super) frame: u64,
    pub(super) dt: f32,
    pub(super) contact_pairs: u32,
    pub(super) flashed_bodies: u32,
    pub(super) body_count: u32,
    pub(super) integrate_ms: f64,
    pub(super) collide_ms: f64,
    pub(super) step_ms: f64,
}

impl FrameStats {
    pub(crate) fn reset(&mut self) {
        *self = FrameStats::default();
    }
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn dt(&self) -> f32 { self.dt }
    #[wasm_bindgen(getter)]
    pub fn contact_pairs(&self) -> u32 { self.contact_pairs }
    /// Bodies that took part in at least one contact
    #[wasm_bindgen(getter)]
    pub fn flashed_bodies(&self) -> u32 { self.flashed_bodies }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }

    // Timings stay zero unless perf metrics are enabled on the driver.
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn collide_ms(&self) -> f64 { self.collide_ms }
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
}
