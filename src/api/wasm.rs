//! JS-facing facade.
//!
//! The host owns the animation loop: it queues input, then calls
//! `step(performance.now())` once per frame and reads the packed buffers.

use wasm_bindgen::prelude::*;

use crate::core::SimError;
use crate::simulation::{
    FrameDriver, FrameStats, InputEvent, Key, ManualClock, QueuedEvents, RenderBuffers, SimConfig,
};

fn to_js(err: SimError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct Simulation {
    driver: FrameDriver<ManualClock>,
    events: QueuedEvents,
    buffers: RenderBuffers,
    config: SimConfig,
    clock_synced: bool,
}

impl Simulation {
    fn build(config: SimConfig) -> Result<Simulation, SimError> {
        let driver = FrameDriver::from_config(ManualClock::new(0.0), &config)?;
        let mut buffers = RenderBuffers::new();
        buffers.extract(driver.bodies());
        Ok(Self {
            driver,
            events: QueuedEvents::new(),
            buffers,
            config,
            clock_synced: false,
        })
    }
}

#[wasm_bindgen]
impl Simulation {
    /// Default scene: five boxes launched from the lower left.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Simulation, JsValue> {
        Self::build(SimConfig::default()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<Simulation, JsValue> {
        let config = SimConfig::from_json(json).map_err(to_js)?;
        Self::build(config).map_err(to_js)
    }

    /// Advance one frame to `now_ms`. Returns `false` once stopped.
    ///
    /// The first call only anchors the clock, so its frame has `dt == 0`.
    pub fn step(&mut self, now_ms: f64) -> Result<bool, JsValue> {
        self.driver.clock_mut().set(now_ms / 1000.0);
        if !self.clock_synced {
            self.driver.resync_clock();
            self.clock_synced = true;
        }
        self.driver
            .tick(&mut self.events, &mut self.buffers)
            .map_err(to_js)?;
        Ok(self.driver.is_running())
    }

    /// Window/tab close.
    pub fn close(&mut self) {
        self.events.push(InputEvent::Close);
    }

    /// Key press by DOM `keyCode`.
    pub fn key_down(&mut self, key_code: u32) {
        self.events.push(InputEvent::KeyPressed(Key::from_code(key_code)));
    }

    pub fn mouse_down(&mut self, x: f32, y: f32) {
        self.events.push(InputEvent::MouseButtonPressed { x, y });
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.driver.is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.driver.frame()
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 {
        self.buffers.body_count() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn viewport_width(&self) -> u32 {
        self.config.viewport_width
    }

    #[wasm_bindgen(getter)]
    pub fn viewport_height(&self) -> u32 {
        self.config.viewport_height
    }

    /// Clear colour packed like `colors_ptr` entries
    #[wasm_bindgen(getter)]
    pub fn background(&self) -> u32 {
        self.config.background.to_abgr_u32()
    }

    /// Enable or disable per-frame phase timings
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.driver.enable_perf_metrics(enabled);
    }

    pub fn stats(&self) -> FrameStats {
        self.driver.stats().clone()
    }

    /// `[x, y, w, h]` per body as f32, valid until the next `step`
    pub fn rects_ptr(&self) -> *const f32 {
        self.buffers.rects().as_ptr()
    }

    pub fn rects_len(&self) -> usize {
        self.buffers.rects().len()
    }

    /// One RGBA u32 per body, valid until the next `step`
    pub fn colors_ptr(&self) -> *const u32 {
        self.buffers.colors().as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.buffers.colors().len()
    }

    /// Copy of the rect buffer (slower than reading through `rects_ptr`).
    pub fn rects(&self) -> Vec<f32> {
        self.buffers.rects().to_vec()
    }

    pub fn colors(&self) -> Vec<u32> {
        self.buffers.colors().to_vec()
    }
}
