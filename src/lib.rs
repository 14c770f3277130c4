//! Boxfall Engine - falling boxes with contact flashes, native or in WASM
//!
//! Architecture:
//! - core/        - Error types
//! - systems/     - Bodies, integrator, collision pass
//! - simulation/  - Frame driver, collaborators, config
//! - api/         - Public WASM API

pub mod core;
pub mod systems;
pub mod simulation;
pub mod api;

// Short paths for the per-frame systems
pub use systems::collision;
pub use systems::integrator;
pub use systems::rigid_body;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32", target_feature = "atomics"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&format!("Boxfall engine {} initialized", version()).into());
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!(version = %version(), "boxfall engine initialized");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::Simulation;
pub use crate::core::{SimError, SimResult};
pub use simulation::{FrameDriver, SimConfig};
