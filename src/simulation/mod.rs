//! Simulation - the frame driver and the collaborators around it
//!
//! Per frame, strictly in this order and with no interleaving between frames:
//! sample clock -> drain events (maybe stop) -> integrate -> collide -> present.
//!
//! The driver owns the body collection for the whole run. Time, input and
//! drawing come in through the traits in `io/collaborators.rs`.

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/frame_stats.rs"]
mod frame_stats;
#[path = "io/collaborators.rs"]
mod collaborators;
#[path = "init/config.rs"]
mod config;
#[path = "init/scene.rs"]
mod scene;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "step/driver.rs"]
mod driver;

pub use collaborators::{
    Clock, EventSource, Frame, InputEvent, Key, ManualClock, QueuedEvents, QuitPolicy, Renderer,
    SystemClock,
};
pub use config::{SimConfig, SpawnTemplate, MAX_BODIES};
pub use driver::{DriverState, FrameDriver, RunSummary};
pub use frame_stats::FrameStats;
pub use render_extract::{RenderBuffers, RECT_STRIDE};
pub use scene::spawn_bodies;

use perf_timer::PerfTimer;

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
