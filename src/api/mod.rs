//! Public API surfaces.

pub mod wasm;
