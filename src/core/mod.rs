//! Core types shared by every system.

pub mod error;

pub use error::{SimError, SimResult};
