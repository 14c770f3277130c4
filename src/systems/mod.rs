//! Per-frame systems: bodies, integration, contacts.

pub mod collision;
pub mod integrator;
pub mod rigid_body;
