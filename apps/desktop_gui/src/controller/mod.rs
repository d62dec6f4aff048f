//! Controller layer: UI actions, toast lifecycle, and dispatch into the directory.

pub mod events;
pub mod orchestration;
