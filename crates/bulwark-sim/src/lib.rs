//! Combat engine for BULWARK.
//!
//! Owns the hecs ECS world, runs the weapon state machines and systems once
//! per frame, and produces FrameSnapshots for the presentation layer.

pub mod engine;
pub mod scoring;
pub mod systems;
pub mod weapons;
pub mod world_setup;

pub use bulwark_core as core;
pub use engine::{SimConfig, SimulationEngine};
