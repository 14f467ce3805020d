//! Flight models for BULWARK.
//!
//! Enemy movement modes, ground avoidance, banking and missile homing.
//! Pure functions over core components: no ECS, no randomness.

pub mod banking;
pub mod homing;
pub mod movement;
pub mod profiles;

pub use bulwark_core as core;

#[cfg(test)]
mod tests;
