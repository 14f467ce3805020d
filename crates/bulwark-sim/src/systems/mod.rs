//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They own no state; everything lives in components or is passed in.

pub mod batteries;
pub mod cleanup;
pub mod collision;
pub mod effects;
pub mod enemies;
pub mod projectiles;
pub mod snapshot;
pub mod wave_director;
