//! Player weapon state machines.
//!
//! Each weapon is plain state driven by elapsed time and input intent. The
//! engine decides which one runs each frame and turns their outputs into
//! entities.

pub mod laser;
pub mod missile;
pub mod vulcan;

pub use laser::Laser;
pub use missile::{MissileLauncher, Volley};
pub use vulcan::Vulcan;
