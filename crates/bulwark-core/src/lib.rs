//! Core types and definitions for the BULWARK combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, snapshot views, audio cues, errors and constants.
//! It carries no engine logic and no rendering or audio backend.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use error::{BulwarkError, Result};
