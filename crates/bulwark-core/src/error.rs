//! Error types for the input boundary.
//!
//! The simulation itself never fails: running dry, overheating or losing a
//! homing target are ordinary outcomes. Errors only arise when translating
//! outside input (names, JSON) into core types.

use thiserror::Error;

/// Result type alias using [`BulwarkError`].
pub type Result<T> = std::result::Result<T, BulwarkError>;

#[derive(Debug, Error)]
pub enum BulwarkError {
    /// Weapon name that does not map to a [`crate::enums::WeaponKind`].
    #[error("unknown weapon kind: {0}")]
    UnknownWeapon(String),

    /// Mode name that does not map to a [`crate::enums::GameMode`].
    #[error("unknown game mode: {0}")]
    UnknownGameMode(String),

    #[error("unknown enemy kind: {0}")]
    UnknownEnemyKind(String),

    /// Command text that is not a valid JSON [`crate::commands::PlayerCommand`].
    #[error("malformed command: {0}")]
    MalformedCommand(#[from] serde_json::Error),
}
