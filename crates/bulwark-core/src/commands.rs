//! Player intents sent from the input layer to the simulation.
//!
//! Queued commands are applied at the next frame boundary.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::error::Result;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Reset everything and start a new game.
    StartGame { mode: GameMode },
    /// Trigger held or released (vulcan and laser).
    SetFiring { firing: bool },
    /// Select a weapon. Clears lock-ons and the beam.
    SwitchWeapon { weapon: WeaponKind },
    /// Launch at everything locked, or one unguided round.
    FireMissileVolley,
    /// Camera forward vector.
    Aim { direction: Vec3 },
    Pause,
    Resume,
}

impl PlayerCommand {
    /// Parse one JSON command, e.g. `{"type":"SwitchWeapon","weapon":"laser"}`.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
