//! Frame snapshot: the complete read-only state handed to the presentation
//! collaborators (render sync, radar, HUD) after each frame.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::SimTime;

/// Everything visible after one `advance`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub mode: GameMode,
    pub weapon: WeaponKind,
    pub hud: HudView,
    pub laser: LaserView,
    pub radar: RadarView,
    pub entities: Vec<EntityView>,
}

/// Score, wave and weapon readouts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub score: u32,
    pub wave: u32,
    pub health: u32,
    pub missile_ammo: u32,
    pub max_missile_ammo: u32,
    /// Reload completion in `[0, 1)`; `None` when not reloading.
    pub reload_progress: Option<f32>,
    pub lock_count: u32,
}

/// Laser heat gauge and beam geometry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaserView {
    pub heat: f32,
    pub max_heat: f32,
    pub overheated: bool,
    /// Seconds left on the forced cooldown (0 when not overheated).
    pub cooldown_remaining: f32,
    /// Beam endpoints while the beam is burning.
    pub beam: Option<BeamView>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BeamView {
    pub from: Vec3,
    pub to: Vec3,
}

/// Radar scope contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RadarView {
    /// Player heading (radians, 0 = +Z, positive toward +X).
    pub heading: f32,
    /// Field-of-view cone drawn around the heading.
    pub fov: f32,
    pub range: f32,
    pub contacts: Vec<RadarContact>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarContact {
    pub id: u64,
    pub kind: EnemyKind,
    pub position: Vec3,
    /// Altitude mapped to `[0, 1]` for colouring.
    pub altitude_factor: f32,
}

/// One renderable entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityView {
    /// Stable id (hecs entity bits) for mesh bookkeeping.
    pub id: u64,
    pub kind: EntityKind,
    pub position: Vec3,
    pub orientation: Quat,
    pub radius: f32,
    pub color: u32,
    pub scale: Vec3,
    pub opacity: f32,
    pub detail: EntityDetail,
}

/// Variant-specific render attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EntityDetail {
    Projectile {
        weapon: WeaponKind,
    },
    Enemy {
        kind: EnemyKind,
        mode: MovementMode,
        health: u32,
        max_health: u32,
        locked: bool,
        /// Visual roll on top of `orientation`.
        roll: f32,
        /// Visual nose-down pitch on top of `orientation`.
        pitch: f32,
        /// Main and tail rotor phases, helicopters only.
        rotor: Option<(f32, f32)>,
    },
    Explosion {
        size: ExplosionSize,
    },
    Debris {
        shape: DebrisShape,
    },
    Tracer,
}
