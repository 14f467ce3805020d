//! Per-kind physical profiles.
//!
//! Consolidates size, speed, toughness and colour for every enemy airframe
//! and every projectile type.

use bulwark_core::constants::*;
use bulwark_core::enums::{EnemyKind, WeaponKind};

/// Airframe profile for an enemy kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    /// Collision radius.
    pub radius: f32,
    /// Cruise speed (units/s).
    pub speed: f32,
    /// Hits needed to bring it down.
    pub health: u32,
    pub color: u32,
    /// Points for a projectile kill.
    pub score: u32,
    /// Points for a beam kill.
    pub beam_score: u32,
}

/// Get the airframe profile for a given kind.
pub fn enemy_profile(kind: EnemyKind) -> EnemyProfile {
    let (radius, speed, health, color) = match kind {
        EnemyKind::Missile => (1.5, 25.0, 1, 0xff0000),
        EnemyKind::Drone => (1.0, 10.0, 1, 0xff00ff),
        EnemyKind::Fighter => (1.2, 40.0, 1, 0xcccccc),
        EnemyKind::Bomber => (3.0, 12.0, 5, 0x00ff44),
        EnemyKind::Helicopter => (1.8, 18.0, 1, 0xffff00),
    };
    let (score, beam_score) = match kind {
        EnemyKind::Bomber => (SCORE_BOMBER, SCORE_BOMBER),
        _ => (SCORE_KILL, SCORE_BEAM_KILL),
    };
    EnemyProfile {
        radius,
        speed,
        health,
        color,
        score,
        beam_score,
    }
}

/// Ballistics for a projectile fired by a weapon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileProfile {
    pub speed: f32,
    pub lifetime: f32,
    pub radius: f32,
    pub color: u32,
}

/// Get the projectile profile for a weapon.
///
/// The laser entry describes a beam segment; the beam itself kills by cone
/// test and never launches one.
pub fn projectile_profile(weapon: WeaponKind) -> ProjectileProfile {
    match weapon {
        WeaponKind::Vulcan => ProjectileProfile {
            speed: VULCAN_SPEED,
            lifetime: VULCAN_LIFETIME,
            radius: VULCAN_RADIUS,
            color: VULCAN_COLOR,
        },
        WeaponKind::Missile => ProjectileProfile {
            speed: MISSILE_SPEED,
            lifetime: MISSILE_LIFETIME,
            radius: MISSILE_RADIUS,
            color: MISSILE_COLOR,
        },
        WeaponKind::Laser => ProjectileProfile {
            speed: VULCAN_SPEED,
            lifetime: LASER_LIFETIME,
            radius: LASER_RADIUS,
            color: LASER_COLOR,
        },
    }
}
