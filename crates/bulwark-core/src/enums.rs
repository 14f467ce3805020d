//! Enumeration types used throughout the simulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BulwarkError;

/// Player weapon selection. Also tags every projectile with the weapon that fired it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum WeaponKind {
    /// Rapid-fire cannon whose rate ramps up while the trigger is held.
    #[default]
    Vulcan,
    /// Lock-on launcher with a ten-round magazine and a full reload.
    Missile,
    /// Continuous beam limited by heat.
    Laser,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 3] = [WeaponKind::Vulcan, WeaponKind::Missile, WeaponKind::Laser];

    pub fn as_str(self) -> &'static str {
        match self {
            WeaponKind::Vulcan => "vulcan",
            WeaponKind::Missile => "missile",
            WeaponKind::Laser => "laser",
        }
    }
}

impl fmt::Display for WeaponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeaponKind {
    type Err = BulwarkError;

    /// Accepts the weapon name or its number-row hotkey (`1`, `2`, `3`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vulcan" | "1" => Ok(WeaponKind::Vulcan),
            "missile" | "2" => Ok(WeaponKind::Missile),
            "laser" | "3" => Ok(WeaponKind::Laser),
            _ => Err(BulwarkError::UnknownWeapon(s.to_string())),
        }
    }
}

impl TryFrom<String> for WeaponKind {
    type Error = BulwarkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Which kind of raid the director throws at the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum GameMode {
    /// Missiles and drones diving straight at the defended point.
    #[default]
    #[serde(rename = "missile")]
    MissileDefense,
    /// Fighters, helicopters and bombers crossing, passing and circling.
    #[serde(rename = "aircraft")]
    AircraftRaid,
}

impl GameMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::MissileDefense => "missile",
            GameMode::AircraftRaid => "aircraft",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = BulwarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "missile" | "missile-defense" => Ok(GameMode::MissileDefense),
            "aircraft" | "aircraft-raid" => Ok(GameMode::AircraftRaid),
            _ => Err(BulwarkError::UnknownGameMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for GameMode {
    type Error = BulwarkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Enemy airframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum EnemyKind {
    Missile,
    Drone,
    Fighter,
    Bomber,
    Helicopter,
}

impl EnemyKind {
    /// Missiles and drones fly their line regardless of altitude; everything
    /// else pulls up when it sinks below the floor.
    pub fn avoids_ground(self) -> bool {
        !matches!(self, EnemyKind::Missile | EnemyKind::Drone)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EnemyKind::Missile => "missile",
            EnemyKind::Drone => "drone",
            EnemyKind::Fighter => "fighter",
            EnemyKind::Bomber => "bomber",
            EnemyKind::Helicopter => "helicopter",
        }
    }
}

impl FromStr for EnemyKind {
    type Err = BulwarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "missile" => Ok(EnemyKind::Missile),
            "drone" => Ok(EnemyKind::Drone),
            "fighter" => Ok(EnemyKind::Fighter),
            "bomber" => Ok(EnemyKind::Bomber),
            "helicopter" => Ok(EnemyKind::Helicopter),
            _ => Err(BulwarkError::UnknownEnemyKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for EnemyKind {
    type Error = BulwarkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Enemy movement model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementMode {
    /// Straight at the defended point; arrival is an impact.
    Direct,
    /// Straight past the player toward a far point; arrival is harmless.
    Flyby,
    /// Straight across the sky to the opposite side; arrival is harmless.
    Crossing,
    /// Circles a center until its time budget runs out.
    Orbit,
}

/// Closed set of simulated entity variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Projectile,
    Enemy,
    Explosion,
    Debris,
    /// Ambient anti-air tracer. Decoration only.
    Tracer,
}

/// Explosion variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionSize {
    /// Kill or impact fireball.
    #[default]
    Full,
    /// Non-lethal hit spark at the projectile's impact point.
    Spark,
}

/// Render hint for a debris fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebrisShape {
    Box,
    Tetrahedron,
    Sphere,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Nothing started yet.
    #[default]
    Menu,
    Playing,
    Paused,
    /// Health ran out. Only `StartGame` leaves this phase.
    GameOver,
}
