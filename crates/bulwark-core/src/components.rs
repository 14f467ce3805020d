//! ECS components for hecs entities.
//!
//! Every simulated object is one entity with a [`Body`] plus exactly one
//! variant component. Components are plain data; behaviour lives in the
//! flight models and the sim systems.

use glam::{Quat, Vec3};

use crate::enums::*;

/// Shared entity attributes: everything the render collaborator needs to
/// place a mesh, plus the alive flag the owning system clears on removal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec3,
    pub orientation: Quat,
    /// Collision radius.
    pub radius: f32,
    /// Base colour as 0xRRGGBB.
    pub color: u32,
    /// Cleared exactly once, by whichever system ends the entity.
    pub alive: bool,
}

impl Body {
    pub fn new(position: Vec3, radius: f32, color: u32) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
            radius,
            color,
            alive: true,
        }
    }

    /// Mark the body dead. Returns `true` only for the call that actually
    /// ended it, so removal side effects fire once.
    pub fn retire(&mut self) -> bool {
        std::mem::replace(&mut self.alive, false)
    }
}

/// Player round in flight.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub weapon: WeaponKind,
    pub velocity: Vec3,
    /// Constant cruise speed, kept while homing turns the velocity.
    pub speed: f32,
    /// Seconds left before the round expires.
    pub lifetime: f32,
    /// Homing target. A lookup handle only: the enemy may vanish at any time.
    pub target: Option<hecs::Entity>,
}

/// Hostile airframe.
#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub health: u32,
    pub max_health: u32,
    pub speed: f32,
    pub velocity: Vec3,
    pub flight: FlightPlan,
    /// Seconds since spawn.
    pub elapsed: f32,
    /// Set when a direct attacker reaches the defended point.
    pub impact: bool,
    /// Missile lock-on marker (visual only).
    pub locked: bool,
    pub bank: Bank,
}

/// Movement model plus its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightPlan {
    Direct { target: Vec3 },
    Flyby { target: Vec3 },
    Crossing { target: Vec3 },
    Orbit(Orbit),
}

impl FlightPlan {
    pub fn mode(&self) -> MovementMode {
        match self {
            FlightPlan::Direct { .. } => MovementMode::Direct,
            FlightPlan::Flyby { .. } => MovementMode::Flyby,
            FlightPlan::Crossing { .. } => MovementMode::Crossing,
            FlightPlan::Orbit(_) => MovementMode::Orbit,
        }
    }
}

/// Circular holding pattern in the horizontal plane at the entry altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub center: Vec3,
    pub radius: f32,
    /// Signed angular velocity (rad/s); positive runs counter-clockwise seen from above.
    pub angular_velocity: f32,
    /// Current angle around the center, measured in the x/z plane from +X.
    pub angle: f32,
}

/// Visual roll state. Applied on top of the heading, never folded into it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bank {
    pub roll: f32,
    /// Heading seen on the previous frame, for the yaw-rate term.
    pub last_heading: Option<f32>,
}

/// Helicopter rotor phases (render attributes).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotor {
    pub main: f32,
    pub tail: f32,
}

/// Expanding, fading fireball.
#[derive(Debug, Clone, Copy)]
pub struct Explosion {
    pub size: ExplosionSize,
    pub growth_rate: f32,
    /// Current visual radius (mesh scale).
    pub scale: f32,
    pub opacity: f32,
}

/// Tumbling fragment thrown out by an explosion.
#[derive(Debug, Clone, Copy)]
pub struct Debris {
    pub shape: DebrisShape,
    pub velocity: Vec3,
    /// Spin rate per axis (rad/s).
    pub angular_velocity: Vec3,
    /// Accumulated spin per axis, applied as XYZ Euler angles.
    pub rotation: Vec3,
    pub lifetime: f32,
    pub opacity: f32,
}

/// Ambient anti-air tracer. Never collides with anything.
#[derive(Debug, Clone, Copy)]
pub struct Tracer {
    pub velocity: Vec3,
    pub lifetime: f32,
    /// Shrinks with distance travelled.
    pub scale: f32,
    pub opacity: f32,
}
