//! Enemy movement models.
//!
//! `direct`, `flyby` and `crossing` fly a straight line to a fixed point;
//! `orbit` circles a center at the entry altitude until its time budget runs
//! out. Aircraft additionally pull up when they sink below the floor.

use glam::Vec3;

use bulwark_core::components::{Body, Enemy, FlightPlan, Orbit, Rotor};
use bulwark_core::constants::*;
use bulwark_core::enums::EnemyKind;
use bulwark_core::types::facing;

/// How a movement step ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightOutcome {
    /// Still flying.
    Cruising,
    /// Reached its target point. For `direct` attackers `impact` is now set.
    Arrived,
    /// Orbit time budget exhausted.
    Expired,
}

impl FlightOutcome {
    /// Whether the enemy should be removed after this step.
    pub fn is_terminal(self) -> bool {
        !matches!(self, FlightOutcome::Cruising)
    }
}

/// Initial velocity and facing for a freshly spawned enemy.
pub fn launch(enemy: &mut Enemy, body: &mut Body) {
    match enemy.flight {
        FlightPlan::Direct { target }
        | FlightPlan::Flyby { target }
        | FlightPlan::Crossing { target } => {
            let heading = (target - body.position).normalize_or_zero();
            enemy.velocity = heading * enemy.speed;
            body.orientation = facing(heading);
        }
        FlightPlan::Orbit(ref orbit) => {
            enemy.velocity = orbit_velocity(orbit);
            body.orientation = facing(enemy.velocity);
        }
    }
}

/// Build an orbit around `center` entered from `entry`.
///
/// Angular velocity is `speed / radius`, signed by `direction` (+1 counter-
/// clockwise, -1 clockwise).
pub fn orbit_from(entry: Vec3, center: Vec3, radius: f32, direction: f32, speed: f32) -> Orbit {
    let radius = if radius > 0.0 { radius } else { DEFAULT_ORBIT_RADIUS };
    Orbit {
        center,
        radius,
        angular_velocity: speed / radius * direction.signum(),
        angle: (entry.z - center.z).atan2(entry.x - center.x),
    }
}

/// Advance one enemy by `dt` seconds.
pub fn step(enemy: &mut Enemy, body: &mut Body, dt: f32) -> FlightOutcome {
    enemy.elapsed += dt;

    let outcome = match enemy.flight {
        FlightPlan::Direct { target }
        | FlightPlan::Flyby { target }
        | FlightPlan::Crossing { target } => {
            let start = body.position;
            body.position += enemy.velocity * dt;
            if closest_approach(start, body.position, target) < ARRIVAL_DISTANCE {
                if matches!(enemy.flight, FlightPlan::Direct { .. }) {
                    enemy.impact = true;
                }
                FlightOutcome::Arrived
            } else {
                FlightOutcome::Cruising
            }
        }
        FlightPlan::Orbit(ref mut orbit) => {
            orbit.angle += orbit.angular_velocity * dt;
            let next = Vec3::new(
                orbit.center.x + orbit.angle.cos() * orbit.radius,
                body.position.y,
                orbit.center.z + orbit.angle.sin() * orbit.radius,
            );
            let travel = next - body.position;
            if travel.length_squared() > f32::EPSILON {
                body.orientation = facing(travel);
            }
            body.position = next;
            enemy.velocity = orbit_velocity(orbit);

            if enemy.elapsed > ORBIT_TIME_BUDGET {
                FlightOutcome::Expired
            } else {
                FlightOutcome::Cruising
            }
        }
    };

    if !outcome.is_terminal() {
        avoid_ground(enemy.kind, &mut enemy.velocity, body, dt);
    }

    outcome
}

/// Pull-up correction for aircraft below the altitude floor: an upward
/// velocity bias proportional to the deficit, and a nose turned to follow it.
pub fn avoid_ground(kind: EnemyKind, velocity: &mut Vec3, body: &mut Body, dt: f32) {
    if !kind.avoids_ground() || body.position.y >= GROUND_AVOID_ALTITUDE {
        return;
    }
    let deficit = GROUND_AVOID_ALTITUDE - body.position.y;
    velocity.y += deficit * GROUND_AVOID_GAIN * dt;
    body.orientation = facing(*velocity);
}

/// Distance from `point` to the segment `from..to` swept this frame, so a
/// long step cannot jump over the arrival sphere.
fn closest_approach(from: Vec3, to: Vec3, point: Vec3) -> f32 {
    let segment = to - from;
    let length_sq = segment.length_squared();
    if length_sq <= f32::EPSILON {
        return to.distance(point);
    }
    let t = ((point - from).dot(segment) / length_sq).clamp(0.0, 1.0);
    (from + segment * t).distance(point)
}

/// Spin helicopter rotors.
pub fn spin_rotor(rotor: &mut Rotor, dt: f32) {
    rotor.main += HELICOPTER_MAIN_ROTOR_RATE * dt;
    rotor.tail += HELICOPTER_TAIL_ROTOR_RATE * dt;
}

/// Tangential velocity along the orbit at its current angle.
fn orbit_velocity(orbit: &Orbit) -> Vec3 {
    let tangential = orbit.radius * orbit.angular_velocity;
    Vec3::new(
        -orbit.angle.sin() * tangential,
        0.0,
        orbit.angle.cos() * tangential,
    )
}
