//! Visual banking for enemy airframes.
//!
//! The target roll combines the orbit turn rate with the heading change
//! seen since the last frame. The current roll chases it exponentially and
//! is clamped to +-60 degrees. Roll is stored apart from the heading
//! orientation so it never accumulates into it.

use bulwark_core::components::{Enemy, FlightPlan};
use bulwark_core::constants::*;
use bulwark_core::types::wrap_angle;

/// Roll the airframe should settle at for the given heading.
pub fn target_roll(enemy: &Enemy, heading: f32) -> f32 {
    let mut target = match enemy.flight {
        FlightPlan::Orbit(ref orbit) => orbit.angular_velocity * BANK_ORBIT_FACTOR,
        _ => 0.0,
    };

    if let Some(last) = enemy.bank.last_heading {
        let yaw = wrap_angle(heading - last);
        if yaw.abs() > BANK_YAW_DEADBAND {
            target += yaw * BANK_YAW_FACTOR;
        }
    }
    target
}

/// Update the bank state for this frame's heading.
pub fn update(enemy: &mut Enemy, heading: f32, dt: f32) {
    let target = target_roll(enemy, heading);
    enemy.bank.last_heading = Some(heading);

    let blend = (BANK_BLEND_RATE * dt).clamp(0.0, 1.0);
    let roll = enemy.bank.roll + (target - enemy.bank.roll) * blend;
    enemy.bank.roll = roll.clamp(-BANK_LIMIT, BANK_LIMIT);
}
