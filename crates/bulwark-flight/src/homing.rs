//! Guided missile steering.
//!
//! Each frame the travel direction is blended toward the line of sight by a
//! fixed turn rate, then renormalised so the missile keeps constant speed.

use glam::Vec3;

use bulwark_core::constants::MISSILE_TURN_RATE;

/// New velocity after steering toward `target` for `dt` seconds.
///
/// Falls back to the current velocity when the target sits on top of the
/// missile and there is no line of sight to follow.
pub fn steer(position: Vec3, velocity: Vec3, speed: f32, target: Vec3, dt: f32) -> Vec3 {
    let desired = (target - position).normalize_or_zero();
    if desired == Vec3::ZERO {
        return velocity;
    }

    let current = velocity.normalize_or_zero();
    if current == Vec3::ZERO {
        return desired * speed;
    }

    let turn = (MISSILE_TURN_RATE * dt).clamp(0.0, 1.0);
    let blended = current.lerp(desired, turn).normalize_or_zero();
    if blended == Vec3::ZERO {
        // Target dead astern and turn == 0.5: pick the line of sight.
        desired * speed
    } else {
        blended * speed
    }
}
