//! Fundamental geometric and simulation types.
//!
//! World space is y-up: x and z span the ground plane, y is altitude.
//! Models face +Z in their local frame.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::HEMISPHERE_HORIZON_MARGIN;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of frames advanced since the game started.
    pub frame: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.elapsed_secs += dt as f64;
    }
}

/// Point on the upper hemisphere of `radius` built from two unit samples in `[0, 1)`.
///
/// The polar angle is kept short of the horizon so a sampled point never
/// lies on the ground plane.
pub fn hemisphere_point(radius: f32, polar_sample: f32, azimuth_sample: f32) -> Vec3 {
    let polar = polar_sample * (FRAC_PI_2 - HEMISPHERE_HORIZON_MARGIN);
    let azimuth = azimuth_sample * TAU;
    Vec3::new(
        radius * polar.sin() * azimuth.cos(),
        radius * polar.cos(),
        radius * polar.sin() * azimuth.sin(),
    )
}

/// Sphere-sphere test: true when the centers are closer than the sum of radii.
pub fn spheres_overlap(a: Vec3, radius_a: f32, b: Vec3, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}

/// Orientation that turns the model's +Z axis toward `direction` while
/// keeping the model upright (yaw, then pitch, never roll).
pub fn facing(direction: Vec3) -> Quat {
    let dir = direction.normalize_or_zero();
    if dir == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let yaw = dir.x.atan2(dir.z);
    let pitch = -dir.y.clamp(-1.0, 1.0).asin();
    Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0)
}

/// Heading of an orientation around the vertical axis, radians in `[-pi, pi]`.
/// Zero faces +Z, positive turns toward +X.
pub fn heading(orientation: Quat) -> f32 {
    let forward = orientation * Vec3::Z;
    forward.x.atan2(forward.z)
}

/// Wrap an angle into `[-pi, pi]`.
pub fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Angle between the aim axis and the line from `origin` to `point`.
pub fn off_axis_angle(origin: Vec3, aim: Vec3, point: Vec3) -> f32 {
    let to_point = point - origin;
    if to_point.length_squared() < f32::EPSILON || aim.length_squared() < f32::EPSILON {
        return PI;
    }
    aim.angle_between(to_point)
}

/// Camera right vector for an upright camera looking along `forward`.
pub fn camera_right(forward: Vec3) -> Vec3 {
    let right = forward.cross(Vec3::Y);
    if right.length_squared() < 1e-6 {
        Vec3::X
    } else {
        right.normalize()
    }
}
