//! Ambient anti-air batteries.
//!
//! Four fixed emplacements around the player hose tracers into the sky in
//! bursts. Pure decoration: tracers never collide, but burst timing still
//! runs every frame off the engine RNG.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bulwark_core::constants::*;

use crate::world_setup;

/// One emplacement's scripted fire state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Battery {
    pub position: Vec3,
    pub direction: Vec3,
    /// While waiting: time to next burst. While bursting: time to next tracer.
    pub timer: f32,
    pub firing: bool,
    /// Seconds left in the current burst.
    pub burst_timer: f32,
}

impl Battery {
    pub fn new(position: Vec3, direction: Vec3) -> Self {
        Self {
            position,
            direction: direction.normalize_or_zero(),
            timer: 0.0,
            firing: false,
            burst_timer: 0.0,
        }
    }
}

/// The standard four-gun layout, all idle and ready to open up.
pub fn default_batteries() -> [Battery; BATTERY_COUNT] {
    std::array::from_fn(|i| Battery::new(BATTERY_POSITIONS[i], BATTERY_DIRECTIONS[i]))
}

/// Step every battery and spawn the tracers due this frame.
/// Returns the number of tracers spawned.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, batteries: &mut [Battery], dt: f32) -> usize {
    let mut spawned = 0;
    for battery in batteries.iter_mut() {
        battery.timer -= dt;
        if battery.firing {
            battery.burst_timer -= dt;
            if battery.timer <= 0.0 {
                world_setup::spawn_tracer(world, battery.position, battery.direction);
                battery.timer = BATTERY_SHOT_INTERVAL;
                spawned += 1;
            }
            if battery.burst_timer <= 0.0 {
                battery.firing = false;
                battery.timer = BATTERY_PAUSE_MIN + rng.gen::<f32>() * BATTERY_PAUSE_SPREAD;
            }
        } else if battery.timer <= 0.0 {
            battery.firing = true;
            battery.burst_timer = BATTERY_BURST_MIN + rng.gen::<f32>() * BATTERY_BURST_SPREAD;
        }
    }
    spawned
}
