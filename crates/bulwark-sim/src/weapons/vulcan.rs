//! Vulcan cannon: rate of fire ramps up while the trigger stays down.

use bulwark_core::constants::*;

/// Fire-rate state for the cannon.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vulcan {
    fire_timer: f32,
    /// Seconds of continuous fire in the current burst.
    accel_timer: f32,
}

impl Vulcan {
    /// Current shot interval.
    pub fn interval(&self) -> f32 {
        fire_interval(self.accel_timer)
    }

    pub fn accel_timer(&self) -> f32 {
        self.accel_timer
    }

    /// One frame with the trigger held. Returns `true` when a salvo leaves
    /// the muzzle this frame.
    pub fn hold(&mut self, dt: f32) -> bool {
        self.fire_timer += dt;
        self.accel_timer += dt;
        if self.fire_timer >= self.interval() {
            self.fire_timer = 0.0;
            true
        } else {
            false
        }
    }

    /// Trigger released: the next burst starts slow again.
    pub fn release(&mut self) {
        self.accel_timer = 0.0;
    }
}

/// Shot interval after `accel_secs` of continuous fire: linear ramp from
/// the base interval down to the floor.
pub fn fire_interval(accel_secs: f32) -> f32 {
    (VULCAN_BASE_INTERVAL - accel_secs * VULCAN_RAMP_PER_SEC).max(VULCAN_MIN_INTERVAL)
}

/// Rounds per salvo at a given wave.
pub fn shot_count(wave: u32) -> u32 {
    if wave >= VULCAN_TRIPLE_WAVE {
        3
    } else if wave >= VULCAN_TWIN_WAVE {
        2
    } else {
        1
    }
}

/// Lateral muzzle offsets (along camera right) for each round of a salvo.
pub fn spread_offsets(wave: u32) -> impl Iterator<Item = f32> {
    let count = shot_count(wave);
    let center = (count as f32 - 1.0) / 2.0;
    (0..count).map(move |i| (i as f32 - center) * VULCAN_SPREAD)
}
