//! Heat-limited beam.
//!
//! Heat builds one unit per second of burn. Reaching the cap locks the beam
//! out for a fixed cooldown, after which heat is zero. Idle heat bleeds off
//! at twice the build rate.

use bulwark_core::constants::{LASER_DECAY_FACTOR, LASER_HEAT_RATE};

#[derive(Debug, Clone)]
pub struct Laser {
    heat: f32,
    max_heat: f32,
    overheated: bool,
    cooldown_secs: f32,
    cooldown_timer: f32,
}

impl Laser {
    pub fn new(max_heat: f32, cooldown_secs: f32) -> Self {
        Self {
            heat: 0.0,
            max_heat,
            overheated: false,
            cooldown_secs,
            cooldown_timer: 0.0,
        }
    }

    pub fn heat(&self) -> f32 {
        self.heat
    }

    pub fn max_heat(&self) -> f32 {
        self.max_heat
    }

    pub fn overheated(&self) -> bool {
        self.overheated
    }

    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown_timer
    }

    /// Count the forced cooldown down. Returns `true` on the frame it ends.
    pub fn tick_cooldown(&mut self, dt: f32) -> bool {
        if !self.overheated {
            return false;
        }
        self.cooldown_timer -= dt;
        if self.cooldown_timer <= 0.0 {
            self.overheated = false;
            self.heat = 0.0;
            self.cooldown_timer = 0.0;
            return true;
        }
        false
    }

    /// Add heat for one burning frame. Returns `true` if this frame saturated
    /// the emitter and started the cooldown.
    pub fn burn(&mut self, dt: f32) -> bool {
        if self.overheated {
            return false;
        }
        self.heat = (self.heat + dt * LASER_HEAT_RATE).min(self.max_heat);
        if self.heat >= self.max_heat {
            self.overheated = true;
            self.cooldown_timer = self.cooldown_secs;
            return true;
        }
        false
    }

    /// Passive cooling for a frame without burn. Overheat blocks it.
    pub fn cool(&mut self, dt: f32) {
        if !self.overheated {
            self.heat = (self.heat - dt * LASER_HEAT_RATE * LASER_DECAY_FACTOR).max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overheats_at_exactly_max_heat() {
        let mut laser = Laser::new(5.0, 20.0);
        for _ in 0..19 {
            assert!(!laser.burn(0.25));
        }
        assert_eq!(laser.heat(), 4.75);
        assert!(laser.burn(0.25));
        assert_eq!(laser.heat(), 5.0);
        assert!(laser.overheated());
        assert_eq!(laser.cooldown_remaining(), 20.0);
    }

    #[test]
    fn test_no_heat_while_overheated() {
        let mut laser = Laser::new(1.0, 2.0);
        laser.burn(1.0);
        assert!(!laser.burn(0.5));
        laser.cool(0.5);
        assert_eq!(laser.heat(), 1.0);
    }

    #[test]
    fn test_cooldown_resets_heat_to_zero() {
        let mut laser = Laser::new(5.0, 20.0);
        laser.burn(5.0);
        for _ in 0..79 {
            assert!(!laser.tick_cooldown(0.25));
        }
        assert!(laser.tick_cooldown(0.25));
        assert!(!laser.overheated());
        assert_eq!(laser.heat(), 0.0);
        assert_eq!(laser.cooldown_remaining(), 0.0);
    }

    #[test]
    fn test_idle_decay_twice_build_rate() {
        let mut laser = Laser::new(5.0, 20.0);
        laser.burn(2.0);
        laser.cool(0.5);
        assert_eq!(laser.heat(), 1.0);
        laser.cool(10.0);
        assert_eq!(laser.heat(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_heat_stays_in_bounds(ops in prop::collection::vec((prop::bool::ANY, 0.0f32..3.0), 1..200)) {
            let mut laser = Laser::new(5.0, 20.0);
            for (burning, dt) in ops {
                laser.tick_cooldown(dt);
                if burning {
                    laser.burn(dt);
                } else {
                    laser.cool(dt);
                }
                prop_assert!(laser.heat() >= 0.0 && laser.heat() <= laser.max_heat());
                if !laser.overheated() {
                    prop_assert_eq!(laser.cooldown_remaining(), 0.0);
                }
            }
        }
    }
}
