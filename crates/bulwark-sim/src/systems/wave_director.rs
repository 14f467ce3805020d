//! Wave director: spawn pacing and difficulty progression.
//!
//! One enemy spawns every time the spawn timer passes the interval. Every
//! `wave * 5` kills the wave advances, the interval shrinks and the player
//! is patched up.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use bulwark_core::constants::*;
use bulwark_core::enums::GameMode;

use crate::world_setup;

#[derive(Debug, Clone)]
pub struct WaveDirector {
    wave: u32,
    destroyed_in_wave: u32,
    initial_interval: f32,
    spawn_interval: f32,
    spawn_timer: f32,
}

impl WaveDirector {
    pub fn new(initial_interval: f32) -> Self {
        Self {
            wave: 1,
            destroyed_in_wave: 0,
            initial_interval,
            spawn_interval: initial_interval,
            spawn_timer: 0.0,
        }
    }

    /// Back to wave 1 at the initial pace.
    pub fn reset(&mut self) {
        *self = Self::new(self.initial_interval);
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn destroyed_in_wave(&self) -> u32 {
        self.destroyed_in_wave
    }

    pub fn spawn_interval(&self) -> f32 {
        self.spawn_interval
    }

    /// Kills needed to clear the current wave.
    pub fn quota(&self) -> u32 {
        self.wave * WAVE_KILLS_PER_LEVEL
    }

    /// Count the spawn timer. Returns `true` when an enemy is due.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.spawn_timer += dt;
        if self.spawn_timer > self.spawn_interval {
            self.spawn_timer = 0.0;
            return true;
        }
        false
    }

    pub fn record_kill(&mut self) {
        self.destroyed_in_wave += 1;
    }

    /// Advance the wave if the kill quota is met. Returns `true` on advance.
    pub fn check_advance(&mut self) -> bool {
        if self.destroyed_in_wave < self.quota() {
            return false;
        }
        self.wave += 1;
        self.destroyed_in_wave = 0;
        self.spawn_interval = (self.spawn_interval * SPAWN_INTERVAL_DECAY).max(MIN_SPAWN_INTERVAL);
        true
    }
}

/// Count the spawn timer and spawn one enemy when due.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    director: &mut WaveDirector,
    mode: GameMode,
    dt: f32,
) -> Option<hecs::Entity> {
    director
        .tick(dt)
        .then(|| world_setup::spawn_enemy(world, rng, mode, director.wave()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wave_one_advances_after_five_kills() {
        let mut director = WaveDirector::new(INITIAL_SPAWN_INTERVAL);
        for _ in 0..4 {
            director.record_kill();
            assert!(!director.check_advance());
        }
        director.record_kill();
        assert!(director.check_advance());
        assert_eq!(director.wave(), 2);
        assert_eq!(director.destroyed_in_wave(), 0);
        assert!((director.spawn_interval() - 1.7).abs() < 1e-6);
        assert_eq!(director.quota(), 10);
    }

    #[test]
    fn test_spawn_due_strictly_after_interval() {
        let mut director = WaveDirector::new(1.0);
        assert!(!director.tick(0.5));
        assert!(!director.tick(0.5));
        assert!(director.tick(0.25));
        assert!(!director.tick(0.25));
    }

    #[test]
    fn test_reset_restores_initial_pace() {
        let mut director = WaveDirector::new(2.0);
        for _ in 0..5 {
            director.record_kill();
        }
        director.check_advance();
        director.reset();
        assert_eq!(director.wave(), 1);
        assert_eq!(director.spawn_interval(), 2.0);
    }

    proptest! {
        #[test]
        fn prop_interval_after_n_advances(n in 0u32..30) {
            let mut director = WaveDirector::new(INITIAL_SPAWN_INTERVAL);
            for _ in 0..n {
                for _ in 0..director.quota() {
                    director.record_kill();
                }
                prop_assert!(director.check_advance());
            }
            let expected = (0..n).fold(INITIAL_SPAWN_INTERVAL, |interval, _| {
                (interval * SPAWN_INTERVAL_DECAY).max(MIN_SPAWN_INTERVAL)
            });
            prop_assert_eq!(director.wave(), n + 1);
            prop_assert!((director.spawn_interval() - expected).abs() < 1e-6);
            let closed_form = (INITIAL_SPAWN_INTERVAL * SPAWN_INTERVAL_DECAY.powi(n as i32))
                .max(MIN_SPAWN_INTERVAL);
            prop_assert!((director.spawn_interval() - closed_form).abs() < 1e-4);
        }
    }
}
