//! Player score and health ledger.
//!
//! Stored in `SimulationEngine`, NOT in the ECS world.

use bulwark_core::constants::WAVE_HEALTH_BONUS;

use crate::systems::wave_director::WaveDirector;

/// Running score and health tracked by the engine.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    pub score: u32,
    pub health: u32,
    pub max_health: u32,
    /// Enemies destroyed this game.
    pub kills: u32,
    /// Enemies that reached the defended point.
    pub impacts: u32,
}

impl Scoreboard {
    pub fn new(max_health: u32) -> Self {
        Self {
            score: 0,
            health: max_health,
            max_health,
            kills: 0,
            impacts: 0,
        }
    }

    /// Apply damage. Returns `true` if health is now exhausted.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.health = self.health.saturating_sub(amount);
        self.health == 0
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

/// Book one kill: points plus wave progress. The wave is not checked here.
pub fn credit_kill(board: &mut Scoreboard, director: &mut WaveDirector, points: u32) {
    board.score += points;
    board.kills += 1;
    director.record_kill();
}

/// Advance the wave if its quota is met, patching the player up on advance.
pub fn check_wave(board: &mut Scoreboard, director: &mut WaveDirector) -> bool {
    if !director.check_advance() {
        return false;
    }
    board.heal(WAVE_HEALTH_BONUS);
    tracing::info!(
        wave = director.wave(),
        spawn_interval = director.spawn_interval(),
        health = board.health,
        "wave advanced"
    );
    true
}
