//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and all weapon, wave and score
//! state, applies player intents, runs every system once per frame and
//! produces `FrameSnapshot`s. Completely headless: rendering, audio and input
//! are collaborators outside the crate.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bulwark_core::commands::PlayerCommand;
use bulwark_core::components::{Body, Enemy};
use bulwark_core::constants::*;
use bulwark_core::enums::{ExplosionSize, GameMode, GamePhase, WeaponKind};
use bulwark_core::events::{AudioCue, AudioSink};
use bulwark_core::state::{BeamView, FrameSnapshot, HudView, LaserView};
use bulwark_core::types::{camera_right, off_axis_angle, SimTime};

use bulwark_flight::profiles::enemy_profile;

use crate::scoring::{self, Scoreboard};
use crate::systems;
use crate::systems::batteries::{self, Battery};
use crate::systems::collision::{self, Resolver};
use crate::systems::snapshot::FrameHeader;
use crate::systems::wave_director::WaveDirector;
use crate::weapons::{vulcan, Laser, MissileLauncher, Volley, Vulcan};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed. Same seed and same inputs = same game.
    pub seed: u64,
    pub max_missile_ammo: u32,
    pub missile_reload_secs: f32,
    pub max_laser_heat: f32,
    pub laser_cooldown_secs: f32,
    pub initial_spawn_interval: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_missile_ammo: MISSILE_MAX_AMMO,
            missile_reload_secs: MISSILE_RELOAD_SECS,
            max_laser_heat: LASER_MAX_HEAT,
            laser_cooldown_secs: LASER_COOLDOWN_SECS,
            initial_spawn_interval: INITIAL_SPAWN_INTERVAL,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    time: SimTime,
    phase: GamePhase,
    mode: GameMode,
    rng: ChaCha8Rng,
    audio: Box<dyn AudioSink>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,

    // --- Player intent ---
    weapon: WeaponKind,
    firing: bool,
    aim: Vec3,

    // --- Weapons ---
    vulcan: Vulcan,
    launcher: MissileLauncher,
    laser: Laser,
    beam: Option<BeamView>,

    // --- Progression ---
    director: WaveDirector,
    board: Scoreboard,
    batteries: [Battery; BATTERY_COUNT],
}

impl SimulationEngine {
    /// Create a new engine. `audio` receives every cue for the engine's lifetime.
    pub fn new(config: SimConfig, audio: Box<dyn AudioSink>) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            mode: GameMode::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            audio,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            weapon: WeaponKind::default(),
            firing: false,
            aim: DEFAULT_AIM,
            vulcan: Vulcan::default(),
            launcher: MissileLauncher::new(config.max_missile_ammo, config.missile_reload_secs),
            laser: Laser::new(config.max_laser_heat, config.laser_cooldown_secs),
            beam: None,
            director: WaveDirector::new(config.initial_spawn_interval),
            board: Scoreboard::new(PLAYER_MAX_HEALTH),
            batteries: batteries::default_batteries(),
            config,
        }
    }

    // ---- Intents ----

    /// Reset everything and start playing `mode`.
    pub fn start_game(&mut self, mode: GameMode) {
        systems::cleanup::clear(&mut self.world, &mut self.despawn_buffer);
        self.time = SimTime::default();
        self.mode = mode;
        self.weapon = WeaponKind::default();
        self.firing = false;
        self.vulcan = Vulcan::default();
        self.launcher =
            MissileLauncher::new(self.config.max_missile_ammo, self.config.missile_reload_secs);
        self.laser = Laser::new(self.config.max_laser_heat, self.config.laser_cooldown_secs);
        self.beam = None;
        self.director.reset();
        self.board = Scoreboard::new(PLAYER_MAX_HEALTH);
        self.batteries = batteries::default_batteries();
        self.phase = GamePhase::Playing;
        tracing::info!(%mode, seed = self.config.seed, "game started");
    }

    /// Trigger held or released. Releasing resets the vulcan ramp and drops
    /// the beam.
    pub fn set_firing(&mut self, firing: bool) {
        if !self.accepts_intents() {
            return;
        }
        self.firing = firing;
        if !firing {
            self.vulcan.release();
            self.beam = None;
        }
    }

    /// Select a weapon. Clears lock-ons and the beam.
    pub fn switch_weapon(&mut self, weapon: WeaponKind) {
        if !self.accepts_intents() {
            return;
        }
        self.weapon = weapon;
        self.release_locks();
        self.beam = None;
        tracing::debug!(%weapon, "weapon selected");
    }

    /// Launch at every live lock, or one unguided round if there are none.
    /// No-op unless the launcher is selected, loaded and not reloading.
    pub fn fire_missile_volley(&mut self) {
        if self.phase != GamePhase::Playing || self.weapon != WeaponKind::Missile {
            return;
        }
        let world = &self.world;
        let Some(volley) = self
            .launcher
            .fire(|entity| systems::projectiles::live_enemy_position(world, entity).is_some())
        else {
            return;
        };
        self.sync_lock_markers();

        match &volley {
            Volley::Unguided => {
                world_setup::spawn_projectile(
                    &mut self.world,
                    WeaponKind::Missile,
                    CAMERA_POSITION,
                    self.aim,
                    None,
                );
                self.audio.notify(AudioCue::WeaponFired {
                    weapon: WeaponKind::Missile,
                });
            }
            Volley::Guided(targets) => {
                for &target in targets {
                    let Some(position) =
                        systems::projectiles::live_enemy_position(&self.world, target)
                    else {
                        continue;
                    };
                    world_setup::spawn_projectile(
                        &mut self.world,
                        WeaponKind::Missile,
                        CAMERA_POSITION,
                        position - CAMERA_POSITION,
                        Some(target),
                    );
                    self.audio.notify(AudioCue::WeaponFired {
                        weapon: WeaponKind::Missile,
                    });
                }
            }
        }
        tracing::debug!(
            rounds = volley.rounds(),
            ammo = self.launcher.ammo(),
            reloading = self.launcher.is_reloading(),
            "missile volley"
        );
    }

    /// Point the camera. A zero vector is ignored.
    pub fn set_aim(&mut self, direction: Vec3) {
        let direction = direction.normalize_or_zero();
        if direction != Vec3::ZERO {
            self.aim = direction;
        }
    }

    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
            tracing::debug!("paused");
        }
    }

    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
            tracing::debug!("resumed");
        }
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply one command immediately.
    pub fn apply_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame { mode } => self.start_game(mode),
            PlayerCommand::SetFiring { firing } => self.set_firing(firing),
            PlayerCommand::SwitchWeapon { weapon } => self.switch_weapon(weapon),
            PlayerCommand::FireMissileVolley => self.fire_missile_volley(),
            PlayerCommand::Aim { direction } => self.set_aim(direction),
            PlayerCommand::Pause => self.pause(),
            PlayerCommand::Resume => self.resume(),
        }
    }

    // ---- Frame ----

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    ///
    /// Queued commands apply first. Nothing moves unless the game is playing;
    /// a non-positive or non-finite `dt` runs no frame.
    pub fn advance(&mut self, dt: f32) -> FrameSnapshot {
        while let Some(command) = self.command_queue.pop_front() {
            self.apply_command(command);
        }

        if self.phase == GamePhase::Playing && dt.is_finite() && dt > 0.0 {
            self.run_frame(dt);
            self.time.advance(dt);
        }

        self.snapshot()
    }

    /// Build the snapshot for the current state without advancing.
    pub fn snapshot(&self) -> FrameSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            FrameHeader {
                time: self.time,
                phase: self.phase,
                mode: self.mode,
                weapon: self.weapon,
                hud: self.hud(),
                laser: self.laser_view(),
                aim: self.aim,
            },
        )
    }

    /// Run all systems in order.
    fn run_frame(&mut self, dt: f32) {
        // 1. Resource timers
        if self.launcher.tick_reload(dt) {
            tracing::debug!(ammo = self.launcher.ammo(), "missiles reloaded");
        }
        if self.laser.tick_cooldown(dt) {
            tracing::debug!("laser cooled down");
        }

        // 2. Weapon effects
        let burning = self.firing && self.weapon == WeaponKind::Laser && !self.laser.overheated();
        if self.firing && self.weapon == WeaponKind::Vulcan && self.vulcan.hold(dt) {
            self.fire_vulcan();
        }
        if burning {
            self.sweep_beam();
            if self.laser.burn(dt) {
                self.beam = None;
                tracing::debug!(heat = self.laser.heat(), "laser overheated");
            }
        } else {
            self.beam = None;
            // Heat holds while any weapon is firing
            if !self.firing {
                self.laser.cool(dt);
            }
        }
        if self.weapon == WeaponKind::Missile && self.launcher.is_ready() {
            self.scan_locks();
        }

        // 3. Ambient batteries
        let tracers = batteries::run(&mut self.world, &mut self.rng, &mut self.batteries, dt);

        // 4. Spawns
        let spawned = systems::wave_director::run(
            &mut self.world,
            &mut self.rng,
            &mut self.director,
            self.mode,
            dt,
        );

        // 5. Entity advance
        systems::projectiles::run(&mut self.world, dt);
        let finished = systems::enemies::run(&mut self.world, dt);
        systems::effects::run_explosions(&mut self.world, dt);
        systems::effects::run_debris(&mut self.world, dt);
        systems::effects::run_tracers(&mut self.world, dt);

        // 6. Collisions and damage
        let report = collision::run(
            &mut self.world,
            &mut Resolver {
                rng: &mut self.rng,
                director: &mut self.director,
                board: &mut self.board,
                audio: self.audio.as_mut(),
            },
        );
        if self.board.is_dead() {
            self.game_over();
        }

        // 7. Cleanup
        let removed = systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        tracing::trace!(
            frame = self.time.frame,
            tracers,
            spawned = spawned.is_some(),
            finished,
            hits = report.hits,
            kills = report.kills,
            impacts = report.impacts,
            removed,
            live = self.world.len(),
            "frame"
        );
    }

    fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.firing = false;
        self.beam = None;
        self.vulcan.release();
        tracing::info!(
            score = self.board.score,
            wave = self.director.wave(),
            kills = self.board.kills,
            "game over"
        );
    }

    /// One vulcan salvo along the aim, spread sideways from wave 3 on.
    fn fire_vulcan(&mut self) {
        let right = camera_right(self.aim);
        for offset in vulcan::spread_offsets(self.director.wave()) {
            world_setup::spawn_projectile(
                &mut self.world,
                WeaponKind::Vulcan,
                CAMERA_POSITION + right * offset,
                self.aim,
                None,
            );
        }
        self.audio.notify(AudioCue::WeaponFired {
            weapon: WeaponKind::Vulcan,
        });
    }

    /// Burn everything inside the beam cone. The wave is checked once after
    /// the sweep.
    fn sweep_beam(&mut self) {
        let victims: Vec<(Entity, Vec3, u32, u32)> = self
            .world
            .query::<(&Body, &Enemy)>()
            .iter()
            .filter(|(_, (body, enemy))| body.alive && !enemy.impact)
            .filter(|(_, (body, _))| {
                off_axis_angle(CAMERA_POSITION, self.aim, body.position) < LASER_CONE
            })
            .map(|(entity, (body, enemy))| {
                (
                    entity,
                    body.position,
                    body.color,
                    enemy_profile(enemy.kind).beam_score,
                )
            })
            .collect();

        let mut ctx = Resolver {
            rng: &mut self.rng,
            director: &mut self.director,
            board: &mut self.board,
            audio: self.audio.as_mut(),
        };
        for &(entity, position, color, points) in &victims {
            if let Ok(mut body) = self.world.get::<&mut Body>(entity) {
                body.retire();
            }
            collision::explode(&mut self.world, &mut ctx, position, color, ExplosionSize::Full);
            scoring::credit_kill(ctx.board, ctx.director, points);
        }
        if !victims.is_empty() {
            scoring::check_wave(ctx.board, ctx.director);
        }

        self.beam = Some(BeamView {
            from: CAMERA_POSITION + Vec3::new(0.0, -LASER_MUZZLE_DROP, 0.0),
            to: CAMERA_POSITION + self.aim * LASER_BEAM_LENGTH,
        });
    }

    /// Lock the live enemies nearest the aim axis, one per remaining round.
    fn scan_locks(&mut self) {
        let candidates: Vec<(f32, Entity)> = self
            .world
            .query::<(&Body, &Enemy)>()
            .iter()
            .filter(|(_, (body, enemy))| body.alive && !enemy.impact)
            .map(|(entity, (body, _))| {
                (off_axis_angle(CAMERA_POSITION, self.aim, body.position), entity)
            })
            .filter(|(angle, _)| *angle < MISSILE_LOCK_CONE)
            .collect();
        self.launcher.lock(candidates);
        self.sync_lock_markers();
    }

    fn release_locks(&mut self) {
        self.launcher.clear_locks();
        self.sync_lock_markers();
    }

    /// Mirror the launcher's lock set onto the enemies' visual markers.
    fn sync_lock_markers(&mut self) {
        let locks = self.launcher.locks();
        for (entity, enemy) in self.world.query_mut::<&mut Enemy>() {
            enemy.locked = locks.contains(&entity);
        }
    }

    fn accepts_intents(&self) -> bool {
        matches!(self.phase, GamePhase::Playing | GamePhase::Paused)
    }

    fn hud(&self) -> HudView {
        HudView {
            score: self.board.score,
            wave: self.director.wave(),
            health: self.board.health,
            missile_ammo: self.launcher.ammo(),
            max_missile_ammo: self.launcher.max_ammo(),
            reload_progress: self.launcher.reload_progress(),
            lock_count: self.lock_count(),
        }
    }

    fn laser_view(&self) -> LaserView {
        LaserView {
            heat: self.laser.heat(),
            max_heat: self.laser.max_heat(),
            overheated: self.laser.overheated(),
            cooldown_remaining: self.laser.cooldown_remaining(),
            beam: self.beam,
        }
    }

    // ---- Accessors ----

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn score(&self) -> u32 {
        self.board.score
    }

    pub fn wave(&self) -> u32 {
        self.director.wave()
    }

    pub fn health(&self) -> u32 {
        self.board.health
    }

    pub fn weapon(&self) -> WeaponKind {
        self.weapon
    }

    pub fn is_firing(&self) -> bool {
        self.firing
    }

    pub fn aim(&self) -> Vec3 {
        self.aim
    }

    pub fn missile_ammo(&self) -> u32 {
        self.launcher.ammo()
    }

    pub fn reload_progress(&self) -> Option<f32> {
        self.launcher.reload_progress()
    }

    /// Locks whose target is still alive.
    pub fn lock_count(&self) -> u32 {
        self.launcher
            .locks()
            .iter()
            .filter(|&&entity| systems::projectiles::live_enemy_position(&self.world, entity).is_some())
            .count() as u32
    }

    pub fn laser_heat(&self) -> f32 {
        self.laser.heat()
    }

    pub fn laser_overheated(&self) -> bool {
        self.laser.overheated()
    }

    pub fn laser_cooldown_remaining(&self) -> f32 {
        self.laser.cooldown_remaining()
    }

    pub fn beam(&self) -> Option<BeamView> {
        self.beam
    }

    pub fn spawn_interval(&self) -> f32 {
        self.director.spawn_interval()
    }

    pub fn kills(&self) -> u32 {
        self.board.kills
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that stage entities by hand.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Mutable wave director for tests that need a particular wave.
    #[cfg(test)]
    pub fn director_mut(&mut self) -> &mut WaveDirector {
        &mut self.director
    }
}
