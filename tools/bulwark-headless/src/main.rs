//! bulwark-headless: runs the combat engine without graphics.
//!
//! A scripted gunner plays the game at a fixed frame rate. Snapshots and
//! summaries go to stdout as JSON lines; logs go to stderr.
//!
//! Usage:
//!   bulwark-headless run --mode aircraft --seconds 120 --seed 7
//!   bulwark-headless run --mode missile --snapshots --every 30
//!   bulwark-headless verify --seed 12345 --runs 3

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use glam::Vec3;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use bulwark_core::commands::PlayerCommand;
use bulwark_core::constants::CAMERA_POSITION;
use bulwark_core::enums::{EntityKind, GameMode, GamePhase, WeaponKind};
use bulwark_core::events::Silent;
use bulwark_core::state::FrameSnapshot;
use bulwark_sim::{SimConfig, SimulationEngine};

#[derive(Parser)]
#[command(name = "bulwark-headless")]
#[command(about = "Headless BULWARK runner with a scripted gunner")]
#[command(version)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game and print a JSON summary
    Run {
        #[command(flatten)]
        game: GameArgs,

        /// Also print a JSON snapshot line every `every` frames
        #[arg(long)]
        snapshots: bool,

        #[arg(long, default_value = "60")]
        every: u64,
    },

    /// Play the same game several times and check every frame matches
    Verify {
        #[command(flatten)]
        game: GameArgs,

        #[arg(short, long, default_value = "3")]
        runs: u32,
    },
}

#[derive(clap::Args, Clone)]
struct GameArgs {
    /// Game mode: missile or aircraft
    #[arg(short, long, default_value = "missile")]
    mode: GameMode,

    /// Simulated seconds to play (stops early on game over)
    #[arg(short, long, default_value = "60")]
    seconds: f32,

    #[arg(long, default_value = "42")]
    seed: u64,

    /// Frames per simulated second
    #[arg(long, default_value = "60")]
    fps: u32,

    /// Hold the vulcan only, no weapon switching
    #[arg(long)]
    vulcan_only: bool,
}

#[derive(Serialize)]
struct RunSummary {
    mode: GameMode,
    seed: u64,
    frames: u64,
    seconds: f64,
    phase: GamePhase,
    score: u32,
    wave: u32,
    health: u32,
    kills: u32,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs to stderr; stdout is JSON only
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            game,
            snapshots,
            every,
        } => cmd_run(&game, snapshots.then_some(every.max(1))),
        Commands::Verify { game, runs } => cmd_verify(&game, runs),
    }
}

fn cmd_run(game: &GameArgs, every: Option<u64>) -> ExitCode {
    let summary = play(game, |snapshot| {
        if let Some(every) = every {
            if snapshot.time.frame % every == 0 {
                emit(snapshot);
            }
        }
    });
    emit(&summary);
    ExitCode::SUCCESS
}

fn cmd_verify(game: &GameArgs, runs: u32) -> ExitCode {
    let reference = frame_hashes(game);
    tracing::info!(frames = reference.len(), "reference run complete");

    for run in 1..runs {
        let hashes = frame_hashes(game);
        if let Some(frame) = reference
            .iter()
            .zip(&hashes)
            .position(|(a, b)| a != b)
            .or_else(|| (reference.len() != hashes.len()).then_some(reference.len().min(hashes.len())))
        {
            tracing::error!(run, frame, "snapshots diverged");
            return ExitCode::FAILURE;
        }
    }
    tracing::info!(runs, seed = game.seed, "all runs identical");
    ExitCode::SUCCESS
}

fn frame_hashes(game: &GameArgs) -> Vec<u64> {
    let mut hashes = Vec::new();
    play(game, |snapshot| {
        let mut hasher = DefaultHasher::new();
        serde_json::to_string(snapshot)
            .unwrap_or_default()
            .hash(&mut hasher);
        hashes.push(hasher.finish());
    });
    hashes
}

/// Play one game with the scripted gunner, handing every snapshot to `observe`.
fn play(game: &GameArgs, mut observe: impl FnMut(&FrameSnapshot)) -> RunSummary {
    let mut engine = SimulationEngine::new(
        SimConfig {
            seed: game.seed,
            ..Default::default()
        },
        Box::new(Silent),
    );
    engine.queue_command(PlayerCommand::StartGame { mode: game.mode });

    let dt = 1.0 / game.fps.max(1) as f32;
    let frames = (game.seconds.max(0.0) * game.fps as f32).round() as u64;
    let gunner = Gunner {
        vulcan_only: game.vulcan_only,
    };

    let mut snapshot = engine.advance(dt);
    observe(&snapshot);
    for _ in 1..frames {
        if snapshot.phase == GamePhase::GameOver {
            break;
        }
        engine.queue_commands(gunner.decide(&snapshot));
        snapshot = engine.advance(dt);
        observe(&snapshot);
    }

    RunSummary {
        mode: game.mode,
        seed: game.seed,
        frames: snapshot.time.frame,
        seconds: snapshot.time.elapsed_secs,
        phase: snapshot.phase,
        score: engine.score(),
        wave: engine.wave(),
        health: engine.health(),
        kills: engine.kills(),
    }
}

fn emit(value: &impl Serialize) {
    match serde_json::to_string(value) {
        Ok(line) => println!("{line}"),
        Err(e) => tracing::error!(error = %e, "failed to serialize output"),
    }
}

/// Aims at the nearest enemy and picks a weapon from the HUD readouts.
struct Gunner {
    vulcan_only: bool,
}

impl Gunner {
    fn decide(&self, snapshot: &FrameSnapshot) -> Vec<PlayerCommand> {
        let enemies: Vec<Vec3> = snapshot
            .entities
            .iter()
            .filter(|view| view.kind == EntityKind::Enemy)
            .map(|view| view.position)
            .collect();
        let Some(nearest) = enemies.iter().copied().min_by(|a, b| {
            a.distance_squared(CAMERA_POSITION)
                .total_cmp(&b.distance_squared(CAMERA_POSITION))
        }) else {
            return vec![PlayerCommand::SetFiring { firing: false }];
        };

        let mut commands = vec![
            PlayerCommand::Aim {
                direction: nearest - CAMERA_POSITION,
            },
            PlayerCommand::SetFiring { firing: true },
        ];

        let weapon = self.choose_weapon(snapshot, enemies.len());
        if weapon != snapshot.weapon {
            commands.push(PlayerCommand::SwitchWeapon { weapon });
        } else if weapon == WeaponKind::Missile && snapshot.hud.lock_count > 0 {
            commands.push(PlayerCommand::FireMissileVolley);
        }
        commands
    }

    fn choose_weapon(&self, snapshot: &FrameSnapshot, enemy_count: usize) -> WeaponKind {
        if self.vulcan_only {
            return WeaponKind::Vulcan;
        }
        let hud = &snapshot.hud;
        let laser = &snapshot.laser;
        if enemy_count >= 3 && hud.missile_ammo > 0 && hud.reload_progress.is_none() {
            WeaponKind::Missile
        } else if !laser.overheated && laser.heat < laser.max_heat * 0.8 {
            WeaponKind::Laser
        } else {
            WeaponKind::Vulcan
        }
    }
}
