//! Collision and damage resolution.
//!
//! Runs after every entity has advanced. Two passes:
//!
//! 1. Projectile x enemy. Each projectile takes the first overlapping enemy
//!    in iteration order and is spent on it. A kill removes the enemy from
//!    the candidate list, so no enemy dies twice in a frame; a survivor
//!    (bomber) can soak several rounds.
//! 2. Impacts. Every enemy flagged by its flight model as having reached the
//!    defended point explodes and damages the player.
//!
//! Only live bodies take part. Candidates are gathered up front, so spawning
//! explosions while resolving never disturbs the sets being walked.

use glam::Vec3;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use bulwark_core::components::{Body, Enemy, Projectile};
use bulwark_core::constants::{EXPLOSION_COLOR, IMPACT_DAMAGE};
use bulwark_core::enums::ExplosionSize;
use bulwark_core::events::{AudioCue, AudioSink};
use bulwark_core::types::spheres_overlap;

use bulwark_flight::profiles::enemy_profile;

use crate::scoring::{self, Scoreboard};
use crate::systems::wave_director::WaveDirector;
use crate::world_setup;

/// What happened in one collision pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub hits: u32,
    pub kills: u32,
    pub impacts: u32,
}

/// Shared mutable context for the pass.
pub struct Resolver<'a> {
    pub rng: &'a mut ChaCha8Rng,
    pub director: &'a mut WaveDirector,
    pub board: &'a mut Scoreboard,
    pub audio: &'a mut dyn AudioSink,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    entity: Entity,
    position: Vec3,
    radius: f32,
}

/// Resolve projectile hits, then impacts.
pub fn run(world: &mut World, ctx: &mut Resolver<'_>) -> CollisionReport {
    let mut report = CollisionReport::default();
    resolve_hits(world, ctx, &mut report);
    resolve_impacts(world, ctx, &mut report);
    report
}

fn resolve_hits(world: &mut World, ctx: &mut Resolver<'_>, report: &mut CollisionReport) {
    let projectiles: Vec<Candidate> = world
        .query::<(&Body, &Projectile)>()
        .iter()
        .filter(|(_, (body, _))| body.alive)
        .map(|(entity, (body, _))| Candidate {
            entity,
            position: body.position,
            radius: body.radius,
        })
        .collect();
    let mut enemies: Vec<Candidate> = world
        .query::<(&Body, &Enemy)>()
        .iter()
        .filter(|(_, (body, enemy))| body.alive && !enemy.impact)
        .map(|(entity, (body, _))| Candidate {
            entity,
            position: body.position,
            radius: body.radius,
        })
        .collect();

    for shot in projectiles {
        let Some(index) = enemies.iter().position(|target| {
            spheres_overlap(shot.position, shot.radius, target.position, target.radius)
        }) else {
            continue;
        };
        let target = enemies[index];
        report.hits += 1;

        if let Ok(mut body) = world.get::<&mut Body>(shot.entity) {
            body.retire();
        }

        let killed = match world.get::<&mut Enemy>(target.entity) {
            Ok(mut enemy) => {
                enemy.health = enemy.health.saturating_sub(1);
                (enemy.health == 0).then_some(enemy.kind)
            }
            Err(_) => continue,
        };

        match killed {
            Some(kind) => {
                enemies.swap_remove(index);
                let color = retire_enemy(world, target.entity);
                explode(world, ctx, target.position, color, ExplosionSize::Full);

                report.kills += 1;
                scoring::credit_kill(ctx.board, ctx.director, enemy_profile(kind).score);
                scoring::check_wave(ctx.board, ctx.director);
                tracing::debug!(?kind, score = ctx.board.score, "enemy destroyed");
            }
            None => explode(world, ctx, shot.position, EXPLOSION_COLOR, ExplosionSize::Spark),
        }
    }
}

fn resolve_impacts(world: &mut World, ctx: &mut Resolver<'_>, report: &mut CollisionReport) {
    let strikes: Vec<(Entity, Vec3)> = world
        .query::<(&Body, &Enemy)>()
        .iter()
        .filter(|(_, (body, enemy))| body.alive && enemy.impact)
        .map(|(entity, (body, _))| (entity, body.position))
        .collect();

    for (entity, position) in strikes {
        let color = retire_enemy(world, entity);
        explode(world, ctx, position, color, ExplosionSize::Full);
        report.impacts += 1;
        ctx.board.impacts += 1;
        ctx.board.take_damage(IMPACT_DAMAGE);
        tracing::debug!(health = ctx.board.health, "impact on defended point");
    }
}

/// Retire an enemy body and return its colour for the debris.
fn retire_enemy(world: &mut World, entity: Entity) -> u32 {
    match world.get::<&mut Body>(entity) {
        Ok(mut body) => {
            body.retire();
            body.color
        }
        Err(_) => EXPLOSION_COLOR,
    }
}

/// Spawn an explosion and tell the audio collaborator.
pub fn explode(
    world: &mut World,
    ctx: &mut Resolver<'_>,
    position: Vec3,
    debris_color: u32,
    size: ExplosionSize,
) {
    world_setup::spawn_explosion(world, ctx.rng, position, debris_color, size);
    ctx.audio.notify(AudioCue::Explosion);
}
