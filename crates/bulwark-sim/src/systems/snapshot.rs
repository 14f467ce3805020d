//! Snapshot system: queries the ECS world and builds a complete FrameSnapshot.
//!
//! Read-only: it never modifies the world.

use glam::Vec3;
use hecs::{Entity, World};

use bulwark_core::components::*;
use bulwark_core::constants::*;
use bulwark_core::enums::*;
use bulwark_core::state::*;
use bulwark_core::types::{facing, heading, SimTime};

/// Engine-owned state that goes into the snapshot alongside the world.
#[derive(Debug, Clone)]
pub struct FrameHeader {
    pub time: SimTime,
    pub phase: GamePhase,
    pub mode: GameMode,
    pub weapon: WeaponKind,
    pub hud: HudView,
    pub laser: LaserView,
    /// Camera forward vector.
    pub aim: Vec3,
}

/// Build a complete FrameSnapshot from the current world state.
pub fn build_snapshot(world: &World, header: FrameHeader) -> FrameSnapshot {
    let mut entities = Vec::new();
    entities.extend(build_projectiles(world));
    entities.extend(build_enemies(world));
    entities.extend(build_explosions(world));
    entities.extend(build_debris(world));
    entities.extend(build_tracers(world));

    FrameSnapshot {
        time: header.time,
        phase: header.phase,
        mode: header.mode,
        weapon: header.weapon,
        hud: header.hud,
        laser: header.laser,
        radar: build_radar(world, header.aim),
        entities,
    }
}

fn entity_id(entity: Entity) -> u64 {
    entity.to_bits().get()
}

fn base_view(entity: Entity, kind: EntityKind, body: &Body, detail: EntityDetail) -> EntityView {
    EntityView {
        id: entity_id(entity),
        kind,
        position: body.position,
        orientation: body.orientation,
        radius: body.radius,
        color: body.color,
        scale: Vec3::ONE,
        opacity: 1.0,
        detail,
    }
}

fn sorted(mut views: Vec<EntityView>) -> Vec<EntityView> {
    views.sort_by_key(|v| v.id);
    views
}

fn build_projectiles(world: &World) -> Vec<EntityView> {
    sorted(
        world
            .query::<(&Body, &Projectile)>()
            .iter()
            .filter(|(_, (body, _))| body.alive)
            .map(|(entity, (body, projectile))| {
                let mut view = base_view(
                    entity,
                    EntityKind::Projectile,
                    body,
                    EntityDetail::Projectile {
                        weapon: projectile.weapon,
                    },
                );
                view.orientation = facing(projectile.velocity);
                view
            })
            .collect(),
    )
}

fn build_enemies(world: &World) -> Vec<EntityView> {
    sorted(
        world
            .query::<(&Body, &Enemy, Option<&Rotor>)>()
            .iter()
            .filter(|(_, (body, _, _))| body.alive)
            .map(|(entity, (body, enemy, rotor))| {
                let pitch = if enemy.kind == EnemyKind::Helicopter {
                    HELICOPTER_PITCH
                } else {
                    0.0
                };
                base_view(
                    entity,
                    EntityKind::Enemy,
                    body,
                    EntityDetail::Enemy {
                        kind: enemy.kind,
                        mode: enemy.flight.mode(),
                        health: enemy.health,
                        max_health: enemy.max_health,
                        locked: enemy.locked,
                        roll: enemy.bank.roll,
                        pitch,
                        rotor: rotor.map(|r| (r.main, r.tail)),
                    },
                )
            })
            .collect(),
    )
}

fn build_explosions(world: &World) -> Vec<EntityView> {
    sorted(
        world
            .query::<(&Body, &Explosion)>()
            .iter()
            .filter(|(_, (body, _))| body.alive)
            .map(|(entity, (body, explosion))| {
                let mut view = base_view(
                    entity,
                    EntityKind::Explosion,
                    body,
                    EntityDetail::Explosion {
                        size: explosion.size,
                    },
                );
                view.scale = Vec3::splat(explosion.scale);
                view.opacity = explosion.opacity;
                view
            })
            .collect(),
    )
}

fn build_debris(world: &World) -> Vec<EntityView> {
    sorted(
        world
            .query::<(&Body, &Debris)>()
            .iter()
            .filter(|(_, (body, _))| body.alive)
            .map(|(entity, (body, debris))| {
                let mut view = base_view(
                    entity,
                    EntityKind::Debris,
                    body,
                    EntityDetail::Debris {
                        shape: debris.shape,
                    },
                );
                view.opacity = debris.opacity;
                view
            })
            .collect(),
    )
}

fn build_tracers(world: &World) -> Vec<EntityView> {
    // Tracer mesh is a sphere stretched along its flight path
    let stretch = Vec3::new(0.6, 0.6, 1.2);
    sorted(
        world
            .query::<(&Body, &Tracer)>()
            .iter()
            .filter(|(_, (body, _))| body.alive)
            .map(|(entity, (body, tracer))| {
                let mut view = base_view(entity, EntityKind::Tracer, body, EntityDetail::Tracer);
                view.scale = stretch * tracer.scale;
                view.opacity = tracer.opacity;
                view
            })
            .collect(),
    )
}

/// Enemies within horizontal radar range of the player, plus the heading cone.
fn build_radar(world: &World, aim: Vec3) -> RadarView {
    let mut contacts: Vec<RadarContact> = world
        .query::<(&Body, &Enemy)>()
        .iter()
        .filter(|(_, (body, _))| body.alive)
        .filter(|(_, (body, _))| {
            let offset = body.position - CAMERA_POSITION;
            offset.x.hypot(offset.z) < RADAR_RANGE
        })
        .map(|(entity, (body, enemy))| RadarContact {
            id: entity_id(entity),
            kind: enemy.kind,
            position: body.position,
            altitude_factor: (body.position.y / RADAR_ALTITUDE_SCALE).clamp(0.0, 1.0),
        })
        .collect();
    contacts.sort_by_key(|c| c.id);

    RadarView {
        heading: heading(facing(aim)),
        fov: CAMERA_FOV,
        range: RADAR_RANGE,
        contacts,
    }
}
