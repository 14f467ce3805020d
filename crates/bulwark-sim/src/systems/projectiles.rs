//! Projectile flight: homing, integration and expiry.

use std::collections::HashMap;

use glam::Vec3;
use hecs::{Entity, World};

use bulwark_core::components::{Body, Enemy, Projectile};
use bulwark_core::enums::WeaponKind;
use bulwark_core::types::facing;

use bulwark_flight::homing;

/// Position of `entity` if it is still a live enemy.
pub fn live_enemy_position(world: &World, entity: Entity) -> Option<Vec3> {
    if world.get::<&Enemy>(entity).is_err() {
        return None;
    }
    let body = world.get::<&Body>(entity).ok()?;
    body.alive.then_some(body.position)
}

/// Advance every live projectile by `dt`. Rounds whose lifetime runs out
/// are retired; cleanup despawns them.
pub fn run(world: &mut World, dt: f32) {
    // Resolve homing targets before taking the mutable query
    let guided: Vec<(Entity, Entity)> = world
        .query::<(&Body, &Projectile)>()
        .iter()
        .filter(|(_, (body, projectile))| body.alive && projectile.weapon == WeaponKind::Missile)
        .filter_map(|(entity, (_, projectile))| projectile.target.map(|target| (entity, target)))
        .collect();
    let aim_points: HashMap<Entity, Option<Vec3>> = guided
        .into_iter()
        .map(|(entity, target)| (entity, live_enemy_position(world, target)))
        .collect();

    for (entity, (body, projectile)) in world.query_mut::<(&mut Body, &mut Projectile)>() {
        if !body.alive {
            continue;
        }

        match aim_points.get(&entity) {
            Some(Some(target)) => {
                projectile.velocity =
                    homing::steer(body.position, projectile.velocity, projectile.speed, *target, dt);
                body.orientation = facing(projectile.velocity);
            }
            // Target gone: fly on straight from here
            Some(None) => projectile.target = None,
            None => {}
        }

        body.position += projectile.velocity * dt;
        projectile.lifetime -= dt;
        if projectile.lifetime <= 0.0 {
            body.retire();
        }
    }
}
