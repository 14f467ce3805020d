//! Cosmetic entities: explosions, debris and ambient tracers.
//!
//! Each one grows, falls or flies, fades, and retires itself when spent.

use glam::{EulerRot, Quat};
use hecs::World;

use bulwark_core::components::{Body, Debris, Explosion, Tracer};
use bulwark_core::constants::*;

/// Grow and fade fireballs.
pub fn run_explosions(world: &mut World, dt: f32) {
    for (_entity, (body, explosion)) in world.query_mut::<(&mut Body, &mut Explosion)>() {
        if !body.alive {
            continue;
        }
        explosion.scale += explosion.growth_rate * dt;
        explosion.opacity -= EXPLOSION_FADE_RATE * dt;
        if explosion.opacity <= 0.0 {
            explosion.opacity = 0.0;
            body.retire();
        }
    }
}

/// Ballistic tumble under gravity; fades out over the last half second.
pub fn run_debris(world: &mut World, dt: f32) {
    for (_entity, (body, debris)) in world.query_mut::<(&mut Body, &mut Debris)>() {
        if !body.alive {
            continue;
        }
        debris.velocity += GRAVITY * dt;
        body.position += debris.velocity * dt;
        debris.rotation += debris.angular_velocity * dt;
        body.orientation = Quat::from_euler(
            EulerRot::XYZ,
            debris.rotation.x,
            debris.rotation.y,
            debris.rotation.z,
        );

        debris.lifetime -= dt;
        if debris.lifetime < DEBRIS_FADE_SECS {
            debris.opacity = (debris.lifetime / DEBRIS_FADE_SECS).max(0.0);
        }
        if debris.lifetime <= 0.0 {
            body.retire();
        }
    }
}

/// Fly tracers out, shrinking with distance and fading at the very end.
pub fn run_tracers(world: &mut World, dt: f32) {
    for (_entity, (body, tracer)) in world.query_mut::<(&mut Body, &mut Tracer)>() {
        if !body.alive {
            continue;
        }
        body.position += tracer.velocity * dt;
        tracer.lifetime -= dt;
        tracer.scale = (tracer.lifetime / TRACER_LIFETIME).max(TRACER_MIN_SCALE);
        if tracer.lifetime < TRACER_FADE_SECS {
            tracer.opacity = (tracer.lifetime / TRACER_FADE_SECS).max(0.0);
        }
        if tracer.lifetime <= 0.0 {
            body.retire();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulwark_core::enums::{DebrisShape, ExplosionSize};
    use glam::Vec3;

    #[test]
    fn test_explosion_grows_then_expires() {
        let mut world = World::new();
        let entity = world.spawn((
            Body::new(Vec3::ZERO, EXPLOSION_BODY_RADIUS, EXPLOSION_COLOR),
            Explosion {
                size: ExplosionSize::Full,
                growth_rate: EXPLOSION_GROWTH_RATE,
                scale: EXPLOSION_START_SCALE,
                opacity: 1.0,
            },
        ));
        run_explosions(&mut world, 0.25);
        {
            let explosion = world.get::<&Explosion>(entity).unwrap();
            assert_eq!(explosion.scale, 3.0);
            assert_eq!(explosion.opacity, 0.625);
        }
        // 1 / 1.5 s total
        for _ in 0..2 {
            run_explosions(&mut world, 0.25);
        }
        assert!(!world.get::<&Body>(entity).unwrap().alive);
    }

    #[test]
    fn test_debris_falls_and_fades() {
        let mut world = World::new();
        let entity = world.spawn((
            Body::new(Vec3::new(0.0, 20.0, 0.0), 0.3, 0xffffff),
            Debris {
                shape: DebrisShape::Box,
                velocity: Vec3::ZERO,
                angular_velocity: Vec3::splat(2.0),
                rotation: Vec3::ZERO,
                lifetime: 1.0,
                opacity: 1.0,
            },
        ));
        run_debris(&mut world, 0.75);
        {
            let (body, debris) = (
                world.get::<&Body>(entity).unwrap(),
                world.get::<&Debris>(entity).unwrap(),
            );
            assert!(debris.velocity.y < 0.0);
            assert!(body.position.y < 20.0);
            assert_eq!(debris.rotation, Vec3::splat(1.5));
            assert_eq!(debris.opacity, 0.5);
            assert!(body.alive);
        }
        run_debris(&mut world, 0.25);
        assert!(!world.get::<&Body>(entity).unwrap().alive);
    }

    #[test]
    fn test_tracer_shrinks_and_expires() {
        let mut world = World::new();
        let entity = world.spawn((
            Body::new(Vec3::ZERO, TRACER_RADIUS, TRACER_COLOR),
            Tracer {
                velocity: Vec3::Y * TRACER_SPEED,
                lifetime: TRACER_LIFETIME,
                scale: 1.0,
                opacity: 1.0,
            },
        ));
        run_tracers(&mut world, 1.75);
        {
            let tracer = world.get::<&Tracer>(entity).unwrap();
            assert_eq!(tracer.scale, 0.5);
            assert_eq!(tracer.opacity, 1.0);
            assert_eq!(world.get::<&Body>(entity).unwrap().position.y, 700.0);
        }
        run_tracers(&mut world, 1.625);
        {
            let tracer = world.get::<&Tracer>(entity).unwrap();
            assert_eq!(tracer.scale, TRACER_MIN_SCALE);
            assert!(tracer.opacity < 1.0);
        }
        run_tracers(&mut world, 0.5);
        assert!(!world.get::<&Body>(entity).unwrap().alive);
    }
}
