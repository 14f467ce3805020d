//! Entity spawn factories.
//!
//! Every factory builds a [`Body`] plus one variant component and hands the
//! bundle to hecs. Randomised factories draw from the engine RNG so a seed
//! reproduces the same sky.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bulwark_core::components::*;
use bulwark_core::constants::*;
use bulwark_core::enums::*;
use bulwark_core::types::{facing, hemisphere_point};

use bulwark_flight::movement;
use bulwark_flight::profiles::{enemy_profile, projectile_profile};

/// Spawn one enemy for the current game mode and wave.
pub fn spawn_enemy(world: &mut World, rng: &mut ChaCha8Rng, mode: GameMode, wave: u32) -> Entity {
    let position = random_hemisphere_point(rng, SPAWN_RADIUS);
    let (kind, flight) = match mode {
        GameMode::MissileDefense => plan_missile_defense(rng, wave),
        GameMode::AircraftRaid => plan_aircraft_raid(rng, position),
    };
    let entity = spawn_enemy_at(world, kind, position, flight);
    tracing::debug!(?kind, mode = ?flight.mode(), wave, "enemy spawned");
    entity
}

/// Spawn an enemy with an explicit flight plan.
pub fn spawn_enemy_at(world: &mut World, kind: EnemyKind, position: Vec3, flight: FlightPlan) -> Entity {
    let profile = enemy_profile(kind);
    let mut body = Body::new(position, profile.radius, profile.color);
    let mut enemy = Enemy {
        kind,
        health: profile.health,
        max_health: profile.health,
        speed: profile.speed,
        velocity: Vec3::ZERO,
        flight,
        elapsed: 0.0,
        impact: false,
        locked: false,
        bank: Bank::default(),
    };
    movement::launch(&mut enemy, &mut body);

    if kind == EnemyKind::Helicopter {
        world.spawn((body, enemy, Rotor::default()))
    } else {
        world.spawn((body, enemy))
    }
}

/// Missile-defense mode: everything dives straight at the defended point.
/// Missiles grow more common with each wave; the rest are drones.
fn plan_missile_defense(rng: &mut ChaCha8Rng, wave: u32) -> (EnemyKind, FlightPlan) {
    let kind = if rng.gen::<f32>() < missile_chance(wave) {
        EnemyKind::Missile
    } else {
        EnemyKind::Drone
    };
    (
        kind,
        FlightPlan::Direct {
            target: DEFENDED_POINT,
        },
    )
}

/// Chance that a missile-defense spawn is a missile rather than a drone.
pub fn missile_chance(wave: u32) -> f32 {
    (MISSILE_CHANCE_BASE + MISSILE_CHANCE_PER_WAVE * wave as f32).min(MISSILE_CHANCE_MAX)
}

/// Aircraft-raid mode: a mixed air group crossing, passing or circling.
fn plan_aircraft_raid(rng: &mut ChaCha8Rng, position: Vec3) -> (EnemyKind, FlightPlan) {
    let roll: f32 = rng.gen();
    let kind = if roll < FIGHTER_SHARE {
        EnemyKind::Fighter
    } else if roll < HELICOPTER_SHARE {
        EnemyKind::Helicopter
    } else {
        EnemyKind::Bomber
    };
    let speed = enemy_profile(kind).speed;

    let roll: f32 = rng.gen();
    let flight = if roll < CROSSING_SHARE {
        // Straight over the top to the far side of the sky
        let mut target = position * -CROSSING_OVERSHOOT;
        target.y = (position.y + (rng.gen::<f32>() - 0.5) * CROSSING_ALTITUDE_JITTER)
            .max(CROSSING_MIN_ALTITUDE);
        FlightPlan::Crossing { target }
    } else if roll < FLYBY_SHARE {
        // Through a point near the player and on out
        let aim = Vec3::new(
            (rng.gen::<f32>() - 0.5) * FLYBY_SCATTER,
            FLYBY_AIM_ALTITUDE + rng.gen::<f32>() * FLYBY_AIM_ALTITUDE_JITTER,
            (rng.gen::<f32>() - 0.5) * FLYBY_SCATTER,
        );
        let heading = (aim - position).normalize_or_zero();
        let mut target = position + heading * FLYBY_RUN_OUT;
        target.y = target.y.max(FLYBY_MIN_ALTITUDE);
        FlightPlan::Flyby { target }
    } else if roll < WIDE_ORBIT_SHARE {
        let mut center = random_hemisphere_point(rng, WIDE_ORBIT_CENTER_RADIUS);
        center.y = center.y.max(WIDE_ORBIT_MIN_ALTITUDE);
        let radius = WIDE_ORBIT_RADIUS + rng.gen::<f32>() * WIDE_ORBIT_RADIUS_JITTER;
        let direction = random_direction(rng);
        FlightPlan::Orbit(movement::orbit_from(position, center, radius, direction, speed))
    } else {
        let center = Vec3::new(
            0.0,
            OVERHEAD_ORBIT_ALTITUDE + rng.gen::<f32>() * OVERHEAD_ORBIT_ALTITUDE_JITTER,
            0.0,
        );
        let radius = OVERHEAD_ORBIT_RADIUS + rng.gen::<f32>() * OVERHEAD_ORBIT_RADIUS_JITTER;
        let direction = random_direction(rng);
        FlightPlan::Orbit(movement::orbit_from(position, center, radius, direction, speed))
    };
    (kind, flight)
}

/// Spawn one player round. `direction` need not be normalised.
pub fn spawn_projectile(
    world: &mut World,
    weapon: WeaponKind,
    origin: Vec3,
    direction: Vec3,
    target: Option<Entity>,
) -> Entity {
    let profile = projectile_profile(weapon);
    let mut heading = direction.normalize_or_zero();
    if heading == Vec3::ZERO {
        heading = DEFAULT_AIM;
    }
    let mut body = Body::new(origin, profile.radius, profile.color);
    body.orientation = facing(heading);
    world.spawn((
        body,
        Projectile {
            weapon,
            velocity: heading * profile.speed,
            speed: profile.speed,
            lifetime: profile.lifetime,
            target,
        },
    ))
}

/// Spawn a fireball and its debris shower. Debris takes `debris_color`.
pub fn spawn_explosion(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    position: Vec3,
    debris_color: u32,
    size: ExplosionSize,
) -> Entity {
    let (growth_rate, min, spread) = match size {
        ExplosionSize::Full => (EXPLOSION_GROWTH_RATE, DEBRIS_MIN, DEBRIS_SPREAD),
        ExplosionSize::Spark => (SPARK_GROWTH_RATE, SPARK_DEBRIS_MIN, SPARK_DEBRIS_SPREAD),
    };
    let explosion = world.spawn((
        Body::new(position, EXPLOSION_BODY_RADIUS, EXPLOSION_COLOR),
        Explosion {
            size,
            growth_rate,
            scale: EXPLOSION_START_SCALE,
            opacity: 1.0,
        },
    ));

    let count = min + rng.gen_range(0..spread);
    for _ in 0..count {
        spawn_debris(world, rng, position, debris_color);
    }
    explosion
}

/// Spawn one tumbling fragment thrown in a random direction.
pub fn spawn_debris(world: &mut World, rng: &mut ChaCha8Rng, position: Vec3, color: u32) -> Entity {
    let radius = DEBRIS_MIN_RADIUS + rng.gen::<f32>() * DEBRIS_RADIUS_SPREAD;
    let shape = match rng.gen_range(0..3) {
        0 => DebrisShape::Box,
        1 => DebrisShape::Tetrahedron,
        _ => DebrisShape::Sphere,
    };
    let speed = DEBRIS_MIN_SPEED + rng.gen::<f32>() * DEBRIS_SPEED_SPREAD;
    let mut heading = Vec3::new(
        rng.gen::<f32>() - 0.5,
        rng.gen::<f32>() - 0.5,
        rng.gen::<f32>() - 0.5,
    )
    .normalize_or_zero();
    if heading == Vec3::ZERO {
        heading = Vec3::Y;
    }
    let angular_velocity = Vec3::new(
        rng.gen::<f32>() * DEBRIS_MAX_SPIN,
        rng.gen::<f32>() * DEBRIS_MAX_SPIN,
        rng.gen::<f32>() * DEBRIS_MAX_SPIN,
    );
    let lifetime = DEBRIS_MIN_LIFETIME + rng.gen::<f32>() * DEBRIS_LIFETIME_SPREAD;

    world.spawn((
        Body::new(position, radius, color),
        Debris {
            shape,
            velocity: heading * speed,
            angular_velocity,
            rotation: Vec3::ZERO,
            lifetime,
            opacity: 1.0,
        },
    ))
}

/// Spawn one ambient tracer leaving a battery.
pub fn spawn_tracer(world: &mut World, position: Vec3, direction: Vec3) -> Entity {
    let heading = direction.normalize_or_zero();
    let mut body = Body::new(position, TRACER_RADIUS, TRACER_COLOR);
    body.orientation = facing(heading);
    world.spawn((
        body,
        Tracer {
            velocity: heading * TRACER_SPEED,
            lifetime: TRACER_LIFETIME,
            scale: 1.0,
            opacity: 1.0,
        },
    ))
}

fn random_hemisphere_point(rng: &mut ChaCha8Rng, radius: f32) -> Vec3 {
    hemisphere_point(radius, rng.gen(), rng.gen())
}

fn random_direction(rng: &mut ChaCha8Rng) -> f32 {
    if rng.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}
