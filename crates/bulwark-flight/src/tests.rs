#[cfg(test)]
mod tests {
    use glam::Vec3;
    use proptest::prelude::*;

    use bulwark_core::components::{Bank, Body, Enemy, FlightPlan, Rotor};
    use bulwark_core::constants::*;
    use bulwark_core::enums::{EnemyKind, WeaponKind};
    use bulwark_core::types::heading;

    use crate::banking;
    use crate::homing::steer;
    use crate::movement::{self, FlightOutcome};
    use crate::profiles::{enemy_profile, projectile_profile};

    const DT: f32 = 1.0 / 60.0;

    fn make_enemy(kind: EnemyKind, position: Vec3, flight: FlightPlan) -> (Enemy, Body) {
        let profile = enemy_profile(kind);
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
        let mut body = Body::new(position, profile.radius, profile.color);
        movement::launch(&mut enemy, &mut body);
        (enemy, body)
    }

    fn fly_until_done(enemy: &mut Enemy, body: &mut Body, dt: f32, max_steps: usize) -> FlightOutcome {
        for _ in 0..max_steps {
            let outcome = movement::step(enemy, body, dt);
            if outcome.is_terminal() {
                return outcome;
            }
        }
        FlightOutcome::Cruising
    }

    // ---- Straight-line modes ----

    #[test]
    fn test_direct_missile_reaches_defended_point() {
        // 120 units out at 25 u/s: arrival once within 2 units, ~4.72 s
        let start = DEFENDED_POINT + Vec3::new(SPAWN_RADIUS, 0.0, 0.0);
        let (mut enemy, mut body) = make_enemy(
            EnemyKind::Missile,
            start,
            FlightPlan::Direct { target: DEFENDED_POINT },
        );

        let outcome = fly_until_done(&mut enemy, &mut body, DT, 1000);
        assert_eq!(outcome, FlightOutcome::Arrived);
        assert!(enemy.impact, "direct arrival must flag an impact");
        assert!(
            (4.70..4.76).contains(&enemy.elapsed),
            "arrival at {}s",
            enemy.elapsed
        );
        assert!(body.position.distance(DEFENDED_POINT) < ARRIVAL_DISTANCE);
    }

    #[test]
    fn test_direct_arrival_detected_when_step_overshoots_target() {
        // 10 units out at 25 u/s with a 0.8 s frame: lands 10 units past
        let (mut enemy, mut body) = make_enemy(
            EnemyKind::Missile,
            DEFENDED_POINT + Vec3::new(0.0, 0.0, -10.0),
            FlightPlan::Direct { target: DEFENDED_POINT },
        );

        let outcome = movement::step(&mut enemy, &mut body, 0.8);
        assert_eq!(outcome, FlightOutcome::Arrived);
        assert!(enemy.impact);
        assert!(body.position.distance(DEFENDED_POINT) > ARRIVAL_DISTANCE);
    }

    #[test]
    fn test_flyby_arrival_is_harmless() {
        let start = Vec3::new(-40.0, 30.0, 0.0);
        let (mut enemy, mut body) = make_enemy(
            EnemyKind::Fighter,
            start,
            FlightPlan::Flyby {
                target: Vec3::new(40.0, 30.0, 0.0),
            },
        );
        assert!((enemy.velocity.length() - 40.0).abs() < 1e-4);

        let outcome = fly_until_done(&mut enemy, &mut body, DT, 1000);
        assert_eq!(outcome, FlightOutcome::Arrived);
        assert!(!enemy.impact);
    }

    #[test]
    fn test_crossing_arrival_is_harmless() {
        let (mut enemy, mut body) = make_enemy(
            EnemyKind::Bomber,
            Vec3::new(0.0, 40.0, 60.0),
            FlightPlan::Crossing {
                target: Vec3::new(0.0, 40.0, -72.0),
            },
        );
        let outcome = fly_until_done(&mut enemy, &mut body, DT, 2000);
        assert_eq!(outcome, FlightOutcome::Arrived);
        assert!(!enemy.impact);
    }

    #[test]
    fn test_launch_faces_target() {
        let (_, body) = make_enemy(
            EnemyKind::Drone,
            Vec3::new(50.0, 5.0, 0.0),
            FlightPlan::Direct { target: DEFENDED_POINT },
        );
        let forward = body.orientation * Vec3::Z;
        assert!(forward.distance(Vec3::NEG_X) < 1e-4, "forward = {forward}");
    }

    // ---- Orbit ----

    #[test]
    fn test_orbit_keeps_radius_and_altitude() {
        let center = Vec3::new(0.0, 60.0, 0.0);
        let entry = Vec3::new(40.0, 60.0, 0.0);
        let orbit = movement::orbit_from(entry, center, 40.0, 1.0, 40.0);
        assert!((orbit.angular_velocity - 1.0).abs() < 1e-6);

        let (mut enemy, mut body) = make_enemy(EnemyKind::Fighter, entry, FlightPlan::Orbit(orbit));
        for _ in 0..600 {
            assert_eq!(movement::step(&mut enemy, &mut body, DT), FlightOutcome::Cruising);
            let flat = Vec3::new(body.position.x, center.y, body.position.z);
            assert!((flat.distance(center) - 40.0).abs() < 1e-3);
            assert_eq!(body.position.y, 60.0);
        }
    }

    #[test]
    fn test_orbit_expires_after_time_budget() {
        // dt of a quarter second keeps the elapsed sum exact
        let center = Vec3::new(0.0, 50.0, 0.0);
        let entry = Vec3::new(0.0, 50.0, 35.0);
        let orbit = movement::orbit_from(entry, center, 35.0, -1.0, 18.0);
        let (mut enemy, mut body) =
            make_enemy(EnemyKind::Helicopter, entry, FlightPlan::Orbit(orbit));

        for _ in 0..120 {
            assert_eq!(movement::step(&mut enemy, &mut body, 0.25), FlightOutcome::Cruising);
        }
        assert_eq!(enemy.elapsed, ORBIT_TIME_BUDGET);
        assert_eq!(movement::step(&mut enemy, &mut body, 0.25), FlightOutcome::Expired);
        assert!(!enemy.impact);
    }

    #[test]
    fn test_orbit_default_radius() {
        let orbit = movement::orbit_from(Vec3::new(10.0, 40.0, 0.0), Vec3::ZERO, 0.0, 1.0, 25.0);
        assert_eq!(orbit.radius, DEFAULT_ORBIT_RADIUS);
        assert!((orbit.angular_velocity - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_orbit_direction_sign() {
        let cw = movement::orbit_from(Vec3::X * 30.0, Vec3::ZERO, 30.0, -1.0, 30.0);
        assert!(cw.angular_velocity < 0.0);
        assert_eq!(cw.angle, 0.0);
    }

    // ---- Ground avoidance ----

    #[test]
    fn test_aircraft_pulls_up_below_floor() {
        let (mut enemy, mut body) = make_enemy(
            EnemyKind::Fighter,
            Vec3::new(0.0, 4.0, -100.0),
            FlightPlan::Flyby {
                target: Vec3::new(0.0, 4.0, 200.0),
            },
        );
        movement::step(&mut enemy, &mut body, DT);
        let expected = (GROUND_AVOID_ALTITUDE - 4.0) * GROUND_AVOID_GAIN * DT;
        assert!((enemy.velocity.y - expected).abs() < 1e-4);

        let nose = body.orientation * Vec3::Z;
        assert!(nose.y > 0.0, "nose should pitch up, got {nose}");
    }

    #[test]
    fn test_missile_and_drone_ignore_floor() {
        for kind in [EnemyKind::Missile, EnemyKind::Drone] {
            let (mut enemy, mut body) = make_enemy(
                kind,
                Vec3::new(100.0, 5.0, 0.0),
                FlightPlan::Direct { target: DEFENDED_POINT },
            );
            movement::step(&mut enemy, &mut body, DT);
            assert_eq!(enemy.velocity.y, 0.0, "{kind:?} must not climb");
        }
    }

    #[test]
    fn test_no_correction_above_floor() {
        let (mut enemy, mut body) = make_enemy(
            EnemyKind::Bomber,
            Vec3::new(0.0, 30.0, -100.0),
            FlightPlan::Crossing {
                target: Vec3::new(0.0, 30.0, 120.0),
            },
        );
        movement::step(&mut enemy, &mut body, DT);
        assert_eq!(enemy.velocity.y, 0.0);
    }

    // ---- Banking ----

    #[test]
    fn test_bank_settles_within_limit() {
        let center = Vec3::new(0.0, 50.0, 0.0);
        let entry = Vec3::new(25.0, 50.0, 0.0);
        let orbit = movement::orbit_from(entry, center, 25.0, 1.0, 40.0);
        let (mut enemy, mut body) = make_enemy(EnemyKind::Fighter, entry, FlightPlan::Orbit(orbit));

        for _ in 0..300 {
            movement::step(&mut enemy, &mut body, DT);
            banking::update(&mut enemy, heading(body.orientation), DT);
            assert!(enemy.bank.roll.abs() <= BANK_LIMIT + 1e-6);
        }
        // Tight, fast orbit saturates the bank
        assert!((enemy.bank.roll - BANK_LIMIT).abs() < 1e-3, "roll = {}", enemy.bank.roll);
    }

    #[test]
    fn test_bank_sign_follows_orbit_direction() {
        let center = Vec3::new(0.0, 50.0, 0.0);
        let entry = Vec3::new(60.0, 50.0, 0.0);
        let orbit = movement::orbit_from(entry, center, 60.0, -1.0, 18.0);
        let (mut enemy, mut body) =
            make_enemy(EnemyKind::Helicopter, entry, FlightPlan::Orbit(orbit));

        for _ in 0..120 {
            movement::step(&mut enemy, &mut body, DT);
            banking::update(&mut enemy, heading(body.orientation), DT);
        }
        assert!(enemy.bank.roll < 0.0);
    }

    #[test]
    fn test_straight_flight_levels_out() {
        let (mut enemy, mut body) = make_enemy(
            EnemyKind::Fighter,
            Vec3::new(-100.0, 40.0, 0.0),
            FlightPlan::Flyby {
                target: Vec3::new(200.0, 40.0, 0.0),
            },
        );
        enemy.bank.roll = 0.8;
        for _ in 0..120 {
            movement::step(&mut enemy, &mut body, DT);
            banking::update(&mut enemy, heading(body.orientation), DT);
        }
        assert!(enemy.bank.roll.abs() < 1e-3);
    }

    #[test]
    fn test_yaw_deadband_ignored() {
        let (mut enemy, _) = make_enemy(
            EnemyKind::Fighter,
            Vec3::new(0.0, 40.0, 0.0),
            FlightPlan::Flyby { target: Vec3::Z * 100.0 },
        );
        enemy.bank.last_heading = Some(0.0);
        assert_eq!(banking::target_roll(&enemy, 0.0005), 0.0);
        assert!(banking::target_roll(&enemy, 0.1) > 0.0);
    }

    #[test]
    fn test_rotor_spins() {
        let mut rotor = Rotor::default();
        movement::spin_rotor(&mut rotor, 0.5);
        assert_eq!(rotor.main, HELICOPTER_MAIN_ROTOR_RATE * 0.5);
        assert_eq!(rotor.tail, HELICOPTER_TAIL_ROTOR_RATE * 0.5);
    }

    // ---- Homing ----

    #[test]
    fn test_homing_turns_toward_target() {
        let velocity = Vec3::Z * MISSILE_SPEED;
        let next = steer(Vec3::ZERO, velocity, MISSILE_SPEED, Vec3::new(100.0, 0.0, 0.0), DT);
        assert!(next.x > 0.0);
        assert!((next.length() - MISSILE_SPEED).abs() < 1e-3);
    }

    #[test]
    fn test_homing_converges_on_fixed_point() {
        let target = Vec3::new(5.0, 3.0, -80.0);
        let mut position = Vec3::ZERO;
        let mut velocity = Vec3::NEG_Z * MISSILE_SPEED;
        let mut closest = f32::MAX;
        for _ in 0..300 {
            velocity = steer(position, velocity, MISSILE_SPEED, target, DT);
            position += velocity * DT;
            closest = closest.min(position.distance(target));
        }
        assert!(closest < 1.0, "closest approach {closest}");
    }

    #[test]
    fn test_homing_large_dt_snaps_to_line_of_sight() {
        let next = steer(Vec3::ZERO, Vec3::X * 10.0, 10.0, Vec3::Y * 5.0, 1.0);
        assert!(next.distance(Vec3::Y * 10.0) < 1e-4);
    }

    #[test]
    fn test_homing_degenerate_keeps_velocity() {
        let velocity = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(steer(Vec3::ONE, velocity, 10.0, Vec3::ONE, DT), velocity);
    }

    // ---- Profiles ----

    #[test]
    fn test_enemy_profiles() {
        let bomber = enemy_profile(EnemyKind::Bomber);
        assert_eq!(bomber.health, 5);
        assert_eq!(bomber.score, SCORE_BOMBER);
        assert_eq!(bomber.beam_score, SCORE_BOMBER);

        let fighter = enemy_profile(EnemyKind::Fighter);
        assert_eq!(fighter.speed, 40.0);
        assert_eq!(fighter.score, SCORE_KILL);
        assert_eq!(fighter.beam_score, SCORE_BEAM_KILL);

        assert_eq!(enemy_profile(EnemyKind::Missile).radius, 1.5);
        assert_eq!(enemy_profile(EnemyKind::Drone).speed, 10.0);
        assert_eq!(enemy_profile(EnemyKind::Helicopter).color, 0xffff00);
    }

    #[test]
    fn test_projectile_profiles() {
        let vulcan = projectile_profile(WeaponKind::Vulcan);
        assert_eq!((vulcan.speed, vulcan.lifetime, vulcan.radius), (100.0, 3.0, 0.5));
        let missile = projectile_profile(WeaponKind::Missile);
        assert_eq!((missile.speed, missile.lifetime, missile.radius), (60.0, 5.0, 1.0));
    }

    // ---- Properties ----

    proptest! {
        #[test]
        fn prop_homing_preserves_speed(
            vx in -1.0f32..1.0, vy in -1.0f32..1.0, vz in 0.1f32..1.0,
            tx in -100.0f32..100.0, ty in 1.0f32..100.0, tz in -100.0f32..100.0,
            dt in 0.001f32..0.1,
        ) {
            let velocity = Vec3::new(vx, vy, vz).normalize() * MISSILE_SPEED;
            let next = steer(Vec3::ZERO, velocity, MISSILE_SPEED, Vec3::new(tx, ty, tz), dt);
            prop_assert!((next.length() - MISSILE_SPEED).abs() < 1e-2);
        }

        #[test]
        fn prop_bank_never_exceeds_limit(
            roll in -1.0f32..1.0,
            last in -3.1f32..3.1,
            now in -3.1f32..3.1,
            dt in 0.001f32..0.5,
        ) {
            let (mut enemy, _) = make_enemy(
                EnemyKind::Fighter,
                Vec3::new(0.0, 40.0, 0.0),
                FlightPlan::Flyby { target: Vec3::Z * 100.0 },
            );
            enemy.bank = Bank { roll, last_heading: Some(last) };
            banking::update(&mut enemy, now, dt);
            prop_assert!(enemy.bank.roll.abs() <= BANK_LIMIT + 1e-6);
        }

        #[test]
        fn prop_orbit_radius_invariant(
            radius in 10.0f32..80.0,
            speed in 5.0f32..40.0,
            direction in prop::bool::ANY,
            steps in 1usize..400,
        ) {
            let center = Vec3::new(5.0, 50.0, -5.0);
            let entry = center + Vec3::new(radius, 0.0, 0.0);
            let sign = if direction { 1.0 } else { -1.0 };
            let orbit = movement::orbit_from(entry, center, radius, sign, speed);
            let (mut enemy, mut body) = make_enemy(EnemyKind::Fighter, entry, FlightPlan::Orbit(orbit));
            for _ in 0..steps {
                movement::step(&mut enemy, &mut body, DT);
            }
            let flat = Vec3::new(body.position.x, center.y, body.position.z);
            prop_assert!((flat.distance(center) - radius).abs() < 1e-2);
        }
    }
}
