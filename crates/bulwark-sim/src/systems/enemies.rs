//! Enemy flight system.
//!
//! Runs the flight models from `bulwark-flight` over every live enemy, then
//! banks the airframe and spins rotors. Enemies that finish their flight
//! harmlessly are retired here; an impact stays alive for the collision
//! pass, which applies the damage and removes it.

use hecs::World;

use bulwark_core::components::{Body, Enemy, Rotor};
use bulwark_core::types::heading;

use bulwark_flight::{banking, movement};

/// Advance every live enemy by `dt`. Returns how many ended their flight
/// this frame (arrivals and expired orbits).
pub fn run(world: &mut World, dt: f32) -> usize {
    let mut finished = 0;
    for (_entity, (body, enemy, rotor)) in
        world.query_mut::<(&mut Body, &mut Enemy, Option<&mut Rotor>)>()
    {
        if !body.alive {
            continue;
        }

        let outcome = movement::step(enemy, body, dt);
        if let Some(rotor) = rotor {
            movement::spin_rotor(rotor, dt);
        }

        if outcome.is_terminal() {
            finished += 1;
            if !enemy.impact {
                body.retire();
            }
            continue;
        }

        banking::update(enemy, heading(body.orientation), dt);
    }
    finished
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulwark_core::components::FlightPlan;
    use bulwark_core::constants::DEFENDED_POINT;
    use bulwark_core::enums::EnemyKind;
    use glam::Vec3;

    use crate::world_setup;

    #[test]
    fn test_run_counts_arrivals_and_keeps_impacts_alive() {
        let mut world = World::new();
        let attacker = world_setup::spawn_enemy_at(
            &mut world,
            EnemyKind::Missile,
            DEFENDED_POINT + Vec3::new(0.0, 0.0, -1.0),
            FlightPlan::Direct { target: DEFENDED_POINT },
        );
        world_setup::spawn_enemy_at(
            &mut world,
            EnemyKind::Drone,
            Vec3::new(0.0, 20.0, -150.0),
            FlightPlan::Direct { target: DEFENDED_POINT },
        );

        assert_eq!(run(&mut world, 1.0 / 60.0), 1);
        let body = world.get::<&Body>(attacker).unwrap();
        assert!(body.alive);
        assert!(world.get::<&Enemy>(attacker).unwrap().impact);
    }
}
