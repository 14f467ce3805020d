//! Cleanup system: despawns every entity whose body has been retired.

use hecs::{Entity, World};

use bulwark_core::components::Body;

/// Despawn retired entities. Uses a pre-allocated buffer to avoid per-frame
/// allocation. Returns how many were removed.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();
    despawn_buffer.extend(
        world
            .query_mut::<&Body>()
            .into_iter()
            .filter(|(_, body)| !body.alive)
            .map(|(entity, _)| entity),
    );

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}

/// Despawn everything with a body. Used when a new game starts.
pub fn clear(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    despawn_buffer.extend(world.query_mut::<&Body>().into_iter().map(|(entity, _)| entity));
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
