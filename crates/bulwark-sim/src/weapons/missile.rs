//! Lock-on missile launcher.
//!
//! The magazine empties one round per missile and refills only after a full
//! reload. Lock-ons are handles into the world; the engine checks them for
//! liveness before launching.

use hecs::Entity;

/// What a volley launches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Volley {
    /// No usable locks: one round straight down the aim axis.
    Unguided,
    /// One homing round per target.
    Guided(Vec<Entity>),
}

impl Volley {
    pub fn rounds(&self) -> u32 {
        match self {
            Volley::Unguided => 1,
            Volley::Guided(targets) => targets.len() as u32,
        }
    }
}

/// Magazine, reload clock and current lock-ons.
#[derive(Debug, Clone)]
pub struct MissileLauncher {
    ammo: u32,
    max_ammo: u32,
    reload_secs: f32,
    /// Seconds left on the reload; 0 when loaded.
    reload_timer: f32,
    locks: Vec<Entity>,
}

impl MissileLauncher {
    pub fn new(max_ammo: u32, reload_secs: f32) -> Self {
        Self {
            ammo: max_ammo,
            max_ammo,
            reload_secs,
            reload_timer: 0.0,
            locks: Vec::new(),
        }
    }

    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    pub fn max_ammo(&self) -> u32 {
        self.max_ammo
    }

    pub fn is_reloading(&self) -> bool {
        self.reload_timer > 0.0
    }

    /// Reload completion in `[0, 1)`, or `None` when loaded.
    pub fn reload_progress(&self) -> Option<f32> {
        self.is_reloading()
            .then(|| (self.reload_secs - self.reload_timer) / self.reload_secs)
    }

    pub fn locks(&self) -> &[Entity] {
        &self.locks
    }

    /// Whether the seeker should be scanning for targets.
    pub fn is_ready(&self) -> bool {
        self.ammo > 0 && !self.is_reloading()
    }

    /// Count the reload down. Returns `true` on the frame the magazine refills.
    pub fn tick_reload(&mut self, dt: f32) -> bool {
        if !self.is_reloading() {
            return false;
        }
        self.reload_timer -= dt;
        if self.reload_timer <= 0.0 {
            self.reload_timer = 0.0;
            self.ammo = self.max_ammo;
            return true;
        }
        false
    }

    /// Replace the lock set with the candidates closest to the aim axis,
    /// at most one per remaining round. Candidates are `(off-axis angle, entity)`.
    pub fn lock(&mut self, mut candidates: Vec<(f32, Entity)>) {
        candidates.sort_by(|a, b| a.0.total_cmp(&b.0));
        self.locks.clear();
        self.locks.extend(
            candidates
                .into_iter()
                .take(self.ammo as usize)
                .map(|(_, entity)| entity),
        );
    }

    /// Drop every lock. Returns the handles that were locked.
    pub fn clear_locks(&mut self) -> Vec<Entity> {
        std::mem::take(&mut self.locks)
    }

    /// Spend rounds on a volley.
    ///
    /// Locks whose target fails `is_alive` are skipped; if none survive, the
    /// volley degrades to a single unguided round. Emptying the magazine
    /// starts the reload. Returns `None` while reloading or empty.
    pub fn fire(&mut self, is_alive: impl Fn(Entity) -> bool) -> Option<Volley> {
        if !self.is_ready() {
            return None;
        }

        let targets: Vec<Entity> = self
            .clear_locks()
            .into_iter()
            .filter(|&entity| is_alive(entity))
            .take(self.ammo as usize)
            .collect();
        let volley = if targets.is_empty() {
            Volley::Unguided
        } else {
            Volley::Guided(targets)
        };

        self.ammo = self.ammo.saturating_sub(volley.rounds());
        if self.ammo == 0 {
            self.reload_timer = self.reload_secs;
        }
        Some(volley)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hecs::World;
    use proptest::prelude::*;

    fn handles(count: usize) -> Vec<Entity> {
        let mut world = World::new();
        (0..count).map(|_| world.spawn(())).collect()
    }

    #[test]
    fn test_ten_unguided_shots_then_full_reload() {
        let mut launcher = MissileLauncher::new(10, 5.0);
        for fired in 1..=10 {
            assert_eq!(launcher.fire(|_| true), Some(Volley::Unguided));
            assert_eq!(launcher.ammo(), 10 - fired);
        }
        assert!(launcher.is_reloading());
        assert_eq!(launcher.fire(|_| true), None);

        // Quarter-second frames: exact sums
        for _ in 0..19 {
            assert!(!launcher.tick_reload(0.25));
            assert_eq!(launcher.ammo(), 0);
        }
        assert!(launcher.tick_reload(0.25));
        assert_eq!(launcher.ammo(), 10);
        assert!(launcher.reload_progress().is_none());
    }

    #[test]
    fn test_reload_progress() {
        let mut launcher = MissileLauncher::new(1, 4.0);
        launcher.fire(|_| true);
        assert_eq!(launcher.reload_progress(), Some(0.0));
        launcher.tick_reload(1.0);
        assert_eq!(launcher.reload_progress(), Some(0.25));
    }

    #[test]
    fn test_lock_prefers_closest_to_axis_and_caps_at_ammo() {
        let targets = handles(4);
        let mut launcher = MissileLauncher::new(2, 5.0);
        launcher.lock(vec![
            (0.30, targets[0]),
            (0.05, targets[1]),
            (0.20, targets[2]),
            (0.10, targets[3]),
        ]);
        assert_eq!(launcher.locks(), &[targets[1], targets[3]]);
    }

    #[test]
    fn test_guided_volley_skips_dead_targets() {
        let targets = handles(3);
        let mut launcher = MissileLauncher::new(10, 5.0);
        launcher.lock(targets.iter().map(|&e| (0.1, e)).collect());

        let dead = targets[1];
        let volley = launcher.fire(|e| e != dead).unwrap();
        assert_eq!(volley, Volley::Guided(vec![targets[0], targets[2]]));
        assert_eq!(launcher.ammo(), 8);
        assert!(launcher.locks().is_empty());
    }

    #[test]
    fn test_all_locks_dead_fires_unguided() {
        let targets = handles(2);
        let mut launcher = MissileLauncher::new(10, 5.0);
        launcher.lock(targets.iter().map(|&e| (0.1, e)).collect());
        assert_eq!(launcher.fire(|_| false), Some(Volley::Unguided));
        assert_eq!(launcher.ammo(), 9);
    }

    #[test]
    fn test_full_magazine_volley_starts_reload() {
        let targets = handles(3);
        let mut launcher = MissileLauncher::new(3, 5.0);
        launcher.lock(targets.iter().map(|&e| (0.2, e)).collect());
        launcher.fire(|_| true);
        assert_eq!(launcher.ammo(), 0);
        assert!(launcher.is_reloading());
        assert!(!launcher.is_ready());
    }

    proptest! {
        #[test]
        fn prop_ammo_and_locks_bounded(
            ops in prop::collection::vec((0usize..6, prop::bool::ANY, 0.0f32..2.0), 1..80),
        ) {
            let pool = handles(6);
            let mut launcher = MissileLauncher::new(10, 5.0);
            for (count, fire, dt) in ops {
                launcher.tick_reload(dt);
                if launcher.is_ready() {
                    launcher.lock(pool.iter().take(count).map(|&e| (0.1, e)).collect());
                }
                prop_assert!(launcher.locks().len() as u32 <= launcher.ammo());
                if fire {
                    launcher.fire(|_| true);
                }
                prop_assert!(launcher.ammo() <= 10);
                if launcher.ammo() == 0 {
                    prop_assert!(launcher.is_reloading());
                }
            }
        }
    }
}
