//! Obstacle spawning
//!
//! Kind, lane, color and spawn timing all come from a [`RandomSource`], so a
//! host can use a seeded PCG and tests can script exact sequences.

use std::ops::RangeInclusive;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameEvent, GameState, Obstacle};

/// Source of the random choices the spawner makes
pub trait RandomSource {
    /// True with probability `p`
    fn chance(&mut self, p: f64) -> bool;
    /// Uniform index in `0..len` (`len` > 0)
    fn pick(&mut self, len: usize) -> usize;
    /// Uniform lane from an inclusive range
    fn lane(&mut self, lanes: RangeInclusive<u32>) -> u32;
}

impl RandomSource for Pcg32 {
    fn chance(&mut self, p: f64) -> bool {
        self.random::<f64>() < p
    }

    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn lane(&mut self, lanes: RangeInclusive<u32>) -> u32 {
        self.random_range(lanes)
    }
}

/// Spawn one obstacle with probability `chance`. Returns its id if one was
/// spawned.
pub fn try_spawn(state: &mut GameState, rng: &mut impl RandomSource, chance: f64) -> Option<u32> {
    if rng.chance(chance) {
        Some(spawn_obstacle(state, rng))
    } else {
        None
    }
}

/// Spawn one obstacle just above the top edge of a random drivable lane.
///
/// Its speed is the current global speed scalar times the kind's
/// multiplier and does not change afterwards.
pub fn spawn_obstacle(state: &mut GameState, rng: &mut impl RandomSource) -> u32 {
    let spec = state.tuning.obstacle_kinds[rng.pick(state.tuning.obstacle_kinds.len())];
    let lane = rng.lane(state.layout.drivable_lanes());
    let color = state.tuning.palette[rng.pick(state.tuning.palette.len())];

    let id = state.next_entity_id();
    let obstacle = Obstacle {
        id,
        kind: spec.kind,
        lane,
        pos: Vec2::new(state.layout.spawn_x(lane, spec.width), -spec.height),
        size: Vec2::new(spec.width, spec.height),
        speed: (state.speed * f64::from(spec.speed_multiplier)) as f32,
        color,
    };

    log::debug!(
        "Spawned {} #{} in lane {} at speed {:.2}",
        spec.kind.name(),
        id,
        lane,
        obstacle.speed
    );
    state.obstacles.push(obstacle);
    state.events.push(GameEvent::Spawned {
        id,
        kind: spec.kind,
        lane,
    });
    id
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::{HashSet, VecDeque};

    use rand::SeedableRng;

    use super::*;
    use crate::sim::state::{Color, ObstacleKind};

    /// Replays scripted answers; runs dry as "no spawn", index 0, first lane
    #[derive(Debug, Default)]
    pub(crate) struct Scripted {
        pub chances: VecDeque<bool>,
        pub picks: VecDeque<usize>,
        pub lanes: VecDeque<u32>,
    }

    impl Scripted {
        pub(crate) fn new(chances: &[bool], picks: &[usize], lanes: &[u32]) -> Self {
            Self {
                chances: chances.iter().copied().collect(),
                picks: picks.iter().copied().collect(),
                lanes: lanes.iter().copied().collect(),
            }
        }
    }

    impl RandomSource for Scripted {
        fn chance(&mut self, _p: f64) -> bool {
            self.chances.pop_front().unwrap_or(false)
        }

        fn pick(&mut self, len: usize) -> usize {
            self.picks.pop_front().unwrap_or(0) % len
        }

        fn lane(&mut self, lanes: RangeInclusive<u32>) -> u32 {
            self.lanes.pop_front().unwrap_or(*lanes.start())
        }
    }

    #[test]
    fn test_scripted_spawn_sequence() {
        let mut state = GameState::new(1);
        // kind 1 (fast), palette 3 (yellow), lane 3; then kind 2 (heavy), palette 0, lane 1
        let mut rng = Scripted::new(&[], &[1, 3, 2, 0], &[3, 1]);

        let first = spawn_obstacle(&mut state, &mut rng);
        let second = spawn_obstacle(&mut state, &mut rng);

        let a = &state.obstacles[0];
        assert_eq!(a.id, first);
        assert_eq!(a.kind, ObstacleKind::Fast);
        assert_eq!(a.lane, 3);
        assert_eq!(a.color, Color::YELLOW);
        assert_eq!(a.pos, Vec2::new(680.0, -100.0));
        assert_eq!(a.size, Vec2::new(40.0, 100.0));
        assert_eq!(a.speed, 3.0);

        let b = &state.obstacles[1];
        assert_eq!(b.id, second);
        assert_eq!(b.kind, ObstacleKind::Heavy);
        assert_eq!(b.lane, 1);
        assert_eq!(b.color, Color::RED);
        assert_eq!(b.pos, Vec2::new(250.0, -150.0));
        assert_eq!(b.speed, 1.5);

        assert_eq!(
            state.events,
            vec![
                GameEvent::Spawned {
                    id: first,
                    kind: ObstacleKind::Fast,
                    lane: 3
                },
                GameEvent::Spawned {
                    id: second,
                    kind: ObstacleKind::Heavy,
                    lane: 1
                },
            ]
        );
    }

    #[test]
    fn test_speed_follows_global_scalar() {
        let mut state = GameState::new(1);
        state.speed = 4.0;
        let mut rng = Scripted::new(&[], &[0, 0], &[2]);
        spawn_obstacle(&mut state, &mut rng);
        assert_eq!(state.obstacles[0].speed, 4.0);
    }

    #[test]
    fn test_try_spawn_respects_roll() {
        let mut state = GameState::new(1);
        let mut rng = Scripted::new(&[false, true, false], &[], &[]);

        assert!(try_spawn(&mut state, &mut rng, 0.02).is_none());
        assert!(try_spawn(&mut state, &mut rng, 0.02).is_some());
        assert!(try_spawn(&mut state, &mut rng, 0.02).is_none());
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_pcg_chance_extremes() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..1000 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn test_spawn_lane_bounds() {
        let mut state = GameState::new(42);
        let mut rng = state.rng();
        let lane_width = state.layout.lane_width as f32;
        let road_right = (state.layout.lane_width * state.layout.lane_count) as f32;
        let mut lanes_seen = HashSet::new();
        let mut kinds_seen = HashSet::new();

        for _ in 0..10_000 {
            spawn_obstacle(&mut state, &mut rng);
            let o = state.obstacles.pop().expect("just spawned");
            assert_ne!(o.lane, 0);
            assert!(o.pos.x >= lane_width);
            assert!(o.pos.x + o.size.x <= road_right);
            assert_eq!(o.pos.y, -o.size.y);
            assert_eq!(state.layout.lane_at(o.pos.x), Some(o.lane));
            lanes_seen.insert(o.lane);
            kinds_seen.insert(o.kind);
        }

        // The rightmost lane is reachable
        assert_eq!(lanes_seen, HashSet::from([1, 2, 3]));
        assert_eq!(kinds_seen.len(), 3);
    }
}
