//! Collision detection between the vehicle and obstacles
//!
//! Everything is an axis-aligned rectangle. Overlap uses strict comparisons,
//! so rectangles that merely share an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GamePhase, GameState};

/// Axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// True if the interiors intersect on both axes
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

/// Resolve every vehicle/obstacle overlap for this tick.
///
/// Each overlapping obstacle costs one life and is removed. Lives stop at
/// zero; reaching zero ends the round. Returns the number of hits.
pub fn resolve_collisions(state: &mut GameState) -> u32 {
    let vehicle_rect = state.vehicle.rect();

    // Mark, then sweep
    let hit_ids: Vec<u32> = state
        .obstacles
        .iter()
        .filter(|o| vehicle_rect.overlaps(&o.rect()))
        .map(|o| o.id)
        .collect();

    if hit_ids.is_empty() {
        return 0;
    }

    state.obstacles.retain(|o| !hit_ids.contains(&o.id));

    for &id in &hit_ids {
        let lives_left = state.vehicle.lose_life();
        log::debug!("Crash into obstacle {}: {} lives left", id, lives_left);
        state.events.push(GameEvent::Crashed { id, lives_left });
    }

    if state.vehicle.lives == 0 && state.phase != GamePhase::GameOver {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "Game over after {} ticks, score {}",
            state.time_ticks,
            state.score
        );
    }

    hit_ids.len() as u32
}
