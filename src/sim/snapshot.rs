//! Read-only view of a round for renderers
//!
//! A host draws from a [`Snapshot`] instead of reaching into `GameState`.
//! Snapshots serialize to JSON for headless runs and debugging.

use serde::Serialize;

use super::state::{Color, GamePhase, GameState, ObstacleKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleView {
    pub id: u32,
    pub kind: ObstacleKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub score: u64,
    pub lives: u32,
    pub speed: f64,
    pub running: bool,
    pub lane_width: u32,
    pub lane_count: u32,
    pub vehicle: VehicleView,
    pub obstacles: Vec<ObstacleView>,
}

impl Snapshot {
    /// HUD text drawn on the shoulder lane
    pub fn hud_lines(&self) -> [String; 3] {
        [
            format!("Score: {}", self.score),
            format!("Lives: {}", self.lives),
            format!("Speed: {:.2}", self.speed),
        ]
    }
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        let v = &self.vehicle;
        Snapshot {
            tick: self.time_ticks,
            score: self.score,
            lives: v.lives,
            speed: self.speed,
            running: self.phase == GamePhase::Running,
            lane_width: self.layout.lane_width,
            lane_count: self.layout.lane_count,
            vehicle: VehicleView {
                x: v.pos.x,
                y: v.pos.y,
                width: v.size.x,
                height: v.size.y,
                color: v.color,
            },
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    kind: o.kind,
                    x: o.pos.x,
                    y: o.pos.y,
                    width: o.size.x,
                    height: o.size.y,
                    color: o.color,
                })
                .collect(),
        }
    }
}
