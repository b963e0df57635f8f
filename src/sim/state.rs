//! Game state and core simulation types
//!
//! All state a round needs lives in [`GameState`]; the host owns it and the
//! RNG, and nothing here is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::lane::{Bounds, LaneLayout};
use crate::tuning::{Tuning, TuningError};

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Lives exhausted; terminal
    GameOver,
}

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
}

/// Default obstacle colors
pub const PALETTE: [Color; 7] = [
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::YELLOW,
    Color::CYAN,
    Color::MAGENTA,
    Color::ORANGE,
];

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    /// Car
    Standard,
    /// Bike: narrow and quick
    Fast,
    /// Truck: wide and slow
    Heavy,
}

impl ObstacleKind {
    pub fn name(&self) -> &'static str {
        match self {
            ObstacleKind::Standard => "standard",
            ObstacleKind::Fast => "fast",
            ObstacleKind::Heavy => "heavy",
        }
    }
}

/// The player's vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
    pub lives: u32,
}

impl Vehicle {
    pub fn new(pos: Vec2, size: Vec2, color: Color, lives: u32) -> Self {
        Self {
            pos,
            size,
            color,
            lives,
        }
    }

    /// Move by `delta`, then clamp so the whole body stays inside `bounds`
    pub fn move_by(&mut self, delta: Vec2, bounds: &Bounds) {
        let target = self.pos + delta;
        self.pos.x = target.x.min(bounds.x_max - self.size.x).max(bounds.x_min);
        self.pos.y = target.y.min(bounds.y_max - self.size.y).max(0.0);
    }

    /// Take one hit. Returns the remaining lives, never below zero.
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A scrolling obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Lane it was spawned in
    pub lane: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per tick, fixed at spawn
    pub speed: f32,
    pub color: Color,
}

impl Obstacle {
    /// Scroll one tick down the playfield
    #[inline]
    pub fn advance(&mut self) {
        self.pos.y += self.speed;
    }

    /// True once the top edge has left the bottom of the playfield
    #[inline]
    pub fn is_past(&self, playfield_height: f32) -> bool {
        self.pos.y > playfield_height
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned {
        id: u32,
        kind: ObstacleKind,
        lane: u32,
    },
    /// Obstacle scrolled off the bottom without a hit
    Dodged { id: u32 },
    Crashed { id: u32, lives_left: u32 },
    GameOver { score: u64 },
}

/// Complete game state (deterministic given the same RNG, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub layout: LaneLayout,
    pub vehicle: Vehicle,
    /// Live obstacles (in spawn order)
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    /// Global speed scalar; only `tick` changes it
    pub speed: f64,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events recorded since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new round with the default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// Create a new round, rejecting an invalid tuning up front
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        let layout = LaneLayout::new(
            tuning.playfield_width,
            tuning.playfield_height,
            tuning.lane_divisor,
        );
        let size = Vec2::new(tuning.vehicle_width, tuning.vehicle_height);
        let start = Vec2::new(
            layout.spawn_x(tuning.vehicle_start_lane, size.x),
            tuning.playfield_height as f32 - tuning.vehicle_start_offset,
        );
        let mut vehicle = Vehicle::new(start, size, tuning.vehicle_color, tuning.initial_lives);
        vehicle.move_by(Vec2::ZERO, &layout.drivable_bounds());

        let phase = if tuning.initial_lives == 0 {
            GamePhase::GameOver
        } else {
            GamePhase::Running
        };

        log::info!(
            "New round: seed={}, {} lanes of {}px, {} lives",
            seed,
            layout.lane_count,
            layout.lane_width,
            tuning.initial_lives
        );

        Self {
            seed,
            speed: tuning.initial_speed,
            tuning,
            layout,
            vehicle,
            obstacles: Vec::new(),
            score: 0,
            phase,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// RNG seeded from this round's seed
    pub fn rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    #[inline]
    pub fn lives(&self) -> u32 {
        self.vehicle.lives
    }

    /// Take every event recorded since the previous call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
