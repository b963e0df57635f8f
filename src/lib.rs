//! Lane Dodger - A lane-based obstacle dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, entities, spawning, collisions)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input polling and frame pacing belong to the host. The host
//! owns a [`sim::GameState`] and an RNG, calls [`sim::tick`] once per frame
//! and stops when [`sim::GameState::is_running`] turns false.

pub mod sim;
pub mod tuning;

pub use tuning::{KindSpec, Tuning, TuningError};

/// Game configuration defaults
pub mod consts {
    /// Host frame rate the simulation is balanced for
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: u32 = 800;
    pub const PLAYFIELD_HEIGHT: u32 = 600;
    /// Playfield width is split into this many lanes; lane 0 is the shoulder
    pub const LANE_DIVISOR: u32 = 4;

    /// Player vehicle
    pub const VEHICLE_WIDTH: f32 = 60.0;
    pub const VEHICLE_HEIGHT: f32 = 100.0;
    pub const VEHICLE_START_LANE: u32 = 2;
    pub const VEHICLE_START_OFFSET: f32 = 100.0;
    pub const VEHICLE_STEP: f32 = 5.0;
    pub const INITIAL_LIVES: u32 = 3;

    /// Difficulty ramp
    pub const INITIAL_SPEED: f64 = 2.0;
    pub const SPEED_INCREMENT: f64 = 0.001;
    /// Per-tick probability of spawning one obstacle
    pub const SPAWN_CHANCE: f64 = 0.02;
}
