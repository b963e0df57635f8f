//! Data-driven game balance
//!
//! Every number the simulation depends on lives in [`Tuning`]. Values can be
//! overridden from a JSON file; anything missing falls back to the defaults
//! in [`crate::consts`]. A tuning is validated once, when the game state is
//! built, so a bad value never surfaces mid-round.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::state::{Color, ObstacleKind, PALETTE};

/// Reasons a tuning is rejected
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    /// IO error while reading a tuning file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("playfield must be non-empty, got {width}x{height}")]
    EmptyPlayfield { width: u32, height: u32 },

    #[error("lane divisor {divisor} leaves no lane width on a {width}px playfield")]
    ZeroLaneWidth { width: u32, divisor: u32 },

    #[error("need at least one drivable lane besides the shoulder, got {0} lanes")]
    TooFewLanes(u32),

    #[error("{what} size must be positive and finite, got {width}x{height}")]
    BadSize {
        what: &'static str,
        width: f32,
        height: f32,
    },

    #[error("{what} is {width}px wide but lanes are only {lane_width}px")]
    WiderThanLane {
        what: &'static str,
        width: f32,
        lane_width: u32,
    },

    #[error("vehicle is {height}px tall but the playfield is {playfield}px")]
    TallerThanPlayfield { height: f32, playfield: u32 },

    #[error("start lane {lane} is outside drivable lanes 1..={last}")]
    StartLaneOutOfRange { lane: u32, last: u32 },

    #[error("obstacle kind table is empty")]
    NoObstacleKinds,

    #[error("color palette is empty")]
    EmptyPalette,

    #[error("{what} must be a probability in [0, 1], got {value}")]
    BadProbability { what: &'static str, value: f64 },

    #[error("{what} must be finite and non-negative, got {value}")]
    BadRate { what: &'static str, value: f32 },

    #[error("initial speed must be finite and non-negative, got {0}")]
    BadInitialSpeed(f64),

    #[error("speed increment must be finite and positive, got {0}")]
    NonIncreasingSpeed(f64),
}

/// Size and speed of one obstacle kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KindSpec {
    pub kind: ObstacleKind,
    pub width: f32,
    pub height: f32,
    /// Multiplied by the global speed scalar at spawn time
    pub speed_multiplier: f32,
}

/// All adjustable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield_width: u32,
    pub playfield_height: u32,
    /// Lane width is `playfield_width / lane_divisor`
    pub lane_divisor: u32,

    pub vehicle_width: f32,
    pub vehicle_height: f32,
    pub vehicle_color: Color,
    /// Lane the vehicle starts centered in
    pub vehicle_start_lane: u32,
    /// Distance from the vehicle's top edge to the bottom of the playfield
    pub vehicle_start_offset: f32,
    /// Pixels moved per held direction per tick
    pub vehicle_step: f32,
    pub initial_lives: u32,

    pub obstacle_kinds: Vec<KindSpec>,
    pub palette: Vec<Color>,

    /// Global speed scalar at tick 0
    pub initial_speed: f64,
    /// Added to the global speed scalar every running tick
    pub speed_increment: f64,
    pub spawn_chance: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            lane_divisor: LANE_DIVISOR,
            vehicle_width: VEHICLE_WIDTH,
            vehicle_height: VEHICLE_HEIGHT,
            vehicle_color: Color::RED,
            vehicle_start_lane: VEHICLE_START_LANE,
            vehicle_start_offset: VEHICLE_START_OFFSET,
            vehicle_step: VEHICLE_STEP,
            initial_lives: INITIAL_LIVES,
            obstacle_kinds: vec![
                KindSpec {
                    kind: ObstacleKind::Standard,
                    width: 60.0,
                    height: 120.0,
                    speed_multiplier: 1.0,
                },
                KindSpec {
                    kind: ObstacleKind::Fast,
                    width: 40.0,
                    height: 100.0,
                    speed_multiplier: 1.5,
                },
                KindSpec {
                    kind: ObstacleKind::Heavy,
                    width: 100.0,
                    height: 150.0,
                    speed_multiplier: 0.75,
                },
            ],
            palette: PALETTE.to_vec(),
            initial_speed: INITIAL_SPEED,
            speed_increment: SPEED_INCREMENT,
            spawn_chance: SPAWN_CHANCE,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning from JSON and validate it
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json_str(&contents)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Check every precondition the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.playfield_width == 0 || self.playfield_height == 0 {
            return Err(TuningError::EmptyPlayfield {
                width: self.playfield_width,
                height: self.playfield_height,
            });
        }
        if self.lane_divisor == 0 || self.playfield_width / self.lane_divisor == 0 {
            return Err(TuningError::ZeroLaneWidth {
                width: self.playfield_width,
                divisor: self.lane_divisor,
            });
        }
        let lane_width = self.playfield_width / self.lane_divisor;
        let lane_count = self.playfield_width / lane_width;
        if lane_count < 2 {
            return Err(TuningError::TooFewLanes(lane_count));
        }

        check_size("vehicle", self.vehicle_width, self.vehicle_height)?;
        if self.vehicle_width > lane_width as f32 {
            return Err(TuningError::WiderThanLane {
                what: "vehicle",
                width: self.vehicle_width,
                lane_width,
            });
        }
        if self.vehicle_height > self.playfield_height as f32 {
            return Err(TuningError::TallerThanPlayfield {
                height: self.vehicle_height,
                playfield: self.playfield_height,
            });
        }
        if !(1..lane_count).contains(&self.vehicle_start_lane) {
            return Err(TuningError::StartLaneOutOfRange {
                lane: self.vehicle_start_lane,
                last: lane_count - 1,
            });
        }
        check_rate("vehicle step", self.vehicle_step)?;
        check_rate("vehicle start offset", self.vehicle_start_offset)?;

        if self.obstacle_kinds.is_empty() {
            return Err(TuningError::NoObstacleKinds);
        }
        for spec in &self.obstacle_kinds {
            let what = spec.kind.name();
            check_size(what, spec.width, spec.height)?;
            if spec.width > lane_width as f32 {
                return Err(TuningError::WiderThanLane {
                    what,
                    width: spec.width,
                    lane_width,
                });
            }
            check_rate("speed multiplier", spec.speed_multiplier)?;
        }
        if self.palette.is_empty() {
            return Err(TuningError::EmptyPalette);
        }

        if !(self.initial_speed.is_finite() && self.initial_speed >= 0.0) {
            return Err(TuningError::BadInitialSpeed(self.initial_speed));
        }
        if !(self.speed_increment.is_finite() && self.speed_increment > 0.0) {
            return Err(TuningError::NonIncreasingSpeed(self.speed_increment));
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(TuningError::BadProbability {
                what: "spawn chance",
                value: self.spawn_chance,
            });
        }
        Ok(())
    }
}

fn check_size(what: &'static str, width: f32, height: f32) -> Result<(), TuningError> {
    let ok = |v: f32| v.is_finite() && v > 0.0;
    if ok(width) && ok(height) {
        Ok(())
    } else {
        Err(TuningError::BadSize {
            what,
            width,
            height,
        })
    }
}

fn check_rate(what: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::BadRate { what, value })
    }
}
