//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` per frame)
//! - Injected RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod lane;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::steer;
pub use collision::{Rect, resolve_collisions};
pub use lane::{Bounds, LaneLayout};
pub use snapshot::{ObstacleView, Snapshot, VehicleView};
pub use spawn::{RandomSource, spawn_obstacle, try_spawn};
pub use state::{Color, GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, PALETTE, Vehicle};
pub use tick::{TickInput, tick};
