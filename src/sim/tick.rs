//! Fixed timestep simulation tick
//!
//! Core game loop step that advances the simulation deterministically.

use glam::Vec2;

use super::collision::resolve_collisions;
use super::spawn::{RandomSource, try_spawn};
use super::state::{GameEvent, GameState};

/// Input for a single tick (already debounced by the host)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Advance the game state by one fixed tick.
///
/// Does nothing once the round is over. Events produced by this tick are
/// appended to `state.events`; the host drains them with
/// [`GameState::take_events`].
pub fn tick(state: &mut GameState, input: &TickInput, rng: &mut impl RandomSource) {
    if !state.is_running() {
        return;
    }
    state.time_ticks += 1;

    apply_input(state, input);
    advance_obstacles(state);

    resolve_collisions(state);
    if !state.is_running() {
        return;
    }

    let chance = state.tuning.spawn_chance;
    try_spawn(state, rng, chance);

    state.speed += state.tuning.speed_increment;
}

/// Move the vehicle one step per held direction
fn apply_input(state: &mut GameState, input: &TickInput) {
    let step = state.tuning.vehicle_step;
    let bounds = state.layout.drivable_bounds();
    let moves = [
        (input.left, Vec2::new(-step, 0.0)),
        (input.right, Vec2::new(step, 0.0)),
        (input.up, Vec2::new(0.0, -step)),
        (input.down, Vec2::new(0.0, step)),
    ];
    for (held, delta) in moves {
        if held {
            state.vehicle.move_by(delta, &bounds);
        }
    }
}

/// Scroll every obstacle, then drop the ones that left the playfield
fn advance_obstacles(state: &mut GameState) {
    let height = state.layout.height as f32;
    for obstacle in &mut state.obstacles {
        obstacle.advance();
    }

    let before = state.obstacles.len();
    let events = &mut state.events;
    state.obstacles.retain(|o| {
        if o.is_past(height) {
            log::trace!("Obstacle {} dodged", o.id);
            events.push(GameEvent::Dodged { id: o.id });
            false
        } else {
            true
        }
    });
    state.score += (before - state.obstacles.len()) as u64;
}
