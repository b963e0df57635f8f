//! Demo-mode driver
//!
//! Produces the input a cautious player would give: stay put while the
//! column ahead is clear, otherwise head for the nearest lane that is.

use glam::Vec2;

use super::collision::Rect;
use super::state::GameState;
use super::tick::TickInput;

/// How far above the vehicle obstacles count as a threat (pixels)
const LOOKAHEAD: f32 = 250.0;

/// Pick this tick's input for the vehicle
pub fn steer(state: &GameState) -> TickInput {
    let vehicle = &state.vehicle;
    let layout = &state.layout;

    let threatened = |x: f32| {
        let column = Rect::new(
            Vec2::new(x, vehicle.pos.y - LOOKAHEAD),
            Vec2::new(vehicle.size.x, vehicle.size.y + LOOKAHEAD),
        );
        state.obstacles.iter().any(|o| column.overlaps(&o.rect()))
    };

    if !threatened(vehicle.pos.x) {
        return TickInput::default();
    }

    let target = layout
        .drivable_lanes()
        .map(|lane| layout.spawn_x(lane, vehicle.size.x))
        .filter(|&x| !threatened(x))
        .min_by(|a, b| {
            (a - vehicle.pos.x)
                .abs()
                .partial_cmp(&(b - vehicle.pos.x).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(target) = target else {
        // Nowhere safe; hold position
        return TickInput::default();
    };

    let slack = state.tuning.vehicle_step / 2.0;
    TickInput {
        left: target < vehicle.pos.x - slack,
        right: target > vehicle.pos.x + slack,
        ..Default::default()
    }
}
