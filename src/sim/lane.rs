//! Lane geometry
//!
//! The playfield is split into equal-width vertical lanes:
//! - lane 0 is the shoulder (reserved for HUD text, never driven on)
//! - lanes 1..=lane_count-1 carry the vehicle and obstacles
//!
//! Everything here is pure; a layout is derived once from the tuning.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Rectangle the vehicle's top-left corner is clamped against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Left edge of the drivable road
    pub x_min: f32,
    /// Right edge of the drivable road
    pub x_max: f32,
    /// Bottom of the playfield
    pub y_max: f32,
}

/// Lane layout of a playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneLayout {
    pub width: u32,
    pub height: u32,
    pub lane_width: u32,
    pub lane_count: u32,
}

impl LaneLayout {
    /// Split a playfield into `width / divisor` wide lanes.
    ///
    /// Callers must pass a validated divisor (non-zero, not wider than the
    /// playfield); see [`crate::Tuning::validate`].
    pub fn new(width: u32, height: u32, divisor: u32) -> Self {
        let lane_width = width / divisor;
        Self {
            width,
            height,
            lane_width,
            lane_count: width / lane_width,
        }
    }

    /// Lanes obstacles may spawn in (shoulder excluded)
    #[inline]
    pub fn drivable_lanes(&self) -> RangeInclusive<u32> {
        1..=self.lane_count - 1
    }

    /// Left pixel edge of a lane
    #[inline]
    pub fn lane_left(&self, lane: u32) -> f32 {
        (lane * self.lane_width) as f32
    }

    /// Left edge that centers an object of `object_width` inside `lane`
    pub fn spawn_x(&self, lane: u32, object_width: f32) -> f32 {
        self.lane_left(lane) + (self.lane_width as f32 - object_width) / 2.0
    }

    /// Lane containing pixel column `x`, if it is on the playfield
    pub fn lane_at(&self, x: f32) -> Option<u32> {
        if x < 0.0 || x >= (self.lane_width * self.lane_count) as f32 {
            return None;
        }
        Some(x as u32 / self.lane_width)
    }

    /// Horizontal and vertical limits for vehicle movement
    pub fn drivable_bounds(&self) -> Bounds {
        Bounds {
            x_min: self.lane_width as f32,
            x_max: (self.lane_width * self.lane_count) as f32,
            y_max: self.height as f32,
        }
    }

    /// X positions of the painted lines between lanes
    pub fn divider_positions(&self) -> Vec<f32> {
        (1..self.lane_count).map(|i| self.lane_left(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> LaneLayout {
        LaneLayout::new(800, 600, 4)
    }

    #[test]
    fn test_lane_dimensions() {
        let layout = layout();
        assert_eq!(layout.lane_width, 200);
        assert_eq!(layout.lane_count, 4);
        assert_eq!(layout.drivable_lanes(), 1..=3);
    }

    #[test]
    fn test_uneven_width_truncates() {
        // 810 / 4 = 202 wide lanes, 810 / 202 = 4 lanes
        let layout = LaneLayout::new(810, 600, 4);
        assert_eq!(layout.lane_width, 202);
        assert_eq!(layout.lane_count, 4);
    }

    #[test]
    fn test_spawn_x_centers_in_lane() {
        let layout = layout();
        assert_eq!(layout.spawn_x(1, 60.0), 270.0);
        assert_eq!(layout.spawn_x(2, 60.0), 470.0);
        // Rightmost lane still fits on the playfield
        let x = layout.spawn_x(3, 100.0);
        assert_eq!(x, 650.0);
        assert!(x + 100.0 <= 800.0);
    }

    #[test]
    fn test_lane_at() {
        let layout = layout();
        assert_eq!(layout.lane_at(0.0), Some(0));
        assert_eq!(layout.lane_at(199.9), Some(0));
        assert_eq!(layout.lane_at(200.0), Some(1));
        assert_eq!(layout.lane_at(799.0), Some(3));
        assert_eq!(layout.lane_at(800.0), None);
        assert_eq!(layout.lane_at(-1.0), None);
    }

    #[test]
    fn test_drivable_bounds() {
        let bounds = layout().drivable_bounds();
        assert_eq!(bounds.x_min, 200.0);
        assert_eq!(bounds.x_max, 800.0);
        assert_eq!(bounds.y_max, 600.0);
    }

    #[test]
    fn test_divider_positions() {
        assert_eq!(layout().divider_positions(), vec![200.0, 400.0, 600.0]);
    }
}
