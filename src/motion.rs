//! One frame of idle bounce motion.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::geometry::{Bounds, Point, Vector};

/// Result of advancing the panel by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub position: Point,
    pub velocity: Vector,
    /// The new position lies on a horizontal and a vertical bound.
    pub at_corner: bool,
}

/// Reflect, advance, clamp and test for a corner hit, in that order.
///
/// Reflection only ever points the velocity back toward the interior and
/// keeps its magnitude, so speed is conserved across bounces.
#[must_use]
pub fn step(position: Point, velocity: Vector, bounds: &Bounds) -> Step {
    let velocity = Vector::new(
        reflect(position.x, velocity.x, bounds.min_x, bounds.max_x),
        reflect(position.y, velocity.y, bounds.min_y, bounds.max_y),
    );
    let position = bounds.clamp(position + velocity);
    Step { position, velocity, at_corner: bounds.is_corner(position) }
}

fn reflect(pos: f64, vel: f64, min: f64, max: f64) -> f64 {
    let next = pos + vel;
    if next > max {
        -vel.abs()
    } else if next < min {
        vel.abs()
    } else {
        vel
    }
}
