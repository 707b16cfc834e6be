//! 2D primitives: panel offsets, velocities, sizes and the idle-motion bounds.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::ops::{Add, Sub};

use serde::Deserialize;

/// A point in screen space, in CSS pixels.
///
/// Panel offsets are points relative to the anchor; pointer positions are
/// points in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A displacement in CSS pixels. Used for pointer deltas and per-frame velocity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle the idle-moving panel offset must stay inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self { min_x, max_x, min_y, max_y }
    }

    /// Offsets that keep a panel centred on the anchor fully inside the viewport.
    ///
    /// A panel larger than the viewport on some axis gets a zero-width range
    /// on that axis.
    #[must_use]
    pub fn around_anchor(viewport: Size, panel: Size) -> Self {
        let half_x = ((viewport.width - panel.width) / 2.0).max(0.0);
        let half_y = ((viewport.height - panel.height) / 2.0).max(0.0);
        Self { min_x: -half_x, max_x: half_x, min_y: -half_y, max_y: half_y }
    }

    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }

    #[must_use]
    pub fn clamp(&self, p: Point) -> Point {
        Point { x: p.x.clamp(self.min_x, self.max_x), y: p.y.clamp(self.min_y, self.max_y) }
    }

    /// Whether `p` sits exactly on a horizontal and a vertical edge at once.
    ///
    /// A zero-width axis has no edges, so an oversized panel never pauses.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_corner(&self, p: Point) -> bool {
        let on_x = self.min_x < self.max_x && (p.x == self.min_x || p.x == self.max_x);
        let on_y = self.min_y < self.max_y && (p.y == self.min_y || p.y == self.max_y);
        on_x && on_y
    }
}
