//! Drag tracking: pointer positions in, panel offsets out.
//!
//! A drag captures the pointer and the panel offset at the moment it
//! begins. Every later pointer position maps to
//! `start_offset + (pointer - start_pointer)`, so the result depends only on
//! the latest pointer, never on the path taken. Dragged offsets are not
//! clamped; the panel may leave the screen.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::geometry::Point;

/// Context captured on pointer-down, alive until pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Client position of the pointer when the drag began.
    pub start_pointer: Point,
    /// Panel offset when the drag began.
    pub start_offset: Point,
}

impl DragSession {
    #[must_use]
    pub fn offset_for(&self, pointer: Point) -> Point {
        self.start_offset + (pointer - self.start_pointer)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    session: Option<DragSession>,
}

impl DragTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Start a drag. Returns `false` and changes nothing if one is active.
    pub fn begin(&mut self, pointer: Point, current_offset: Point) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(DragSession { start_pointer: pointer, start_offset: current_offset });
        true
    }

    /// The offset for `pointer`, or `None` when no drag is active.
    #[must_use]
    pub fn update(&self, pointer: Point) -> Option<Point> {
        self.session.map(|s| s.offset_for(pointer))
    }

    /// Drop the session. Returns whether one existed.
    pub fn end(&mut self) -> bool {
        self.session.take().is_some()
    }
}
