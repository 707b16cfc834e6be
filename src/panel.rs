//! Panel position controller: drag gestures and idle bounce motion.
//!
//! `PanelController` owns the panel offset and decides, per event, who is
//! allowed to move it. It never touches the browser. Instead each input
//! returns the [`Effect`]s the host must carry out (schedule a frame, start
//! or cancel a timer, attach or detach the window drag listeners), which
//! keeps the whole machine testable on the host with a fake clock.
//!
//! Phases:
//!
//! | Phase | Left by |
//! |-------|---------|
//! | `IdleMoving` | landing on a corner, or a drag |
//! | `PausedAtCorner` | its timer, or a drag |
//! | `Dragging` | pointer release |
//! | `Cooldown` | its timer, or a new drag |
//! | `Resting` | a drag (only when idle motion is disabled) |

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::config::{MotionConfig, PanelSizes};
use crate::drag::DragTracker;
use crate::geometry::{Bounds, Point, Size, Vector};
use crate::motion;

/// Identifies one scheduled timer. Ids only grow, so a late callback from a
/// cancelled timer can always be told apart from the pending one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    IdleMoving,
    PausedAtCorner,
    Dragging,
    Cooldown,
    Resting,
}

impl Phase {
    /// Stable lowercase name, written to the panel's `data-phase`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IdleMoving => "moving",
            Self::PausedAtCorner => "paused",
            Self::Dragging => "dragging",
            Self::Cooldown => "cooldown",
            Self::Resting => "resting",
        }
    }
}

/// Work the host must perform on behalf of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Call `on_frame` on the next display refresh.
    RequestFrame,
    /// Drop any outstanding frame request.
    CancelFrame,
    /// Call `on_timer(id)` after `delay_ms`.
    StartTimer { id: TimerId, delay_ms: u32 },
    CancelTimer(TimerId),
    /// Listen for pointer move/release on the whole window.
    AttachDragListeners,
    DetachDragListeners,
}

pub struct PanelController {
    position: Point,
    velocity: Vector,
    phase: Phase,
    drag: DragTracker,
    motion: MotionConfig,
    sizes: PanelSizes,
    expanded: bool,
    pending_timer: Option<TimerId>,
    next_timer: u64,
}

impl PanelController {
    #[must_use]
    pub fn new(motion: MotionConfig, sizes: PanelSizes) -> Self {
        let phase = if motion.enabled { Phase::IdleMoving } else { Phase::Resting };
        Self {
            position: Point::default(),
            velocity: motion.velocity,
            phase,
            drag: DragTracker::new(),
            motion,
            sizes,
            expanded: false,
            pending_timer: None,
            next_timer: 0,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    #[must_use]
    pub fn panel_size(&self) -> Size {
        self.sizes.pick(self.expanded)
    }

    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending_timer
    }

    /// Idle-motion bounds for the current panel preset inside `viewport`.
    #[must_use]
    pub fn bounds(&self, viewport: Size) -> Bounds {
        Bounds::around_anchor(viewport, self.panel_size())
    }

    // --- Lifecycle ---

    /// Kick off the frame loop if the controller starts out moving.
    pub fn start(&mut self) -> Vec<Effect> {
        if self.phase == Phase::IdleMoving {
            vec![Effect::RequestFrame]
        } else {
            Vec::new()
        }
    }

    /// Cancel everything outstanding. The controller schedules no further
    /// work until `start` is called again.
    pub fn teardown(&mut self) -> Vec<Effect> {
        let mut effects = vec![Effect::CancelFrame];
        if let Some(id) = self.pending_timer.take() {
            effects.push(Effect::CancelTimer(id));
        }
        if self.drag.end() {
            effects.push(Effect::DetachDragListeners);
        }
        self.phase = self.rest_phase();
        effects
    }

    /// Switch between the collapsed and expanded size preset.
    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    // --- Drag ---

    /// Pointer pressed on the panel. Ignored while a drag is already active.
    pub fn begin_drag(&mut self, pointer: Point) -> Vec<Effect> {
        if !self.drag.begin(pointer, self.position) {
            return Vec::new();
        }
        let mut effects = vec![Effect::CancelFrame];
        if let Some(id) = self.pending_timer.take() {
            effects.push(Effect::CancelTimer(id));
        }
        effects.push(Effect::AttachDragListeners);
        self.phase = Phase::Dragging;
        effects
    }

    /// Pointer moved while pressed. Returns whether the position changed.
    pub fn update_drag(&mut self, pointer: Point) -> bool {
        match self.drag.update(pointer) {
            Some(position) => {
                self.position = position;
                true
            }
            None => false,
        }
    }

    /// Pointer released.
    ///
    /// A repeated release while the cooldown is running restarts the
    /// cooldown rather than scheduling a second resumption.
    pub fn end_drag(&mut self) -> Vec<Effect> {
        if self.drag.end() {
            let mut effects = vec![Effect::DetachDragListeners];
            effects.extend(self.resume_after_drag());
            return effects;
        }
        if self.phase == Phase::Cooldown {
            let mut effects = Vec::new();
            if let Some(id) = self.pending_timer.take() {
                effects.push(Effect::CancelTimer(id));
            }
            effects.push(self.arm_timer(self.motion.drag_cooldown_ms));
            return effects;
        }
        Vec::new()
    }

    // --- Idle motion ---

    /// One display refresh. Only acts while idle-moving.
    pub fn on_frame(&mut self, viewport: Size) -> Vec<Effect> {
        if self.phase != Phase::IdleMoving {
            return Vec::new();
        }
        let bounds = self.bounds(viewport);
        let step = motion::step(self.position, self.velocity, &bounds);
        self.position = step.position;
        self.velocity = step.velocity;
        if step.at_corner {
            self.phase = Phase::PausedAtCorner;
            vec![self.arm_timer(self.motion.corner_pause_ms)]
        } else {
            vec![Effect::RequestFrame]
        }
    }

    /// A timer fired. Stale ids are ignored.
    pub fn on_timer(&mut self, id: TimerId) -> Vec<Effect> {
        if self.pending_timer != Some(id) {
            return Vec::new();
        }
        self.pending_timer = None;
        match self.phase {
            Phase::PausedAtCorner | Phase::Cooldown => {
                self.phase = Phase::IdleMoving;
                vec![Effect::RequestFrame]
            }
            Phase::IdleMoving | Phase::Dragging | Phase::Resting => Vec::new(),
        }
    }

    // --- Internals ---

    fn rest_phase(&self) -> Phase {
        if self.motion.enabled { Phase::IdleMoving } else { Phase::Resting }
    }

    fn resume_after_drag(&mut self) -> Vec<Effect> {
        if !self.motion.enabled {
            self.phase = Phase::Resting;
            return Vec::new();
        }
        if self.motion.drag_cooldown_ms == 0 {
            self.phase = Phase::IdleMoving;
            return vec![Effect::RequestFrame];
        }
        self.phase = Phase::Cooldown;
        vec![self.arm_timer(self.motion.drag_cooldown_ms)]
    }

    fn arm_timer(&mut self, delay_ms: u32) -> Effect {
        self.next_timer += 1;
        let id = TimerId(self.next_timer);
        self.pending_timer = Some(id);
        Effect::StartTimer { id, delay_ms }
    }
}
