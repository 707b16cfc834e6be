#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

const VIEWPORT: Size = Size { width: 800.0, height: 600.0 };

fn controller() -> PanelController {
    PanelController::new(MotionConfig::default(), PanelSizes::default())
}

fn controller_with(motion: MotionConfig) -> PanelController {
    PanelController::new(motion, PanelSizes::default())
}

/// Square 100x100 bounds around the anchor: a 352x352 viewport with the
/// default 252x252 collapsed panel gives offsets in -50..=50.
const SQUARE_VIEWPORT: Size = Size { width: 352.0, height: 352.0 };

/// Plays the host's role: keeps a virtual clock, a frame flag, the timers
/// and the window listener count, and feeds callbacks back in order.
struct Host {
    now_ms: u64,
    frame_pending: bool,
    timers: Vec<(TimerId, u64)>,
    listeners: i32,
    resumes: Vec<u64>,
}

impl Host {
    fn new() -> Self {
        Self { now_ms: 0, frame_pending: false, timers: Vec::new(), listeners: 0, resumes: Vec::new() }
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RequestFrame => self.frame_pending = true,
                Effect::CancelFrame => self.frame_pending = false,
                Effect::StartTimer { id, delay_ms } => {
                    self.timers.push((id, self.now_ms + u64::from(delay_ms)));
                }
                Effect::CancelTimer(id) => self.timers.retain(|(t, _)| *t != id),
                Effect::AttachDragListeners => self.listeners += 1,
                Effect::DetachDragListeners => self.listeners -= 1,
            }
        }
    }

    /// Advance the clock, firing due timers in deadline order.
    fn advance(&mut self, panel: &mut PanelController, ms: u64) {
        let until = self.now_ms + ms;
        loop {
            self.timers.sort_by_key(|(_, at)| *at);
            let Some(&(id, at)) = self.timers.first() else { break };
            if at > until {
                break;
            }
            self.timers.remove(0);
            self.now_ms = at;
            let before = panel.phase();
            let effects = panel.on_timer(id);
            if before != Phase::IdleMoving && panel.phase() == Phase::IdleMoving {
                self.resumes.push(at);
            }
            self.apply(effects);
        }
        self.now_ms = until;
    }

    /// Run one frame if one is pending.
    fn frame(&mut self, panel: &mut PanelController, viewport: Size) -> bool {
        if !self.frame_pending {
            return false;
        }
        self.frame_pending = false;
        let effects = panel.on_frame(viewport);
        self.apply(effects);
        true
    }
}

// =============================================================
// Construction
// =============================================================

#[test]
fn starts_idle_moving_at_origin() {
    let mut p = controller();
    assert_eq!(p.phase(), Phase::IdleMoving);
    assert_eq!(p.position(), Point::new(0.0, 0.0));
    assert_eq!(p.start(), vec![Effect::RequestFrame]);
}

#[test]
fn disabled_motion_rests_and_schedules_nothing() {
    let mut p = controller_with(MotionConfig { enabled: false, ..MotionConfig::default() });
    assert_eq!(p.phase(), Phase::Resting);
    assert!(p.start().is_empty());
    assert!(p.on_frame(VIEWPORT).is_empty());
    assert_eq!(p.position(), Point::new(0.0, 0.0));
}

#[test]
fn phase_names_are_stable() {
    assert_eq!(Phase::IdleMoving.as_str(), "moving");
    assert_eq!(Phase::PausedAtCorner.as_str(), "paused");
    assert_eq!(Phase::Dragging.as_str(), "dragging");
    assert_eq!(Phase::Cooldown.as_str(), "cooldown");
    assert_eq!(Phase::Resting.as_str(), "resting");
}

// =============================================================
// Drag
// =============================================================

#[test]
fn drag_moves_by_pointer_delta() {
    let mut p = controller();
    p.begin_drag(Point::new(100.0, 100.0));
    assert!(p.update_drag(Point::new(130.0, 80.0)));
    assert_eq!(p.position(), Point::new(30.0, -20.0));
    assert!(p.update_drag(Point::new(90.0, 150.0)));
    assert_eq!(p.position(), Point::new(-10.0, 50.0));
}

#[test]
fn drag_starts_from_current_offset() {
    let mut p = controller_with(MotionConfig { drag_cooldown_ms: 0, ..MotionConfig::default() });
    p.begin_drag(Point::new(0.0, 0.0));
    p.update_drag(Point::new(40.0, 40.0));
    p.end_drag();
    p.begin_drag(Point::new(500.0, 500.0));
    p.update_drag(Point::new(510.0, 490.0));
    assert_eq!(p.position(), Point::new(50.0, 30.0));
}

#[test]
fn update_and_end_without_begin_are_noops() {
    let mut p = controller();
    assert!(!p.update_drag(Point::new(999.0, 999.0)));
    assert!(p.end_drag().is_empty());
    assert_eq!(p.position(), Point::new(0.0, 0.0));
    assert_eq!(p.phase(), Phase::IdleMoving);
}

#[test]
fn begin_cancels_frame_and_attaches_listeners() {
    let mut p = controller();
    let effects = p.begin_drag(Point::new(1.0, 1.0));
    assert_eq!(effects, vec![Effect::CancelFrame, Effect::AttachDragListeners]);
    assert!(p.is_dragging());
}

#[test]
fn second_begin_while_dragging_is_ignored() {
    let mut p = controller();
    p.begin_drag(Point::new(0.0, 0.0));
    assert!(p.begin_drag(Point::new(50.0, 50.0)).is_empty());
    p.update_drag(Point::new(10.0, 0.0));
    assert_eq!(p.position(), Point::new(10.0, 0.0));
}

#[test]
fn frames_are_ignored_while_dragging() {
    let mut p = controller();
    p.begin_drag(Point::new(0.0, 0.0));
    assert!(p.on_frame(VIEWPORT).is_empty());
    assert_eq!(p.position(), Point::new(0.0, 0.0));
}

#[test]
fn drag_can_leave_the_screen() {
    let mut p = controller();
    p.begin_drag(Point::new(0.0, 0.0));
    p.update_drag(Point::new(-3000.0, 2000.0));
    assert_eq!(p.position(), Point::new(-3000.0, 2000.0));
}

#[test]
fn end_without_idle_motion_rests() {
    let mut p = controller_with(MotionConfig { enabled: false, ..MotionConfig::default() });
    p.begin_drag(Point::new(0.0, 0.0));
    assert_eq!(p.end_drag(), vec![Effect::DetachDragListeners]);
    assert_eq!(p.phase(), Phase::Resting);
}

#[test]
fn end_with_zero_cooldown_resumes_immediately() {
    let mut p = controller_with(MotionConfig { drag_cooldown_ms: 0, ..MotionConfig::default() });
    p.begin_drag(Point::new(0.0, 0.0));
    assert_eq!(p.end_drag(), vec![Effect::DetachDragListeners, Effect::RequestFrame]);
    assert_eq!(p.phase(), Phase::IdleMoving);
}

#[test]
fn end_with_cooldown_arms_timer() {
    let mut p = controller();
    p.begin_drag(Point::new(0.0, 0.0));
    let effects = p.end_drag();
    assert_eq!(effects.len(), 2);
    assert_eq!(effects[0], Effect::DetachDragListeners);
    assert!(matches!(effects[1], Effect::StartTimer { delay_ms: 7000, .. }));
    assert_eq!(p.phase(), Phase::Cooldown);
}

#[test]
fn listeners_balance_over_many_cycles() {
    let mut host = Host::new();
    let mut p = controller();
    host.apply(p.start());
    for i in 0..50_i32 {
        let x = f64::from(i);
        host.apply(p.begin_drag(Point::new(x, x)));
        assert_eq!(host.listeners, 1);
        p.update_drag(Point::new(x + 1.0, x));
        host.apply(p.end_drag());
        host.apply(p.end_drag());
        assert_eq!(host.listeners, 0);
    }
    assert!(host.timers.len() <= 1);
}

// =============================================================
// Idle motion
// =============================================================

#[test]
fn frame_advances_by_velocity() {
    let mut p = controller();
    assert_eq!(p.on_frame(VIEWPORT), vec![Effect::RequestFrame]);
    assert_eq!(p.position(), Point::new(2.0, 2.0));
}

#[test]
fn every_frame_stays_inside_bounds() {
    let mut host = Host::new();
    let mut p = controller();
    host.apply(p.start());
    let bounds = p.bounds(VIEWPORT);
    for _ in 0..20_000 {
        if !host.frame(&mut p, VIEWPORT) {
            host.advance(&mut p, 600);
            continue;
        }
        assert!(bounds.contains(p.position()), "{:?}", p.position());
        assert_eq!(p.velocity().x.abs(), 2.0);
        assert_eq!(p.velocity().y.abs(), 2.0);
    }
}

#[test]
fn y_edge_reached_first_in_800x600() {
    let mut p = controller();
    for _ in 0..87 {
        p.on_frame(VIEWPORT);
    }
    assert_eq!(p.position(), Point::new(174.0, 174.0));
    assert_eq!(p.phase(), Phase::IdleMoving);
    p.on_frame(VIEWPORT);
    assert_eq!(p.velocity(), Vector::new(2.0, -2.0));
    assert_eq!(p.position(), Point::new(176.0, 172.0));
}

#[test]
fn corner_hit_pauses_then_resumes_after_600ms() {
    let mut host = Host::new();
    let mut p = controller();
    host.apply(p.start());
    // Offsets run -50..=50; diagonal motion from the origin hits (50, 50).
    for _ in 0..25 {
        assert!(host.frame(&mut p, SQUARE_VIEWPORT));
    }
    assert_eq!(p.position(), Point::new(50.0, 50.0));
    assert_eq!(p.phase(), Phase::PausedAtCorner);
    assert!(!host.frame_pending);
    assert_eq!(host.timers.len(), 1);

    host.advance(&mut p, 599);
    assert_eq!(p.phase(), Phase::PausedAtCorner);
    host.advance(&mut p, 1);
    assert_eq!(p.phase(), Phase::IdleMoving);
    assert_eq!(host.resumes, vec![600]);
    assert_eq!(p.velocity(), Vector::new(2.0, 2.0));

    assert!(host.frame(&mut p, SQUARE_VIEWPORT));
    assert_eq!(p.velocity(), Vector::new(-2.0, -2.0));
    assert_eq!(p.position(), Point::new(48.0, 48.0));
}

#[test]
fn bounce_reaches_opposite_corner() {
    let mut host = Host::new();
    let mut p = controller();
    host.apply(p.start());
    for _ in 0..25 {
        host.frame(&mut p, SQUARE_VIEWPORT);
    }
    host.advance(&mut p, 600);
    for _ in 0..50 {
        assert!(host.frame(&mut p, SQUARE_VIEWPORT));
    }
    assert_eq!(p.position(), Point::new(-50.0, -50.0));
    assert_eq!(p.phase(), Phase::PausedAtCorner);
}

#[test]
fn oversized_panel_keeps_moving_without_pauses() {
    let mut panel = controller();
    let mut host = Host::new();
    host.apply(panel.start());
    for _ in 0..20 {
        assert!(host.frame(&mut panel, Size::new(200.0, 200.0)));
        assert_eq!(panel.phase(), Phase::IdleMoving);
        assert_eq!(panel.position(), Point::new(0.0, 0.0));
    }
    assert!(host.timers.is_empty());
}

#[test]
fn frames_are_ignored_while_paused() {
    let mut p = controller();
    for _ in 0..25 {
        p.on_frame(SQUARE_VIEWPORT);
    }
    assert_eq!(p.phase(), Phase::PausedAtCorner);
    assert!(p.on_frame(SQUARE_VIEWPORT).is_empty());
    assert_eq!(p.position(), Point::new(50.0, 50.0));
}

#[test]
fn expanded_preset_changes_bounds_next_frame() {
    let mut p = controller();
    let collapsed = p.bounds(VIEWPORT);
    p.set_expanded(true);
    assert!(p.is_expanded());
    let expanded = p.bounds(VIEWPORT);
    assert_eq!(expanded, Bounds::new(-190.0, 190.0, -160.0, 160.0));
    assert!(expanded.max_x < collapsed.max_x);
}

#[test]
fn shrinking_viewport_snaps_position_inside() {
    let mut p = controller();
    for _ in 0..80 {
        p.on_frame(VIEWPORT);
    }
    let small = Size::new(400.0, 400.0);
    p.on_frame(small);
    assert!(p.bounds(small).contains(p.position()));
}

// =============================================================
// Preemption and timers
// =============================================================

#[test]
fn drag_during_pause_cancels_resume() {
    let mut host = Host::new();
    let mut p = controller();
    host.apply(p.start());
    for _ in 0..25 {
        host.frame(&mut p, SQUARE_VIEWPORT);
    }
    assert_eq!(p.phase(), Phase::PausedAtCorner);
    let paused_timer = p.pending_timer();
    assert!(paused_timer.is_some());

    host.advance(&mut p, 300);
    host.apply(p.begin_drag(Point::new(0.0, 0.0)));
    assert!(host.timers.is_empty());
    assert_eq!(p.pending_timer(), None);

    host.advance(&mut p, 1000);
    assert_eq!(p.phase(), Phase::Dragging);
    assert!(host.resumes.is_empty());

    host.apply(p.end_drag());
    assert_eq!(p.phase(), Phase::Cooldown);
    host.advance(&mut p, 6999);
    assert!(host.resumes.is_empty());
    host.advance(&mut p, 1);
    assert_eq!(host.resumes, vec![8300]);
}

#[test]
fn stale_timer_id_is_ignored() {
    let mut p = controller();
    for _ in 0..25 {
        p.on_frame(SQUARE_VIEWPORT);
    }
    let Some(stale) = p.pending_timer() else {
        panic!("corner pause should arm a timer");
    };
    p.begin_drag(Point::new(0.0, 0.0));
    p.end_drag();
    assert!(p.on_timer(stale).is_empty());
    assert_eq!(p.phase(), Phase::Cooldown);
}

#[test]
fn timer_ids_increase() {
    let mut p = controller();
    p.begin_drag(Point::new(0.0, 0.0));
    p.end_drag();
    let first = p.pending_timer();
    p.end_drag();
    let second = p.pending_timer();
    match (first, second) {
        (Some(TimerId(a)), Some(TimerId(b))) => assert!(b > a),
        other => panic!("expected two timers, got {other:?}"),
    }
}

#[test]
fn repeated_end_schedules_single_resume() {
    let mut host = Host::new();
    let mut p = controller();
    host.apply(p.start());
    host.apply(p.begin_drag(Point::new(0.0, 0.0)));
    host.apply(p.end_drag());
    host.advance(&mut p, 100);
    host.apply(p.end_drag());
    assert_eq!(host.timers.len(), 1);

    host.advance(&mut p, 6999);
    assert!(host.resumes.is_empty());
    host.advance(&mut p, 1);
    assert_eq!(host.resumes, vec![7100]);
    host.advance(&mut p, 20_000);
    assert_eq!(host.resumes, vec![7100]);
    assert!(host.frame_pending);
}

#[test]
fn new_drag_during_cooldown_cancels_it() {
    let mut host = Host::new();
    let mut p = controller();
    host.apply(p.begin_drag(Point::new(0.0, 0.0)));
    host.apply(p.end_drag());
    host.advance(&mut p, 3000);
    host.apply(p.begin_drag(Point::new(0.0, 0.0)));
    assert!(host.timers.is_empty());
    host.advance(&mut p, 10_000);
    assert!(host.resumes.is_empty());
    assert_eq!(p.phase(), Phase::Dragging);
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn teardown_mid_drag_detaches_and_cancels() {
    let mut host = Host::new();
    let mut p = controller();
    host.apply(p.start());
    host.apply(p.begin_drag(Point::new(0.0, 0.0)));
    host.apply(p.teardown());
    assert_eq!(host.listeners, 0);
    assert!(!host.frame_pending);
    assert!(!p.is_dragging());
}

#[test]
fn teardown_cancels_pending_timer() {
    let mut host = Host::new();
    let mut p = controller();
    host.apply(p.begin_drag(Point::new(0.0, 0.0)));
    host.apply(p.end_drag());
    host.apply(p.teardown());
    assert!(host.timers.is_empty());
    assert_eq!(p.pending_timer(), None);
    host.advance(&mut p, 10_000);
    assert!(host.resumes.is_empty());
}
