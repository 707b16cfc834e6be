//! Shared numeric defaults for the panel and its idle motion.

// ── Anchor ──────────────────────────────────────────────────────

/// Horizontal anchor of the panel centre, as a percentage of the viewport.
pub const ANCHOR_LEFT_PCT: f64 = 50.0;

/// Vertical anchor of the panel centre, as a percentage of the viewport.
pub const ANCHOR_TOP_PCT: f64 = 45.0;

// ── Panel size presets ──────────────────────────────────────────

/// Collapsed panel width in CSS pixels.
pub const COLLAPSED_WIDTH_PX: f64 = 252.0;

/// Collapsed panel height in CSS pixels.
pub const COLLAPSED_HEIGHT_PX: f64 = 252.0;

/// Expanded panel width in CSS pixels.
pub const EXPANDED_WIDTH_PX: f64 = 420.0;

/// Expanded panel height in CSS pixels.
pub const EXPANDED_HEIGHT_PX: f64 = 280.0;

// ── Idle motion ─────────────────────────────────────────────────

/// Idle velocity per frame, both axes.
pub const IDLE_SPEED_PX: f64 = 2.0;

/// How long the panel rests after landing exactly on a corner.
pub const CORNER_PAUSE_MS: u32 = 600;

/// Delay between the end of a drag and the return of idle motion.
pub const DRAG_COOLDOWN_MS: u32 = 7_000;
