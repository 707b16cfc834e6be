//! Surface configuration.
//!
//! Every field has a default matching the stock demo, so an empty page
//! needs no configuration at all. A page may override any subset by
//! embedding a JSON object in `<script type="application/json"
//! id="glass-config">`; keys are camelCase.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    COLLAPSED_HEIGHT_PX, COLLAPSED_WIDTH_PX, CORNER_PAUSE_MS, DRAG_COOLDOWN_MS, EXPANDED_HEIGHT_PX,
    EXPANDED_WIDTH_PX, IDLE_SPEED_PX,
};
use crate::geometry::{Size, Vector};
use crate::presets::GlassParams;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid surface config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Idle bounce behaviour.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MotionConfig {
    /// Whether the panel moves on its own when not dragged.
    pub enabled: bool,
    /// Initial velocity in pixels per frame.
    pub velocity: Vector,
    pub corner_pause_ms: u32,
    /// Delay before idle motion resumes after a drag; 0 resumes at once.
    pub drag_cooldown_ms: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            velocity: Vector::new(IDLE_SPEED_PX, IDLE_SPEED_PX),
            corner_pause_ms: CORNER_PAUSE_MS,
            drag_cooldown_ms: DRAG_COOLDOWN_MS,
        }
    }
}

/// The two panel size presets.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelSizes {
    pub collapsed: Size,
    pub expanded: Size,
}

impl Default for PanelSizes {
    fn default() -> Self {
        Self {
            collapsed: Size::new(COLLAPSED_WIDTH_PX, COLLAPSED_HEIGHT_PX),
            expanded: Size::new(EXPANDED_WIDTH_PX, EXPANDED_HEIGHT_PX),
        }
    }
}

impl PanelSizes {
    #[must_use]
    pub fn pick(&self, expanded: bool) -> Size {
        if expanded { self.expanded } else { self.collapsed }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SurfaceConfig {
    pub motion: MotionConfig,
    pub panel: PanelSizes,
    pub glass: GlassParams,
    /// Acquire the webcam as the page background.
    pub camera: bool,
    /// Refuse to start the camera outside desktop Chrome.
    pub require_supported_browser: bool,
    /// Populate `#backgrounds` with the shuffled image list.
    pub backgrounds: bool,
    /// `log` level filter name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            motion: MotionConfig::default(),
            panel: PanelSizes::default(),
            glass: GlassParams::default(),
            camera: true,
            require_supported_browser: false,
            backgrounds: true,
            log_level: "info".to_owned(),
        }
    }
}

impl SurfaceConfig {
    /// Parse a (possibly partial) JSON config. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not a valid config object.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(text)?)
    }

    /// The configured level, falling back to `Info` for unknown names.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
