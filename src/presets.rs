//! Glass appearance: the cycled intensity presets and the parameters handed
//! to the glass renderer.

#[cfg(test)]
#[path = "presets_test.rs"]
mod presets_test;

use serde::Deserialize;

/// One intensity level of the CSS glass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlassPreset {
    pub blur_px: f64,
    pub brightness: f64,
    pub saturation: f64,
    pub border: &'static str,
    pub shadow: &'static str,
}

impl GlassPreset {
    /// Value for `backdrop-filter`.
    #[must_use]
    pub fn backdrop_filter(&self) -> String {
        format!(
            "blur({}px) brightness({}) saturate({}) contrast(1.08)",
            self.blur_px, self.brightness, self.saturation
        )
    }

    /// Value for `border`.
    #[must_use]
    pub fn border_css(&self) -> String {
        format!("1.5px solid {}", self.border)
    }
}

pub const GLASS_LEVELS: [GlassPreset; 4] = [
    GlassPreset {
        blur_px: 2.0,
        brightness: 1.1,
        saturation: 1.2,
        border: "rgba(255,255,255,0.18)",
        shadow: "0 4px 32px 0 rgba(0,0,0,0.10)",
    },
    GlassPreset {
        blur_px: 6.0,
        brightness: 1.2,
        saturation: 1.4,
        border: "rgba(255,255,255,0.22)",
        shadow: "0 8px 32px 0 rgba(0,0,0,0.13)",
    },
    GlassPreset {
        blur_px: 12.0,
        brightness: 1.3,
        saturation: 1.6,
        border: "rgba(255,255,255,0.28)",
        shadow: "0 12px 32px 0 rgba(0,0,0,0.16)",
    },
    GlassPreset {
        blur_px: 0.0,
        brightness: 1.0,
        saturation: 1.0,
        border: "rgba(255,255,255,0.10)",
        shadow: "0 2px 16px 0 rgba(0,0,0,0.08)",
    },
];

/// Wrapping cursor over [`GLASS_LEVELS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresetCycle {
    index: usize,
}

impl PresetCycle {
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current(&self) -> &'static GlassPreset {
        &GLASS_LEVELS[self.index]
    }

    /// Move to the next level, wrapping after the last.
    pub fn advance(&mut self) -> &'static GlassPreset {
        self.index = (self.index + 1) % GLASS_LEVELS.len();
        self.current()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlassMode {
    #[default]
    Standard,
    Polar,
    Prominent,
    Shader,
}

impl GlassMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Polar => "polar",
            Self::Prominent => "prominent",
            Self::Shader => "shader",
        }
    }
}

/// Numeric inputs of the glass renderer. The page stylesheet reads them as
/// CSS custom properties on the panel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlassParams {
    pub displacement_scale: f64,
    pub blur_amount: f64,
    pub saturation: f64,
    pub aberration_intensity: f64,
    pub elasticity: f64,
    pub corner_radius: f64,
    pub over_light: bool,
    pub mode: GlassMode,
}

impl Default for GlassParams {
    fn default() -> Self {
        Self {
            displacement_scale: 100.0,
            blur_amount: 0.1,
            saturation: 140.0,
            aberration_intensity: 5.0,
            elasticity: 0.0,
            corner_radius: 32.0,
            over_light: false,
            mode: GlassMode::Standard,
        }
    }
}

impl GlassParams {
    /// `(property, value)` pairs to set on the panel's style.
    #[must_use]
    pub fn css_properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("--glass-displacement", self.displacement_scale.to_string()),
            ("--glass-blur", self.blur_amount.to_string()),
            ("--glass-saturation", format!("{}%", self.saturation)),
            ("--glass-aberration", self.aberration_intensity.to_string()),
            ("--glass-elasticity", self.elasticity.to_string()),
            ("--glass-radius", format!("{}px", self.corner_radius)),
            ("--glass-over-light", if self.over_light { "1" } else { "0" }.to_owned()),
            ("--glass-mode", self.mode.as_str().to_owned()),
        ]
    }
}
