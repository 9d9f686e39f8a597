//! Editor configuration.

use kurbo::Size;
use serde::{Deserialize, Serialize};

/// Tunable editor behaviour.
///
/// Every field has a default, so a partial JSON object (or `{}`) is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Scale multiplier for one wheel notch.
    pub wheel_zoom_step: f64,
    /// Scale multiplier for the zoom in / zoom out buttons.
    pub button_zoom_step: f64,
    /// Size of a new rectangle booth. Template placement is centred on the
    /// click point using half of this size.
    pub default_booth_size: Size,
    /// Viewport size until the host reports its real layout.
    pub viewport: Size,
    /// Minimum world-space distance between captured freehand vertices.
    /// `0.0` keeps every pointer-move sample.
    pub freehand_min_distance: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            wheel_zoom_step: 1.05,
            button_zoom_step: 1.2,
            default_booth_size: Size::new(120.0, 80.0),
            viewport: Size::new(360.0, 560.0),
            freehand_min_distance: 0.0,
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from JSON and repair out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Replace values that would break the editor with their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.wheel_zoom_step.is_finite() && self.wheel_zoom_step > 1.0) {
            log::warn!("Ignoring wheel_zoom_step {}", self.wheel_zoom_step);
            self.wheel_zoom_step = defaults.wheel_zoom_step;
        }
        if !(self.button_zoom_step.is_finite() && self.button_zoom_step > 1.0) {
            log::warn!("Ignoring button_zoom_step {}", self.button_zoom_step);
            self.button_zoom_step = defaults.button_zoom_step;
        }
        if !(self.default_booth_size.width > 0.0 && self.default_booth_size.height > 0.0) {
            log::warn!("Ignoring default_booth_size {:?}", self.default_booth_size);
            self.default_booth_size = defaults.default_booth_size;
        }
        if !(self.freehand_min_distance.is_finite() && self.freehand_min_distance >= 0.0) {
            log::warn!("Ignoring freehand_min_distance {}", self.freehand_min_distance);
            self.freehand_min_distance = defaults.freehand_min_distance;
        }
        self
    }
}
