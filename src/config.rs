//! Persisted configuration.
//!
//! Lists and tween animators are configured with plain data that round-trips
//! through JSON. Every field has a default, so partial documents are fine.
//!
//! ```ignore
//! let config = LayoutConfig::from_json(r#"{ "axis": "vertical", "spacing": 4 }"#)?;
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;
use crate::transition::Ease;
use crate::types::{Alignment, Axis, Padding};

// =============================================================================
// Layout Config
// =============================================================================

/// Container layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub axis: Axis,
    pub padding: Padding,
    /// Gap between consecutive visible children.
    pub spacing: f32,
    pub alignment: Alignment,
}

impl LayoutConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        config.validate().inspect_err(|err| warn!(%err, "rejected layout config"))?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Spacing and padding must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_non_negative(self.spacing) {
            return Err(ConfigError::InvalidSpacing(self.spacing));
        }
        for (side, value) in self.padding.sides() {
            if !is_non_negative(value) {
                return Err(ConfigError::InvalidPadding { side, value });
            }
        }
        Ok(())
    }
}

// =============================================================================
// Tween Config
// =============================================================================

/// Per-child animation parameters for [`crate::TweenAnimatedElement`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TweenConfig {
    /// Curve for position changes.
    pub ease: Ease,
    /// Seconds per position change.
    pub duration: f32,
    /// Curve for newly added children.
    pub new_element_ease: Ease,
    /// Seconds for a newly added child to slide in.
    pub new_element_duration: f32,
    /// Where a new child starts, relative to its target.
    pub new_element_offset: [f32; 2],
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            ease: Ease::OutQuad,
            duration: 0.25,
            new_element_ease: Ease::OutQuad,
            new_element_duration: 0.25,
            new_element_offset: [0.0, 0.0],
        }
    }
}

impl TweenConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TweenConfig = serde_json::from_str(json)?;
        config.validate().inspect_err(|err| warn!(%err, "rejected tween config"))?;
        Ok(config)
    }

    /// Durations must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("duration", self.duration),
            ("newElementDuration", self.new_element_duration),
        ] {
            if !is_non_negative(value) {
                return Err(ConfigError::InvalidDuration { field, value });
            }
        }
        Ok(())
    }
}

fn is_non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

// =============================================================================
// Tests
// =============================================================================
