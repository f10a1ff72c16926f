//! Rotation control options with TOML preset support.
//!
//! All tweakable controller settings (decay schedule, release
//! thresholds, nudge step sizes) are consolidated here. Options
//! serialize to/from TOML so hosts can persist tuning presets, and a
//! JSON Schema export lets remote controllers build a settings UI
//! without hardcoding field names.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SwivelError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rotation Control", inline)]
#[serde(default)]
/// Arcball controller tuning parameters.
pub struct ControlOptions {
    /// Momentum tick interval in seconds. Also the extrapolation factor
    /// applied to the release velocity, so velocity is interpreted as
    /// pointer units per tick.
    #[schemars(skip)]
    pub rotation_rate: f32,
    /// Fraction of the starting momentum angle removed per tick. The
    /// reciprocal is the tick count to termination.
    #[schemars(title = "Deceleration", range(min = 0.002, max = 0.2), extend("step" = 0.002))]
    pub deceleration_rate: f32,
    /// Release speed (pointer units/sec) below which no momentum
    /// starts.
    #[schemars(title = "Min Fling Speed", range(min = 0.0, max = 50.0), extend("step" = 0.1))]
    pub min_release_speed: f32,
    /// Projected momentum angle (radians) below which no momentum
    /// starts.
    #[schemars(skip)]
    pub min_momentum_angle: f32,
    /// Yaw nudge step in degrees (clockwise/counterclockwise keys).
    #[schemars(title = "Yaw Step", range(min = 1.0, max = 45.0), extend("step" = 1.0))]
    pub yaw_step_deg: f32,
    /// Pitch nudge step in degrees.
    #[schemars(title = "Pitch Step", range(min = 1.0, max = 45.0), extend("step" = 1.0))]
    pub pitch_step_deg: f32,
    /// Roll nudge step in degrees.
    #[schemars(title = "Roll Step", range(min = 1.0, max = 45.0), extend("step" = 1.0))]
    pub roll_step_deg: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            rotation_rate: 1.0 / 30.0,
            deceleration_rate: 1.0 / 60.0,
            min_release_speed: 0.1,
            min_momentum_angle: 0.001,
            yaw_step_deg: 10.0,
            pitch_step_deg: 5.0,
            roll_step_deg: 5.0,
        }
    }
}

/// Top-level options container. Sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding one field) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Arcball controller tuning parameters.
    pub control: ControlOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SwivelError> {
        let content = std::fs::read_to_string(path).map_err(SwivelError::Io)?;
        toml::from_str(&content)
            .map_err(|e| SwivelError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SwivelError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SwivelError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SwivelError::Io)?;
        }
        std::fs::write(path, content).map_err(SwivelError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_uses_defaults_for_missing_fields() {
        let parsed: Options =
            toml::from_str("[control]\nyaw_step_deg = 15.0\n").unwrap();
        assert_eq!(parsed.control.yaw_step_deg, 15.0);
        assert_eq!(
            parsed.control.deceleration_rate,
            ControlOptions::default().deceleration_rate
        );
    }

    #[test]
    fn default_constants_match_reference_schedule() {
        let opts = ControlOptions::default();
        assert!((opts.rotation_rate - 1.0 / 30.0).abs() < 1e-9);
        assert!((opts.deceleration_rate - 1.0 / 60.0).abs() < 1e-9);
        assert_eq!(opts.min_release_speed, 0.1);
        assert_eq!(opts.min_momentum_angle, 0.001);
        assert_eq!(opts.yaw_step_deg, 10.0);
        assert_eq!(opts.pitch_step_deg, 5.0);
        assert_eq!(opts.roll_step_deg, 5.0);
    }

    #[test]
    fn json_schema_exposes_control_section() {
        let schema = Options::json_schema();
        let text = format!("{schema:?}");
        assert!(text.contains("control"));
        assert!(text.contains("yaw_step_deg"));
    }
}
