//=========================================================================
// Configuration
//=========================================================================
//
// Runtime settings for the input subsystem, loadable from TOML.
//
// Every field has a default, so a partial (or empty) document is valid:
//
// ```toml
// tps = 120.0
// sensor_update_rate_hz = 50.0
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::Deserialize;

//=== Internal Dependencies ===============================================

use crate::error::{InputError, Result};

//=== InputConfig =========================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Frame loop ticks per second.
    pub tps: f64,

    /// Target sensor sample rate; devices report every `trunc(1000 / rate)` ms.
    pub sensor_update_rate_hz: f32,

    /// Capacity of the lifecycle channel.
    pub channel_capacity: usize,

    /// Initial surface size in pixels (0 until the first resize).
    pub surface_width: f32,
    pub surface_height: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            tps: 60.0,
            sensor_update_rate_hz: 60.0,
            channel_capacity: 64,
            surface_width: 0.0,
            surface_height: 0.0,
        }
    }
}

impl InputConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.tps > 0.0) {
            return Err(InputError::Config(format!("tps must be positive, got {}", self.tps)));
        }
        if !(self.sensor_update_rate_hz > 0.0) {
            return Err(InputError::Config(format!(
                "sensor_update_rate_hz must be positive, got {}",
                self.sensor_update_rate_hz
            )));
        }
        if self.channel_capacity == 0 {
            return Err(InputError::Config("channel_capacity must be positive".into()));
        }
        if self.surface_width < 0.0 || self.surface_height < 0.0 {
            return Err(InputError::Config(format!(
                "surface size must not be negative, got {}x{}",
                self.surface_width, self.surface_height
            )));
        }
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = InputConfig::from_toml_str("").unwrap();
        assert_eq!(config, InputConfig::default());
        assert_eq!(config.tps, 60.0);
        assert_eq!(config.channel_capacity, 64);
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = InputConfig::from_toml_str(
            r#"
            tps = 120.0
            surface_width = 1920.0
            surface_height = 1080.0
            "#,
        )
        .unwrap();

        assert_eq!(config.tps, 120.0);
        assert_eq!(config.surface_width, 1920.0);
        assert_eq!(config.sensor_update_rate_hz, 60.0);
    }

    #[test]
    fn invalid_values_are_rejected() {
        for source in [
            "tps = 0.0",
            "tps = -1.0",
            "sensor_update_rate_hz = 0.0",
            "channel_capacity = 0",
            "surface_width = -5.0",
        ] {
            let result = InputConfig::from_toml_str(source);
            assert!(matches!(result, Err(InputError::Config(_))), "{source} should fail");
        }
    }

    #[test]
    fn nan_rate_is_rejected() {
        let config = InputConfig { sensor_update_rate_hz: f32::NAN, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let result = InputConfig::from_toml_str("tps = \"fast\"");
        assert!(matches!(result, Err(InputError::ConfigParse(_))));
    }
}
