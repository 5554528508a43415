//! Pipeline configuration and configuration file loading.
//!
//! All of the pipeline's fixed thresholds live here as named fields with
//! documented defaults, so an invocation can override them without code
//! changes. Configuration files in TOML or JSON format are supported, with
//! the format auto-detected from the file extension.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{BadgeCutError, CutResult};

/// Configuration for the badge extraction pipeline.
///
/// Every field has a default tuned for a light (cream) scan background with
/// badge-sized foreground objects; construct with `BadgeCutConfig::default()`
/// and override individual fields as needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeCutConfig {
    /// Grayscale intensity below which a pixel counts as foreground
    /// (default: 220 on a 0-255 scale).
    pub brightness_threshold: u8,
    /// Regions with contour area at or below this value are discarded as
    /// noise (default: 2000 pixels squared).
    pub min_area: f64,
    /// Maximum centroid-Y distance from a row's first member for a region to
    /// join that row (default: 100 pixels).
    pub row_tolerance_px: f32,
    /// Padding added on every side of a bounding box before cropping
    /// (default: 20 pixels).
    pub padding_px: u32,
    /// Maximum number of crops to emit; regions beyond the cap are silently
    /// ignored (default: 10).
    pub max_outputs: usize,
}

impl Default for BadgeCutConfig {
    fn default() -> Self {
        Self {
            brightness_threshold: 220,
            min_area: 2000.0,
            row_tolerance_px: 100.0,
            padding_px: 20,
            max_outputs: 10,
        }
    }
}

impl BadgeCutConfig {
    /// Creates a configuration with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BadgeCutError::ConfigError`] if `min_area` is negative or
    /// not finite, `row_tolerance_px` is non-positive or not finite, or
    /// `max_outputs` is zero.
    pub fn validate(&self) -> CutResult<()> {
        if !self.min_area.is_finite() || self.min_area < 0.0 {
            return Err(BadgeCutError::config_error(format!(
                "min_area must be finite and non-negative, got {}",
                self.min_area
            )));
        }
        if !self.row_tolerance_px.is_finite() || self.row_tolerance_px <= 0.0 {
            return Err(BadgeCutError::config_error(format!(
                "row_tolerance_px must be finite and positive, got {}",
                self.row_tolerance_px
            )));
        }
        if self.max_outputs == 0 {
            return Err(BadgeCutError::config_error(
                "max_outputs must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Configuration file format.
#[derive(Debug, Clone, Copy)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Configuration loader for the badge extraction pipeline.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a file, auto-detecting the format from the
    /// extension.
    pub fn load_from_file(path: &Path) -> CutResult<BadgeCutConfig> {
        let format = ConfigFormat::from_extension(path).ok_or_else(|| {
            BadgeCutError::config_error(format!(
                "Unsupported config file extension: {:?}",
                path.extension()
            ))
        })?;

        let content = std::fs::read_to_string(path).map_err(|e| {
            BadgeCutError::config_error(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::load_from_string(&content, format)
    }

    /// Load configuration from a string with the specified format.
    pub fn load_from_string(content: &str, format: ConfigFormat) -> CutResult<BadgeCutConfig> {
        match format {
            ConfigFormat::Toml => Self::load_from_toml(content),
            ConfigFormat::Json => Self::load_from_json(content),
        }
    }

    /// Load configuration from a TOML string.
    pub fn load_from_toml(content: &str) -> CutResult<BadgeCutConfig> {
        toml::from_str(content)
            .map_err(|e| BadgeCutError::config_error(format!("Failed to parse TOML config: {e}")))
    }

    /// Load configuration from a JSON string.
    pub fn load_from_json(content: &str) -> CutResult<BadgeCutConfig> {
        serde_json::from_str(content)
            .map_err(|e| BadgeCutError::config_error(format!("Failed to parse JSON config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_defaults() {
        let config = BadgeCutConfig::default();
        assert_eq!(config.brightness_threshold, 220);
        assert_eq!(config.min_area, 2000.0);
        assert_eq!(config.row_tolerance_px, 100.0);
        assert_eq!(config.padding_px, 20);
        assert_eq!(config.max_outputs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = BadgeCutConfig {
            max_outputs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = BadgeCutConfig {
            min_area: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = BadgeCutConfig {
            row_tolerance_px: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_toml_with_partial_overrides() {
        let config = ConfigLoader::load_from_toml(
            "brightness_threshold = 180\nmax_outputs = 4\n",
        )
        .unwrap();
        assert_eq!(config.brightness_threshold, 180);
        assert_eq!(config.max_outputs, 4);
        // Omitted fields fall back to the defaults.
        assert_eq!(config.min_area, 2000.0);
    }

    #[test]
    fn test_load_from_json() {
        let config =
            ConfigLoader::load_from_json(r#"{"padding_px": 5, "row_tolerance_px": 60.0}"#).unwrap();
        assert_eq!(config.padding_px, 5);
        assert_eq!(config.row_tolerance_px, 60.0);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = ConfigLoader::load_from_file(Path::new("config.yaml"));
        assert!(matches!(result, Err(BadgeCutError::ConfigError { .. })));
    }
}
