// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! TOML loading and schema export

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ui::UiConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for '{field}': {details}")]
    InvalidValue { field: String, details: String },
}

/// Parse a TOML document; missing keys keep their defaults.
pub fn from_toml_str(content: &str) -> Result<UiConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Load and validate a configuration file
pub fn load_from_file(path: &Path) -> Result<UiConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = from_toml_str(&content).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &UiConfig) -> Result<(), ConfigError> {
    let positive = [
        ("pixels-per-column", config.pixels_per_column),
        ("swipe.rotation-divisor", config.swipe.rotation_divisor),
        ("swipe.scale-divisor", config.swipe.scale_divisor),
        ("swipe.opacity-divisor", config.swipe.opacity_divisor),
        ("swipe.shadow-radius-divisor", config.swipe.shadow_radius_divisor),
        ("swipe.shadow-offset-divisor", config.swipe.shadow_offset_divisor),
        ("swipe.glow-radius-divisor", config.swipe.glow_radius_divisor),
    ];
    for (field, value) in positive {
        if value.is_nan() || value <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                details: format!("must be greater than zero, got {value}"),
            });
        }
    }

    if !(0.0..=1.0).contains(&config.swipe.min_opacity) {
        return Err(ConfigError::InvalidValue {
            field: "swipe.min-opacity".to_string(),
            details: format!("must lie in [0, 1], got {}", config.swipe.min_opacity),
        });
    }

    // Lower bounds of the clamped drag response
    let at_least = [
        ("swipe.commit-threshold", config.swipe.commit_threshold, 0.0),
        ("swipe.max-rotation", config.swipe.max_rotation, 0.0),
        ("swipe.max-scale", config.swipe.max_scale, 1.0),
        ("swipe.base-effect-radius", config.swipe.base_effect_radius, 0.0),
        ("swipe.max-effect-radius", config.swipe.max_effect_radius, 0.0),
    ];
    for (field, value, min) in at_least {
        if value.is_nan() || value < min {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                details: format!("must be at least {min}, got {value}"),
            });
        }
    }

    Ok(())
}

/// JSON schema of [`UiConfig`], pretty printed
pub fn schema_json() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(UiConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_divisor_is_rejected() {
        let mut config = UiConfig::default();
        config.swipe.scale_divisor = 0.0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("swipe.scale-divisor"));
    }

    #[test]
    fn opacity_floor_must_be_a_fraction() {
        let mut config = UiConfig::default();
        config.swipe.min_opacity = 1.5;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn nan_bounds_are_rejected() {
        let mut config = UiConfig::default();
        config.swipe.max_effect_radius = f64::NAN;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("swipe.max-effect-radius"));
    }

    #[test]
    fn defaults_validate() {
        assert!(validate(&UiConfig::default()).is_ok());
    }
}
