//! Boost tuning configuration
//!
//! The tunable parameters of the boost controller, held in an explicit
//! immutable structure (stored as tuning.json) rather than compile-time
//! constants, so alternate tunings can be loaded without recompilation.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading or validating a tuning
#[derive(Error, Debug)]
pub enum TuningError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Tunable parameters for the boost controller
///
/// Missing fields in a tuning file fall back to the stock values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostTuning {
    /// Maximum boost pressure the controller will command (bar)
    pub max_boost: f64,

    /// Minimum boost pressure the controller will command (bar)
    pub min_boost: f64,

    /// Engine speed at which the speed term saturates (RPM)
    pub max_engine_speed: f64,

    /// Engine load at which the load term saturates (%)
    pub max_engine_load: f64,

    /// Sensitivity of throttle response
    pub throttle_sensitivity: f64,

    /// Efficiency of the turbocharger
    pub turbo_efficiency: f64,
}

impl Default for BoostTuning {
    fn default() -> Self {
        Self {
            max_boost: 1.5,
            min_boost: 0.5,
            max_engine_speed: 5000.0,
            max_engine_load: 80.0,
            throttle_sensitivity: 1.5,
            turbo_efficiency: 0.80,
        }
    }
}

impl BoostTuning {
    /// Load and validate a tuning from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TuningError> {
        let content = fs::read_to_string(path).map_err(|e| TuningError::IoError(e.to_string()))?;
        let tuning: BoostTuning =
            serde_json::from_str(&content).map_err(|e| TuningError::ParseError(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Save the tuning to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), TuningError> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| TuningError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(|e| TuningError::IoError(e.to_string()))
    }

    /// Check that the tuning describes a usable controller
    ///
    /// Every field must be finite, the boost band must not be inverted,
    /// and the saturation points and multipliers must be positive.
    pub fn validate(&self) -> Result<(), TuningError> {
        let fields = [
            ("max_boost", self.max_boost),
            ("min_boost", self.min_boost),
            ("max_engine_speed", self.max_engine_speed),
            ("max_engine_load", self.max_engine_load),
            ("throttle_sensitivity", self.throttle_sensitivity),
            ("turbo_efficiency", self.turbo_efficiency),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(TuningError::InvalidValue {
                    field: field.to_string(),
                    message: format!("must be finite, got {value}"),
                });
            }
        }

        if self.min_boost >= self.max_boost {
            return Err(TuningError::InvalidValue {
                field: "min_boost".to_string(),
                message: format!(
                    "must be below max_boost ({} >= {})",
                    self.min_boost, self.max_boost
                ),
            });
        }

        for (field, value) in [
            ("max_engine_speed", self.max_engine_speed),
            ("max_engine_load", self.max_engine_load),
            ("throttle_sensitivity", self.throttle_sensitivity),
            ("turbo_efficiency", self.turbo_efficiency),
        ] {
            if value <= 0.0 {
                return Err(TuningError::InvalidValue {
                    field: field.to_string(),
                    message: format!("must be positive, got {value}"),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_tuning_validates() {
        assert!(BoostTuning::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_boost_band_rejected() {
        let tuning = BoostTuning {
            min_boost: 2.0,
            max_boost: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_nan_field_rejected() {
        let tuning = BoostTuning {
            turbo_efficiency: f64::NAN,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_zero_saturation_point_rejected() {
        let tuning = BoostTuning {
            max_engine_speed: 0.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let tuning: BoostTuning = serde_json::from_str(r#"{"max_boost": 2.0}"#).unwrap();
        assert_eq!(tuning.max_boost, 2.0);
        assert_eq!(tuning.min_boost, 0.5);
        assert_eq!(tuning.turbo_efficiency, 0.80);
    }
}
