//! Reconstruction configuration
//!
//! Passed explicitly into every run; there is no global state. The struct
//! deserializes from JSON so callers can keep it next to their datasets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest scale rust_decimal can represent.
const MAX_DECIMAL_PLACES: u32 = 28;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("anomaly threshold must be positive, got {0}")]
    NonPositiveThreshold(Decimal),

    #[error("vwap decimal places must be at most {max}, got {got}")]
    TooManyDecimalPlaces { got: u32, max: u32 },

    #[error("invalid config document: {0}")]
    Parse(String),
}

/// Configuration for one reconstruction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconstructionConfig {
    /// Price jump between consecutive trades above which the later trade
    /// is suspected of a maker/taker swap.
    pub anomaly_threshold: Decimal,
    /// Run the anomaly-correction pass.
    pub correct_anomalies: bool,
    /// Rounding scale of impact VWAPs.
    pub vwap_decimal_places: u32,
    /// Reject pairs whose two sides report different fill volumes.
    pub validate_volumes: bool,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            anomaly_threshold: Decimal::from(10),
            correct_anomalies: true,
            vwap_decimal_places: 2,
            validate_volumes: true,
        }
    }
}

impl ReconstructionConfig {
    pub fn with_anomaly_threshold(mut self, threshold: Decimal) -> Self {
        self.anomaly_threshold = threshold;
        self
    }

    /// Skip the anomaly-correction pass.
    pub fn without_correction(mut self) -> Self {
        self.correct_anomalies = false;
        self
    }

    pub fn with_vwap_decimal_places(mut self, dp: u32) -> Self {
        self.vwap_decimal_places = dp;
        self
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.anomaly_threshold <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveThreshold(self.anomaly_threshold));
        }
        if self.vwap_decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::TooManyDecimalPlaces {
                got: self.vwap_decimal_places,
                max: MAX_DECIMAL_PLACES,
            });
        }
        Ok(())
    }
}
