//! Engine settings: default fee profile, freshness windows and logging.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::{FeeProfile, FreshnessWindows};

const MAX_BASIS_POINTS: u32 = 10_000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub fees: FeeProfile,
    #[serde(default)]
    pub freshness: FreshnessWindows,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fees.referral_fee_bp > MAX_BASIS_POINTS {
            return Err(ConfigError::InvalidValue {
                field: "referral_fee_bp",
                reason: format!("{} exceeds {MAX_BASIS_POINTS}", self.fees.referral_fee_bp),
            });
        }
        if self.fees.fulfillment_fee_cents < 0 {
            return Err(ConfigError::InvalidValue {
                field: "fulfillment_fee_cents",
                reason: "must not be negative".to_string(),
            });
        }
        if self.fees.inbound_shipping_cents < 0 {
            return Err(ConfigError::InvalidValue {
                field: "inbound_shipping_cents",
                reason: "must not be negative".to_string(),
            });
        }
        if self.freshness.high_hours == 0 {
            return Err(ConfigError::InvalidValue {
                field: "high_hours",
                reason: "must be at least one hour".to_string(),
            });
        }
        if self.freshness.medium_hours < self.freshness.high_hours {
            return Err(ConfigError::InvalidValue {
                field: "medium_hours",
                reason: format!(
                    "{} is shorter than high_hours ({})",
                    self.freshness.medium_hours, self.freshness.high_hours
                ),
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Installs a global `tracing` subscriber. `RUST_LOG` overrides `level`.
    /// Later calls leave the first subscriber in place.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let result = match self.format.as_str() {
            "json" => fmt().json().with_env_filter(filter).try_init(),
            _ => fmt().with_env_filter(filter).try_init(),
        };
        if let Err(err) = result {
            tracing::debug!("tracing subscriber already installed: {err}");
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
