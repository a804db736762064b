//! Error types for pricing and surface generation.

use thiserror::Error;

/// Errors produced while pricing options or building price surfaces.
#[derive(Error, Debug)]
pub enum PricingError {
    /// A pricing input outside the domain of the Black-Scholes formula.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The discount factor or the resulting value is not finite.
    #[error("numeric overflow: {0}")]
    NumericOverflow(String),

    /// A surface configuration that cannot produce a valid grid.
    #[error("invalid surface configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PricingError>;

impl PricingError {
    pub fn invalid_parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::NumericOverflow(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Whether this error was caused by a rejected pricing input.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}
