//! Input parameters for a single Black-Scholes valuation.
//!
//! A [`PricingParameters`] value is immutable input: every pricing call takes
//! one by reference and returns fresh results, so nothing is retained between
//! calls. Validation happens in [`PricingParameters::validate`], which the
//! pricer runs before evaluating the closed-form formula.

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};

/// The five scalar inputs of the Black-Scholes model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingParameters {
    /// Current price of the underlying asset.
    pub spot: f64,
    /// Strike price of the option.
    pub strike: f64,
    /// Remaining time to expiration, in years.
    pub time_to_maturity: f64,
    /// Annualised volatility of log-returns (0.20 = 20%).
    pub volatility: f64,
    /// Continuously compounded risk-free rate (0.05 = 5%).
    pub risk_free_rate: f64,
}

impl Default for PricingParameters {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            time_to_maturity: 1.0,
            volatility: 0.20,
            risk_free_rate: 0.05,
        }
    }
}

impl PricingParameters {
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_maturity: f64,
        volatility: f64,
        risk_free_rate: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_maturity,
            volatility,
            risk_free_rate,
        }
    }

    /// Same parameters with a different spot price.
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Same parameters with a different volatility.
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Check that the parameters lie inside the domain of the pricing formula.
    ///
    /// Spot, strike, maturity and volatility must be finite and strictly
    /// positive; the rate may be any finite number.
    pub fn validate(&self) -> Result<()> {
        require_positive("spot", self.spot)?;
        require_positive("strike", self.strike)?;
        require_positive("time_to_maturity", self.time_to_maturity)?;
        require_positive("volatility", self.volatility)?;
        if !self.risk_free_rate.is_finite() {
            return Err(reject("risk_free_rate", self.risk_free_rate, "must be finite"));
        }
        Ok(())
    }
}

pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(reject(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(reject(name, value, "must be strictly positive"));
    }
    Ok(())
}

fn reject(name: &'static str, value: f64, reason: &'static str) -> PricingError {
    tracing::warn!(param = name, value, reason, "rejected pricing parameter");
    PricingError::invalid_parameter(name, value, reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_dashboard_inputs() {
        let p = PricingParameters::default();
        assert_eq!(p, PricingParameters::new(100.0, 100.0, 1.0, 0.20, 0.05));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_domain_inputs() {
        let base = PricingParameters::default();

        let cases = [
            ("spot", PricingParameters { spot: 0.0, ..base }),
            ("spot", PricingParameters { spot: -5.0, ..base }),
            ("strike", PricingParameters { strike: 0.0, ..base }),
            (
                "time_to_maturity",
                PricingParameters {
                    time_to_maturity: 0.0,
                    ..base
                },
            ),
            ("volatility", base.with_volatility(0.0)),
            ("volatility", base.with_volatility(f64::NAN)),
            (
                "risk_free_rate",
                PricingParameters {
                    risk_free_rate: f64::INFINITY,
                    ..base
                },
            ),
        ];

        for (expected, params) in cases {
            match params.validate() {
                Err(PricingError::InvalidParameter { name, .. }) => assert_eq!(name, expected),
                other => panic!("expected InvalidParameter for {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_negative_rate_is_allowed() {
        let p = PricingParameters {
            risk_free_rate: -0.01,
            ..PricingParameters::default()
        };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_toml_uses_defaults() {
        let p: PricingParameters = toml::from_str("spot = 120.0\nvolatility = 0.35\n").unwrap();
        assert_eq!(p.spot, 120.0);
        assert_eq!(p.volatility, 0.35);
        assert_eq!(p.strike, 100.0);
        assert_eq!(p.risk_free_rate, 0.05);
    }
}
