// Closed-form Black-Scholes valuation of European options on a non-dividend
// paying underlying. Implied volatility and Greeks are out of scope.

use crate::error::{PricingError, Result};
use crate::models::types::{OptionType, OptionValues, PriceResult};
use crate::params::PricingParameters;

/// Standard normal cumulative distribution function.
///
/// Evaluated through the complementary error function so that the lower tail
/// keeps full relative precision instead of cancelling in `1 + erf(x)`.
pub fn norm_cdf(x: f64) -> f64 {
    // Φ(x) = 0.5 * erfc(-x / sqrt(2))
    0.5 * libm::erfc(-x / std::f64::consts::SQRT_2)
}

/// The `d1` and `d2` terms of the Black-Scholes formula.
#[allow(non_snake_case)]
pub fn d1_d2(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> (f64, f64) {
    let vol_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// `e^(-rT)`, or [`PricingError::NumericOverflow`] if it is not representable.
#[allow(non_snake_case)]
pub fn discount_factor(r: f64, T: f64) -> Result<f64> {
    let df = (-r * T).exp();
    if !df.is_finite() {
        tracing::warn!(r, T, "discount factor overflowed");
        return Err(PricingError::overflow(format!(
            "discount factor e^(-rT) is not finite for r={r}, T={T}"
        )));
    }
    Ok(df)
}

/// Unrounded Black-Scholes value of a European option.
///
/// Parameters are validated first, so a zero volatility or maturity is
/// reported as [`PricingError::InvalidParameter`] instead of producing NaN.
pub fn theoretical_value(params: &PricingParameters, option_type: OptionType) -> Result<f64> {
    params.validate()?;
    value_unchecked(params, option_type)
}

/// Rounded theoretical value, as shown to a user.
pub fn price(params: &PricingParameters, option_type: OptionType) -> Result<PriceResult> {
    rounded(theoretical_value(params, option_type)?, option_type)
}

/// Rounded call and put values for the same parameters.
pub fn price_pair(params: &PricingParameters) -> Result<OptionValues> {
    params.validate()?;
    Ok(OptionValues {
        call: rounded(value_unchecked(params, OptionType::Call)?, OptionType::Call)?,
        put: rounded(value_unchecked(params, OptionType::Put)?, OptionType::Put)?,
    })
}

fn rounded(value: f64, option_type: OptionType) -> Result<PriceResult> {
    let price = PriceResult::from_raw(value);
    if !price.value().is_finite() {
        tracing::warn!(%option_type, value, "rounded option value is not finite");
        return Err(PricingError::overflow(format!(
            "rounded {option_type} value is not finite (raw {value})"
        )));
    }
    Ok(price)
}

fn value_unchecked(params: &PricingParameters, option_type: OptionType) -> Result<f64> {
    let PricingParameters {
        spot,
        strike,
        time_to_maturity: t,
        volatility: sigma,
        risk_free_rate: r,
    } = *params;

    let df = discount_factor(r, t)?;
    let (d1, d2) = d1_d2(spot, strike, r, t, sigma);

    let value = match option_type {
        OptionType::Call => spot * norm_cdf(d1) - strike * df * norm_cdf(d2),
        OptionType::Put => strike * df * norm_cdf(-d2) - spot * norm_cdf(-d1),
    };

    if !value.is_finite() {
        tracing::warn!(%option_type, ?params, "non-finite option value");
        return Err(PricingError::overflow(format!(
            "{option_type} value is not finite for {params:?}"
        )));
    }

    tracing::trace!(%option_type, spot, strike, sigma, value, "priced option");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_norm_cdf_reference_points() {
        assert_abs_diff_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(norm_cdf(1.96), 0.975_002_104_851_78, epsilon = 1e-12);
        assert_abs_diff_eq!(norm_cdf(-1.0), 0.158_655_253_931_457, epsilon = 1e-12);
        assert_eq!(norm_cdf(40.0), 1.0);
        assert!(norm_cdf(-40.0) >= 0.0);
    }

    #[test]
    fn test_norm_cdf_lower_tail_keeps_precision() {
        // 1 + erf(x) would round to zero here.
        let p = norm_cdf(-10.0);
        assert!(p > 7.6e-24 && p < 7.7e-24, "got {p}");
    }

    #[test]
    fn test_textbook_at_the_money_values() {
        let params = PricingParameters::default();
        let call = theoretical_value(&params, OptionType::Call).unwrap();
        let put = theoretical_value(&params, OptionType::Put).unwrap();
        assert_abs_diff_eq!(call, 10.450_583_572_185_565, epsilon = 1e-9);
        assert_abs_diff_eq!(put, 5.573_526_022_256_971, epsilon = 1e-9);
    }

    #[test]
    fn test_huge_finite_value_stays_finite_after_rounding() {
        let params = PricingParameters::new(1e307, 1.0, 1.0, 0.2, 0.05);
        let raw = theoretical_value(&params, OptionType::Call).unwrap();
        let call = price(&params, OptionType::Call).unwrap();
        assert!(call.value().is_finite(), "rounded to {call:?}");
        assert_eq!(call.value(), raw);

        let pair = price_pair(&params).unwrap();
        assert!(pair.call.value().is_finite());
        assert_eq!(pair.put.value(), 0.0);
    }

    #[test]
    fn test_discount_factor_overflow_is_reported() {
        let err = discount_factor(-1.0e3, 1.0).unwrap_err();
        assert!(matches!(err, PricingError::NumericOverflow(_)));

        let params = PricingParameters {
            risk_free_rate: -800.0,
            ..PricingParameters::default()
        };
        assert!(matches!(
            price(&params, OptionType::Put),
            Err(PricingError::NumericOverflow(_))
        ));
    }

    #[test]
    fn test_large_positive_rate_discounts_to_zero() {
        let params = PricingParameters {
            risk_free_rate: 800.0,
            ..PricingParameters::default()
        };
        let values = price_pair(&params).unwrap();
        assert_eq!(values.call.value(), 100.0);
        assert_eq!(values.put.value(), 0.0);
    }

    #[test]
    fn test_price_pair_matches_individual_prices() {
        let params = PricingParameters::new(87.5, 100.0, 0.75, 0.42, 0.03);
        let pair = price_pair(&params).unwrap();
        assert_eq!(pair.call, price(&params, OptionType::Call).unwrap());
        assert_eq!(pair.put, price(&params, OptionType::Put).unwrap());
        assert_eq!(pair.get(OptionType::Put), pair.put);
    }
}
