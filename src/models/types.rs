use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;
use crate::models::utils::round_price;

/// European option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Both option types, call first.
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(PricingError::invalid_config(format!(
                "unknown option type: {other}"
            ))),
        }
    }
}

/// Theoretical option value rounded to display precision.
///
/// Always non-negative and rounded to [`PRICE_DECIMALS`](crate::models::utils::PRICE_DECIMALS)
/// decimal places.
///
/// Serialize-only: the only way to build one is [`PriceResult::from_raw`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct PriceResult(f64);

impl PriceResult {
    /// Round a raw model value for display.
    pub fn from_raw(value: f64) -> Self {
        Self(round_price(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<PriceResult> for f64 {
    fn from(p: PriceResult) -> Self {
        p.0
    }
}

impl fmt::Display for PriceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Call and put values for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptionValues {
    pub call: PriceResult,
    pub put: PriceResult,
}

impl OptionValues {
    pub fn get(&self, option_type: OptionType) -> PriceResult {
        match option_type {
            OptionType::Call => self.call,
            OptionType::Put => self.put,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type_parsing() {
        assert_eq!("Call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" p ".parse::<OptionType>().unwrap(), OptionType::Put);
        assert!(matches!(
            "straddle".parse::<OptionType>(),
            Err(PricingError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_price_result_is_rounded_and_non_negative() {
        assert_eq!(PriceResult::from_raw(10.450_583).value(), 10.45);
        assert_eq!(PriceResult::from_raw(-3.2).value(), 0.0);
        assert_eq!(PriceResult::from_raw(5.573_526).to_string(), "5.57");
    }

    #[test]
    fn test_option_values_serialize_as_plain_numbers() {
        let values = OptionValues {
            call: PriceResult::from_raw(10.450_583),
            put: PriceResult::from_raw(5.573_526),
        };
        let text = toml::to_string(&values).unwrap();
        assert!(text.contains("call = 10.45"), "{text}");
        assert!(text.contains("put = 5.57"), "{text}");
    }
}
