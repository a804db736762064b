use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PricingError, Result};
use crate::params::PricingParameters;

/// Number of samples per axis on the dashboard heatmaps.
pub const DEFAULT_GRID_POINTS: usize = 20;

/// Largest number of samples accepted on either axis.
pub const MAX_GRID_POINTS: usize = 1000;

/// Ranges and resolution of the spot/volatility grid.
///
/// The spot axis is expressed as multiples of the strike so that it follows
/// the strike the surface is built for; the volatility axis is absolute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Number of spot samples (grid columns)
    #[serde(default = "default_points")]
    pub spot_points: usize,

    /// Number of volatility samples (grid rows)
    #[serde(default = "default_points")]
    pub vol_points: usize,

    /// Lowest spot as a multiple of strike
    #[serde(default = "default_spot_min_ratio")]
    pub spot_min_ratio: f64,

    /// Highest spot as a multiple of strike
    #[serde(default = "default_spot_max_ratio")]
    pub spot_max_ratio: f64,

    /// Lowest volatility sample
    #[serde(default = "default_vol_min")]
    pub vol_min: f64,

    /// Highest volatility sample
    #[serde(default = "default_vol_max")]
    pub vol_max: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            spot_points: default_points(),
            vol_points: default_points(),
            spot_min_ratio: default_spot_min_ratio(),
            spot_max_ratio: default_spot_max_ratio(),
            vol_min: default_vol_min(),
            vol_max: default_vol_max(),
        }
    }
}

impl SurfaceConfig {
    /// The 20x20 grid over 0.5-1.5x strike and 10%-50% volatility.
    pub fn dashboard() -> Self {
        Self::default()
    }

    /// 10x10 grid over the dashboard ranges, for quick previews
    pub fn coarse() -> Self {
        Self {
            spot_points: 10,
            vol_points: 10,
            ..Self::default()
        }
    }

    /// 50x50 grid over the dashboard ranges
    pub fn fine() -> Self {
        Self {
            spot_points: 50,
            vol_points: 50,
            ..Self::default()
        }
    }

    /// 30x30 grid covering deep in/out of the money and high volatility regimes
    pub fn wide() -> Self {
        Self {
            spot_points: 30,
            vol_points: 30,
            spot_min_ratio: 0.25,
            spot_max_ratio: 2.0,
            vol_min: 0.05,
            vol_max: 1.0,
        }
    }

    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// Reject grids that would be empty, degenerate, or would feed the pricer
    /// a non-positive spot or volatility.
    pub fn validate(&self) -> Result<()> {
        if self.spot_points < 2 || self.vol_points < 2 {
            return Err(PricingError::invalid_config(format!(
                "need at least 2 points per axis, got spot_points={} vol_points={}",
                self.spot_points, self.vol_points
            )));
        }
        if self.spot_points > MAX_GRID_POINTS || self.vol_points > MAX_GRID_POINTS {
            return Err(PricingError::invalid_config(format!(
                "at most {MAX_GRID_POINTS} points per axis, got spot_points={} vol_points={}",
                self.spot_points, self.vol_points
            )));
        }
        check_range("spot ratio", self.spot_min_ratio, self.spot_max_ratio)?;
        check_range("volatility", self.vol_min, self.vol_max)?;
        Ok(())
    }

    /// Grid shape as `(rows, columns)` = `(vol_points, spot_points)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.vol_points, self.spot_points)
    }
}

fn check_range(label: &str, min: f64, max: f64) -> Result<()> {
    if !(min.is_finite() && max.is_finite()) || min <= 0.0 {
        return Err(PricingError::invalid_config(format!(
            "{label} range must be finite and strictly positive, got [{min}, {max}]"
        )));
    }
    if min >= max {
        return Err(PricingError::invalid_config(format!(
            "{label} range is empty or inverted: [{min}, {max}]"
        )));
    }
    Ok(())
}

/// A complete dashboard session: the scalar inputs plus the heatmap grid.
///
/// ```toml
/// [parameters]
/// spot = 105.0
/// volatility = 0.25
///
/// [surface]
/// spot_points = 30
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub parameters: PricingParameters,

    #[serde(default)]
    pub surface: SurfaceConfig,
}

impl DashboardConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.surface.validate()?;
        config.parameters.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }
}

fn default_points() -> usize {
    DEFAULT_GRID_POINTS
}

fn default_spot_min_ratio() -> f64 {
    0.5
}

fn default_spot_max_ratio() -> f64 {
    1.5
}

fn default_vol_min() -> f64 {
    0.10
}

fn default_vol_max() -> f64 {
    0.50
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for config in [
            SurfaceConfig::dashboard(),
            SurfaceConfig::coarse(),
            SurfaceConfig::fine(),
            SurfaceConfig::wide(),
        ] {
            assert!(config.validate().is_ok(), "{config:?}");
        }
        assert_eq!(SurfaceConfig::default().shape(), (20, 20));
    }

    #[test]
    fn test_toml_overrides_and_defaults() {
        let config = SurfaceConfig::from_toml_str("spot_points = 12\nvol_max = 0.8\n").unwrap();
        assert_eq!(config.spot_points, 12);
        assert_eq!(config.vol_points, DEFAULT_GRID_POINTS);
        assert_eq!(config.vol_max, 0.8);
        assert_eq!(config.spot_min_ratio, 0.5);
    }

    #[test]
    fn test_invalid_configs_are_rejected() {
        let bad = [
            SurfaceConfig {
                spot_points: 1,
                ..SurfaceConfig::default()
            },
            SurfaceConfig {
                vol_min: 0.0,
                ..SurfaceConfig::default()
            },
            SurfaceConfig {
                vol_min: 0.6,
                ..SurfaceConfig::default()
            },
            SurfaceConfig {
                spot_max_ratio: f64::NAN,
                ..SurfaceConfig::default()
            },
        ];
        for config in bad {
            assert!(
                matches!(config.validate(), Err(PricingError::InvalidConfig(_))),
                "{config:?}"
            );
        }
    }

    #[test]
    fn test_oversized_grid_is_rejected() {
        let err = SurfaceConfig::from_toml_str("spot_points = 1000000000\n").unwrap_err();
        assert!(matches!(err, PricingError::InvalidConfig(_)), "{err}");

        let at_limit = SurfaceConfig {
            spot_points: MAX_GRID_POINTS,
            vol_points: MAX_GRID_POINTS,
            ..SurfaceConfig::default()
        };
        assert!(at_limit.validate().is_ok());

        let over = SurfaceConfig {
            vol_points: MAX_GRID_POINTS + 1,
            ..SurfaceConfig::default()
        };
        assert!(matches!(over.validate(), Err(PricingError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = SurfaceConfig::from_toml_str("spot_points = \"many\"").unwrap_err();
        assert!(matches!(err, PricingError::Toml(_)));
    }

    #[test]
    fn test_dashboard_config_sections() {
        let config = DashboardConfig::from_toml_str(
            "[parameters]\nspot = 105.0\n\n[surface]\nvol_points = 8\n",
        )
        .unwrap();
        assert_eq!(config.parameters.spot, 105.0);
        assert_eq!(config.parameters.strike, 100.0);
        assert_eq!(config.surface.vol_points, 8);
        assert_eq!(config.surface.spot_points, DEFAULT_GRID_POINTS);

        let err = DashboardConfig::from_toml_str("[parameters]\nvolatility = 0.0\n").unwrap_err();
        assert!(err.is_invalid_parameter());
    }
}
