use serde::Serialize;
use std::ops::Index;

use crate::models::types::{OptionType, PriceResult};
use crate::models::utils::linspace;
use crate::surface::config::SurfaceConfig;

/// Decimal places used for spot-axis tick labels.
pub const SPOT_TICK_DECIMALS: usize = 1;

/// Decimal places used for volatility-axis tick labels.
pub const VOL_TICK_DECIMALS: usize = 2;

/// Evenly spaced coordinate axis of a price surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Axis {
    values: Vec<f64>,
}

impl Axis {
    /// `count` evenly spaced points from `start` to `end` inclusive.
    pub fn linear(start: f64, end: f64, count: usize) -> Self {
        Self {
            values: linspace(start, end, count),
        }
    }

    /// Spot axis for `strike`: `[spot_min_ratio * strike, spot_max_ratio * strike]`.
    pub fn spot(strike: f64, config: &SurfaceConfig) -> Self {
        Self::linear(
            config.spot_min_ratio * strike,
            config.spot_max_ratio * strike,
            config.spot_points,
        )
    }

    /// Volatility axis: `[vol_min, vol_max]`, independent of the option.
    pub fn volatility(config: &SurfaceConfig) -> Self {
        Self::linear(config.vol_min, config.vol_max, config.vol_points)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Axis values formatted with a fixed number of decimals, for heatmap ticks.
    pub fn tick_labels(&self, decimals: usize) -> Vec<String> {
        self.values
            .iter()
            .map(|v| format!("{v:.decimals$}"))
            .collect()
    }
}

impl Index<usize> for Axis {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.values[i]
    }
}

/// Grid of rounded option prices, indexed `[vol_index][spot_index]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSurface {
    option_type: OptionType,
    rows: Vec<Vec<PriceResult>>,
}

impl PriceSurface {
    pub(crate) fn new(option_type: OptionType, rows: Vec<Vec<PriceResult>>) -> Self {
        Self { option_type, rows }
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// `(rows, columns)`, i.e. `(volatility samples, spot samples)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.rows.first().map_or(0, Vec::len))
    }

    pub fn get(&self, vol_index: usize, spot_index: usize) -> Option<PriceResult> {
        self.rows.get(vol_index)?.get(spot_index).copied()
    }

    pub fn rows(&self) -> &[Vec<PriceResult>] {
        &self.rows
    }

    /// Every cell as `(vol_index, spot_index, price)`, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, PriceResult)> + '_ {
        self.rows.iter().enumerate().flat_map(|(v, row)| {
            row.iter().enumerate().map(move |(s, &price)| (v, s, price))
        })
    }

    /// Plain `f64` copy of the grid for plotting libraries.
    pub fn to_matrix(&self) -> Vec<Vec<f64>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(PriceResult::value).collect())
            .collect()
    }

    pub fn min(&self) -> Option<f64> {
        self.cells().map(|(_, _, p)| p.value()).reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.cells().map(|(_, _, p)| p.value()).reduce(f64::max)
    }
}

impl Index<usize> for PriceSurface {
    type Output = [PriceResult];

    fn index(&self, vol_index: usize) -> &[PriceResult] {
        &self.rows[vol_index]
    }
}

/// Call and put surfaces evaluated over the same axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Surfaces {
    pub strike: f64,
    pub time_to_maturity: f64,
    pub risk_free_rate: f64,
    pub spot_axis: Axis,
    pub vol_axis: Axis,
    pub call: PriceSurface,
    pub put: PriceSurface,
}

impl Surfaces {
    pub fn get(&self, option_type: OptionType) -> &PriceSurface {
        match option_type {
            OptionType::Call => &self.call,
            OptionType::Put => &self.put,
        }
    }

    pub fn spot_ticks(&self) -> Vec<String> {
        self.spot_axis.tick_labels(SPOT_TICK_DECIMALS)
    }

    pub fn vol_ticks(&self) -> Vec<String> {
        self.vol_axis.tick_labels(VOL_TICK_DECIMALS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_labels() {
        let axis = Axis::linear(50.0, 150.0, 3);
        assert_eq!(axis.tick_labels(1), vec!["50.0", "100.0", "150.0"]);

        let vols = Axis::volatility(&SurfaceConfig::default());
        let ticks = vols.tick_labels(VOL_TICK_DECIMALS);
        assert_eq!(ticks.first().map(String::as_str), Some("0.10"));
        assert_eq!(ticks.last().map(String::as_str), Some("0.50"));
    }

    #[test]
    fn test_price_surface_accessors() {
        let p = PriceResult::from_raw;
        let surface = PriceSurface::new(
            OptionType::Call,
            vec![vec![p(1.0), p(2.0), p(3.0)], vec![p(4.0), p(5.0), p(6.0)]],
        );
        assert_eq!(surface.shape(), (2, 3));
        assert_eq!(surface[1][2].value(), 6.0);
        assert_eq!(surface.get(0, 1), Some(p(2.0)));
        assert_eq!(surface.get(2, 0), None);
        assert_eq!(surface.min(), Some(1.0));
        assert_eq!(surface.max(), Some(6.0));
        assert_eq!(surface.cells().nth(4), Some((1, 1, p(5.0))));
        assert_eq!(surface.to_matrix()[0], vec![1.0, 2.0, 3.0]);
    }
}
