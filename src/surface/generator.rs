use crate::error::Result;
use crate::models::bs::price_pair;
use crate::models::types::{OptionType, OptionValues, PriceResult};
use crate::params::{require_positive, PricingParameters};
use crate::surface::config::SurfaceConfig;
use crate::surface::types::{Axis, PriceSurface, Surfaces};

/// Build call and put surfaces on the default 20x20 dashboard grid.
pub fn build_surfaces(strike: f64, time_to_maturity: f64, risk_free_rate: f64) -> Result<Surfaces> {
    build_surfaces_with_config(
        strike,
        time_to_maturity,
        risk_free_rate,
        &SurfaceConfig::default(),
    )
}

/// Build call and put surfaces over the axes described by `config`.
///
/// Cell `[v][s]` of each surface holds the rounded price at
/// `spot = spot_axis[s]`, `volatility = vol_axis[v]`.
pub fn build_surfaces_with_config(
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    config: &SurfaceConfig,
) -> Result<Surfaces> {
    config.validate()?;
    require_positive("strike", strike)?;

    let spot_axis = Axis::spot(strike, config);
    let vol_axis = Axis::volatility(config);

    // Representative point of the grid; rejects a bad maturity or rate before
    // any cell is evaluated.
    let base = PricingParameters::new(
        strike,
        strike,
        time_to_maturity,
        config.vol_min,
        risk_free_rate,
    );
    base.validate()?;

    tracing::debug!(
        strike,
        time_to_maturity,
        risk_free_rate,
        rows = vol_axis.len(),
        cols = spot_axis.len(),
        "building price surfaces"
    );

    let grid = evaluate_rows(&base, &spot_axis, &vol_axis)?;

    let call = PriceSurface::new(OptionType::Call, select(&grid, OptionType::Call));
    let put = PriceSurface::new(OptionType::Put, select(&grid, OptionType::Put));

    tracing::debug!(
        call_min = ?call.min(),
        call_max = ?call.max(),
        put_min = ?put.min(),
        put_max = ?put.max(),
        "price surfaces built"
    );

    Ok(Surfaces {
        strike,
        time_to_maturity,
        risk_free_rate,
        spot_axis,
        vol_axis,
        call,
        put,
    })
}

fn evaluate_row(
    base: &PricingParameters,
    spot_axis: &Axis,
    volatility: f64,
) -> Result<Vec<OptionValues>> {
    spot_axis
        .iter()
        .map(|spot| price_pair(&base.with_spot(spot).with_volatility(volatility)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_rows(
    base: &PricingParameters,
    spot_axis: &Axis,
    vol_axis: &Axis,
) -> Result<Vec<Vec<OptionValues>>> {
    vol_axis
        .iter()
        .map(|vol| evaluate_row(base, spot_axis, vol))
        .collect()
}

#[cfg(feature = "parallel")]
fn evaluate_rows(
    base: &PricingParameters,
    spot_axis: &Axis,
    vol_axis: &Axis,
) -> Result<Vec<Vec<OptionValues>>> {
    use rayon::prelude::*;

    vol_axis
        .values()
        .par_iter()
        .map(|&vol| evaluate_row(base, spot_axis, vol))
        .collect()
}

fn select(grid: &[Vec<OptionValues>], option_type: OptionType) -> Vec<Vec<PriceResult>> {
    grid.iter()
        .map(|row| row.iter().map(|values| values.get(option_type)).collect())
        .collect()
}
