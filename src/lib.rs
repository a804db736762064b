//! # bs-surface: Black-Scholes Pricing and Price Surfaces
//!
//! `bs-surface` prices European call and put options with the closed-form
//! Black-Scholes model and sweeps the pricer over a spot/volatility grid to
//! produce the call and put price surfaces behind an interactive heatmap view.
//!
//! ## Core Features
//!
//! - **Pricer**: validated closed-form pricing, rounded to display precision
//! - **Surface Generator**: call/put grids over spot and volatility axes derived from strike
//! - **Configuration**: TOML-loadable grid presets
//! - **Export**: CSV output of either surface in long or heatmap layout
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_surface::{build_surfaces, price_pair, PricingParameters};
//!
//! let params = PricingParameters::default();
//! let values = price_pair(&params)?;
//! assert_eq!(values.call.value(), 10.45);
//! assert_eq!(values.put.value(), 5.57);
//!
//! let surfaces = build_surfaces(params.strike, params.time_to_maturity, params.risk_free_rate)?;
//! assert_eq!(surfaces.call.shape(), (20, 20));
//! # Ok::<(), bs_surface::PricingError>(())
//! ```
//!
//! Invalid inputs such as a zero volatility or maturity are rejected with
//! [`PricingError::InvalidParameter`] rather than producing NaN prices.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod models;
pub mod params;
pub mod surface;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{PricingError, Result};
pub use params::PricingParameters;

pub use models::bs::{norm_cdf, price, price_pair, theoretical_value};
pub use models::types::{OptionType, OptionValues, PriceResult};
pub use models::utils::PRICE_DECIMALS;

pub use surface::config::{DashboardConfig, SurfaceConfig, DEFAULT_GRID_POINTS, MAX_GRID_POINTS};
pub use surface::export::{write_surface_csv, write_surface_matrix_csv};
pub use surface::generator::{build_surfaces, build_surfaces_with_config};
pub use surface::types::{Axis, PriceSurface, Surfaces, SPOT_TICK_DECIMALS, VOL_TICK_DECIMALS};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured surface grids.
///
/// - [`dashboard()`]: the 20x20 grid used by the interactive view
/// - [`coarse()`]: 10x10 preview grid
/// - [`fine()`]: 50x50 grid for static charts
/// - [`wide()`]: 30x30 grid over wider spot and volatility ranges
pub mod default_configs {
    use crate::surface::config::SurfaceConfig;

    /// 20 spot points over 0.5-1.5x strike, 20 volatility points over 10%-50%.
    ///
    /// ```rust
    /// let config = bs_surface::default_configs::dashboard();
    /// assert_eq!(config.shape(), (20, 20));
    /// ```
    pub fn dashboard() -> SurfaceConfig {
        SurfaceConfig::dashboard()
    }

    pub fn coarse() -> SurfaceConfig {
        SurfaceConfig::coarse()
    }

    pub fn fine() -> SurfaceConfig {
        SurfaceConfig::fine()
    }

    /// Spot 0.25-2.0x strike and volatility 5%-100%, 30 points each.
    pub fn wide() -> SurfaceConfig {
        SurfaceConfig::wide()
    }
}

/// Price both legs and build both surfaces for one set of dashboard inputs.
///
/// This is the full recomputation the interactive view performs whenever an
/// input changes: the two scalar prices plus the two heatmap grids. Nothing is
/// cached between calls.
pub fn evaluate_dashboard(
    params: &PricingParameters,
    config: &SurfaceConfig,
) -> Result<(OptionValues, Surfaces)> {
    let values = price_pair(params)?;
    let surfaces = build_surfaces_with_config(
        params.strike,
        params.time_to_maturity,
        params.risk_free_rate,
        config,
    )?;
    Ok((values, surfaces))
}
