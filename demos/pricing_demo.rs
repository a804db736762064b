// demos/pricing_demo.rs

//! Demonstration of Black-Scholes pricing and price surfaces
//!
//! This example shows how to:
//! 1. Price a call and a put for one set of inputs
//! 2. Handle invalid inputs without producing NaN prices
//! 3. Build the spot/volatility price surfaces
//! 4. Inspect a few cells of each surface

use anyhow::Result;
use bs_surface::{build_surfaces, price_pair, PricingParameters, Surfaces};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let params = PricingParameters::default();
    println!("Current Asset Price:      {:.4}", params.spot);
    println!("Strike Price:             {:.4}", params.strike);
    println!("Time to Maturity (Years): {:.4}", params.time_to_maturity);
    println!("Volatility (σ):           {:.4}", params.volatility);
    println!("Risk-Free Interest Rate:  {:.4}", params.risk_free_rate);

    println!("\nStep 1: Pricing...");
    let values = price_pair(&params)?;
    println!("  CALL Value: ${}", values.call);
    println!("  PUT Value:  ${}", values.put);

    println!("\nStep 2: Rejecting an invalid input...");
    match price_pair(&params.with_volatility(0.0)) {
        Ok(v) => println!("  unexpected prices: {v:?}"),
        Err(e) => println!("  {e}"),
    }

    println!("\nStep 3: Building price surfaces...");
    let surfaces = build_surfaces(params.strike, params.time_to_maturity, params.risk_free_rate)?;
    let (rows, cols) = surfaces.call.shape();
    println!("  Grid: {rows} volatilities x {cols} spot prices");
    println!(
        "  Spot range: {} .. {}",
        surfaces.spot_ticks()[0],
        surfaces.spot_ticks()[cols - 1]
    );
    println!(
        "  Volatility range: {} .. {}",
        surfaces.vol_ticks()[0],
        surfaces.vol_ticks()[rows - 1]
    );

    println!("\nStep 4: Surface preview (every 4th point)");
    print_preview(&surfaces);

    Ok(())
}

fn print_preview(surfaces: &Surfaces) {
    let spot_ticks = surfaces.spot_ticks();
    let vol_ticks = surfaces.vol_ticks();

    for surface in [&surfaces.call, &surfaces.put] {
        println!("\n  {} prices", surface.option_type());
        print!("  {:>6}", "σ \\ S");
        for s in (0..spot_ticks.len()).step_by(4) {
            print!(" {:>8}", spot_ticks[s]);
        }
        println!();
        println!("  {}", "-".repeat(6 + 9 * spot_ticks.len().div_ceil(4)));
        for v in (0..vol_ticks.len()).step_by(4) {
            print!("  {:>6}", vol_ticks[v]);
            for s in (0..spot_ticks.len()).step_by(4) {
                print!(" {:>8}", surface[v][s].to_string());
            }
            println!();
        }
    }
}
