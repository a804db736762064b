// Example: plot_heatmap.rs
// Prices the dashboard inputs and renders the call and put price surfaces as
// side-by-side heatmaps over spot price and volatility.
//
// Usage:
//     cargo run --example plot_heatmap -- [dashboard.toml]
//
// The optional TOML file may contain a [parameters] table (spot, strike,
// time_to_maturity, volatility, risk_free_rate) and a [surface] table (grid
// size and ranges). The chart is written to price_heatmaps.svg and the raw
// grids to call_surface.csv / put_surface.csv in the working directory.

use std::env;
use std::fs::File;

use anyhow::{Context, Result};
use bs_surface::{
    evaluate_dashboard, write_surface_matrix_csv, DashboardConfig, OptionType, PriceSurface,
    Surfaces,
};
use plotters::prelude::*;
use tracing_subscriber::EnvFilter;

// YlOrRd colour ramp, low to high.
const RAMP: [(u8, u8, u8); 5] = [
    (255, 255, 204),
    (254, 217, 118),
    (253, 141, 60),
    (227, 26, 28),
    (128, 0, 38),
];

fn ramp_color(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0) * (RAMP.len() - 1) as f64;
    let i = (t.floor() as usize).min(RAMP.len() - 2);
    let f = t - i as f64;
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * f).round() as u8;
    let (lo, hi) = (RAMP[i], RAMP[i + 1]);
    RGBColor(lerp(lo.0, hi.0), lerp(lo.1, hi.1), lerp(lo.2, hi.2))
}

fn draw_heatmap<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    surfaces: &Surfaces,
    surface: &PriceSurface,
) -> Result<()> {
    let (rows, cols) = surface.shape();
    let lo = surface.min().unwrap_or(0.0);
    let hi = surface.max().unwrap_or(1.0);
    let span = if hi > lo { hi - lo } else { 1.0 };

    let spot_ticks = surfaces.spot_ticks();
    let vol_ticks = surfaces.vol_ticks();
    let label_at = |ticks: &[String], x: f64| {
        let i = x.floor();
        if i >= 0.0 && (i as usize) < ticks.len() {
            ticks[i as usize].clone()
        } else {
            String::new()
        }
    };
    let x_fmt = |x: &f64| label_at(spot_ticks.as_slice(), *x);
    let y_fmt = |y: &f64| label_at(vol_ticks.as_slice(), *y);

    let title = match surface.option_type() {
        OptionType::Call => "Call Option Prices",
        OptionType::Put => "Put Option Prices",
    };

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .caption(title, ("sans-serif", 26))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..cols as f64, 0f64..rows as f64)
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Spot Price")
        .y_desc("Volatility")
        .x_labels(cols.min(10))
        .y_labels(rows.min(10))
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .draw()
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;

    chart
        .draw_series(surface.cells().map(|(v, s, price)| {
            let color = ramp_color((price.value() - lo) / span);
            Rectangle::new(
                [(s as f64, v as f64), (s as f64 + 1.0, v as f64 + 1.0)],
                color.filled(),
            )
        }))
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match env::args().nth(1) {
        Some(path) => DashboardConfig::from_file(&path)
            .with_context(|| format!("loading dashboard config from {path}"))?,
        None => DashboardConfig::default(),
    };
    let params = config.parameters;

    let (values, surfaces) = evaluate_dashboard(&params, &config.surface)?;

    println!(
        "S={:.4} K={:.4} T={:.4} sigma={:.4} r={:.4}",
        params.spot, params.strike, params.time_to_maturity, params.volatility, params.risk_free_rate
    );
    println!("CALL Value: ${}", values.call);
    println!("PUT Value:  ${}", values.put);

    let root = SVGBackend::new("price_heatmaps.svg", (1400, 640)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let (left, right) = root.split_horizontally(700);
    draw_heatmap(&left, &surfaces, &surfaces.call)?;
    draw_heatmap(&right, &surfaces, &surfaces.put)?;
    root.present().map_err(|e| anyhow::anyhow!("{e:?}"))?;
    println!("Chart saved to price_heatmaps.svg");

    for (option_type, path) in [
        (OptionType::Call, "call_surface.csv"),
        (OptionType::Put, "put_surface.csv"),
    ] {
        let file = File::create(path).with_context(|| format!("creating {path}"))?;
        write_surface_matrix_csv(&surfaces, option_type, file)?;
        println!("Grid saved to {path}");
    }

    Ok(())
}
