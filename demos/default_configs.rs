use bs_surface::{build_surfaces_with_config, default_configs, SurfaceConfig};

fn describe(name: &str, config: &SurfaceConfig, use_case: &str) {
    println!("{name}:");
    println!(
        "   Grid: {} volatilities x {} spot prices",
        config.vol_points, config.spot_points
    );
    println!(
        "   Spot range: {:.2}x .. {:.2}x strike",
        config.spot_min_ratio, config.spot_max_ratio
    );
    println!(
        "   Volatility range: {:.2} .. {:.2}",
        config.vol_min, config.vol_max
    );
    println!("   Use case: {use_case}\n");
}

fn main() {
    println!("bs-surface Default Configuration Examples\n");

    describe(
        "1. Dashboard",
        &default_configs::dashboard(),
        "Interactive heatmaps",
    );
    describe("2. Coarse", &default_configs::coarse(), "Quick previews");
    describe("3. Fine", &default_configs::fine(), "Static, high resolution charts");
    describe(
        "4. Wide",
        &default_configs::wide(),
        "Deep in/out of the money and high volatility regimes",
    );

    let toml = "spot_points = 12\nvol_points = 6\nvol_max = 0.8\n";
    println!("5. Loaded from TOML:\n{toml}");
    match SurfaceConfig::from_toml_str(toml) {
        Ok(config) => {
            describe("   Custom", &config, "Project-specific grid");
            match build_surfaces_with_config(100.0, 1.0, 0.05, &config) {
                Ok(surfaces) => println!(
                    "   Built {:?} call grid, max price {:.2}",
                    surfaces.call.shape(),
                    surfaces.call.max().unwrap_or_default()
                ),
                Err(e) => eprintln!("   Surface build failed: {e}"),
            }
        }
        Err(e) => eprintln!("   Invalid config: {e}"),
    }
}
