pub mod bs;
pub mod types;

/// Utility functions shared by the pricer and the surface generator
pub mod utils {
    /// Number of decimal places prices are rounded to before display.
    pub const PRICE_DECIMALS: i32 = 2;

    /// Round a raw model value to [`PRICE_DECIMALS`] places, clamping
    /// floating-point noise below zero to `0.0`.
    pub fn round_price(value: f64) -> f64 {
        if value > 0.0 {
            round_to(value, PRICE_DECIMALS)
        } else {
            0.0
        }
    }

    /// Magnitude above which an `f64` carries no fractional digits.
    const NO_FRACTION_ABOVE: f64 = 1e15;

    /// Round half away from zero to `decimals` places.
    ///
    /// Values too large to have fractional digits are returned unchanged, so
    /// scaling never overflows a finite input.
    pub fn round_to(value: f64, decimals: i32) -> f64 {
        if !value.is_finite() || value.abs() >= NO_FRACTION_ABOVE {
            return value;
        }
        let scale = 10f64.powi(decimals);
        (value * scale).round() / scale
    }

    /// Evenly spaced points over `[start, end]`, endpoints included exactly.
    pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (end - start) / (count - 1) as f64;
                (0..count)
                    .map(|i| {
                        if i == count - 1 {
                            end
                        } else {
                            start + step * i as f64
                        }
                    })
                    .collect()
            }
        }
    }

}
