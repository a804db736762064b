//! CSV export of price surfaces for consumers outside the interactive view.

use serde::Serialize;
use std::io;

use crate::error::Result;
use crate::models::types::OptionType;
use crate::surface::types::Surfaces;

#[derive(Debug, Serialize)]
struct SurfaceCell {
    volatility: f64,
    spot: f64,
    price: f64,
}

/// Write one surface in long format: a `volatility,spot,price` row per cell,
/// ordered row-major (volatility outer, spot inner).
pub fn write_surface_csv<W: io::Write>(
    surfaces: &Surfaces,
    option_type: OptionType,
    writer: W,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (v, s, price) in surfaces.get(option_type).cells() {
        wtr.serialize(SurfaceCell {
            volatility: surfaces.vol_axis[v],
            spot: surfaces.spot_axis[s],
            price: price.value(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write one surface in heatmap layout: a header of spot tick labels and one
/// row per volatility tick label.
pub fn write_surface_matrix_csv<W: io::Write>(
    surfaces: &Surfaces,
    option_type: OptionType,
    writer: W,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["volatility".to_string()];
    header.extend(surfaces.spot_ticks());
    wtr.write_record(&header)?;

    let surface = surfaces.get(option_type);
    for (label, row) in surfaces.vol_ticks().into_iter().zip(surface.rows()) {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(label);
        record.extend(row.iter().map(|p| p.to_string()));
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}
