//! SVG scatter preview of a catalogue (feature `plot`).

use camino::Utf8Path;
use plotters::prelude::*;
use tracing::info;

use crate::{constants::Degree, ensemble::Catalogue, sky_sim_errors::SkySimError};

type PlotResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Render `catalogue` as an SVG scatter plot, RA on x and Dec on y.
pub fn scatter_svg(
    catalogue: &Catalogue,
    path: &Utf8Path,
    title: &str,
) -> Result<(), SkySimError> {
    draw_scatter(&catalogue.points(), path, title)
        .map_err(|e| SkySimError::PlotError(e.to_string()))?;
    info!(%path, n_stars = catalogue.len(), "scatter preview written");
    Ok(())
}

fn draw_scatter(points: &[(Degree, Degree)], path: &Utf8Path, title: &str) -> PlotResult {
    let ((x_min, x_max), (y_min, y_max)) = padded_ranges(points);
    let root = SVGBackend::new(path.as_std_path(), (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;
    chart
        .configure_mesh()
        .x_desc("RA [deg]")
        .y_desc("Dec [deg]")
        .draw()?;

    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 1, BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}

fn padded_ranges(points: &[(Degree, Degree)]) -> ((f64, f64), (f64, f64)) {
    if points.is_empty() {
        return ((-1.0, 1.0), (-1.0, 1.0));
    }
    let (x_min, x_max) = extent(points.iter().map(|p| p.0));
    let (y_min, y_max) = extent(points.iter().map(|p| p.1));
    let x_pad = (x_max - x_min).abs() * 0.05 + 1e-6;
    let y_pad = (y_max - y_min).abs() * 0.05 + 1e-6;
    ((x_min - x_pad, x_max + x_pad), (y_min - y_pad, y_max + y_pad))
}

fn extent(iter: impl Iterator<Item = f64>) -> (f64, f64) {
    iter.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}
