//! # Simulation pipeline
//!
//! Composes the crate's stages in a fixed order, driven by a [`SimConfig`]:
//!
//! 1. **Reference**: [`SimConfig::reference`] (overrides or the resolved M31 position),
//! 2. **Ensemble**: [`generate_within`] with the configured count, half width and seed,
//! 3. **Output**: [`write_catalogue_file`], then the optional SVG preview.
//!
//! Nothing is written until the whole catalogue has been generated, and an error
//! at any stage aborts the run.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use sky_sim::{config::SimConfig, sky_sim::run};
//!
//! let config = SimConfig {
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let catalogue = run(&config).unwrap();
//! println!("{} stars written to {}", catalogue.len(), config.output);
//! ```

use camino::Utf8Path;
use tracing::info;

use crate::{
    catalogue_io::write_catalogue_file,
    config::SimConfig,
    ensemble::{generate_within, Catalogue},
    sky_sim_errors::SkySimError,
};

/// Resolve the reference and generate the catalogue, without touching the disk.
pub fn simulate(config: &SimConfig) -> Result<Catalogue, SkySimError> {
    let reference = config.reference()?;
    info!(%reference, count = config.count, seed = ?config.seed, "simulating ensemble");

    let mut rng = config.rng();
    generate_within(reference, config.count, config.half_width, &mut rng)
}

/// Full run: [`simulate`], write the catalogue, render the preview if requested.
pub fn run(config: &SimConfig) -> Result<Catalogue, SkySimError> {
    if cfg!(not(feature = "plot")) && config.plot.is_some() {
        return Err(SkySimError::InvalidArgument(
            "scatter preview requested but the `plot` feature is disabled".into(),
        ));
    }

    let catalogue = simulate(config)?;
    write_catalogue_file(&catalogue, &config.output)?;

    if let Some(plot) = &config.plot {
        render_preview(&catalogue, plot)?;
    }

    Ok(catalogue)
}

#[cfg(feature = "plot")]
fn render_preview(catalogue: &Catalogue, path: &Utf8Path) -> Result<(), SkySimError> {
    crate::plot::scatter_svg(catalogue, path, "Synthetic sky catalogue")
}

#[cfg(not(feature = "plot"))]
fn render_preview(_catalogue: &Catalogue, _path: &Utf8Path) -> Result<(), SkySimError> {
    Ok(())
}
