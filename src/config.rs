//! Run configuration.
//!
//! [`SimConfig`] gathers every knob of a simulation run. Its [`Default`] reproduces
//! the classic run: 1000 stars within 1° of M31, written to `data/catalog.csv`.

use camino::Utf8PathBuf;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    constants::{Degree, DEFAULT_CATALOGUE_PATH, DEFAULT_HALF_WIDTH, DEFAULT_STAR_COUNT},
    reference::ReferencePoint,
    sky_sim_errors::SkySimError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Right ascension override (decimal degrees, used as is)
    pub ra_deg: Option<Degree>,
    /// Declination override (decimal degrees)
    pub dec_deg: Option<Degree>,
    /// Number of stars to generate
    pub count: usize,
    /// Half width of the square scatter region (degrees)
    pub half_width: Degree,
    /// Seed of the random generator, `None` draws one from the OS
    pub seed: Option<u64>,
    /// Catalogue destination
    pub output: Utf8PathBuf,
    /// Optional SVG scatter preview destination
    pub plot: Option<Utf8PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            ra_deg: None,
            dec_deg: None,
            count: DEFAULT_STAR_COUNT,
            half_width: DEFAULT_HALF_WIDTH,
            seed: None,
            output: Utf8PathBuf::from(DEFAULT_CATALOGUE_PATH),
            plot: None,
        }
    }
}

impl SimConfig {
    /// Reference point of the run.
    ///
    /// Each overridden coordinate replaces the matching coordinate of the
    /// Andromeda reference; missing ones fall back to it. The Andromeda
    /// reference is only resolved when at least one coordinate is missing.
    pub fn reference(&self) -> Result<ReferencePoint, SkySimError> {
        match (self.ra_deg, self.dec_deg) {
            (Some(ra), Some(dec)) => Ok(ReferencePoint::new(ra, dec)),
            (ra, dec) => {
                let m31 = ReferencePoint::andromeda()?;
                Ok(ReferencePoint::new(
                    ra.unwrap_or(m31.ra_deg),
                    dec.unwrap_or(m31.dec_deg),
                ))
            }
        }
    }

    /// Random generator of the run: seeded when [`SimConfig::seed`] is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
