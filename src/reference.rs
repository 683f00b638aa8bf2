//! # Reference resolver
//!
//! Turns a sexagesimal right ascension / declination pair into the decimal-degree
//! [`ReferencePoint`] around which a synthetic ensemble is scattered.
//!
//! ## Flat-sky correction
//!
//! The right ascension is converted from hours to degrees and then divided by
//! `cos(dec)`:
//!
//! ```text
//! dec_deg = D + M/60 + S/3600
//! ra_deg  = 15 · (H + M/60 + S/3600) / cos(dec_deg · π/180)
//! ```
//!
//! This widens the right-ascension spacing away from the equator. It is a
//! small-angle approximation only: no epoch, proper motion or parallax is involved.
//!
//! ## Domain
//!
//! The correction diverges at the poles. Declinations with `|dec| >= 90°` are
//! rejected with [`SkySimError::DomainError`]; every in-range declination goes
//! through the formula above untouched.
//!
//! ## Example
//!
//! ```rust
//! use sky_sim::reference::resolve;
//!
//! let m31 = resolve("00:42:44.3", "41:16:09").unwrap();
//! assert!((m31.ra_deg - 14.215420962967535).abs() < 1.0 / 3600.0);
//! assert!((m31.dec_deg - 41.26916666666667).abs() < 1.0 / 3600.0);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    constants::{Degree, ANDROMEDA_DEC, ANDROMEDA_RA},
    conversion::{parse_dec_to_deg, parse_ra_to_deg},
    sky_sim_errors::SkySimError,
};

/// Decimal-degree position of the simulation target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    /// Right ascension, flat-sky corrected (degrees)
    pub ra_deg: Degree,
    /// Declination (degrees)
    pub dec_deg: Degree,
}

impl ReferencePoint {
    /// Build a reference point from decimal degrees, as given by a user override.
    ///
    /// No correction is applied: the values are used as they are.
    pub fn new(ra_deg: Degree, dec_deg: Degree) -> Self {
        ReferencePoint { ra_deg, dec_deg }
    }

    /// Reference point of the Andromeda galaxy (M31), resolved from
    /// [`ANDROMEDA_RA`] and [`ANDROMEDA_DEC`].
    pub fn andromeda() -> Result<Self, SkySimError> {
        resolve(ANDROMEDA_RA, ANDROMEDA_DEC)
    }
}

impl std::fmt::Display for ReferencePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(ra={:.6}°, dec={:.6}°)", self.ra_deg, self.dec_deg)
    }
}

/// Resolve a sexagesimal right ascension / declination pair into a [`ReferencePoint`].
///
/// Arguments
/// ---------
/// * `ra`: right ascension formatted `H:M:S`
/// * `dec`: declination formatted `D:M:S`
///
/// Return
/// ------
/// * `Ok(ReferencePoint)` with `dec_deg` the direct conversion of `dec` and `ra_deg`
///   the hour-to-degree conversion of `ra` divided by `cos(dec_deg)`.
/// * `Err(SkySimError::ParseError)` if either string is malformed.
/// * `Err(SkySimError::DomainError)` if `|dec_deg| >= 90`.
pub fn resolve(ra: &str, dec: &str) -> Result<ReferencePoint, SkySimError> {
    let dec_deg = parse_dec_to_deg(dec)?;
    let ra_hours_deg = parse_ra_to_deg(ra)?;

    if dec_deg.is_nan() || dec_deg.abs() >= 90.0 {
        return Err(SkySimError::DomainError(dec_deg));
    }

    let ra_deg = ra_hours_deg / (dec_deg * PI / 180.0).cos();
    debug!(ra, dec, ra_deg, dec_deg, "resolved reference point");

    Ok(ReferencePoint { ra_deg, dec_deg })
}
