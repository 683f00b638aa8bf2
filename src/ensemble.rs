//! # Ensemble generator
//!
//! Scatters synthetic stars around a [`ReferencePoint`] and collects them into a
//! [`Catalogue`].
//!
//! ## Sampling model
//!
//! Each star receives two independent draws from `U(-w, w)` (with `w` the half
//! width, 1° by default):
//!
//! ```text
//! ra  = ra0  + U(-w, w)
//! dec = dec0 + U(-w, w)
//! ```
//!
//! The right ascension offset is drawn first, then the declination offset, star
//! after star. The region covered is therefore a `2w × 2w` **square** in
//! (ra, dec), not a disk, and no draw is ever rejected. Feeding the same seeded
//! generator twice reproduces the exact same catalogue.
//!
//! ## Identifiers
//!
//! Stars are numbered `0..n` in generation order, so the id of a record is always
//! its position in the catalogue.
//!
//! ## Example
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use sky_sim::{ensemble::generate, reference::ReferencePoint};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let catalogue = generate(ReferencePoint::new(14.2, 41.3), 100, &mut rng).unwrap();
//!
//! assert_eq!(catalogue.len(), 100);
//! assert!(catalogue.iter().all(|s| (s.ra - 14.2).abs() < 1.0));
//! ```

use rand::{distr::Uniform, Rng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    constants::{Degree, StarId, COORD_PRECISION, COORD_WIDTH, DEFAULT_HALF_WIDTH, ID_WIDTH},
    reference::ReferencePoint,
    sky_sim_errors::SkySimError,
};

/// One synthetic star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarRecord {
    /// Zero-based position in generation order
    pub id: StarId,
    /// Right ascension (degrees)
    pub ra: Degree,
    /// Declination (degrees)
    pub dec: Degree,
}

/// Catalogue line layout: `0000042,    14.215421,    41.269167`
impl std::fmt::Display for StarRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:0id_w$}, {:coord_w$.prec$}, {:coord_w$.prec$}",
            self.id,
            self.ra,
            self.dec,
            id_w = ID_WIDTH,
            coord_w = COORD_WIDTH,
            prec = COORD_PRECISION,
        )
    }
}

/// Ordered collection of [`StarRecord`]s, id order = insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogue {
    stars: Vec<StarRecord>,
}

impl Catalogue {
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn records(&self) -> &[StarRecord] {
        &self.stars
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StarRecord> {
        self.stars.iter()
    }

    /// `(ra, dec)` pairs in catalogue order, e.g. for plotting.
    pub fn points(&self) -> Vec<(Degree, Degree)> {
        self.stars.iter().map(|s| (s.ra, s.dec)).collect()
    }
}

impl From<Vec<StarRecord>> for Catalogue {
    fn from(stars: Vec<StarRecord>) -> Self {
        Catalogue { stars }
    }
}

impl FromIterator<StarRecord> for Catalogue {
    fn from_iter<I: IntoIterator<Item = StarRecord>>(iter: I) -> Self {
        Catalogue {
            stars: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Catalogue {
    type Item = StarRecord;
    type IntoIter = std::vec::IntoIter<StarRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.stars.into_iter()
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a StarRecord;
    type IntoIter = std::slice::Iter<'a, StarRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.stars.iter()
    }
}

/// Validate a user supplied ensemble size.
///
/// Zero is accepted and yields an empty catalogue; a negative count is an
/// [`SkySimError::InvalidArgument`].
pub fn ensemble_size(count: i64) -> Result<usize, SkySimError> {
    usize::try_from(count).map_err(|_| {
        SkySimError::InvalidArgument(format!("star count must be >= 0, got {count}"))
    })
}

/// Lazily draw `n_stars` stars around `reference`.
///
/// Arguments
/// -----------------
/// * `reference` – Center of the scatter region.
/// * `n_stars` – Number of stars to yield.
/// * `half_width` – Half width of the square region, in degrees. Must be finite and > 0.
/// * `rng` – Random number generator; two draws are consumed per star (ra first, then dec).
///
/// Return
/// ----------
/// * An iterator yielding the stars with ids `0..n_stars`, or
///   [`SkySimError::InvalidArgument`] if `half_width` is not a valid width.
///
/// See also
/// ------------
/// * [`generate_within`] – Eager version collecting the stars into a [`Catalogue`].
pub fn stars_iter<'a, R: Rng + 'a>(
    reference: ReferencePoint,
    n_stars: usize,
    half_width: Degree,
    rng: &'a mut R,
) -> Result<impl Iterator<Item = StarRecord> + 'a, SkySimError> {
    if !(half_width.is_finite() && half_width > 0.0) {
        return Err(SkySimError::InvalidArgument(format!(
            "half width must be a positive number of degrees, got {half_width}"
        )));
    }
    let offset = Uniform::new(-half_width, half_width)?;

    let mut id: StarId = 0;
    let mut remaining = n_stars;

    Ok(std::iter::from_fn(move || {
        if remaining == 0 {
            return None;
        }
        remaining -= 1;

        let ra = reference.ra_deg + rng.sample(&offset);
        let dec = reference.dec_deg + rng.sample(&offset);
        let star = StarRecord { id, ra, dec };
        id += 1;

        Some(star)
    }))
}

/// Generate `n_stars` stars within `half_width` degrees (per axis) of `reference`.
pub fn generate_within<R: Rng>(
    reference: ReferencePoint,
    n_stars: usize,
    half_width: Degree,
    rng: &mut R,
) -> Result<Catalogue, SkySimError> {
    let catalogue: Catalogue = stars_iter(reference, n_stars, half_width, rng)?.collect();
    debug!(
        n_stars = catalogue.len(),
        half_width,
        reference = %reference,
        "generated ensemble"
    );
    Ok(catalogue)
}

/// Generate `n_stars` stars within 1 degree (per axis) of `reference`.
pub fn generate<R: Rng>(
    reference: ReferencePoint,
    n_stars: usize,
    rng: &mut R,
) -> Result<Catalogue, SkySimError> {
    generate_within(reference, n_stars, DEFAULT_HALF_WIDTH, rng)
}
