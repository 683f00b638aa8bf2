//! # sky_sim
//!
//! Synthetic sky catalogue generator: a fixed reference position (by default the
//! Andromeda galaxy) is resolved from sexagesimal coordinates, an ensemble of
//! randomly offset stars is scattered around it, and the result is written as a
//! flat `id,ra,dec` text file.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`conversion`] | Sexagesimal `W:M:S` parsing |
//! | [`reference`] | [`ReferencePoint`] and the flat-sky [`resolve`](reference::resolve) |
//! | [`ensemble`] | [`StarRecord`], [`Catalogue`] and the uniform generator |
//! | [`catalogue_io`] | Catalogue file writer and reader |
//! | [`config`] | [`SimConfig`](config::SimConfig), defaults and overrides |
//! | [`sky_sim`] | End-to-end pipeline |
//! | `plot` | SVG scatter preview (feature `plot`) |

pub mod catalogue_io;
pub mod config;
pub mod constants;
pub mod conversion;
pub mod ensemble;
#[cfg(feature = "plot")]
pub mod plot;
pub mod reference;
pub mod sky_sim;
pub mod sky_sim_errors;

pub use ensemble::{Catalogue, StarRecord};
pub use reference::ReferencePoint;
pub use sky_sim_errors::SkySimError;
