//! # Constants and type definitions for sky_sim
//!
//! This module centralizes the **conversion factors**, the **default inputs** of a
//! simulation run and the **output format** parameters used throughout the crate.
//!
//! ## Overview
//!
//! - Unit conversions (hours ↔ degrees, sexagesimal subdivisions)
//! - Core type aliases used across the crate
//! - Default reference target (the Andromeda galaxy, M31) and ensemble size
//! - Layout of the catalogue file (header, field widths, precision)
//!
//! The defaults are only consumed by [`SimConfig`](crate::config::SimConfig) and the
//! command line; the resolver and the generator always take their inputs as arguments.

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Hours of right ascension → degrees
pub const HOUR_TO_DEG: f64 = 15.0;

/// Minutes in a degree (or in an hour)
pub const MINUTES_PER_UNIT: f64 = 60.0;

/// Seconds in a degree (or in an hour)
pub const SECONDS_PER_UNIT: f64 = 3600.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Sequential identifier of a synthetic star
pub type StarId = u64;

// -------------------------------------------------------------------------------------------------
// Simulation defaults
// -------------------------------------------------------------------------------------------------

/// Right ascension of M31 (`HH:MM:SS.S`)
pub const ANDROMEDA_RA: &str = "00:42:44.3";

/// Declination of M31 (`DD:MM:SS`)
pub const ANDROMEDA_DEC: &str = "41:16:09";

/// Number of stars generated when no count is given
pub const DEFAULT_STAR_COUNT: usize = 1_000;

/// Half width of the square scatter region around the reference, in degrees
pub const DEFAULT_HALF_WIDTH: Degree = 1.0;

/// Catalogue written when no output path is given
pub const DEFAULT_CATALOGUE_PATH: &str = "data/catalog.csv";

// -------------------------------------------------------------------------------------------------
// Catalogue file layout
// -------------------------------------------------------------------------------------------------

/// First line of every catalogue file
pub const CATALOGUE_HEADER: &str = "id,ra,dec";

/// Zero-padded width of the id column
pub const ID_WIDTH: usize = 7;

/// Right-justified width of the ra/dec columns
pub const COORD_WIDTH: usize = 12;

/// Fractional digits of the ra/dec columns
pub const COORD_PRECISION: usize = 6;
