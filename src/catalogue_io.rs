//! # Catalogue file I/O
//!
//! Reading and writing the flat text catalogue consumed by downstream analysis tools.
//!
//! ## File format
//!
//! ```text
//! id,ra,dec
//! 0000000,    14.327851,    40.611042
//! 0000001,    13.605118,    41.957735
//! ```
//!
//! - one header line, `id,ra,dec`;
//! - one line per star, rendered by the [`Display`](std::fmt::Display) impl of
//!   [`StarRecord`]: the id zero-padded to 7 digits, ra and dec in fixed-point
//!   notation with 6 fractional digits, right-justified in 12 characters,
//!   fields separated by `", "`;
//! - every line ends with `\n`.
//!
//! Reading goes through the [`csv`] crate with surrounding whitespace trimmed, so the
//! padding of the numeric columns is irrelevant to readers.
//!
//! ## Atomic replacement
//!
//! [`write_catalogue_file`] writes into a sibling `<name>.part` file and renames it
//! over the target once every line has been flushed. A failed run never leaves a
//! half-written catalogue at the target path.

use std::{
    fs::{self, File},
    io::{BufWriter, Read, Write},
};

use camino::{Utf8Path, Utf8PathBuf};
use csv::{ReaderBuilder, Trim};
use tracing::{debug, info};

use crate::{
    constants::CATALOGUE_HEADER,
    ensemble::{Catalogue, StarRecord},
    sky_sim_errors::SkySimError,
};

/// Write `catalogue` to any writer, header first.
pub fn write_catalogue<W: Write>(catalogue: &Catalogue, writer: W) -> Result<(), SkySimError> {
    let mut writer = BufWriter::new(writer);
    writeln!(writer, "{CATALOGUE_HEADER}")?;
    for star in catalogue {
        writeln!(writer, "{star}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Path of the temporary file used while `path` is being written.
fn part_path(path: &Utf8Path) -> Utf8PathBuf {
    let mut name = path.file_name().unwrap_or("catalog").to_string();
    name.push_str(".part");
    path.with_file_name(name)
}

/// Write `catalogue` to `path`, creating missing parent directories.
///
/// Arguments
/// ---------
/// * `catalogue`: the stars to persist
/// * `path`: destination file; an existing file is replaced
///
/// Return
/// ------
/// * `Err(SkySimError::IoError)` if a directory cannot be created or the file
///   cannot be written. The target path is left untouched in that case.
pub fn write_catalogue_file(catalogue: &Catalogue, path: &Utf8Path) -> Result<(), SkySimError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp = part_path(path);
    debug!(%tmp, "writing catalogue");

    let written = File::create(&tmp)
        .map_err(SkySimError::from)
        .and_then(|file| write_catalogue(catalogue, file))
        .and_then(|()| fs::rename(&tmp, path).map_err(SkySimError::from));

    if written.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    written?;

    info!(%path, n_stars = catalogue.len(), "catalogue written");
    Ok(())
}

/// Read a catalogue back from any reader.
///
/// Records are returned in file order. Ids are taken from the file as they are,
/// no renumbering happens.
pub fn read_catalogue<R: Read>(reader: R) -> Result<Catalogue, SkySimError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    reader
        .deserialize::<StarRecord>()
        .map(|record| record.map_err(SkySimError::from))
        .collect()
}

/// Read the catalogue stored at `path`.
pub fn read_catalogue_file(path: &Utf8Path) -> Result<Catalogue, SkySimError> {
    read_catalogue(File::open(path)?)
}
