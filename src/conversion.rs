use itertools::Itertools;

use crate::{
    constants::{Degree, HOUR_TO_DEG, MINUTES_PER_UNIT, SECONDS_PER_UNIT},
    sky_sim_errors::SkySimError,
};

/// A colon-delimited base-60 angle, `whole:minutes:seconds`.
///
/// `whole` is hours for a right ascension and degrees for a declination.
/// No field is range checked: `"00:61:00"` is accepted and simply adds
/// 61 minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sexagesimal {
    pub whole: i64,
    pub minutes: i64,
    pub seconds: f64,
}

impl Sexagesimal {
    /// Decimal value in the unit of `whole`.
    ///
    /// The sign of `whole` is not carried over to the minutes and seconds,
    /// so `"-41:16:09"` evaluates to `-41 + 16/60 + 9/3600`.
    pub fn to_decimal(&self) -> f64 {
        self.whole as f64
            + self.minutes as f64 / MINUTES_PER_UNIT
            + self.seconds / SECONDS_PER_UNIT
    }
}

/// Parse a sexagesimal string of the form `W:M:S`.
///
/// Arguments
/// ---------
/// * `field`: name of the coordinate being parsed (`"ra"` or `"dec"`), reported in errors
/// * `input`: the colon-delimited string; whitespace around each token is ignored
///
/// Return
/// ------
/// * `Result<Sexagesimal, SkySimError>`: the three components, or a
///   [`SkySimError::ParseError`] if the string does not have exactly three tokens,
///   if the first two tokens are not integers or if the last one is not a number.
pub fn parse_sexagesimal(field: &'static str, input: &str) -> Result<Sexagesimal, SkySimError> {
    let (whole, minutes, seconds) = input
        .split(':')
        .map(str::trim)
        .collect_tuple()
        .ok_or_else(|| {
            SkySimError::parse(field, input, "expected exactly three ':'-separated fields")
        })?;

    let whole: i64 = whole
        .parse()
        .map_err(|e| SkySimError::parse(field, input, format!("first field: {e}")))?;
    let minutes: i64 = minutes
        .parse()
        .map_err(|e| SkySimError::parse(field, input, format!("minutes field: {e}")))?;
    let seconds: f64 = seconds
        .parse()
        .map_err(|e| SkySimError::parse(field, input, format!("seconds field: {e}")))?;

    Ok(Sexagesimal {
        whole,
        minutes,
        seconds,
    })
}

/// Parse a right ascension string (`HH:MM:SS.SS`) to degrees.
pub fn parse_ra_to_deg(ra: &str) -> Result<Degree, SkySimError> {
    Ok(HOUR_TO_DEG * parse_sexagesimal("ra", ra)?.to_decimal())
}

/// Parse a declination string (`DD:MM:SS.SS`) to degrees.
pub fn parse_dec_to_deg(dec: &str) -> Result<Degree, SkySimError> {
    Ok(parse_sexagesimal("dec", dec)?.to_decimal())
}
