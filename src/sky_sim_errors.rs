use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkySimError {
    #[error("Invalid {field} angle {input:?}: {reason}")]
    ParseError {
        field: &'static str,
        input: String,
        reason: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Declination {0}° is outside the flat-sky domain (|dec| < 90°)")]
    DomainError(f64),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Error while reading the catalogue: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Uniform offset range is invalid: {0}")]
    RandomRangeError(#[from] rand::distr::uniform::Error),

    #[error("Unable to render the scatter plot: {0}")]
    PlotError(String),
}

impl SkySimError {
    pub(crate) fn parse(field: &'static str, input: &str, reason: impl Into<String>) -> Self {
        SkySimError::ParseError {
            field,
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl PartialEq for SkySimError {
    fn eq(&self, other: &Self) -> bool {
        use SkySimError::*;
        match (self, other) {
            (
                ParseError {
                    field: fa,
                    input: ia,
                    reason: ra,
                },
                ParseError {
                    field: fb,
                    input: ib,
                    reason: rb,
                },
            ) => fa == fb && ia == ib && ra == rb,
            (InvalidArgument(a), InvalidArgument(b)) => a == b,
            (DomainError(a), DomainError(b)) => a == b,
            (RandomRangeError(a), RandomRangeError(b)) => a == b,
            (PlotError(a), PlotError(b)) => a == b,

            // not comparable: same variant is enough
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,

            _ => false,
        }
    }
}
