use thiserror::Error;

/// Errors raised while building reference statistics or threshold tables.
#[derive(Debug, Error)]
pub enum Error {
    /// The statistics TOML could not be parsed.
    #[error("failed to parse reference statistics: {0}")]
    StatsParse(#[from] toml::de::Error),

    /// A statistics value is not usable (negative or non-finite).
    #[error("invalid reference statistics: {field}[{row}][{col}] = {value}")]
    InvalidStatistic {
        field: &'static str,
        row: usize,
        col: usize,
        value: f64,
    },

    /// The standard-deviation multiplier is negative or non-finite.
    #[error("standard-deviation multiplier must be finite and non-negative, got {0}")]
    InvalidMultiplier(f64),

    /// A band whose minimum exceeds its maximum.
    #[error("distance band ({row},{col}) is inverted: min {min} > max {max}")]
    InvertedBand {
        row: usize,
        col: usize,
        min: f64,
        max: f64,
    },
}
