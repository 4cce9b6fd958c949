//! Error types for colony search and its collaborators.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AcoError>;

/// Errors raised by the search core and the geo collaborators.
///
/// Malformed search parameters are reported up front rather than producing
/// a silently wrong tour.
#[derive(Error, Debug)]
pub enum AcoError {
    /// The city list passed to a search was empty.
    #[error("city list is empty")]
    EmptyCities,

    /// The same city appears more than once in the input.
    #[error("city {id} appears more than once (position {position})")]
    DuplicateCity {
        /// Id of the repeated city.
        id: usize,
        /// Position of the second occurrence.
        position: usize,
    },

    /// Evaporation parameter outside `[0, 1)`.
    #[error("alpha must be in [0, 1), got {0}")]
    InvalidAlpha(f64),

    /// Heuristic exponent negative or non-finite.
    #[error("beta must be finite and >= 0, got {0}")]
    InvalidBeta(f64),

    /// Fewer than one ant requested.
    #[error("number of ants must be at least 1")]
    InvalidAntCount,

    /// Parallel wave size of zero.
    #[error("batch size must be at least 1")]
    InvalidBatchSize,

    /// Start index does not address a city.
    #[error("start position {first_pos} out of range for {len} cities")]
    StartOutOfRange {
        /// Requested start position.
        first_pos: usize,
        /// Number of cities.
        len: usize,
    },

    /// Latitude or longitude is not a finite number.
    #[error("invalid coordinate ({lat}, {lon})")]
    InvalidCoordinate {
        /// Latitude.
        lat: f64,
        /// Longitude.
        lon: f64,
    },

    /// A line of an input file could not be parsed.
    #[error("parse error at line {line}: {reason}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
