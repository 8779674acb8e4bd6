//! Error types for rhymescan-core.
//!
//! The rhyme engine itself never fails; these errors cover configuration
//! loading and whole-document analysis.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during lyric analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input has no lyric lines left after section markers are removed.
    #[error("no lyric lines in input")]
    EmptyInput,
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
