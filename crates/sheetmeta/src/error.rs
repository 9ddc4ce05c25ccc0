//! Error types for the sheetmeta crate.

use thiserror::Error;

/// Errors that can occur when resolving column metadata.
///
/// Malformed declarative metadata never produces an error under the default
/// configuration; these variants only surface when a stricter policy is
/// selected or when configuration text cannot be parsed.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Two fields declare the same explicit position and the resolver was
    /// configured to reject duplicates.
    #[error("fields '{first}' and '{second}' both declare position {position}")]
    DuplicatePosition {
        position: u32,
        first: String,
        second: String,
    },

    /// Resolver configuration could not be parsed.
    #[error("invalid resolver configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Result type for sheetmeta operations.
pub type Result<T> = std::result::Result<T, MetadataError>;
