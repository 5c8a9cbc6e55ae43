//! Error types for the fetch, decode and write stages

use thiserror::Error;

/// Errors that can abort a conversion run
///
/// Classification itself never fails; every variant belongs to the
/// input or output side of the pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Transport failure while fetching the address list
    #[error("Failed to fetch address list: {0}")]
    Fetch(String),

    /// Server answered with something other than 200 OK
    #[error("Failed to fetch address list. HTTP status: {0}")]
    Status(u16),

    /// Local input file could not be read
    #[error("Failed to read address list from {path}: {details}")]
    Read { path: String, details: String },

    /// Input is not a JSON array of strings
    #[error("Address list is not a JSON array of strings: {0}")]
    Decode(String),

    /// Workbook could not be built or saved
    #[error("Failed to write workbook: {0}")]
    Write(String),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
