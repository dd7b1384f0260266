//! Error types for the parallax window core.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Detection source acquisition or polling failed
    #[error("Detector error: {0}")]
    Detector(String),

    /// Filter construction or configuration error
    #[error("Filter error: {0}")]
    Filter(String),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input mode switch requested while another switch is still completing
    #[error("Mode switch already in progress")]
    SwitchInProgress,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
