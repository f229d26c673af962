//! Error types for email reflowing

use thiserror::Error;

/// Errors that can occur while reflowing an email body
#[derive(Error, Debug)]
pub enum ReflowError {
    /// The quote prefix leaves no room for text on a line
    #[error("Line length {line_length} is too small for quote depth {depth}")]
    WidthTooSmall { line_length: usize, depth: usize },

    /// Invalid reflow configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Input line is not valid UTF-8 and strict decoding was requested
    #[error("Failed to decode line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    /// Failed to read input or write output
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for reflow operations
pub type Result<T> = std::result::Result<T, ReflowError>;
