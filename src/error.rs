//! Error types for the feedback-dashboard-rust library.
//!
//! This module provides custom error types using `thiserror` for better error
//! handling and more specific error messages throughout the application.

use thiserror::Error;

/// Errors that can occur in the feedback-dashboard-rust application.
#[derive(Error, Debug)]
pub enum FeedbackError {
    /// Statistics requested over an empty collection
    #[error("Cannot compute statistics over an empty feedback collection")]
    EmptyCollection,

    /// Feedback text failed validation
    #[error("Invalid feedback text: {0}")]
    InvalidText(String),

    /// Rating outside the [1,5] range
    #[error("Invalid rating: {0} (must be between 1 and 5)")]
    InvalidRating(u8),

    /// Unknown export format name
    #[error("Invalid output format: {0}")]
    InvalidFormat(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Binary serialization errors
    #[error("Binary serialization error: {0}")]
    Bincode(#[from] bincode::Error),

    /// CSV parsing or writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Collection store errors
    #[error("Store error: {0}")]
    Store(String),

    /// General error with context
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Result with FeedbackError
pub type Result<T> = std::result::Result<T, FeedbackError>;

impl From<anyhow::Error> for FeedbackError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<sled::Error> for FeedbackError {
    fn from(err: sled::Error) -> Self {
        Self::Store(err.to_string())
    }
}
