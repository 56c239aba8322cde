//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while querying the analytics API
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("analytics query rejected (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("malformed metric value in column {column}: {value:?}")]
    MalformedValue { column: usize, value: String },
}

/// Errors that can occur while publishing to Notion
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("page creation rejected (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
}
