//! Error types for deptsql.
//!
//! Defines the main error enum used throughout the application. Each variant
//! maps to one of the propagation policies in the error-handling design:
//! unsafe queries never reach the executor, execution errors are classified
//! before display, and synthesis errors are fatal per-request.

use thiserror::Error;

/// Main error type for deptsql operations.
#[derive(Error, Debug)]
pub enum DeptSqlError {
    /// The Query Guard rejected a candidate query (forbidden keyword,
    /// injection marker, etc.). Terminal for the request.
    #[error("Unsafe query: {0}")]
    Unsafe(String),

    /// The database reported a failure while executing a guarded query.
    /// The message is already classified for display.
    #[error("Execution error: {0}")]
    Execution(String),

    /// The text-generation collaborator failed or is unavailable.
    #[error("Synthesis error: {0}")]
    Synthesis(String),

    /// Configuration errors (invalid config file, bad values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DeptSqlError {
    /// Creates an unsafe-query error with the given message.
    pub fn unsafe_query(msg: impl Into<String>) -> Self {
        Self::Unsafe(msg.into())
    }

    /// Creates an execution error with the given message.
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// Creates a synthesis error with the given message.
    pub fn synthesis(msg: impl Into<String>) -> Self {
        Self::Synthesis(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Unsafe(_) => "Unsafe Query",
            Self::Execution(_) => "Execution Error",
            Self::Synthesis(_) => "Synthesis Error",
            Self::Config(_) => "Configuration Error",
            Self::Internal(_) => "Internal Error",
        }
    }

    /// Reduced message shown to the user.
    ///
    /// Guard rejections and synthesis failures deliberately hide their
    /// internals; execution errors are already classified by the executor.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unsafe(_) => {
                "Could not process that question into a safe query. Please try rephrasing."
                    .to_string()
            }
            Self::Execution(msg) => msg.clone(),
            Self::Synthesis(_) => {
                "The language model could not be reached. Please try again.".to_string()
            }
            Self::Config(msg) => format!("Configuration problem: {msg}"),
            Self::Internal(_) => "An internal error occurred.".to_string(),
        }
    }
}

/// Result type alias using DeptSqlError.
pub type Result<T> = std::result::Result<T, DeptSqlError>;
