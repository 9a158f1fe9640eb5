//! Error types for the roster service
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific roster scenarios
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Storage read failed for key {key}: {message}")]
    StorageReadFailed { key: String, message: String },

    #[error("Storage write failed for key {key}: {message}")]
    StorageWriteFailed { key: String, message: String },

    #[error("Roster serialization failed: {reason}")]
    SerializationFailed { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}
