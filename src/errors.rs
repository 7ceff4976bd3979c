//! Defines application-specific error types.
//!
//! This module provides the `AppError` enum, which categorizes common errors
//! that can occur during execution, offering more context than generic I/O or
//! `anyhow` errors.

use thiserror::Error;

/// Application-specific errors used throughout `photosort`.
#[derive(Error, Debug)]
pub enum AppError {
    /// The source directory could not be listed. This aborts the whole run:
    /// an unreadable source must never degrade into an empty report.
    #[error("cannot read source directory '{path}': {source}")]
    SourceDirUnreadable {
        /// The configured source directory.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    // --- I/O Errors ---
    /// Error occurring during file or directory access (rename, mkdir, write).
    #[error("I/O error accessing path '{path}': {source}")]
    IoError {
        /// The path that caused the I/O error.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    // --- Configuration Errors ---
    /// Generic error related to invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// The replacement location-mapping file could not be read or parsed.
    #[error("Invalid location mapping '{path}': {reason}")]
    MappingError {
        /// The mapping file that was rejected.
        path: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The archive root given to the gallery generator does not exist.
    #[cfg(feature = "gallery")]
    #[error("photos directory '{path}' not found")]
    PhotosDirMissing {
        /// The configured photos directory.
        path: String,
    },
}

/// Helper function to create an `AppError::IoError` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> AppError {
    AppError::IoError {
        path: path.as_ref().display().to_string(),
        source,
    }
}
