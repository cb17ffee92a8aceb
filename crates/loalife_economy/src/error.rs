//! # Economy Error Types
//!
//! The calculation engine itself cannot fail. Everything here is raised at
//! the boundaries: reading a search payload or a calculation config.

use thiserror::Error;

/// Errors that can occur while feeding data into the economy engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EconomyError {
    /// A character arrived with a negative or non-finite item level.
    #[error("invalid level for character {character}: {level}")]
    InvalidLevel {
        /// Name of the offending character.
        character: String,
        /// The level that was rejected.
        level: f64,
    },

    /// A market price was negative or non-finite.
    #[error("invalid price for {item}: {price}")]
    InvalidPrice {
        /// Symbolic name of the item.
        item: String,
        /// The price that was rejected.
        price: f64,
    },

    /// The search payload could not be decoded.
    #[error("malformed search payload: {0}")]
    MalformedPayload(String),

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A file could not be read.
    #[error("cannot read {path}: {reason}")]
    Unreadable {
        /// Path that was being read.
        path: String,
        /// Underlying I/O failure.
        reason: String,
    },
}

/// Result type for economy operations.
pub type EconomyResult<T> = Result<T, EconomyError>;
