//! Error handling for BagKit
//!
//! Provides error types for every layer of the design engine:
//! - Design errors (referential and structural problems with a document)
//! - Share-code errors (compact transfer codec)
//! - Configuration errors (settings parsing and validation)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Design document error type
///
/// Returned by every mutation of the document store. An `Err` always means
/// the mutation was refused and no state changed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    /// No document is loaded in the store
    #[error("No design document loaded")]
    NoDocument,

    /// The targeted element does not exist in the document
    #[error("Element not found: {id}")]
    ElementNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// An element with the same identifier is already present
    #[error("Duplicate element id: {id}")]
    DuplicateElementId {
        /// The identifier that collided.
        id: String,
    },

    /// The document as a whole violates an invariant
    #[error("Invalid design: {reason}")]
    InvalidDesign {
        /// Which invariant was violated.
        reason: String,
    },

    /// A single element violates an invariant
    #[error("Invalid element {id}: {reason}")]
    InvalidElement {
        /// The offending element.
        id: String,
        /// Which invariant was violated.
        reason: String,
    },
}

impl DesignError {
    /// Shorthand for [`DesignError::InvalidDesign`].
    pub fn invalid_design(reason: impl Into<String>) -> Self {
        Self::InvalidDesign {
            reason: reason.into(),
        }
    }

    /// Shorthand for [`DesignError::InvalidElement`].
    pub fn invalid_element(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidElement {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by a stale reference (missing document or element).
    pub fn is_referential(&self) -> bool {
        matches!(self, Self::NoDocument | Self::ElementNotFound { .. })
    }
}

/// Share-code error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShareCodeError {
    /// The code is not valid base64
    #[error("Share code is not valid base64: {reason}")]
    Base64 {
        /// Decoder message.
        reason: String,
    },

    /// The payload is not a readable archive
    #[error("Share code payload is corrupt: {reason}")]
    Archive {
        /// Archive reader message.
        reason: String,
    },

    /// The archive does not carry a design entry
    #[error("Share code does not contain {entry}")]
    MissingEntry {
        /// The expected entry name.
        entry: String,
    },

    /// The embedded JSON does not describe a design
    #[error("Share code JSON is malformed: {reason}")]
    Json {
        /// Parser message.
        reason: String,
    },

    /// The decoded design breaks a structural invariant
    #[error("Share code holds an invalid design: {0}")]
    Invalid(#[from] DesignError),
}

/// Configuration error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The text could not be parsed
    #[error("Invalid {format} config: {reason}")]
    Parse {
        /// `toml` or `json`.
        format: String,
        /// Parser message.
        reason: String,
    },

    /// The config could not be rendered
    #[error("Failed to serialize config: {reason}")]
    Serialize {
        /// Serializer message.
        reason: String,
    },

    /// A value is out of its allowed range
    #[error("Invalid configuration: {reason}")]
    Invalid {
        /// Which setting is wrong and why.
        reason: String,
    },
}

/// Main error type for BagKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Design document error
    #[error(transparent)]
    Design(#[from] DesignError),

    /// Share-code error
    #[error(transparent)]
    ShareCode(#[from] ShareCodeError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a design document error
    pub fn is_design_error(&self) -> bool {
        matches!(self, Error::Design(_))
    }

    /// Check if this is a share-code error
    pub fn is_share_code_error(&self) -> bool {
        matches!(self, Error::ShareCode(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
