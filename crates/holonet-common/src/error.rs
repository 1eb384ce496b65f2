//! Common error types used throughout holonet.
//!
//! This module provides a unified error type covering the three business
//! failures of the data-access layer (not found, duplicate key, conflict)
//! alongside storage, input and I/O failures.

use std::fmt;

/// Common error type for holonet.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// The kind of entity (e.g. "Planet", "Character").
        entity: String,
        /// The identifier that was looked up.
        id: String,
    },

    /// A unique-name constraint was violated on create or update.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// A delete was blocked by existing dependents.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new NotFound error.
    pub fn not_found(entity: impl Into<String>, id: impl fmt::Display) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Create a new DuplicateKey error.
    pub fn duplicate_key<S: Into<String>>(msg: S) -> Self {
        Self::DuplicateKey(msg.into())
    }

    /// Create a new Conflict error.
    pub fn conflict<S: Into<String>>(msg: S) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new Database error.
    pub fn database<S: Into<String>>(msg: S) -> Self {
        Self::Database(msg.into())
    }

    /// Create a new Internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }

    /// Stable machine-readable code for API consumers.
    pub fn code(&self) -> &'static str {
        match self {
            Error::NotFound { .. } => "NOT_FOUND",
            Error::DuplicateKey(_) => "DUPLICATE_KEY",
            Error::Conflict(_) => "CONFLICT",
            Error::InvalidInput(_) => "INVALID_INPUT",
            Error::Database(_) => "DATABASE_ERROR",
            Error::Io(_) => "IO_ERROR",
            Error::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Map this error to an appropriate HTTP status code.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::NotFound { .. } => 404,
            Error::DuplicateKey(_) => 409,
            Error::Conflict(_) => 409,
            Error::InvalidInput(_) => 400,
            Error::Database(_) => 500,
            Error::Io(_) => 500,
            Error::Internal(_) => 500,
        }
    }

    /// Whether this is one of the business-rule failures rather than an
    /// unexpected storage or runtime failure.
    pub fn is_business(&self) -> bool {
        matches!(
            self,
            Error::NotFound { .. } | Error::DuplicateKey(_) | Error::Conflict(_)
        )
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::not_found("Planet", 12);
        assert_eq!(err.to_string(), "Planet with id 12 not found");

        let err = Error::duplicate_key("Planet 'Hoth' already exists");
        assert_eq!(err.to_string(), "Duplicate key: Planet 'Hoth' already exists");

        let err = Error::conflict("planet has 2 residents");
        assert_eq!(err.to_string(), "Conflict: planet has 2 residents");

        let err = Error::database("disk I/O error");
        assert_eq!(err.to_string(), "Database error: disk I/O error");

        let err = Error::invalid_input("bad id");
        assert_eq!(err.to_string(), "Invalid input: bad id");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::not_found("Character", 1).code(), "NOT_FOUND");
        assert_eq!(Error::duplicate_key("x").code(), "DUPLICATE_KEY");
        assert_eq!(Error::conflict("x").code(), "CONFLICT");
        assert_eq!(Error::invalid_input("x").code(), "INVALID_INPUT");
        assert_eq!(Error::database("x").code(), "DATABASE_ERROR");
        assert_eq!(Error::internal("x").code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_http_status() {
        assert_eq!(Error::not_found("Starship", 1).http_status(), 404);
        assert_eq!(Error::duplicate_key("x").http_status(), 409);
        assert_eq!(Error::conflict("x").http_status(), 409);
        assert_eq!(Error::invalid_input("x").http_status(), 400);
        assert_eq!(Error::database("x").http_status(), 500);
    }

    #[test]
    fn test_business_classification() {
        assert!(Error::not_found("Planet", 1).is_business());
        assert!(Error::duplicate_key("x").is_business());
        assert!(Error::conflict("x").is_business());
        assert!(!Error::database("x").is_business());
        assert!(!Error::internal("x").is_business());
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io(_)));
    }
}
