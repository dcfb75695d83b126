// --- File: crates/hireloop_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Hireloop errors.
///
/// Each crate keeps its own `thiserror` enum and implements `From<CrateError>`
/// for `HireloopError` so handlers can return this type directly.
#[derive(Error, Debug)]
pub enum HireloopError {
    /// Error occurred while parsing request data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The caller has no authenticated session
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A request was well-formed but a business precondition was not met.
    /// `kind` is a stable machine-readable code, e.g. "missing_slot".
    #[error("{message}")]
    Rejected { kind: &'static str, message: String },

    /// Error occurred due to a conflict with current state
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl HireloopError {
    /// Machine-readable error code exposed to clients next to the message.
    pub fn kind(&self) -> &'static str {
        match self {
            HireloopError::ParseError(_) => "parse_error",
            HireloopError::ConfigError(_) => "config_error",
            HireloopError::AuthError(_) => "not_authenticated",
            HireloopError::ValidationError(_) => "validation_error",
            HireloopError::Rejected { kind, .. } => *kind,
            HireloopError::ConflictError(_) => "conflict",
            HireloopError::NotFoundError(_) => "not_found",
            HireloopError::InternalError(_) => "internal_error",
        }
    }
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for HireloopError {
    fn status_code(&self) -> u16 {
        match self {
            HireloopError::ParseError(_) => 400,
            HireloopError::ConfigError(_) => 500,
            HireloopError::AuthError(_) => 401,
            HireloopError::ValidationError(_) => 400,
            HireloopError::Rejected { .. } => 422,
            HireloopError::ConflictError(_) => 409,
            HireloopError::NotFoundError(_) => 404,
            HireloopError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, HireloopError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, HireloopError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, HireloopError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| HireloopError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, HireloopError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| HireloopError::InternalError(format!("{}: {}", f(), error)))
    }
}

impl From<serde_json::Error> for HireloopError {
    fn from(err: serde_json::Error) -> Self {
        HireloopError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for HireloopError {
    fn from(err: std::io::Error) -> Self {
        HireloopError::InternalError(err.to_string())
    }
}

impl From<hireloop_config::ConfigLoadError> for HireloopError {
    fn from(err: hireloop_config::ConfigLoadError) -> Self {
        HireloopError::ConfigError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> HireloopError {
    HireloopError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> HireloopError {
    HireloopError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> HireloopError {
    HireloopError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> HireloopError {
    HireloopError::ConflictError(message.to_string())
}

pub fn rejected<T: fmt::Display>(kind: &'static str, message: T) -> HireloopError {
    HireloopError::Rejected {
        kind,
        message: message.to_string(),
    }
}
