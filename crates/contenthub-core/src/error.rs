//! Unified application error types for ContentHub.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the `?` operator. Every error renders as one entry of
//! the response envelope's `errors` array, so each carries the name of the
//! field it concerns.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested row does not exist (or is soft-deleted).
    NotFound,
    /// Required-field or enum checks failed before persistence.
    Validation,
    /// The request body could not be parsed as JSON.
    MalformedInput,
    /// The caller is authenticated but does not own the resource.
    Forbidden,
    /// No valid bearer token was presented.
    Unauthenticated,
    /// The caller's role does not satisfy the route's requirement.
    AccessDenied,
    /// The record store failed.
    Database,
    /// An internal server error occurred.
    Internal,
    /// A configuration error occurred.
    Configuration,
}

impl ErrorKind {
    /// Field name reported when the error does not name one explicitly.
    pub fn default_field(&self) -> &'static str {
        match self {
            Self::NotFound | Self::Forbidden => "ID",
            Self::MalformedInput => "json",
            Self::Unauthenticated | Self::AccessDenied => "auth",
            Self::Validation => "request",
            Self::Database | Self::Internal | Self::Configuration => "server",
        }
    }

    /// Whether this kind belongs to the "200 with errors" envelope convention
    /// rather than a non-success HTTP status.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Self::NotFound | Self::Validation | Self::MalformedInput | Self::Forbidden
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::MalformedInput => write!(f, "MALFORMED_INPUT"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::Unauthenticated => write!(f, "UNAUTHENTICATED"),
            Self::AccessDenied => write!(f, "ACCESS_DENIED"),
            Self::Database => write!(f, "DATABASE"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::Configuration => write!(f, "CONFIGURATION"),
        }
    }
}

/// The unified application error used throughout ContentHub.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// The request field the error concerns, if any.
    pub field: Option<String>,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: None,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            field: None,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Attach the name of the offending request field.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// The field reported in the error envelope.
    pub fn field_name(&self) -> &str {
        self.field
            .as_deref()
            .unwrap_or_else(|| self.kind.default_field())
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message).with_field(field)
    }

    /// Create a malformed-input error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedInput, message)
    }

    /// Create an ownership error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// Create an authentication error.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthenticated, message)
    }

    /// Create a role-check error.
    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AccessDenied, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            field: self.field.clone(),
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::MalformedInput,
            format!("JSON parse error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
