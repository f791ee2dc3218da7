//! Error types for Bibliotek Core

use thiserror::Error;

/// Result type alias using BibliotekError
pub type Result<T> = std::result::Result<T, BibliotekError>;

/// Top-level error type for all Bibliotek operations
#[derive(Debug, Error)]
pub enum BibliotekError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),
}

/// Errors that occur while talking to the catalog service.
///
/// A catalog failure never mutates reader state: the action simply fails and
/// the user may re-trigger it. No automatic retries are performed.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Could not reach the catalog service: {0}")]
    Connect(String),

    #[error("Catalog request timed out")]
    Timeout,

    #[error("Catalog returned HTTP {0}")]
    Status(u16),

    #[error("Malformed catalog response: {0}")]
    Shape(String),

    #[error("No book with id '{0}'")]
    BookNotFound(String),
}

/// Errors that occur during login.
///
/// A failed login never creates a reader session.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
