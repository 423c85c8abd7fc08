//! Process-level errors
//!
//! Request-scoped failures are handled by [`crate::handlers::ApiError`]. This
//! type covers startup and server lifecycle: configuration, binding, serving.

use thiserror::Error;

/// Result type alias using the service's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Startup and server errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// Configuration loaded but is not usable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error, typically while binding or serving
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tracing subscriber could not be installed
    #[error("Tracing initialization failed: {0}")]
    Tracing(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
