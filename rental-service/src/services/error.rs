//! Service-level error classification

use std::fmt;
use std::time::Duration;

use crate::repository::{RepositoryError, RepositoryErrorKind, RepositoryOperation};

/// Coarse classification used by the HTTP boundary.
///
/// The service itself only yields `NotFound` and `Internal`. Handlers raise
/// `MalformedInput` before any service call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller sent something unusable. Never reaches storage.
    MalformedInput,
    NotFound,
    /// Storage failure or deadline exceeded.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput => write!(f, "malformed_input"),
            Self::NotFound => write!(f, "not_found"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

/// Errors returned by the order service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    NotFound(RepositoryError),

    #[error(transparent)]
    Storage(RepositoryError),

    #[error("{operation} did not complete within {}ms", .timeout.as_millis())]
    DeadlineExceeded {
        operation: RepositoryOperation,
        timeout: Duration,
    },
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Storage(_) | Self::DeadlineExceeded { .. } => ErrorKind::Internal,
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err.kind {
            RepositoryErrorKind::NotFound => Self::NotFound(err),
            _ => Self::Storage(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_not_found_is_classified() {
        let err: ServiceError =
            RepositoryError::not_found(RepositoryOperation::GetById, "Order", "x").into();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("[Order: x]"));
    }

    #[test]
    fn test_other_repository_errors_are_internal() {
        let err: ServiceError =
            RepositoryError::database_error(RepositoryOperation::Create, "boom").into();
        assert_eq!(err.kind(), ErrorKind::Internal);

        let err: ServiceError =
            RepositoryError::timeout(RepositoryOperation::Create, "late").into();
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_deadline_is_internal() {
        let err = ServiceError::DeadlineExceeded {
            operation: RepositoryOperation::GetAll,
            timeout: Duration::from_millis(250),
        };
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.to_string(), "get_all did not complete within 250ms");
    }
}
