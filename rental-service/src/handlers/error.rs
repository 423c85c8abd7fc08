//! API error type for order handlers
//!
//! [`ApiError`] carries the operation, a classification and the
//! human-readable description shown to the caller. Rendering produces the
//! same [`Envelope`] as the success path, with the error detail in `data`.
//!
//! | Kind            | Status |
//! |-----------------|--------|
//! | malformed input | 400    |
//! | not found       | 404    |
//! | internal        | 500    |

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::query::PaginationError;
use super::response::Envelope;
use crate::ids::InvalidId;
use crate::services::{ErrorKind, ServiceError};

/// Order endpoint that produced the error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    Create,
    Update,
    List,
    Get,
    Delete,
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::List => write!(f, "list"),
            Self::Get => write!(f, "get"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

impl ApiOperation {
    /// Description used when the service call itself fails.
    pub const fn failure_description(&self) -> &'static str {
        match self {
            Self::Create => "error while creating order",
            Self::Update => "error while updating order",
            Self::List => "error while getting orders",
            Self::Get => "error while getting order by id",
            Self::Delete => "error while deleting order",
        }
    }
}

/// Status code for a classification
pub const fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::MalformedInput => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Error returned from order handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub operation: ApiOperation,
    pub kind: ErrorKind,
    /// Caller-facing summary
    pub description: String,
    /// Underlying error message
    pub detail: String,
}

impl ApiError {
    pub fn new(
        operation: ApiOperation,
        kind: ErrorKind,
        description: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            description: description.into(),
            detail: detail.into(),
        }
    }

    /// Request body could not be decoded.
    pub fn invalid_body(operation: ApiOperation, rejection: JsonRejection) -> Self {
        Self::new(
            operation,
            ErrorKind::MalformedInput,
            "error while reading request body",
            rejection.body_text(),
        )
    }

    /// Path identifier is not a canonical UUID.
    pub fn invalid_id(operation: ApiOperation, err: InvalidId) -> Self {
        Self::new(
            operation,
            ErrorKind::MalformedInput,
            "error while validating id",
            err.to_string(),
        )
    }

    pub fn invalid_pagination(err: PaginationError) -> Self {
        Self::new(
            ApiOperation::List,
            ErrorKind::MalformedInput,
            format!("error while parsing {}", err.param()),
            err.to_string(),
        )
    }

    /// The order service returned an error.
    pub fn service(operation: ApiOperation, err: ServiceError) -> Self {
        Self::new(
            operation,
            err.kind(),
            operation.failure_description(),
            err.to_string(),
        )
    }

    pub fn status_code(&self) -> StatusCode {
        status_for(self.kind)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} during {}): {}",
            self.description, self.kind, self.operation, self.detail
        )
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(operation = %self.operation, kind = %self.kind, "order request failed");
        Envelope::new(self.status_code(), self.description, self.detail).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::validate_id;
    use crate::repository::{RepositoryError, RepositoryOperation};
    use std::time::Duration;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::MalformedInput), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(ErrorKind::Internal),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_id() {
        let err = ApiError::invalid_id(ApiOperation::Delete, validate_id("x").unwrap_err());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.description, "error while validating id");
    }

    #[test]
    fn test_invalid_pagination_names_param() {
        let err = ApiError::invalid_pagination(PaginationError::NotANumber {
            param: "page",
            value: "abc".to_string(),
        });
        assert_eq!(err.description, "error while parsing page");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_service_not_found() {
        let err = ApiError::service(
            ApiOperation::Get,
            RepositoryError::not_found(RepositoryOperation::GetById, "Order", "abc").into(),
        );
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.description, "error while getting order by id");
        assert!(err.detail.contains("abc"));
    }

    #[test]
    fn test_service_deadline_is_500() {
        let err = ApiError::service(
            ApiOperation::List,
            ServiceError::DeadlineExceeded {
                operation: RepositoryOperation::GetAll,
                timeout: Duration::from_millis(10),
            },
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::new(
            ApiOperation::Create,
            ErrorKind::Internal,
            "error while creating order",
            "boom",
        )
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
