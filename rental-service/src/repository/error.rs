//! Storage error types
//!
//! Storage implementations report failures as a [`RepositoryError`] that
//! records the operation, a coarse kind, and the entity involved. The service
//! layer classifies on [`RepositoryErrorKind`] and forwards the message
//! unchanged.

use std::fmt;

/// Storage operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    Create,
    Update,
    GetAll,
    GetById,
    Delete,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::GetAll => write!(f, "get_all"),
            Self::GetById => write!(f, "get_by_id"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Category of storage error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    /// No record with the requested identifier
    NotFound,
    /// The execution context expired or was cancelled
    Timeout,
    /// Any other backend failure
    DatabaseError,
}

impl fmt::Display for RepositoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::Timeout => write!(f, "timeout"),
            Self::DatabaseError => write!(f, "database_error"),
        }
    }
}

/// Structured storage error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    pub operation: RepositoryOperation,
    pub kind: RepositoryErrorKind,
    pub message: String,
    /// The type of entity involved, e.g. "Order"
    pub entity_type: Option<String>,
    pub entity_id: Option<String>,
}

impl RepositoryError {
    pub fn new(
        operation: RepositoryOperation,
        kind: RepositoryErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            entity_type: None,
            entity_id: None,
        }
    }

    /// Record missing for the given entity.
    pub fn not_found(
        operation: RepositoryOperation,
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Self {
        Self::new(operation, RepositoryErrorKind::NotFound, "Entity not found")
            .with_entity(entity_type, entity_id)
    }

    pub fn timeout(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::Timeout, message)
    }

    pub fn database_error(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::DatabaseError, message)
    }

    /// Add entity context to an existing error
    pub fn with_entity(
        mut self,
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Self {
        self.entity_type = Some(entity_type.into());
        self.entity_id = Some(entity_id.into());
        self
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == RepositoryErrorKind::NotFound
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repository {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;

        if let (Some(entity_type), Some(entity_id)) = (&self.entity_type, &self.entity_id) {
            write!(f, " [{}: {}]", entity_type, entity_id)?;
        }

        Ok(())
    }
}

impl std::error::Error for RepositoryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found() {
        let error = RepositoryError::not_found(RepositoryOperation::Delete, "Order", "abc");
        assert!(error.is_not_found());
        assert_eq!(error.operation, RepositoryOperation::Delete);
        assert_eq!(error.entity_type.as_deref(), Some("Order"));
        assert_eq!(error.entity_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_display_with_entity() {
        let error = RepositoryError::not_found(RepositoryOperation::GetById, "Order", "abc");
        assert_eq!(
            error.to_string(),
            "Repository not_found error during get_by_id: Entity not found [Order: abc]"
        );
    }

    #[test]
    fn test_display_without_entity() {
        let error = RepositoryError::database_error(RepositoryOperation::GetAll, "disk full");
        assert_eq!(
            error.to_string(),
            "Repository database_error error during get_all: disk full"
        );
    }

    #[test]
    fn test_timeout_is_not_not_found() {
        let error = RepositoryError::timeout(RepositoryOperation::Create, "context expired");
        assert_eq!(error.kind, RepositoryErrorKind::Timeout);
        assert!(!error.is_not_found());
    }
}
