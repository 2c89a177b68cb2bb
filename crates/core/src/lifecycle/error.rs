//! Lifecycle error types for document routing and approval.
//!
//! Every variant maps into one of the six shared [`ErrorKind`]
//! categories; HTTP handlers translate errors without inspecting
//! individual variants.

use doctra_shared::ErrorKind;
use thiserror::Error;
use uuid::Uuid;

use crate::lifecycle::types::DocumentStatus;

/// Errors that can occur during lifecycle operations.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Attempted a status transition the table does not permit.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: DocumentStatus,
        /// The attempted target status.
        to: DocumentStatus,
    },

    /// Attempted to act on a document in a terminal state.
    #[error("Document is in terminal state {status}")]
    TerminalState {
        /// The terminal status the document is in.
        status: DocumentStatus,
    },

    /// Attempted to move a document to the department it is already in.
    #[error("Document is already in the target department")]
    SameDepartment,

    /// The document's status changed between read and write.
    #[error("Document {document_id} was modified concurrently; re-fetch and retry")]
    StatusChanged {
        /// The contended document.
        document_id: Uuid,
    },

    /// Rejection requires a comment.
    #[error("Rejection comment is required")]
    RejectionCommentRequired,

    /// Document title must not be empty.
    #[error("Document title is required")]
    TitleRequired,

    /// Document type must not be empty.
    #[error("Document type is required")]
    DocTypeRequired,

    /// Actor's role does not meet the required role.
    #[error("Actor role {actor_role} does not meet required role {required_role}")]
    InsufficientRole {
        /// The actor's role.
        actor_role: String,
        /// The role required for the operation.
        required_role: String,
    },

    /// Actor may only act on documents in their own department.
    #[error("Actor {actor_id} may not act on documents outside their department")]
    OutsideDepartment {
        /// The actor who attempted the action.
        actor_id: Uuid,
    },

    /// Document not found.
    #[error("Document {0} not found")]
    DocumentNotFound(Uuid),

    /// Department not found.
    #[error("Department {0} not found")]
    DepartmentNotFound(Uuid),

    /// Trail not found.
    #[error("Trail {0} not found")]
    TrailNotFound(Uuid),

    /// The complete action needs a department flagged as dispatch handler.
    #[error("No dispatch department is configured")]
    NoDispatchDepartment,

    /// The acting user is not registered.
    #[error("Actor {0} is not a registered user")]
    UnknownActor(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl LifecycleError {
    /// Returns the taxonomy kind for this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::SameDepartment
            | Self::RejectionCommentRequired
            | Self::TitleRequired
            | Self::DocTypeRequired => ErrorKind::Validation,

            Self::InsufficientRole { .. }
            | Self::OutsideDepartment { .. }
            | Self::UnknownActor(_) => ErrorKind::Permission,

            Self::InvalidTransition { .. } | Self::TerminalState { .. } | Self::StatusChanged { .. } => {
                ErrorKind::Conflict
            }

            Self::DocumentNotFound(_)
            | Self::DepartmentNotFound(_)
            | Self::TrailNotFound(_)
            | Self::NoDispatchDepartment => ErrorKind::NotFound,

            Self::Database(_) => ErrorKind::Storage,
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::TerminalState { .. } => "TERMINAL_STATE",
            Self::SameDepartment => "SAME_DEPARTMENT",
            Self::StatusChanged { .. } => "STATUS_CHANGED",
            Self::RejectionCommentRequired => "REJECTION_COMMENT_REQUIRED",
            Self::TitleRequired => "TITLE_REQUIRED",
            Self::DocTypeRequired => "DOC_TYPE_REQUIRED",
            Self::InsufficientRole { .. } => "INSUFFICIENT_ROLE",
            Self::OutsideDepartment { .. } => "OUTSIDE_DEPARTMENT",
            Self::DocumentNotFound(_) => "DOCUMENT_NOT_FOUND",
            Self::DepartmentNotFound(_) => "DEPARTMENT_NOT_FOUND",
            Self::TrailNotFound(_) => "TRAIL_NOT_FOUND",
            Self::NoDispatchDepartment => "NO_DISPATCH_DEPARTMENT",
            Self::UnknownActor(_) => "UNKNOWN_ACTOR",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_error() {
        let err = LifecycleError::InvalidTransition {
            from: DocumentStatus::InMovement,
            to: DocumentStatus::Approved,
        };
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "INVALID_TRANSITION");
        assert!(err.to_string().contains("in_movement"));
        assert!(err.to_string().contains("approved"));
    }

    #[test]
    fn test_terminal_state_error() {
        let err = LifecycleError::TerminalState {
            status: DocumentStatus::Rejected,
        };
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "TERMINAL_STATE");
    }

    #[test]
    fn test_same_department_error() {
        let err = LifecycleError::SameDepartment;
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "SAME_DEPARTMENT");
    }

    #[test]
    fn test_status_changed_error() {
        let err = LifecycleError::StatusChanged {
            document_id: Uuid::nil(),
        };
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert!(err.kind().is_retryable());
        assert_eq!(err.error_code(), "STATUS_CHANGED");
    }

    #[test]
    fn test_rejection_comment_required_error() {
        let err = LifecycleError::RejectionCommentRequired;
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "REJECTION_COMMENT_REQUIRED");
    }

    #[test]
    fn test_permission_errors() {
        let err = LifecycleError::InsufficientRole {
            actor_role: "clerk".to_string(),
            required_role: "supervisor".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Permission);
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.error_code(), "INSUFFICIENT_ROLE");

        let err = LifecycleError::OutsideDepartment {
            actor_id: Uuid::nil(),
        };
        assert_eq!(err.kind(), ErrorKind::Permission);
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.error_code(), "OUTSIDE_DEPARTMENT");

        let err = LifecycleError::UnknownActor(Uuid::nil());
        assert_eq!(err.kind(), ErrorKind::Permission);
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.error_code(), "UNKNOWN_ACTOR");
    }

    #[test]
    fn test_not_found_errors() {
        assert_eq!(
            LifecycleError::DocumentNotFound(Uuid::nil()).status_code(),
            404
        );
        assert_eq!(
            LifecycleError::DepartmentNotFound(Uuid::nil()).status_code(),
            404
        );
        assert_eq!(LifecycleError::TrailNotFound(Uuid::nil()).status_code(), 404);
        assert_eq!(LifecycleError::NoDispatchDepartment.status_code(), 404);
    }

    #[test]
    fn test_database_error() {
        let err = LifecycleError::Database("connection reset".to_string());
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "DATABASE_ERROR");
    }
}
