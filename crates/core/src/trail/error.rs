//! Trail error types.

use doctra_shared::ErrorKind;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during trail registry operations.
#[derive(Debug, Error)]
pub enum TrailError {
    /// Trail name must not be empty.
    #[error("Trail name is required")]
    NameRequired,

    /// A trail needs at least one step.
    #[error("Trail requires at least one step")]
    EmptyTrail,

    /// Trail not found.
    #[error("Trail {0} not found")]
    TrailNotFound(Uuid),

    /// A step references a department that does not exist.
    #[error("Department {0} not found")]
    DepartmentNotFound(Uuid),

    /// Delete blocked because documents still reference the trail.
    #[error("Trail {trail_id} is referenced by {document_count} document(s) and cannot be deleted")]
    TrailInUse {
        /// The trail that cannot be deleted.
        trail_id: Uuid,
        /// How many documents reference it.
        document_count: u64,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl TrailError {
    /// Returns the taxonomy kind for this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NameRequired | Self::EmptyTrail => ErrorKind::Validation,
            Self::TrailNotFound(_) | Self::DepartmentNotFound(_) => ErrorKind::NotFound,
            Self::TrailInUse { .. } => ErrorKind::Integrity,
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
            Self::NameRequired => "NAME_REQUIRED",
            Self::EmptyTrail => "EMPTY_TRAIL",
            Self::TrailNotFound(_) => "TRAIL_NOT_FOUND",
            Self::DepartmentNotFound(_) => "DEPARTMENT_NOT_FOUND",
            Self::TrailInUse { .. } => "TRAIL_IN_USE",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}
