//! Application-wide error taxonomy.
//!
//! Every domain error in the workspace maps into one of the six
//! [`ErrorKind`] categories; HTTP handlers translate kinds into status
//! codes without inspecting the concrete error.

/// The six error categories every domain error maps into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad input: empty fields, same-department move, missing comment.
    Validation,
    /// Actor lacks the role or department scope for the action.
    Permission,
    /// State changed since read, or the document is in a terminal state.
    /// Retryable by the caller after re-fetching.
    Conflict,
    /// Document, trail, department, or user absent.
    NotFound,
    /// Delete blocked by existing references.
    Integrity,
    /// Underlying store failure; the unit of work rolled back completely.
    Storage,
}

impl ErrorKind {
    /// Returns the HTTP status code for this error kind.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::Validation => 400,
            Self::Permission => 403,
            Self::NotFound => 404,
            Self::Conflict | Self::Integrity => 409,
            Self::Storage => 500,
        }
    }

    /// Returns the machine-readable code for API responses.
    #[must_use]
    pub const fn error_code(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::Permission => "PERMISSION_DENIED",
            Self::Conflict => "CONFLICT",
            Self::NotFound => "NOT_FOUND",
            Self::Integrity => "INTEGRITY_ERROR",
            Self::Storage => "STORAGE_FAULT",
        }
    }

    /// Whether the caller may retry the operation after re-fetching state.
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::Conflict)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ErrorKind::Validation, 400, "VALIDATION_ERROR")]
    #[case(ErrorKind::Permission, 403, "PERMISSION_DENIED")]
    #[case(ErrorKind::Conflict, 409, "CONFLICT")]
    #[case(ErrorKind::NotFound, 404, "NOT_FOUND")]
    #[case(ErrorKind::Integrity, 409, "INTEGRITY_ERROR")]
    #[case(ErrorKind::Storage, 500, "STORAGE_FAULT")]
    fn test_kind_codes(#[case] kind: ErrorKind, #[case] status: u16, #[case] code: &str) {
        assert_eq!(kind.status_code(), status);
        assert_eq!(kind.error_code(), code);
    }

    #[test]
    fn test_only_conflict_is_retryable() {
        assert!(ErrorKind::Conflict.is_retryable());
        assert!(!ErrorKind::Validation.is_retryable());
        assert!(!ErrorKind::Permission.is_retryable());
        assert!(!ErrorKind::NotFound.is_retryable());
        assert!(!ErrorKind::Integrity.is_retryable());
        assert!(!ErrorKind::Storage.is_retryable());
    }
}
