//! Lifecycle domain types for document routing and approval.
//!
//! This module defines the core types used for managing document
//! status transitions, movement between departments, and decisions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Document status in the routing and approval lifecycle.
///
/// Documents progress through these states from creation to a terminal
/// state. The valid transitions are:
/// - Pending → InMovement (move to a non-final department)
/// - Pending / InMovement → PendingApproval (move to the final destination)
/// - InMovement → InMovement (continued routing)
/// - Pending / PendingApproval → Approved (approve / pay / complete)
/// - Pending / PendingApproval → Rejected (reject, terminal)
/// - Approved → Approved (complete: dispatch routing, status unchanged)
/// - Approved → Done (finalize, terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Document was created and has not left its initial department.
    Pending,
    /// Document is being routed between departments.
    InMovement,
    /// Document arrived at its final destination and awaits a decision.
    PendingApproval,
    /// Document has been approved (or paid, or completed).
    Approved,
    /// Document was rejected (terminal, immutable).
    Rejected,
    /// Document was finalized (terminal, immutable).
    Done,
}

impl DocumentStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InMovement => "in_movement",
            Self::PendingApproval => "pending_approval",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Done => "done",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "in_movement" => Some(Self::InMovement),
            "pending_approval" => Some(Self::PendingApproval),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    /// Returns true if no further transition is permitted.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Done)
    }

    /// Returns true if the document can be moved to another department.
    #[must_use]
    pub fn can_move(&self) -> bool {
        matches!(self, Self::Pending | Self::InMovement)
    }

    /// Returns true if an approve/reject/pay decision can be recorded.
    #[must_use]
    pub fn can_decide(&self) -> bool {
        matches!(self, Self::Pending | Self::PendingApproval)
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A decision recorded against a document at a department stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Approve the document at the current stop.
    Approve,
    /// Reject the document (terminal; requires a comment).
    Reject,
    /// Record payment; transitions like approve.
    Pay,
    /// Compound action: approve and route to the dispatch department.
    Complete,
}

impl Decision {
    /// Returns the string representation of the decision.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Pay => "pay",
            Self::Complete => "complete",
        }
    }

    /// Parses a decision from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "approve" => Some(Self::Approve),
            "reject" => Some(Self::Reject),
            "pay" => Some(Self::Pay),
            "complete" => Some(Self::Complete),
            _ => None,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Actor role in the department hierarchy.
///
/// Roles are ordered from lowest to highest privilege.
/// Higher roles can perform all actions of lower roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorRole {
    /// Can create documents and initiate movement.
    Clerk = 0,
    /// Can additionally decide (approve/reject/pay) and finalize.
    Supervisor = 1,
    /// Can additionally run the complete compound action.
    Manager = 2,
    /// Full access across all departments.
    Admin = 3,
}

impl ActorRole {
    /// Parses a role from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clerk" => Some(Self::Clerk),
            "supervisor" => Some(Self::Supervisor),
            "manager" => Some(Self::Manager),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Returns the string representation of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clerk => "clerk",
            Self::Supervisor => "supervisor",
            Self::Manager => "manager",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for ActorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The acting user, threaded explicitly through every engine call.
///
/// Supplied by the identity provider per request; the engine trusts it
/// and never consults ambient session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// User identity.
    pub id: Uuid,
    /// Role in the hierarchy.
    pub role: ActorRole,
    /// The department the actor belongs to.
    pub department_id: Uuid,
}

/// Lifecycle action representing a validated state transition with audit data.
///
/// Each variant captures the action performed, the resulting status,
/// and the audit trail information (who, when, where, why).
#[derive(Debug, Clone)]
pub enum LifecycleAction {
    /// Transfer the document to another department.
    Move {
        /// The new status after the move.
        new_status: DocumentStatus,
        /// The department the document leaves.
        from_department: Uuid,
        /// The department the document arrives at.
        to_department: Uuid,
        /// The user who initiated the move.
        moved_by: Uuid,
        /// When the move happened.
        moved_at: DateTime<Utc>,
        /// Optional note for the movement record.
        note: Option<String>,
    },
    /// Record an approving decision (approve or pay).
    Approve {
        /// The new status after the decision.
        new_status: DocumentStatus,
        /// Which approving decision was recorded.
        decision: Decision,
        /// The user who decided.
        decided_by: Uuid,
        /// When the decision was recorded.
        decided_at: DateTime<Utc>,
        /// Optional comment from the decider.
        comment: Option<String>,
    },
    /// Reject the document (terminal).
    Reject {
        /// The new status after rejection (Rejected).
        new_status: DocumentStatus,
        /// The user who rejected.
        decided_by: Uuid,
        /// When the rejection was recorded.
        decided_at: DateTime<Utc>,
        /// The mandatory rejection comment.
        comment: String,
    },
    /// Compound action: approve and hand off to the dispatch department.
    Complete {
        /// The new status after completion (Approved).
        new_status: DocumentStatus,
        /// The user who completed.
        decided_by: Uuid,
        /// When the completion was recorded.
        decided_at: DateTime<Utc>,
        /// Optional comment from the decider.
        comment: Option<String>,
    },
    /// Close out an approved document (terminal).
    Finalize {
        /// The new status after finalization (Done).
        new_status: DocumentStatus,
        /// The user who finalized.
        finalized_by: Uuid,
        /// When the document was finalized.
        finalized_at: DateTime<Utc>,
        /// Optional finalization note.
        note: Option<String>,
    },
}

impl LifecycleAction {
    /// Returns the new status resulting from this action.
    #[must_use]
    pub fn new_status(&self) -> DocumentStatus {
        match self {
            Self::Move { new_status, .. }
            | Self::Approve { new_status, .. }
            | Self::Reject { new_status, .. }
            | Self::Complete { new_status, .. }
            | Self::Finalize { new_status, .. } => *new_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_as_str() {
        assert_eq!(DocumentStatus::Pending.as_str(), "pending");
        assert_eq!(DocumentStatus::InMovement.as_str(), "in_movement");
        assert_eq!(DocumentStatus::PendingApproval.as_str(), "pending_approval");
        assert_eq!(DocumentStatus::Approved.as_str(), "approved");
        assert_eq!(DocumentStatus::Rejected.as_str(), "rejected");
        assert_eq!(DocumentStatus::Done.as_str(), "done");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            DocumentStatus::parse("pending"),
            Some(DocumentStatus::Pending)
        );
        assert_eq!(
            DocumentStatus::parse("IN_MOVEMENT"),
            Some(DocumentStatus::InMovement)
        );
        assert_eq!(
            DocumentStatus::parse("Pending_Approval"),
            Some(DocumentStatus::PendingApproval)
        );
        assert_eq!(
            DocumentStatus::parse("approved"),
            Some(DocumentStatus::Approved)
        );
        assert_eq!(
            DocumentStatus::parse("rejected"),
            Some(DocumentStatus::Rejected)
        );
        assert_eq!(DocumentStatus::parse("done"), Some(DocumentStatus::Done));
        assert_eq!(DocumentStatus::parse("finalized"), None);
        assert_eq!(DocumentStatus::parse("invalid"), None);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(format!("{}", DocumentStatus::Pending), "pending");
        assert_eq!(format!("{}", DocumentStatus::InMovement), "in_movement");
    }

    #[test]
    fn test_status_terminal() {
        assert!(!DocumentStatus::Pending.is_terminal());
        assert!(!DocumentStatus::InMovement.is_terminal());
        assert!(!DocumentStatus::PendingApproval.is_terminal());
        assert!(!DocumentStatus::Approved.is_terminal());
        assert!(DocumentStatus::Rejected.is_terminal());
        assert!(DocumentStatus::Done.is_terminal());
    }

    #[test]
    fn test_status_can_move() {
        assert!(DocumentStatus::Pending.can_move());
        assert!(DocumentStatus::InMovement.can_move());
        assert!(!DocumentStatus::PendingApproval.can_move());
        assert!(!DocumentStatus::Approved.can_move());
        assert!(!DocumentStatus::Rejected.can_move());
        assert!(!DocumentStatus::Done.can_move());
    }

    #[test]
    fn test_status_can_decide() {
        assert!(DocumentStatus::Pending.can_decide());
        assert!(!DocumentStatus::InMovement.can_decide());
        assert!(DocumentStatus::PendingApproval.can_decide());
        assert!(!DocumentStatus::Approved.can_decide());
        assert!(!DocumentStatus::Rejected.can_decide());
        assert!(!DocumentStatus::Done.can_decide());
    }

    #[test]
    fn test_decision_round_trip() {
        for decision in [
            Decision::Approve,
            Decision::Reject,
            Decision::Pay,
            Decision::Complete,
        ] {
            assert_eq!(Decision::parse(decision.as_str()), Some(decision));
        }
        assert_eq!(Decision::parse("invalid"), None);
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(ActorRole::parse("clerk"), Some(ActorRole::Clerk));
        assert_eq!(ActorRole::parse("SUPERVISOR"), Some(ActorRole::Supervisor));
        assert_eq!(ActorRole::parse("Manager"), Some(ActorRole::Manager));
        assert_eq!(ActorRole::parse("admin"), Some(ActorRole::Admin));
        assert_eq!(ActorRole::parse("invalid"), None);
    }

    #[test]
    fn test_role_ordering() {
        assert!(ActorRole::Clerk < ActorRole::Supervisor);
        assert!(ActorRole::Supervisor < ActorRole::Manager);
        assert!(ActorRole::Manager < ActorRole::Admin);
    }
}
