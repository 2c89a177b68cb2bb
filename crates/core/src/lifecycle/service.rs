//! Lifecycle service for document state transitions.
//!
//! This module implements the single authoritative state machine for
//! documents. Every entry point (movement, decisions, finalization)
//! computes its transition here; no other code mutates status.

use chrono::Utc;
use uuid::Uuid;

use crate::lifecycle::error::LifecycleError;
use crate::lifecycle::types::{Decision, DocumentStatus, LifecycleAction};

/// Stateless service for validating and computing lifecycle transitions.
///
/// All methods are associated functions that validate a requested
/// transition against the current status and return the appropriate
/// `LifecycleAction` with audit trail information. Guard order is
/// uniform: terminal state first, then input validity, then the
/// transition table.
pub struct LifecycleService;

impl LifecycleService {
    /// Validate inputs for a new document and return its initial status.
    ///
    /// # Arguments
    /// * `title` - The document title (required, non-empty)
    /// * `doc_type` - The document type label (required, non-empty)
    ///
    /// # Returns
    /// * `Ok(DocumentStatus::Pending)` when inputs are valid
    /// * `Err(LifecycleError::TitleRequired)` if the title is blank
    /// * `Err(LifecycleError::DocTypeRequired)` if the type is blank
    pub fn create(title: &str, doc_type: &str) -> Result<DocumentStatus, LifecycleError> {
        if title.trim().is_empty() {
            return Err(LifecycleError::TitleRequired);
        }
        if doc_type.trim().is_empty() {
            return Err(LifecycleError::DocTypeRequired);
        }
        Ok(DocumentStatus::Pending)
    }

    /// Transfer a document to another department.
    ///
    /// Arrival at the final destination puts the document up for
    /// approval; any other destination keeps it in movement.
    ///
    /// # Arguments
    /// * `current_status` - The current status of the document
    /// * `current_department` - The department the document is in
    /// * `final_destination` - The department at which approval becomes due
    /// * `to_department` - The requested destination
    /// * `moved_by` - The user initiating the move
    /// * `note` - Optional note for the movement record
    ///
    /// # Returns
    /// * `Ok(LifecycleAction::Move)` if the transition is valid
    /// * `Err(LifecycleError::TerminalState)` if the document is closed
    /// * `Err(LifecycleError::SameDepartment)` if the destination equals
    ///   the current department
    /// * `Err(LifecycleError::InvalidTransition)` if the status does not
    ///   permit movement
    pub fn move_document(
        current_status: DocumentStatus,
        current_department: Uuid,
        final_destination: Option<Uuid>,
        to_department: Uuid,
        moved_by: Uuid,
        note: Option<String>,
    ) -> Result<LifecycleAction, LifecycleError> {
        if current_status.is_terminal() {
            return Err(LifecycleError::TerminalState {
                status: current_status,
            });
        }
        if to_department == current_department {
            return Err(LifecycleError::SameDepartment);
        }

        let new_status = if final_destination == Some(to_department) {
            DocumentStatus::PendingApproval
        } else {
            DocumentStatus::InMovement
        };

        if !current_status.can_move() {
            return Err(LifecycleError::InvalidTransition {
                from: current_status,
                to: new_status,
            });
        }

        Ok(LifecycleAction::Move {
            new_status,
            from_department: current_department,
            to_department,
            moved_by,
            moved_at: Utc::now(),
            note,
        })
    }

    /// Approve a document awaiting a decision.
    ///
    /// # Arguments
    /// * `current_status` - The current status of the document
    /// * `decided_by` - The user approving the document
    /// * `comment` - Optional comment from the approver
    ///
    /// # Returns
    /// * `Ok(LifecycleAction::Approve)` if the transition is valid
    /// * `Err(LifecycleError::TerminalState)` if the document is closed
    /// * `Err(LifecycleError::InvalidTransition)` if not decidable
    pub fn approve(
        current_status: DocumentStatus,
        decided_by: Uuid,
        comment: Option<String>,
    ) -> Result<LifecycleAction, LifecycleError> {
        if current_status.is_terminal() {
            return Err(LifecycleError::TerminalState {
                status: current_status,
            });
        }
        match current_status {
            DocumentStatus::Pending | DocumentStatus::PendingApproval => {
                Ok(LifecycleAction::Approve {
                    new_status: DocumentStatus::Approved,
                    decision: Decision::Approve,
                    decided_by,
                    decided_at: Utc::now(),
                    comment,
                })
            }
            _ => Err(LifecycleError::InvalidTransition {
                from: current_status,
                to: DocumentStatus::Approved,
            }),
        }
    }

    /// Record payment against a document; transitions like approve.
    ///
    /// # Arguments
    /// * `current_status` - The current status of the document
    /// * `decided_by` - The user recording the payment
    /// * `comment` - Optional comment
    ///
    /// # Returns
    /// * `Ok(LifecycleAction::Approve)` with `Decision::Pay` if valid
    /// * `Err(LifecycleError::TerminalState)` if the document is closed
    /// * `Err(LifecycleError::InvalidTransition)` if not decidable
    pub fn pay(
        current_status: DocumentStatus,
        decided_by: Uuid,
        comment: Option<String>,
    ) -> Result<LifecycleAction, LifecycleError> {
        if current_status.is_terminal() {
            return Err(LifecycleError::TerminalState {
                status: current_status,
            });
        }
        match current_status {
            DocumentStatus::Pending | DocumentStatus::PendingApproval => {
                Ok(LifecycleAction::Approve {
                    new_status: DocumentStatus::Approved,
                    decision: Decision::Pay,
                    decided_by,
                    decided_at: Utc::now(),
                    comment,
                })
            }
            _ => Err(LifecycleError::InvalidTransition {
                from: current_status,
                to: DocumentStatus::Approved,
            }),
        }
    }

    /// Reject a document (terminal).
    ///
    /// Status guards run before the comment guard so a rejected or done
    /// document reports a conflict, not a missing comment.
    ///
    /// # Arguments
    /// * `current_status` - The current status of the document
    /// * `decided_by` - The user rejecting the document
    /// * `comment` - The rejection comment (required)
    ///
    /// # Returns
    /// * `Ok(LifecycleAction::Reject)` if the transition is valid
    /// * `Err(LifecycleError::TerminalState)` if the document is closed
    /// * `Err(LifecycleError::InvalidTransition)` if not decidable
    /// * `Err(LifecycleError::RejectionCommentRequired)` if the comment
    ///   is empty
    pub fn reject(
        current_status: DocumentStatus,
        decided_by: Uuid,
        comment: String,
    ) -> Result<LifecycleAction, LifecycleError> {
        if current_status.is_terminal() {
            return Err(LifecycleError::TerminalState {
                status: current_status,
            });
        }
        if !current_status.can_decide() {
            return Err(LifecycleError::InvalidTransition {
                from: current_status,
                to: DocumentStatus::Rejected,
            });
        }
        if comment.trim().is_empty() {
            return Err(LifecycleError::RejectionCommentRequired);
        }

        Ok(LifecycleAction::Reject {
            new_status: DocumentStatus::Rejected,
            decided_by,
            decided_at: Utc::now(),
            comment,
        })
    }

    /// Run the complete compound action: approve and hand the document
    /// off to the dispatch department.
    ///
    /// Permitted from any decidable status and from an already-approved
    /// document; the resulting status is always `Approved`. The caller
    /// appends the system movement to the dispatch department.
    ///
    /// # Arguments
    /// * `current_status` - The current status of the document
    /// * `decided_by` - The user completing the document
    /// * `comment` - Optional comment
    ///
    /// # Returns
    /// * `Ok(LifecycleAction::Complete)` if the transition is valid
    /// * `Err(LifecycleError::TerminalState)` if the document is closed
    /// * `Err(LifecycleError::InvalidTransition)` if in movement
    pub fn complete(
        current_status: DocumentStatus,
        decided_by: Uuid,
        comment: Option<String>,
    ) -> Result<LifecycleAction, LifecycleError> {
        if current_status.is_terminal() {
            return Err(LifecycleError::TerminalState {
                status: current_status,
            });
        }
        match current_status {
            DocumentStatus::Pending
            | DocumentStatus::PendingApproval
            | DocumentStatus::Approved => Ok(LifecycleAction::Complete {
                new_status: DocumentStatus::Approved,
                decided_by,
                decided_at: Utc::now(),
                comment,
            }),
            _ => Err(LifecycleError::InvalidTransition {
                from: current_status,
                to: DocumentStatus::Approved,
            }),
        }
    }

    /// Close out an approved document (terminal).
    ///
    /// # Arguments
    /// * `current_status` - The current status of the document
    /// * `finalized_by` - The user finalizing the document
    /// * `note` - Optional finalization note
    ///
    /// # Returns
    /// * `Ok(LifecycleAction::Finalize)` if the transition is valid
    /// * `Err(LifecycleError::TerminalState)` if already closed
    /// * `Err(LifecycleError::InvalidTransition)` if not approved
    pub fn finalize(
        current_status: DocumentStatus,
        finalized_by: Uuid,
        note: Option<String>,
    ) -> Result<LifecycleAction, LifecycleError> {
        if current_status.is_terminal() {
            return Err(LifecycleError::TerminalState {
                status: current_status,
            });
        }
        match current_status {
            DocumentStatus::Approved => Ok(LifecycleAction::Finalize {
                new_status: DocumentStatus::Done,
                finalized_by,
                finalized_at: Utc::now(),
                note,
            }),
            _ => Err(LifecycleError::InvalidTransition {
                from: current_status,
                to: DocumentStatus::Done,
            }),
        }
    }

    /// Dispatch a decision to the matching transition function.
    ///
    /// # Arguments
    /// * `current_status` - The current status of the document
    /// * `decision` - The decision to record
    /// * `decided_by` - The deciding user
    /// * `comment` - Optional comment (mandatory for reject)
    pub fn decide(
        current_status: DocumentStatus,
        decision: Decision,
        decided_by: Uuid,
        comment: Option<String>,
    ) -> Result<LifecycleAction, LifecycleError> {
        match decision {
            Decision::Approve => Self::approve(current_status, decided_by, comment),
            Decision::Pay => Self::pay(current_status, decided_by, comment),
            Decision::Reject => {
                Self::reject(current_status, decided_by, comment.unwrap_or_default())
            }
            Decision::Complete => Self::complete(current_status, decided_by, comment),
        }
    }

    /// Check if a status transition is valid.
    ///
    /// Valid transitions:
    /// - Pending → InMovement | PendingApproval | Approved | Rejected
    /// - InMovement → InMovement | PendingApproval
    /// - PendingApproval → Approved | Rejected
    /// - Approved → Approved | Done
    ///
    /// The two same-status pairs are real transitions: continued routing
    /// keeps `InMovement`, and the complete hand-off keeps `Approved`.
    ///
    /// # Arguments
    /// * `from` - The current status
    /// * `to` - The target status
    ///
    /// # Returns
    /// `true` if the transition is valid, `false` otherwise
    #[must_use]
    pub fn is_valid_transition(from: DocumentStatus, to: DocumentStatus) -> bool {
        matches!(
            (from, to),
            (
                DocumentStatus::Pending,
                DocumentStatus::InMovement
                    | DocumentStatus::PendingApproval
                    | DocumentStatus::Approved
                    | DocumentStatus::Rejected
            ) | (
                DocumentStatus::InMovement,
                DocumentStatus::InMovement | DocumentStatus::PendingApproval
            ) | (
                DocumentStatus::PendingApproval,
                DocumentStatus::Approved | DocumentStatus::Rejected
            ) | (
                DocumentStatus::Approved,
                DocumentStatus::Approved | DocumentStatus::Done
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dept() -> Uuid {
        Uuid::new_v4()
    }

    #[test]
    fn test_create_valid() {
        let result = LifecycleService::create("Invoice 42", "invoice");
        assert_eq!(result.unwrap(), DocumentStatus::Pending);
    }

    #[test]
    fn test_create_empty_title_fails() {
        let result = LifecycleService::create("  ", "invoice");
        assert!(matches!(result, Err(LifecycleError::TitleRequired)));
    }

    #[test]
    fn test_create_empty_type_fails() {
        let result = LifecycleService::create("Invoice 42", "");
        assert!(matches!(result, Err(LifecycleError::DocTypeRequired)));
    }

    #[test]
    fn test_move_to_other_department() {
        let (from, to) = (dept(), dept());
        let user_id = Uuid::new_v4();
        let result = LifecycleService::move_document(
            DocumentStatus::Pending,
            from,
            None,
            to,
            user_id,
            None,
        );
        let action = result.unwrap();
        assert_eq!(action.new_status(), DocumentStatus::InMovement);
    }

    #[test]
    fn test_move_to_final_destination_pends_approval() {
        let (from, to) = (dept(), dept());
        let result = LifecycleService::move_document(
            DocumentStatus::InMovement,
            from,
            Some(to),
            to,
            Uuid::new_v4(),
            Some("arriving".to_string()),
        );
        assert_eq!(result.unwrap().new_status(), DocumentStatus::PendingApproval);
    }

    #[test]
    fn test_move_to_same_department_fails() {
        let here = dept();
        let result = LifecycleService::move_document(
            DocumentStatus::Pending,
            here,
            None,
            here,
            Uuid::new_v4(),
            None,
        );
        assert!(matches!(result, Err(LifecycleError::SameDepartment)));
    }

    #[test]
    fn test_move_same_department_fails_even_at_final_destination() {
        // A second move to the final destination trips the no-op guard,
        // not the transition table.
        let here = dept();
        let result = LifecycleService::move_document(
            DocumentStatus::PendingApproval,
            here,
            Some(here),
            here,
            Uuid::new_v4(),
            None,
        );
        assert!(matches!(result, Err(LifecycleError::SameDepartment)));
    }

    #[test]
    fn test_move_from_terminal_fails_with_terminal_state() {
        for status in [DocumentStatus::Rejected, DocumentStatus::Done] {
            let result = LifecycleService::move_document(
                status,
                dept(),
                None,
                dept(),
                Uuid::new_v4(),
                None,
            );
            assert!(matches!(result, Err(LifecycleError::TerminalState { .. })));
        }
    }

    #[test]
    fn test_move_from_non_movable_fails() {
        for status in [DocumentStatus::PendingApproval, DocumentStatus::Approved] {
            let result = LifecycleService::move_document(
                status,
                dept(),
                None,
                dept(),
                Uuid::new_v4(),
                None,
            );
            assert!(matches!(
                result,
                Err(LifecycleError::InvalidTransition { .. })
            ));
        }
    }

    #[test]
    fn test_approve_from_pending() {
        let result = LifecycleService::approve(DocumentStatus::Pending, Uuid::new_v4(), None);
        assert_eq!(result.unwrap().new_status(), DocumentStatus::Approved);
    }

    #[test]
    fn test_approve_from_pending_approval() {
        let result = LifecycleService::approve(
            DocumentStatus::PendingApproval,
            Uuid::new_v4(),
            Some("looks good".to_string()),
        );
        assert_eq!(result.unwrap().new_status(), DocumentStatus::Approved);
    }

    #[test]
    fn test_approve_from_in_movement_fails() {
        let result = LifecycleService::approve(DocumentStatus::InMovement, Uuid::new_v4(), None);
        assert!(matches!(
            result,
            Err(LifecycleError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_approve_from_terminal_fails() {
        let result = LifecycleService::approve(DocumentStatus::Rejected, Uuid::new_v4(), None);
        assert!(matches!(result, Err(LifecycleError::TerminalState { .. })));
    }

    #[test]
    fn test_pay_records_pay_decision() {
        let result = LifecycleService::pay(DocumentStatus::PendingApproval, Uuid::new_v4(), None);
        let action = result.unwrap();
        assert_eq!(action.new_status(), DocumentStatus::Approved);
        if let LifecycleAction::Approve { decision, .. } = action {
            assert_eq!(decision, Decision::Pay);
        } else {
            panic!("expected Approve action");
        }
    }

    #[test]
    fn test_reject_with_comment() {
        let result = LifecycleService::reject(
            DocumentStatus::PendingApproval,
            Uuid::new_v4(),
            "Incomplete paperwork".to_string(),
        );
        assert_eq!(result.unwrap().new_status(), DocumentStatus::Rejected);
    }

    #[test]
    fn test_reject_empty_comment_fails() {
        let result =
            LifecycleService::reject(DocumentStatus::Pending, Uuid::new_v4(), String::new());
        assert!(matches!(
            result,
            Err(LifecycleError::RejectionCommentRequired)
        ));
    }

    #[test]
    fn test_reject_whitespace_comment_fails() {
        let result =
            LifecycleService::reject(DocumentStatus::Pending, Uuid::new_v4(), "   ".to_string());
        assert!(matches!(
            result,
            Err(LifecycleError::RejectionCommentRequired)
        ));
    }

    #[test]
    fn test_reject_terminal_beats_comment_guard() {
        // An empty comment on a closed document reports the conflict,
        // not the missing comment.
        let result =
            LifecycleService::reject(DocumentStatus::Rejected, Uuid::new_v4(), String::new());
        assert!(matches!(result, Err(LifecycleError::TerminalState { .. })));
    }

    #[test]
    fn test_complete_from_approved() {
        let result = LifecycleService::complete(DocumentStatus::Approved, Uuid::new_v4(), None);
        assert_eq!(result.unwrap().new_status(), DocumentStatus::Approved);
    }

    #[test]
    fn test_complete_from_pending_approval() {
        let result =
            LifecycleService::complete(DocumentStatus::PendingApproval, Uuid::new_v4(), None);
        assert_eq!(result.unwrap().new_status(), DocumentStatus::Approved);
    }

    #[test]
    fn test_complete_from_in_movement_fails() {
        let result = LifecycleService::complete(DocumentStatus::InMovement, Uuid::new_v4(), None);
        assert!(matches!(
            result,
            Err(LifecycleError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_complete_from_done_fails() {
        let result = LifecycleService::complete(DocumentStatus::Done, Uuid::new_v4(), None);
        assert!(matches!(result, Err(LifecycleError::TerminalState { .. })));
    }

    #[test]
    fn test_finalize_from_approved() {
        let result = LifecycleService::finalize(
            DocumentStatus::Approved,
            Uuid::new_v4(),
            Some("archived under 2026/Q3".to_string()),
        );
        assert_eq!(result.unwrap().new_status(), DocumentStatus::Done);
    }

    #[test]
    fn test_finalize_from_non_approved_fails() {
        for status in [
            DocumentStatus::Pending,
            DocumentStatus::InMovement,
            DocumentStatus::PendingApproval,
        ] {
            let result = LifecycleService::finalize(status, Uuid::new_v4(), None);
            assert!(matches!(
                result,
                Err(LifecycleError::InvalidTransition { .. })
            ));
        }
    }

    #[test]
    fn test_finalize_from_done_fails() {
        let result = LifecycleService::finalize(DocumentStatus::Done, Uuid::new_v4(), None);
        assert!(matches!(result, Err(LifecycleError::TerminalState { .. })));
    }

    #[test]
    fn test_decide_dispatches_reject_without_comment() {
        let result = LifecycleService::decide(
            DocumentStatus::PendingApproval,
            Decision::Reject,
            Uuid::new_v4(),
            None,
        );
        assert!(matches!(
            result,
            Err(LifecycleError::RejectionCommentRequired)
        ));
    }

    #[test]
    fn test_decide_dispatches_each_decision() {
        let user_id = Uuid::new_v4();
        for (decision, expected) in [
            (Decision::Approve, DocumentStatus::Approved),
            (Decision::Pay, DocumentStatus::Approved),
            (Decision::Complete, DocumentStatus::Approved),
        ] {
            let action =
                LifecycleService::decide(DocumentStatus::Pending, decision, user_id, None)
                    .unwrap();
            assert_eq!(action.new_status(), expected);
        }

        let action = LifecycleService::decide(
            DocumentStatus::Pending,
            Decision::Reject,
            user_id,
            Some("missing signature".to_string()),
        )
        .unwrap();
        assert_eq!(action.new_status(), DocumentStatus::Rejected);
    }

    #[test]
    fn test_is_valid_transition_matrix() {
        use DocumentStatus as S;
        let statuses = [
            S::Pending,
            S::InMovement,
            S::PendingApproval,
            S::Approved,
            S::Rejected,
            S::Done,
        ];
        let valid = [
            (S::Pending, S::InMovement),
            (S::Pending, S::PendingApproval),
            (S::Pending, S::Approved),
            (S::Pending, S::Rejected),
            (S::InMovement, S::InMovement),
            (S::InMovement, S::PendingApproval),
            (S::PendingApproval, S::Approved),
            (S::PendingApproval, S::Rejected),
            (S::Approved, S::Approved),
            (S::Approved, S::Done),
        ];

        for from in &statuses {
            for to in &statuses {
                let expected = valid.contains(&(*from, *to));
                assert_eq!(
                    LifecycleService::is_valid_transition(*from, *to),
                    expected,
                    "is_valid_transition({from:?}, {to:?}) should be {expected}"
                );
            }
        }
    }

    #[test]
    fn test_terminal_states_transition_nowhere() {
        use DocumentStatus as S;
        for from in [S::Rejected, S::Done] {
            for to in [
                S::Pending,
                S::InMovement,
                S::PendingApproval,
                S::Approved,
                S::Rejected,
                S::Done,
            ] {
                assert!(!LifecycleService::is_valid_transition(from, to));
            }
        }
    }
}
