//! Property-based tests for LifecycleService.
//!
//! These validate the state machine guarantees with randomized inputs:
//! guard precedence, terminal-state immutability, and consistency
//! between the transition functions and the transition table.

use proptest::prelude::*;
use uuid::Uuid;

use crate::lifecycle::error::LifecycleError;
use crate::lifecycle::service::LifecycleService;
use crate::lifecycle::types::{Decision, DocumentStatus, LifecycleAction};

/// Strategy for generating random DocumentStatus values.
fn arb_status() -> impl Strategy<Value = DocumentStatus> {
    prop_oneof![
        Just(DocumentStatus::Pending),
        Just(DocumentStatus::InMovement),
        Just(DocumentStatus::PendingApproval),
        Just(DocumentStatus::Approved),
        Just(DocumentStatus::Rejected),
        Just(DocumentStatus::Done),
    ]
}

/// Strategy for generating terminal statuses only.
fn arb_terminal_status() -> impl Strategy<Value = DocumentStatus> {
    prop_oneof![Just(DocumentStatus::Rejected), Just(DocumentStatus::Done)]
}

/// Strategy for generating random decisions.
fn arb_decision() -> impl Strategy<Value = Decision> {
    prop_oneof![
        Just(Decision::Approve),
        Just(Decision::Reject),
        Just(Decision::Pay),
        Just(Decision::Complete),
    ]
}

/// Strategy for generating random UUIDs.
fn arb_uuid() -> impl Strategy<Value = Uuid> {
    any::<u128>().prop_map(Uuid::from_u128)
}

/// Strategy for generating non-empty strings (for comments).
fn arb_non_empty_string() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,100}".prop_map(|s| s.trim().to_string())
}

/// Strategy for generating optional comments.
fn arb_comment() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), arb_non_empty_string().prop_map(Some)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 1: moves land in the right status
    // =========================================================================

    /// Moving to the final destination always pends approval.
    #[test]
    fn prop_move_to_final_destination_pends_approval(
        from_dept in arb_uuid(),
        to_dept in arb_uuid(),
        user_id in arb_uuid(),
        note in arb_comment()
    ) {
        prop_assume!(from_dept != to_dept);

        for status in [DocumentStatus::Pending, DocumentStatus::InMovement] {
            let result = LifecycleService::move_document(
                status, from_dept, Some(to_dept), to_dept, user_id, note.clone(),
            );
            let action = result.unwrap();
            prop_assert_eq!(action.new_status(), DocumentStatus::PendingApproval);
        }
    }

    /// Moving anywhere but the final destination keeps the document in movement.
    #[test]
    fn prop_move_elsewhere_stays_in_movement(
        from_dept in arb_uuid(),
        to_dept in arb_uuid(),
        final_dept in arb_uuid(),
        user_id in arb_uuid()
    ) {
        prop_assume!(from_dept != to_dept);
        prop_assume!(to_dept != final_dept);

        for status in [DocumentStatus::Pending, DocumentStatus::InMovement] {
            let result = LifecycleService::move_document(
                status, from_dept, Some(final_dept), to_dept, user_id, None,
            );
            let action = result.unwrap();
            prop_assert_eq!(action.new_status(), DocumentStatus::InMovement);

            if let LifecycleAction::Move { from_department, to_department, moved_by, .. } = action {
                prop_assert_eq!(from_department, from_dept);
                prop_assert_eq!(to_department, to_dept);
                prop_assert_eq!(moved_by, user_id);
            } else {
                prop_assert!(false, "Expected Move action");
            }
        }
    }

    // =========================================================================
    // Property 2: the same-department no-op guard
    // =========================================================================

    /// Moving to the current department is a validation error for every
    /// non-terminal status, regardless of actor or final destination.
    #[test]
    fn prop_move_to_same_department_always_validation(
        status in arb_status(),
        here in arb_uuid(),
        user_id in arb_uuid(),
        use_final in any::<bool>()
    ) {
        prop_assume!(!status.is_terminal());

        let final_destination = if use_final { Some(here) } else { None };
        let result = LifecycleService::move_document(
            status, here, final_destination, here, user_id, None,
        );
        prop_assert!(matches!(result, Err(LifecycleError::SameDepartment)));
    }

    // =========================================================================
    // Property 3: terminal states are immutable
    // =========================================================================

    /// Every operation on a terminal document reports the terminal conflict.
    #[test]
    fn prop_terminal_rejects_everything(
        status in arb_terminal_status(),
        dept_a in arb_uuid(),
        dept_b in arb_uuid(),
        user_id in arb_uuid(),
        decision in arb_decision(),
        comment in arb_comment()
    ) {
        prop_assume!(dept_a != dept_b);

        let moved = LifecycleService::move_document(
            status, dept_a, None, dept_b, user_id, None,
        );
        prop_assert!(
            matches!(moved, Err(LifecycleError::TerminalState { .. })),
            "expected TerminalState, got {:?}",
            moved
        );

        let decided = LifecycleService::decide(status, decision, user_id, comment.clone());
        prop_assert!(
            matches!(decided, Err(LifecycleError::TerminalState { .. })),
            "expected TerminalState, got {:?}",
            decided
        );

        let finalized = LifecycleService::finalize(status, user_id, comment);
        prop_assert!(
            matches!(finalized, Err(LifecycleError::TerminalState { .. })),
            "expected TerminalState, got {:?}",
            finalized
        );
    }

    // =========================================================================
    // Property 4: approving decisions
    // =========================================================================

    /// Approve and pay from any decidable status yield Approved with the
    /// actor recorded.
    #[test]
    fn prop_approving_decisions_yield_approved(
        user_id in arb_uuid(),
        comment in arb_comment()
    ) {
        for status in [DocumentStatus::Pending, DocumentStatus::PendingApproval] {
            for decision in [Decision::Approve, Decision::Pay] {
                let action = LifecycleService::decide(
                    status, decision, user_id, comment.clone(),
                ).unwrap();
                prop_assert_eq!(action.new_status(), DocumentStatus::Approved);

                if let LifecycleAction::Approve { decided_by, decision: recorded, .. } = action {
                    prop_assert_eq!(decided_by, user_id);
                    prop_assert_eq!(recorded, decision);
                } else {
                    prop_assert!(false, "Expected Approve action");
                }
            }
        }
    }

    /// Reject without a usable comment is a validation error from every
    /// decidable status.
    #[test]
    fn prop_reject_requires_comment(
        user_id in arb_uuid(),
        blank in "[ \t]{0,10}"
    ) {
        for status in [DocumentStatus::Pending, DocumentStatus::PendingApproval] {
            let result = LifecycleService::reject(status, user_id, blank.clone());
            prop_assert!(matches!(result, Err(LifecycleError::RejectionCommentRequired)));
        }
    }

    // =========================================================================
    // Property 5: actions agree with the transition table
    // =========================================================================

    /// Whatever operation succeeds, the resulting pair is in the table.
    #[test]
    fn prop_successful_actions_are_table_transitions(
        status in arb_status(),
        decision in arb_decision(),
        dept_a in arb_uuid(),
        dept_b in arb_uuid(),
        user_id in arb_uuid(),
        comment in arb_non_empty_string()
    ) {
        prop_assume!(dept_a != dept_b);
        prop_assume!(!comment.trim().is_empty());

        let attempts = [
            LifecycleService::move_document(
                status, dept_a, None, dept_b, user_id, None,
            ),
            LifecycleService::move_document(
                status, dept_a, Some(dept_b), dept_b, user_id, None,
            ),
            LifecycleService::decide(status, decision, user_id, Some(comment.clone())),
            LifecycleService::finalize(status, user_id, None),
        ];

        for attempt in attempts {
            if let Ok(action) = attempt {
                prop_assert!(
                    LifecycleService::is_valid_transition(status, action.new_status()),
                    "action produced {:?} -> {:?} outside the table",
                    status,
                    action.new_status()
                );
            }
        }
    }
}

// =========================================================================
// Unit tests for edge cases
// =========================================================================

#[cfg(test)]
mod edge_case_tests {
    use super::*;

    #[test]
    fn test_move_guard_order_terminal_beats_same_department() {
        let here = Uuid::new_v4();
        let result = LifecycleService::move_document(
            DocumentStatus::Rejected,
            here,
            None,
            here,
            Uuid::new_v4(),
            None,
        );
        assert!(matches!(result, Err(LifecycleError::TerminalState { .. })));
    }

    #[test]
    fn test_move_guard_order_same_department_beats_table() {
        // PendingApproval cannot move at all, but the no-op destination is
        // reported first.
        let here = Uuid::new_v4();
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
    fn test_decide_complete_from_approved_keeps_approved() {
        let action = LifecycleService::decide(
            DocumentStatus::Approved,
            Decision::Complete,
            Uuid::new_v4(),
            None,
        )
        .unwrap();
        assert_eq!(action.new_status(), DocumentStatus::Approved);
        assert!(matches!(action, LifecycleAction::Complete { .. }));
    }

    #[test]
    fn test_decide_approve_from_approved_is_conflict() {
        // Plain approve is not re-runnable once approved; only complete
        // and finalize apply.
        let result = LifecycleService::decide(
            DocumentStatus::Approved,
            Decision::Approve,
            Uuid::new_v4(),
            None,
        );
        assert!(matches!(
            result,
            Err(LifecycleError::InvalidTransition { .. })
        ));
    }
}
