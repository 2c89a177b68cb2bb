//! Property-based tests for AccessPolicy.
//!
//! The policy is a pure predicate, which makes it a natural target for
//! randomized checking: admin bypass, role monotonicity, and department
//! confinement must hold for every combination of inputs.

use proptest::prelude::*;
use uuid::Uuid;

use crate::lifecycle::error::LifecycleError;
use crate::lifecycle::policy::{AccessPolicy, PolicyAction};
use crate::lifecycle::types::{Actor, ActorRole};

/// Strategy for generating random roles.
fn arb_role() -> impl Strategy<Value = ActorRole> {
    prop_oneof![
        Just(ActorRole::Clerk),
        Just(ActorRole::Supervisor),
        Just(ActorRole::Manager),
        Just(ActorRole::Admin),
    ]
}

/// Strategy for generating random policy actions.
fn arb_action() -> impl Strategy<Value = PolicyAction> {
    prop_oneof![
        Just(PolicyAction::CreateDocument),
        Just(PolicyAction::Move),
        Just(PolicyAction::Decide),
        Just(PolicyAction::Complete),
        Just(PolicyAction::Finalize),
    ]
}

/// Strategy for generating random UUIDs.
fn arb_uuid() -> impl Strategy<Value = Uuid> {
    any::<u128>().prop_map(Uuid::from_u128)
}

/// Strategy for generating random actors.
fn arb_actor() -> impl Strategy<Value = Actor> {
    (arb_uuid(), arb_role(), arb_uuid()).prop_map(|(id, role, department_id)| Actor {
        id,
        role,
        department_id,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Admins are allowed every action on every document.
    #[test]
    fn prop_admin_always_allowed(
        id in arb_uuid(),
        admin_dept in arb_uuid(),
        doc_dept in arb_uuid(),
        action in arb_action()
    ) {
        let admin = Actor { id, role: ActorRole::Admin, department_id: admin_dept };
        prop_assert!(AccessPolicy::can_act(&admin, doc_dept, action));
    }

    /// can_act is exactly authorize().is_ok().
    #[test]
    fn prop_can_act_matches_authorize(
        actor in arb_actor(),
        doc_dept in arb_uuid(),
        action in arb_action()
    ) {
        prop_assert_eq!(
            AccessPolicy::can_act(&actor, doc_dept, action),
            AccessPolicy::authorize(&actor, doc_dept, action).is_ok()
        );
    }

    /// A role below the requirement is refused with InsufficientRole,
    /// even in the actor's own department.
    #[test]
    fn prop_insufficient_role_refused(
        actor in arb_actor(),
        action in arb_action()
    ) {
        prop_assume!(actor.role < action.required_role());

        let result = AccessPolicy::authorize(&actor, actor.department_id, action);
        prop_assert!(
            matches!(result, Err(LifecycleError::InsufficientRole { .. })),
            "expected InsufficientRole, got {:?}",
            result
        );
    }

    /// A sufficient but non-admin role acting outside its department is
    /// refused with OutsideDepartment (document actions only).
    #[test]
    fn prop_department_confinement(
        actor in arb_actor(),
        doc_dept in arb_uuid(),
        action in arb_action()
    ) {
        prop_assume!(actor.role != ActorRole::Admin);
        prop_assume!(actor.role >= action.required_role());
        prop_assume!(actor.department_id != doc_dept);
        prop_assume!(action != PolicyAction::CreateDocument);

        let result = AccessPolicy::authorize(&actor, doc_dept, action);
        prop_assert!(
            matches!(result, Err(LifecycleError::OutsideDepartment { .. })),
            "expected OutsideDepartment, got {:?}",
            result
        );
    }

    /// Permission is monotone in role: raising the role never revokes
    /// an allowed action.
    #[test]
    fn prop_role_monotonicity(
        actor in arb_actor(),
        doc_dept in arb_uuid(),
        action in arb_action(),
        higher in arb_role()
    ) {
        prop_assume!(higher >= actor.role);

        if AccessPolicy::can_act(&actor, doc_dept, action) {
            let promoted = Actor { role: higher, ..actor };
            prop_assert!(AccessPolicy::can_act(&promoted, doc_dept, action));
        }
    }

    /// CreateDocument is allowed for every role in every department.
    #[test]
    fn prop_create_is_unrestricted(
        actor in arb_actor(),
        doc_dept in arb_uuid()
    ) {
        prop_assert!(AccessPolicy::can_act(&actor, doc_dept, PolicyAction::CreateDocument));
    }
}
