//! Access policy for document actions.
//!
//! A pure predicate mapping (actor role, actor department, document
//! department, requested action) to allow/deny. No I/O, no ambient
//! state; the actor is threaded in explicitly.

use uuid::Uuid;

use crate::lifecycle::error::LifecycleError;
use crate::lifecycle::types::{Actor, ActorRole};

/// The engine actions the policy gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyAction {
    /// Create a new document.
    CreateDocument,
    /// Transfer a document between departments.
    Move,
    /// Record an approve/reject/pay decision.
    Decide,
    /// Run the complete compound action.
    Complete,
    /// Close out an approved document.
    Finalize,
}

impl PolicyAction {
    /// The minimum role required for this action.
    #[must_use]
    pub const fn required_role(self) -> ActorRole {
        match self {
            Self::CreateDocument | Self::Move => ActorRole::Clerk,
            Self::Decide | Self::Finalize => ActorRole::Supervisor,
            Self::Complete => ActorRole::Manager,
        }
    }
}

/// Stateless policy engine.
///
/// Admins act anywhere; everyone else is confined to documents currently
/// in their own department. Creating a document carries no department
/// restriction since the document does not exist yet.
pub struct AccessPolicy;

impl AccessPolicy {
    /// Check whether the actor may perform the action, with a specific
    /// error describing the refusal.
    ///
    /// # Arguments
    /// * `actor` - The acting user
    /// * `document_department` - The department the document is currently in
    /// * `action` - The requested action
    ///
    /// # Returns
    /// * `Ok(())` if allowed
    /// * `Err(LifecycleError::InsufficientRole)` if the role is too low
    /// * `Err(LifecycleError::OutsideDepartment)` if the document is in
    ///   another department
    pub fn authorize(
        actor: &Actor,
        document_department: Uuid,
        action: PolicyAction,
    ) -> Result<(), LifecycleError> {
        if actor.role == ActorRole::Admin {
            return Ok(());
        }

        let required = action.required_role();
        if actor.role < required {
            return Err(LifecycleError::InsufficientRole {
                actor_role: actor.role.to_string(),
                required_role: required.to_string(),
            });
        }

        if action != PolicyAction::CreateDocument && actor.department_id != document_department {
            return Err(LifecycleError::OutsideDepartment { actor_id: actor.id });
        }

        Ok(())
    }

    /// Pure allow/deny predicate over the same rules as [`Self::authorize`].
    #[must_use]
    pub fn can_act(actor: &Actor, document_department: Uuid, action: PolicyAction) -> bool {
        Self::authorize(actor, document_department, action).is_ok()
    }
}
