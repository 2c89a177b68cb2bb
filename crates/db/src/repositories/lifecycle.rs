//! Lifecycle repository for document state transitions.
//!
//! This is the single entry point for every document mutation:
//! creation, movement, decisions, the complete hand-off, and
//! finalization. Each operation validates through `LifecycleService`,
//! appends its ledger records, and writes the new status with a
//! conditional update so two racing writers can never both win.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde::Serialize;
use uuid::Uuid;

use doctra_core::lifecycle::{
    AccessPolicy, Actor, Decision, LifecycleError, LifecycleService, NotificationEvent,
    NotificationSink, PolicyAction,
};
use doctra_core::trail::{TrailService, TrailStep};
use doctra_shared::types::{PageRequest, PageResponse};

use crate::entities::{
    departments, document_approvals, document_movements, documents,
    sea_orm_active_enums::{DecisionType, DocumentStatus},
    trail_steps, trails, users,
};

/// Input for registering a new document.
#[derive(Debug, Clone)]
pub struct CreateDocumentInput {
    /// Document title.
    pub title: String,
    /// Free-form document type label.
    pub doc_type: String,
    /// Department the document is registered in.
    pub department_id: Uuid,
    /// Explicit final destination; takes precedence over the trail seed.
    pub final_destination_id: Option<Uuid>,
    /// Optional trail; seeds the final destination when none is given
    /// explicitly.
    pub trail_id: Option<Uuid>,
    /// Optional opaque pointer into external file storage.
    pub file_ref: Option<String>,
}

/// Filters for listing documents.
#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    /// Filter by status.
    pub status: Option<DocumentStatus>,
    /// Filter by current department.
    pub department_id: Option<Uuid>,
}

/// One entry in a document's merged history.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HistoryEvent {
    /// A recorded decision.
    Approval(document_approvals::Model),
    /// A department-to-department transfer.
    Movement(document_movements::Model),
}

impl HistoryEvent {
    fn created_at(&self) -> chrono::DateTime<chrono::FixedOffset> {
        match self {
            Self::Approval(a) => a.created_at,
            Self::Movement(m) => m.created_at,
        }
    }

    /// Tie-break rank; lower sorts first.
    const fn tie_rank(&self) -> u8 {
        match self {
            Self::Approval(_) => 0,
            Self::Movement(_) => 1,
        }
    }
}

/// A document together with its merged event history, ascending.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentHistory {
    /// The document row.
    pub document: documents::Model,
    /// Movements and approvals merged in chronological order.
    pub events: Vec<HistoryEvent>,
}

/// Lifecycle repository coordinating validation, ledger appends, and
/// conditional status writes.
#[derive(Clone)]
pub struct LifecycleRepository {
    db: DatabaseConnection,
    notifier: Arc<dyn NotificationSink>,
}

impl LifecycleRepository {
    /// Creates a new lifecycle repository.
    #[must_use]
    pub fn new(db: DatabaseConnection, notifier: Arc<dyn NotificationSink>) -> Self {
        Self { db, notifier }
    }

    /// Registers a new document in its initial department.
    ///
    /// The final destination comes from the input when given, otherwise
    /// from the last step of the referenced trail; trails never
    /// constrain later movement.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Title or type is blank
    /// - The actor is unknown or not permitted
    /// - A referenced department or trail does not exist
    /// - Database operation fails
    pub async fn create_document(
        &self,
        actor: &Actor,
        input: CreateDocumentInput,
    ) -> Result<documents::Model, LifecycleError> {
        // Initial status from the state machine
        let status = LifecycleService::create(&input.title, &input.doc_type)?;

        ensure_actor(&self.db, actor.id).await?;
        AccessPolicy::authorize(actor, input.department_id, PolicyAction::CreateDocument)?;

        // Registration department must exist
        departments::Entity::find_by_id(input.department_id)
            .one(&self.db)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?
            .ok_or(LifecycleError::DepartmentNotFound(input.department_id))?;

        // A referenced trail is validated even when an explicit final
        // destination overrides its seed
        let trail_destination = match input.trail_id {
            Some(trail_id) => self.trail_final_destination(trail_id).await?,
            None => None,
        };
        let final_destination_id = match input.final_destination_id {
            Some(department_id) => {
                departments::Entity::find_by_id(department_id)
                    .one(&self.db)
                    .await
                    .map_err(|e| LifecycleError::Database(e.to_string()))?
                    .ok_or(LifecycleError::DepartmentNotFound(department_id))?;
                Some(department_id)
            }
            None => trail_destination,
        };

        let now = Utc::now().into();
        let document = documents::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(input.title),
            doc_type: Set(input.doc_type),
            status: Set(core_status_to_db(status)),
            department_id: Set(input.department_id),
            final_destination_id: Set(final_destination_id),
            trail_id: Set(input.trail_id),
            file_ref: Set(input.file_ref),
            uploaded_by: Set(actor.id),
            submitted_by: Set(None),
            finalized_by: Set(None),
            finalized_at: Set(None),
            finalize_note: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        document
            .insert(&self.db)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))
    }

    /// Fetches a single document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not exist or the query
    /// fails.
    pub async fn get_document(
        &self,
        document_id: Uuid,
    ) -> Result<documents::Model, LifecycleError> {
        documents::Entity::find_by_id(document_id)
            .one(&self.db)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?
            .ok_or(LifecycleError::DocumentNotFound(document_id))
    }

    /// Lists documents, newest first, with optional filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_documents(
        &self,
        filter: &DocumentFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<documents::Model>, LifecycleError> {
        let mut query = documents::Entity::find();
        if let Some(status) = &filter.status {
            query = query.filter(documents::Column::Status.eq(status.clone()));
        }
        if let Some(department_id) = filter.department_id {
            query = query.filter(documents::Column::DepartmentId.eq(department_id));
        }

        let total = query
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?;

        let items = query
            .order_by_desc(documents::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?;

        Ok(PageResponse::new(items, page.page, page.per_page, total))
    }

    /// Transfers a document to another department.
    ///
    /// Appends the movement record and conditionally advances the
    /// status in one transaction. Arrival at the final destination
    /// yields `pending_approval`; any other destination keeps the
    /// document `in_movement`. The first move out also stamps
    /// `submitted_by`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The document or destination department is not found
    /// - The document is terminal, already in the destination, or not
    ///   in a movable status
    /// - The actor is unknown or not permitted
    /// - The status changed concurrently
    /// - Database operation fails
    pub async fn move_document(
        &self,
        document_id: Uuid,
        actor: &Actor,
        to_department: Uuid,
        note: Option<String>,
    ) -> Result<documents::Model, LifecycleError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?;

        // Fetch document
        let mut document = documents::Entity::find_by_id(document_id)
            .one(&txn)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?
            .ok_or(LifecycleError::DocumentNotFound(document_id))?;

        // Validate transition using LifecycleService
        let current_status = db_status_to_core(&document.status);
        let action = LifecycleService::move_document(
            current_status,
            document.department_id,
            document.final_destination_id,
            to_department,
            actor.id,
            note.clone(),
        )?;
        let new_status = action.new_status();

        ensure_actor(&txn, actor.id).await?;
        AccessPolicy::authorize(actor, document.department_id, PolicyAction::Move)?;

        // Destination must exist
        departments::Entity::find_by_id(to_department)
            .one(&txn)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?
            .ok_or(LifecycleError::DepartmentNotFound(to_department))?;

        let now = Utc::now().into();
        let first_move = document.submitted_by.is_none();

        // Append the movement record
        document_movements::ActiveModel {
            id: Set(Uuid::new_v4()),
            document_id: Set(document.id),
            from_department_id: Set(document.department_id),
            to_department_id: Set(to_department),
            moved_by: Set(Some(actor.id)),
            note: Set(note),
            created_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|e| LifecycleError::Database(e.to_string()))?;

        // Conditional write; zero rows means we lost the race. The
        // department guard matters when the status stays in_movement:
        // a concurrent move changes the location without changing the
        // status, and must still invalidate this one.
        let mut update = documents::ActiveModel {
            status: Set(core_status_to_db(new_status)),
            department_id: Set(to_department),
            updated_at: Set(now),
            ..Default::default()
        };
        if first_move {
            update.submitted_by = Set(Some(actor.id));
        }

        let result = documents::Entity::update_many()
            .set(update)
            .filter(documents::Column::Id.eq(document.id))
            .filter(documents::Column::Status.eq(document.status.clone()))
            .filter(documents::Column::DepartmentId.eq(document.department_id))
            .exec(&txn)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(LifecycleError::StatusChanged { document_id });
        }

        txn.commit()
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?;

        document.status = core_status_to_db(new_status);
        document.department_id = to_department;
        if first_move {
            document.submitted_by = Some(actor.id);
        }
        document.updated_at = now;

        let message = match new_status {
            doctra_core::lifecycle::DocumentStatus::PendingApproval => {
                format!("Document '{}' awaits approval", document.title)
            }
            _ => format!("Document '{}' was moved", document.title),
        };
        self.notify(document.uploaded_by, document.id, message).await;

        Ok(document)
    }

    /// Records a decision on a document.
    ///
    /// Approve and pay yield `approved`; reject is terminal and
    /// requires a comment. The complete decision dispatches to the
    /// compound [`Self::complete`] path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The document is not found
    /// - The document is terminal or not in a decidable status
    /// - A rejection comment is missing
    /// - The actor is unknown or not permitted
    /// - The status changed concurrently
    /// - Database operation fails
    pub async fn decide(
        &self,
        document_id: Uuid,
        actor: &Actor,
        decision: Decision,
        comment: Option<String>,
    ) -> Result<documents::Model, LifecycleError> {
        // Completion is a compound action with its own path
        if decision == Decision::Complete {
            return self.complete(document_id, actor, comment).await;
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?;

        // Fetch document
        let mut document = documents::Entity::find_by_id(document_id)
            .one(&txn)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?
            .ok_or(LifecycleError::DocumentNotFound(document_id))?;

        // Validate transition using LifecycleService
        let current_status = db_status_to_core(&document.status);
        let action = LifecycleService::decide(current_status, decision, actor.id, comment.clone())?;
        let new_status = action.new_status();

        ensure_actor(&txn, actor.id).await?;
        AccessPolicy::authorize(actor, document.department_id, PolicyAction::Decide)?;

        let now = Utc::now().into();

        // Append the decision to the approval ledger
        document_approvals::ActiveModel {
            id: Set(Uuid::new_v4()),
            document_id: Set(document.id),
            decided_by: Set(actor.id),
            decision: Set(core_decision_to_db(decision)),
            comment: Set(comment),
            created_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|e| LifecycleError::Database(e.to_string()))?;

        // Conditional status write; zero rows means we lost the race
        let result = documents::Entity::update_many()
            .set(documents::ActiveModel {
                status: Set(core_status_to_db(new_status)),
                updated_at: Set(now),
                ..Default::default()
            })
            .filter(documents::Column::Id.eq(document.id))
            .filter(documents::Column::Status.eq(document.status.clone()))
            .exec(&txn)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(LifecycleError::StatusChanged { document_id });
        }

        txn.commit()
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?;

        document.status = core_status_to_db(new_status);
        document.updated_at = now;

        let message = match decision {
            Decision::Approve => format!("Document '{}' was approved", document.title),
            Decision::Pay => format!("Payment was recorded for document '{}'", document.title),
            Decision::Reject => format!("Document '{}' was rejected", document.title),
            Decision::Complete => format!("Document '{}' was completed", document.title),
        };
        self.notify(document.uploaded_by, document.id, message).await;

        Ok(document)
    }

    /// Completes a document: records the decision and hands it off to
    /// the dispatch department in one transaction.
    ///
    /// The hand-off movement is system-initiated (`moved_by` NULL) and
    /// skipped when the document is already in the dispatch
    /// department. The resulting status is always `approved`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The document is not found
    /// - The document is terminal or in movement
    /// - No department is flagged as dispatch handler
    /// - The actor is unknown or not permitted
    /// - The status changed concurrently
    /// - Database operation fails
    pub async fn complete(
        &self,
        document_id: Uuid,
        actor: &Actor,
        comment: Option<String>,
    ) -> Result<documents::Model, LifecycleError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?;

        // Fetch document
        let mut document = documents::Entity::find_by_id(document_id)
            .one(&txn)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?
            .ok_or(LifecycleError::DocumentNotFound(document_id))?;

        // Validate transition using LifecycleService
        let current_status = db_status_to_core(&document.status);
        let action = LifecycleService::complete(current_status, actor.id, comment.clone())?;
        let new_status = action.new_status();

        ensure_actor(&txn, actor.id).await?;
        AccessPolicy::authorize(actor, document.department_id, PolicyAction::Complete)?;

        // The hand-off target is the unique dispatch department
        let dispatch = departments::Entity::find()
            .filter(departments::Column::HandlesDispatch.eq(true))
            .one(&txn)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?
            .ok_or(LifecycleError::NoDispatchDepartment)?;

        let now = Utc::now().into();

        // Decision first, hand-off second; history readers order
        // approvals before movements on equal timestamps
        document_approvals::ActiveModel {
            id: Set(Uuid::new_v4()),
            document_id: Set(document.id),
            decided_by: Set(actor.id),
            decision: Set(DecisionType::Complete),
            comment: Set(comment),
            created_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|e| LifecycleError::Database(e.to_string()))?;

        if document.department_id != dispatch.id {
            document_movements::ActiveModel {
                id: Set(Uuid::new_v4()),
                document_id: Set(document.id),
                from_department_id: Set(document.department_id),
                to_department_id: Set(dispatch.id),
                moved_by: Set(None),
                note: Set(None),
                created_at: Set(now),
            }
            .insert(&txn)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?;
        }

        // Conditional write; zero rows means we lost the race. The
        // status stays approved across completion, so the department
        // guard is what makes a second racing complete lose; the
        // updated_at guard covers a document already sitting at the
        // dispatch desk.
        let result = documents::Entity::update_many()
            .set(documents::ActiveModel {
                status: Set(core_status_to_db(new_status)),
                department_id: Set(dispatch.id),
                updated_at: Set(now),
                ..Default::default()
            })
            .filter(documents::Column::Id.eq(document.id))
            .filter(documents::Column::Status.eq(document.status.clone()))
            .filter(documents::Column::DepartmentId.eq(document.department_id))
            .filter(documents::Column::UpdatedAt.eq(document.updated_at))
            .exec(&txn)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(LifecycleError::StatusChanged { document_id });
        }

        txn.commit()
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?;

        document.status = core_status_to_db(new_status);
        document.department_id = dispatch.id;
        document.updated_at = now;

        let message = format!(
            "Document '{}' was completed and handed to {}",
            document.title, dispatch.name
        );
        self.notify(document.uploaded_by, document.id, message).await;

        Ok(document)
    }

    /// Closes out an approved document.
    ///
    /// Finalization writes no ledger rows; the finalizer, timestamp,
    /// and note are stamped on the document itself by a single
    /// conditional update.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The document is not found
    /// - The document is not in the approved status
    /// - The actor is unknown or not permitted
    /// - The status changed concurrently
    /// - Database operation fails
    pub async fn finalize(
        &self,
        document_id: Uuid,
        actor: &Actor,
        note: Option<String>,
    ) -> Result<documents::Model, LifecycleError> {
        // Fetch document
        let mut document = documents::Entity::find_by_id(document_id)
            .one(&self.db)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?
            .ok_or(LifecycleError::DocumentNotFound(document_id))?;

        // Validate transition using LifecycleService
        let current_status = db_status_to_core(&document.status);
        let action = LifecycleService::finalize(current_status, actor.id, note.clone())?;
        let new_status = action.new_status();

        ensure_actor(&self.db, actor.id).await?;
        AccessPolicy::authorize(actor, document.department_id, PolicyAction::Finalize)?;

        let now = Utc::now().into();

        // Single-statement conditional write
        let result = documents::Entity::update_many()
            .set(documents::ActiveModel {
                status: Set(core_status_to_db(new_status)),
                finalized_by: Set(Some(actor.id)),
                finalized_at: Set(Some(now)),
                finalize_note: Set(note.clone()),
                updated_at: Set(now),
                ..Default::default()
            })
            .filter(documents::Column::Id.eq(document.id))
            .filter(documents::Column::Status.eq(document.status.clone()))
            .exec(&self.db)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(LifecycleError::StatusChanged { document_id });
        }

        document.status = core_status_to_db(new_status);
        document.finalized_by = Some(actor.id);
        document.finalized_at = Some(now);
        document.finalize_note = note;
        document.updated_at = now;

        let message = format!("Document '{}' was finalized", document.title);
        self.notify(document.uploaded_by, document.id, message).await;

        Ok(document)
    }

    /// Returns the full event history of a document: movements and
    /// approvals merged in ascending chronological order.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not exist or a query
    /// fails.
    pub async fn get_history(&self, document_id: Uuid) -> Result<DocumentHistory, LifecycleError> {
        let document = self.get_document(document_id).await?;

        let movements = document_movements::Entity::find()
            .filter(document_movements::Column::DocumentId.eq(document_id))
            .order_by_asc(document_movements::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?;

        let approvals = document_approvals::Entity::find()
            .filter(document_approvals::Column::DocumentId.eq(document_id))
            .order_by_asc(document_approvals::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?;

        let mut events: Vec<HistoryEvent> = approvals
            .into_iter()
            .map(HistoryEvent::Approval)
            .chain(movements.into_iter().map(HistoryEvent::Movement))
            .collect();
        events.sort_by(history_order);

        Ok(DocumentHistory { document, events })
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    /// Resolves a trail's final destination (its highest-sequence step).
    async fn trail_final_destination(
        &self,
        trail_id: Uuid,
    ) -> Result<Option<Uuid>, LifecycleError> {
        trails::Entity::find_by_id(trail_id)
            .one(&self.db)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?
            .ok_or(LifecycleError::TrailNotFound(trail_id))?;

        let steps = trail_steps::Entity::find()
            .filter(trail_steps::Column::TrailId.eq(trail_id))
            .order_by_asc(trail_steps::Column::Sequence)
            .all(&self.db)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?;

        let core_steps: Vec<TrailStep> = steps
            .iter()
            .map(|s| TrailStep {
                sequence: s.sequence,
                department_id: s.department_id,
                requires_approval: s.requires_approval,
            })
            .collect();

        Ok(TrailService::final_destination(&core_steps))
    }

    /// Fire-and-forget delivery to the uploader; a failing sink never
    /// fails the operation that produced the event.
    async fn notify(&self, recipient_id: Uuid, document_id: Uuid, message: String) {
        let event = NotificationEvent::new(recipient_id, document_id, message);
        if let Err(err) = self.notifier.send(event).await {
            tracing::warn!(%document_id, error = %err, "Notification delivery failed");
        }
    }
}

/// Verifies the acting user is registered.
async fn ensure_actor<C: ConnectionTrait>(conn: &C, actor_id: Uuid) -> Result<(), LifecycleError> {
    users::Entity::find_by_id(actor_id)
        .one(conn)
        .await
        .map_err(|e| LifecycleError::Database(e.to_string()))?
        .ok_or(LifecycleError::UnknownActor(actor_id))
        .map(|_| ())
}

// ============================================================================
// Conversion helpers
// ============================================================================

/// Chronological event order; approvals win ties so the complete
/// hand-off reads decision-then-move.
pub fn history_order(a: &HistoryEvent, b: &HistoryEvent) -> std::cmp::Ordering {
    a.created_at()
        .cmp(&b.created_at())
        .then_with(|| a.tie_rank().cmp(&b.tie_rank()))
}

/// Converts database `DocumentStatus` to core `DocumentStatus`.
pub fn db_status_to_core(status: &DocumentStatus) -> doctra_core::lifecycle::DocumentStatus {
    match status {
        DocumentStatus::Pending => doctra_core::lifecycle::DocumentStatus::Pending,
        DocumentStatus::InMovement => doctra_core::lifecycle::DocumentStatus::InMovement,
        DocumentStatus::PendingApproval => doctra_core::lifecycle::DocumentStatus::PendingApproval,
        DocumentStatus::Approved => doctra_core::lifecycle::DocumentStatus::Approved,
        DocumentStatus::Rejected => doctra_core::lifecycle::DocumentStatus::Rejected,
        DocumentStatus::Done => doctra_core::lifecycle::DocumentStatus::Done,
    }
}

/// Converts core `DocumentStatus` to database `DocumentStatus`.
pub fn core_status_to_db(status: doctra_core::lifecycle::DocumentStatus) -> DocumentStatus {
    match status {
        doctra_core::lifecycle::DocumentStatus::Pending => DocumentStatus::Pending,
        doctra_core::lifecycle::DocumentStatus::InMovement => DocumentStatus::InMovement,
        doctra_core::lifecycle::DocumentStatus::PendingApproval => DocumentStatus::PendingApproval,
        doctra_core::lifecycle::DocumentStatus::Approved => DocumentStatus::Approved,
        doctra_core::lifecycle::DocumentStatus::Rejected => DocumentStatus::Rejected,
        doctra_core::lifecycle::DocumentStatus::Done => DocumentStatus::Done,
    }
}

/// Converts a core `Decision` to the database `DecisionType`.
pub fn core_decision_to_db(decision: Decision) -> DecisionType {
    match decision {
        Decision::Approve => DecisionType::Approve,
        Decision::Reject => DecisionType::Reject,
        Decision::Pay => DecisionType::Pay,
        Decision::Complete => DecisionType::Complete,
    }
}
