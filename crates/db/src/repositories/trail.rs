//! Trail repository for routing template management.
//!
//! Trails are advisory route templates. Creating or replacing one
//! validates the name and step list through `TrailService`, which also
//! assigns the contiguous sequence numbers the schema enforces.

use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde::Serialize;
use uuid::Uuid;

use doctra_core::trail::{TrailError, TrailService, TrailStep};
use doctra_shared::types::{PageRequest, PageResponse};

use crate::entities::{departments, documents, trail_steps, trails};

/// Input for creating or replacing a trail.
#[derive(Debug, Clone)]
pub struct TrailInput {
    /// Trail name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Ordered steps; sequences are assigned from submission order.
    pub steps: Vec<doctra_core::trail::TrailStepInput>,
}

/// A trail together with its ordered steps.
#[derive(Debug, Clone, Serialize)]
pub struct TrailWithSteps {
    /// The trail row.
    pub trail: trails::Model,
    /// Steps ordered by sequence.
    pub steps: Vec<trail_steps::Model>,
}

/// Repository for trail template operations.
#[derive(Debug, Clone)]
pub struct TrailRepository {
    db: DatabaseConnection,
}

impl TrailRepository {
    /// Creates a new trail repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a trail with its steps.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is blank or the step list is empty
    /// - A step references an unknown department
    /// - Database operation fails
    pub async fn create_trail(&self, input: TrailInput) -> Result<TrailWithSteps, TrailError> {
        TrailService::validate_name(&input.name)?;
        let steps = TrailService::assign_sequences(input.steps)?;
        self.ensure_departments(&steps).await?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TrailError::Database(e.to_string()))?;

        let now = Utc::now().into();
        let trail = trails::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            description: Set(input.description),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|e| TrailError::Database(e.to_string()))?;

        let step_models = insert_steps(&txn, trail.id, steps).await?;

        txn.commit()
            .await
            .map_err(|e| TrailError::Database(e.to_string()))?;

        Ok(TrailWithSteps {
            trail,
            steps: step_models,
        })
    }

    /// Fetches a trail with its steps ordered by sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the trail does not exist or the query
    /// fails.
    pub async fn get_trail(&self, trail_id: Uuid) -> Result<TrailWithSteps, TrailError> {
        let trail = trails::Entity::find_by_id(trail_id)
            .one(&self.db)
            .await
            .map_err(|e| TrailError::Database(e.to_string()))?
            .ok_or(TrailError::TrailNotFound(trail_id))?;

        let steps = trail_steps::Entity::find()
            .filter(trail_steps::Column::TrailId.eq(trail_id))
            .order_by_asc(trail_steps::Column::Sequence)
            .all(&self.db)
            .await
            .map_err(|e| TrailError::Database(e.to_string()))?;

        Ok(TrailWithSteps { trail, steps })
    }

    /// Lists trails with their steps, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_trails(
        &self,
        page: &PageRequest,
    ) -> Result<PageResponse<TrailWithSteps>, TrailError> {
        let total = trails::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| TrailError::Database(e.to_string()))?;

        let trail_models = trails::Entity::find()
            .order_by_desc(trails::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .map_err(|e| TrailError::Database(e.to_string()))?;

        // One query for all steps of the page, grouped per trail
        let ids: Vec<Uuid> = trail_models.iter().map(|t| t.id).collect();
        let mut steps_by_trail: std::collections::HashMap<Uuid, Vec<trail_steps::Model>> =
            std::collections::HashMap::new();
        if !ids.is_empty() {
            let all_steps = trail_steps::Entity::find()
                .filter(trail_steps::Column::TrailId.is_in(ids))
                .order_by_asc(trail_steps::Column::Sequence)
                .all(&self.db)
                .await
                .map_err(|e| TrailError::Database(e.to_string()))?;
            for step in all_steps {
                steps_by_trail.entry(step.trail_id).or_default().push(step);
            }
        }

        let items = trail_models
            .into_iter()
            .map(|trail| {
                let steps = steps_by_trail.remove(&trail.id).unwrap_or_default();
                TrailWithSteps { trail, steps }
            })
            .collect();

        Ok(PageResponse::new(items, page.page, page.per_page, total))
    }

    /// Replaces a trail's name, description, and full step list.
    ///
    /// Sequences are reassigned from the submitted order; previous
    /// steps are discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The trail does not exist
    /// - The name is blank or the step list is empty
    /// - A step references an unknown department
    /// - Database operation fails
    pub async fn update_trail(
        &self,
        trail_id: Uuid,
        input: TrailInput,
    ) -> Result<TrailWithSteps, TrailError> {
        TrailService::validate_name(&input.name)?;
        let steps = TrailService::assign_sequences(input.steps)?;
        self.ensure_departments(&steps).await?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TrailError::Database(e.to_string()))?;

        let existing = trails::Entity::find_by_id(trail_id)
            .one(&txn)
            .await
            .map_err(|e| TrailError::Database(e.to_string()))?
            .ok_or(TrailError::TrailNotFound(trail_id))?;

        trail_steps::Entity::delete_many()
            .filter(trail_steps::Column::TrailId.eq(trail_id))
            .exec(&txn)
            .await
            .map_err(|e| TrailError::Database(e.to_string()))?;

        let step_models = insert_steps(&txn, trail_id, steps).await?;

        let mut update: trails::ActiveModel = existing.into();
        update.name = Set(input.name);
        update.description = Set(input.description);
        update.updated_at = Set(Utc::now().into());
        let trail = update
            .update(&txn)
            .await
            .map_err(|e| TrailError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| TrailError::Database(e.to_string()))?;

        Ok(TrailWithSteps {
            trail,
            steps: step_models,
        })
    }

    /// Deletes a trail and its steps.
    ///
    /// Deletion is refused while any document references the trail;
    /// the documents foreign key backstops the check.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The trail does not exist
    /// - Documents still reference the trail
    /// - Database operation fails
    pub async fn delete_trail(&self, trail_id: Uuid) -> Result<(), TrailError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TrailError::Database(e.to_string()))?;

        trails::Entity::find_by_id(trail_id)
            .one(&txn)
            .await
            .map_err(|e| TrailError::Database(e.to_string()))?
            .ok_or(TrailError::TrailNotFound(trail_id))?;

        // Counted in the same transaction as the delete, so a document
        // created in between surfaces as TrailInUse rather than a
        // foreign-key failure
        let document_count = documents::Entity::find()
            .filter(documents::Column::TrailId.eq(trail_id))
            .count(&txn)
            .await
            .map_err(|e| TrailError::Database(e.to_string()))?;
        if document_count > 0 {
            return Err(TrailError::TrailInUse {
                trail_id,
                document_count,
            });
        }

        // Steps cascade with the trail
        trails::Entity::delete_by_id(trail_id)
            .exec(&txn)
            .await
            .map_err(|e| TrailError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| TrailError::Database(e.to_string()))?;

        Ok(())
    }

    /// Verifies every step's department exists.
    async fn ensure_departments(&self, steps: &[TrailStep]) -> Result<(), TrailError> {
        let mut wanted: Vec<Uuid> = steps.iter().map(|s| s.department_id).collect();
        wanted.sort_unstable();
        wanted.dedup();

        let found: HashSet<Uuid> = departments::Entity::find()
            .filter(departments::Column::Id.is_in(wanted))
            .all(&self.db)
            .await
            .map_err(|e| TrailError::Database(e.to_string()))?
            .into_iter()
            .map(|d| d.id)
            .collect();

        for step in steps {
            if !found.contains(&step.department_id) {
                return Err(TrailError::DepartmentNotFound(step.department_id));
            }
        }
        Ok(())
    }
}

/// Inserts assigned steps for a trail and returns them in sequence
/// order.
async fn insert_steps<C: ConnectionTrait>(
    conn: &C,
    trail_id: Uuid,
    steps: Vec<TrailStep>,
) -> Result<Vec<trail_steps::Model>, TrailError> {
    let now = Utc::now().into();
    let mut models = Vec::with_capacity(steps.len());
    for step in steps {
        let model = trail_steps::ActiveModel {
            id: Set(Uuid::new_v4()),
            trail_id: Set(trail_id),
            sequence: Set(step.sequence),
            department_id: Set(step.department_id),
            requires_approval: Set(step.requires_approval),
            created_at: Set(now),
        }
        .insert(conn)
        .await
        .map_err(|e| TrailError::Database(e.to_string()))?;
        models.push(model);
    }
    Ok(models)
}
