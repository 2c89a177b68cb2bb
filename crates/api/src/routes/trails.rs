//! Trail template endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use doctra_core::trail::{TrailError, TrailStepInput};
use doctra_db::repositories::{TrailInput, TrailRepository, TrailWithSteps};
use doctra_shared::types::PageRequest;

use crate::{AppState, middleware::ActorContext};

/// Creates trail routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/trails", get(list_trails))
        .route("/trails", post(create_trail))
        .route("/trails/{id}", get(get_trail))
        .route("/trails/{id}", put(update_trail))
        .route("/trails/{id}", delete(delete_trail))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for listing trails.
#[derive(Debug, Deserialize)]
pub struct ListTrailsQuery {
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Items per page.
    pub per_page: Option<u32>,
}

/// Request body for creating or replacing a trail.
#[derive(Debug, Deserialize)]
pub struct TrailRequest {
    /// Trail name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Ordered steps; sequence numbers are assigned from position.
    pub steps: Vec<TrailStepRequest>,
}

/// One step in a trail request.
#[derive(Debug, Deserialize)]
pub struct TrailStepRequest {
    /// Department the step routes through.
    pub department_id: Uuid,
    /// Whether a decision is expected at this stop.
    #[serde(default = "default_requires_approval")]
    pub requires_approval: bool,
}

fn default_requires_approval() -> bool {
    true
}

/// Response for a trail with its steps.
#[derive(Debug, Serialize)]
pub struct TrailResponse {
    /// Trail ID.
    pub id: Uuid,
    /// Trail name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Steps ordered by sequence.
    pub steps: Vec<TrailStepResponse>,
    /// Created at timestamp.
    pub created_at: String,
    /// Updated at timestamp.
    pub updated_at: String,
}

/// Response for a single trail step.
#[derive(Debug, Serialize)]
pub struct TrailStepResponse {
    /// Step ID.
    pub id: Uuid,
    /// Position in the trail, starting at 1.
    pub sequence: i32,
    /// Department the step routes through.
    pub department_id: Uuid,
    /// Whether a decision is expected at this stop.
    pub requires_approval: bool,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/trails` - Create a trail template.
async fn create_trail(
    State(state): State<AppState>,
    _actor: ActorContext,
    Json(payload): Json<TrailRequest>,
) -> impl IntoResponse {
    let repo = TrailRepository::new((*state.db).clone());

    match repo.create_trail(trail_input(payload)).await {
        Ok(trail) => {
            info!(
                trail_id = %trail.trail.id,
                name = %trail.trail.name,
                "Trail created"
            );
            (StatusCode::CREATED, Json(trail_to_response(trail))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create trail");
            trail_error_response(&e)
        }
    }
}

/// GET `/trails` - List trails, newest first, with their steps.
async fn list_trails(
    State(state): State<AppState>,
    _actor: ActorContext,
    Query(query): Query<ListTrailsQuery>,
) -> impl IntoResponse {
    let repo = TrailRepository::new((*state.db).clone());

    let defaults = PageRequest::default();
    let page = PageRequest {
        page: query.page.unwrap_or(defaults.page),
        per_page: query.per_page.unwrap_or(defaults.per_page),
    };

    match repo.list_trails(&page).await {
        Ok(result) => {
            let meta = result.meta;
            let items: Vec<TrailResponse> =
                result.data.into_iter().map(trail_to_response).collect();

            (StatusCode::OK, Json(json!({ "data": items, "meta": meta }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list trails");
            trail_error_response(&e)
        }
    }
}

/// GET `/trails/{id}` - Fetch a trail with its steps.
async fn get_trail(
    State(state): State<AppState>,
    _actor: ActorContext,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = TrailRepository::new((*state.db).clone());

    match repo.get_trail(id).await {
        Ok(trail) => (StatusCode::OK, Json(trail_to_response(trail))).into_response(),
        Err(e) => {
            error!(error = %e, trail_id = %id, "Failed to fetch trail");
            trail_error_response(&e)
        }
    }
}

/// PUT `/trails/{id}` - Replace a trail's name, description and steps.
async fn update_trail(
    State(state): State<AppState>,
    _actor: ActorContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<TrailRequest>,
) -> impl IntoResponse {
    let repo = TrailRepository::new((*state.db).clone());

    match repo.update_trail(id, trail_input(payload)).await {
        Ok(trail) => {
            info!(trail_id = %trail.trail.id, "Trail updated");
            (StatusCode::OK, Json(trail_to_response(trail))).into_response()
        }
        Err(e) => {
            error!(error = %e, trail_id = %id, "Failed to update trail");
            trail_error_response(&e)
        }
    }
}

/// DELETE `/trails/{id}` - Delete a trail that no document references.
async fn delete_trail(
    State(state): State<AppState>,
    _actor: ActorContext,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = TrailRepository::new((*state.db).clone());

    match repo.delete_trail(id).await {
        Ok(()) => {
            info!(trail_id = %id, "Trail deleted");
            (StatusCode::NO_CONTENT, ()).into_response()
        }
        Err(e) => {
            error!(error = %e, trail_id = %id, "Failed to delete trail");
            trail_error_response(&e)
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn trail_input(payload: TrailRequest) -> TrailInput {
    TrailInput {
        name: payload.name,
        description: payload.description,
        steps: payload
            .steps
            .into_iter()
            .map(|s| TrailStepInput {
                department_id: s.department_id,
                requires_approval: s.requires_approval,
            })
            .collect(),
    }
}

fn trail_to_response(trail: TrailWithSteps) -> TrailResponse {
    TrailResponse {
        id: trail.trail.id,
        name: trail.trail.name,
        description: trail.trail.description,
        steps: trail
            .steps
            .into_iter()
            .map(|s| TrailStepResponse {
                id: s.id,
                sequence: s.sequence,
                department_id: s.department_id,
                requires_approval: s.requires_approval,
            })
            .collect(),
        created_at: trail.trail.created_at.to_rfc3339(),
        updated_at: trail.trail.updated_at.to_rfc3339(),
    }
}

fn trail_error_response(e: &TrailError) -> axum::response::Response {
    let status =
        StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = match e {
        // Storage details stay out of response bodies
        TrailError::Database(_) => "An error occurred".to_string(),
        other => other.to_string(),
    };

    (
        status,
        Json(json!({ "error": e.error_code(), "message": message })),
    )
        .into_response()
}
