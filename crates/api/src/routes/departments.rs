//! Department lookup endpoints.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde::Serialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use doctra_db::entities::departments;
use doctra_db::repositories::{DepartmentError, DepartmentRepository};

use crate::{AppState, middleware::ActorContext};

/// Creates department routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/departments", get(list_departments))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Response for a department.
#[derive(Debug, Serialize)]
pub struct DepartmentResponse {
    /// Department ID.
    pub id: Uuid,
    /// Department name.
    pub name: String,
    /// Whether this department handles outward dispatch.
    pub handles_dispatch: bool,
    /// Created at timestamp.
    pub created_at: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/departments` - List departments, alphabetical.
async fn list_departments(State(state): State<AppState>, _actor: ActorContext) -> impl IntoResponse {
    let repo = DepartmentRepository::new((*state.db).clone());

    match repo.list_departments().await {
        Ok(departments) => {
            let items: Vec<DepartmentResponse> = departments
                .into_iter()
                .map(department_to_response)
                .collect();

            (StatusCode::OK, Json(json!({ "data": items }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list departments");
            department_error_response(&e)
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn department_to_response(department: departments::Model) -> DepartmentResponse {
    DepartmentResponse {
        id: department.id,
        name: department.name,
        handles_dispatch: department.handles_dispatch,
        created_at: department.created_at.to_rfc3339(),
    }
}

fn department_error_response(e: &DepartmentError) -> axum::response::Response {
    match e {
        DepartmentError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "DEPARTMENT_NOT_FOUND",
                "message": "Department not found"
            })),
        )
            .into_response(),
        DepartmentError::Database(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "DATABASE_ERROR",
                "message": "An error occurred"
            })),
        )
            .into_response(),
    }
}
