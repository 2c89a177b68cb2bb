//! Document lifecycle endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use doctra_core::lifecycle::{Decision, LifecycleError};
use doctra_db::entities::{documents, sea_orm_active_enums::DocumentStatus};
use doctra_db::repositories::{CreateDocumentInput, DocumentFilter, LifecycleRepository};
use doctra_shared::types::PageRequest;

use crate::{AppState, middleware::ActorContext};

/// Creates document routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/documents", get(list_documents))
        .route("/documents", post(create_document))
        .route("/documents/{id}", get(get_document))
        .route("/documents/{id}/move", post(move_document))
        .route("/documents/{id}/decision", post(decide_document))
        .route("/documents/{id}/complete", post(complete_document))
        .route("/documents/{id}/finalize", post(finalize_document))
        .route("/documents/{id}/history", get(get_document_history))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for listing documents.
#[derive(Debug, Deserialize)]
pub struct ListDocumentsQuery {
    /// Filter by status.
    pub status: Option<String>,
    /// Filter by current department ID.
    pub department_id: Option<Uuid>,
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Items per page.
    pub per_page: Option<u32>,
}

/// Request body for registering a document.
#[derive(Debug, Deserialize)]
pub struct CreateDocumentRequest {
    /// Document title.
    pub title: String,
    /// Free-form document type label.
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Department the document is registered in.
    pub department_id: Uuid,
    /// Explicit final destination department.
    pub final_destination_id: Option<Uuid>,
    /// Trail that seeds the final destination when none is given.
    pub trail_id: Option<Uuid>,
    /// Opaque reference into external file storage.
    pub file_ref: Option<String>,
}

/// Request body for moving a document.
#[derive(Debug, Deserialize)]
pub struct MoveDocumentRequest {
    /// Destination department ID.
    pub to_department: Uuid,
    /// Optional note recorded on the movement.
    pub note: Option<String>,
}

/// Request body for a decision on a document.
#[derive(Debug, Deserialize)]
pub struct DecideDocumentRequest {
    /// Decision verb: "approve", "reject", "pay" or "complete".
    pub decision: String,
    /// Optional comment; required when rejecting.
    pub comment: Option<String>,
}

/// Request body for completing a document.
#[derive(Debug, Deserialize)]
pub struct CompleteDocumentRequest {
    /// Optional comment recorded on the decision.
    pub comment: Option<String>,
}

/// Request body for finalizing a document.
#[derive(Debug, Deserialize)]
pub struct FinalizeDocumentRequest {
    /// Optional note stored on the document.
    pub note: Option<String>,
}

/// Response for a document.
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    /// Document ID.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Document type label.
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Lifecycle status.
    pub status: String,
    /// Current department ID.
    pub department_id: Uuid,
    /// Final destination department ID.
    pub final_destination_id: Option<Uuid>,
    /// Trail the document was registered with.
    pub trail_id: Option<Uuid>,
    /// Reference into external file storage.
    pub file_ref: Option<String>,
    /// User who registered the document.
    pub uploaded_by: Uuid,
    /// User who first routed the document onward.
    pub submitted_by: Option<Uuid>,
    /// User who finalized the document.
    pub finalized_by: Option<Uuid>,
    /// Finalization timestamp.
    pub finalized_at: Option<String>,
    /// Finalization note.
    pub finalize_note: Option<String>,
    /// Created at timestamp.
    pub created_at: String,
    /// Updated at timestamp.
    pub updated_at: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/documents` - Register a new document.
async fn create_document(
    State(state): State<AppState>,
    actor: ActorContext,
    Json(payload): Json<CreateDocumentRequest>,
) -> impl IntoResponse {
    let repo = LifecycleRepository::new((*state.db).clone(), state.notifier.clone());

    let input = CreateDocumentInput {
        title: payload.title,
        doc_type: payload.doc_type,
        department_id: payload.department_id,
        final_destination_id: payload.final_destination_id,
        trail_id: payload.trail_id,
        file_ref: payload.file_ref,
    };

    match repo.create_document(actor.get(), input).await {
        Ok(document) => {
            info!(
                document_id = %document.id,
                department_id = %document.department_id,
                "Document registered"
            );
            (StatusCode::CREATED, Json(document_to_response(document))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to register document");
            lifecycle_error_response(&e)
        }
    }
}

/// GET `/documents` - List documents, newest first, with filters.
async fn list_documents(
    State(state): State<AppState>,
    _actor: ActorContext,
    Query(query): Query<ListDocumentsQuery>,
) -> impl IntoResponse {
    let repo = LifecycleRepository::new((*state.db).clone(), state.notifier.clone());

    let filter = DocumentFilter {
        status: query.status.as_deref().and_then(parse_status),
        department_id: query.department_id,
    };

    let defaults = PageRequest::default();
    let page = PageRequest {
        page: query.page.unwrap_or(defaults.page),
        per_page: query.per_page.unwrap_or(defaults.per_page),
    };

    match repo.list_documents(&filter, &page).await {
        Ok(result) => {
            let meta = result.meta;
            let items: Vec<DocumentResponse> =
                result.data.into_iter().map(document_to_response).collect();

            (StatusCode::OK, Json(json!({ "data": items, "meta": meta }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list documents");
            lifecycle_error_response(&e)
        }
    }
}

/// GET `/documents/{id}` - Fetch a single document.
async fn get_document(
    State(state): State<AppState>,
    _actor: ActorContext,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = LifecycleRepository::new((*state.db).clone(), state.notifier.clone());

    match repo.get_document(id).await {
        Ok(document) => (StatusCode::OK, Json(document_to_response(document))).into_response(),
        Err(e) => {
            error!(error = %e, document_id = %id, "Failed to fetch document");
            lifecycle_error_response(&e)
        }
    }
}

/// POST `/documents/{id}/move` - Move a document to another department.
async fn move_document(
    State(state): State<AppState>,
    actor: ActorContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<MoveDocumentRequest>,
) -> impl IntoResponse {
    let repo = LifecycleRepository::new((*state.db).clone(), state.notifier.clone());

    match repo
        .move_document(id, actor.get(), payload.to_department, payload.note)
        .await
    {
        Ok(document) => {
            info!(
                document_id = %document.id,
                to_department = %document.department_id,
                "Document moved"
            );
            (StatusCode::OK, Json(document_to_response(document))).into_response()
        }
        Err(e) => {
            error!(error = %e, document_id = %id, "Failed to move document");
            lifecycle_error_response(&e)
        }
    }
}

/// POST `/documents/{id}/decision` - Record a decision on a document.
async fn decide_document(
    State(state): State<AppState>,
    actor: ActorContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<DecideDocumentRequest>,
) -> impl IntoResponse {
    let Some(decision) = Decision::parse(&payload.decision) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_decision",
                "message": format!("Unknown decision: {}", payload.decision)
            })),
        )
            .into_response();
    };

    let repo = LifecycleRepository::new((*state.db).clone(), state.notifier.clone());

    match repo.decide(id, actor.get(), decision, payload.comment).await {
        Ok(document) => {
            info!(
                document_id = %document.id,
                decision = decision.as_str(),
                "Decision recorded"
            );
            (StatusCode::OK, Json(document_to_response(document))).into_response()
        }
        Err(e) => {
            error!(error = %e, document_id = %id, "Failed to record decision");
            lifecycle_error_response(&e)
        }
    }
}

/// POST `/documents/{id}/complete` - Complete a document and hand it off
/// to the dispatch department.
async fn complete_document(
    State(state): State<AppState>,
    actor: ActorContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<CompleteDocumentRequest>,
) -> impl IntoResponse {
    let repo = LifecycleRepository::new((*state.db).clone(), state.notifier.clone());

    match repo.complete(id, actor.get(), payload.comment).await {
        Ok(document) => {
            info!(
                document_id = %document.id,
                department_id = %document.department_id,
                "Document completed"
            );
            (StatusCode::OK, Json(document_to_response(document))).into_response()
        }
        Err(e) => {
            error!(error = %e, document_id = %id, "Failed to complete document");
            lifecycle_error_response(&e)
        }
    }
}

/// POST `/documents/{id}/finalize` - Close out an approved document.
async fn finalize_document(
    State(state): State<AppState>,
    actor: ActorContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<FinalizeDocumentRequest>,
) -> impl IntoResponse {
    let repo = LifecycleRepository::new((*state.db).clone(), state.notifier.clone());

    match repo.finalize(id, actor.get(), payload.note).await {
        Ok(document) => {
            info!(document_id = %document.id, "Document finalized");
            (StatusCode::OK, Json(document_to_response(document))).into_response()
        }
        Err(e) => {
            error!(error = %e, document_id = %id, "Failed to finalize document");
            lifecycle_error_response(&e)
        }
    }
}

/// GET `/documents/{id}/history` - Movements and decisions, oldest first.
async fn get_document_history(
    State(state): State<AppState>,
    _actor: ActorContext,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = LifecycleRepository::new((*state.db).clone(), state.notifier.clone());

    match repo.get_history(id).await {
        Ok(history) => (
            StatusCode::OK,
            Json(json!({
                "document": document_to_response(history.document),
                "events": history.events
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, document_id = %id, "Failed to load document history");
            lifecycle_error_response(&e)
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn document_to_response(document: documents::Model) -> DocumentResponse {
    DocumentResponse {
        id: document.id,
        title: document.title,
        doc_type: document.doc_type,
        status: status_to_string(&document.status),
        department_id: document.department_id,
        final_destination_id: document.final_destination_id,
        trail_id: document.trail_id,
        file_ref: document.file_ref,
        uploaded_by: document.uploaded_by,
        submitted_by: document.submitted_by,
        finalized_by: document.finalized_by,
        finalized_at: document.finalized_at.map(|t| t.to_rfc3339()),
        finalize_note: document.finalize_note,
        created_at: document.created_at.to_rfc3339(),
        updated_at: document.updated_at.to_rfc3339(),
    }
}

fn status_to_string(status: &DocumentStatus) -> String {
    match status {
        DocumentStatus::Pending => "pending",
        DocumentStatus::InMovement => "in_movement",
        DocumentStatus::PendingApproval => "pending_approval",
        DocumentStatus::Approved => "approved",
        DocumentStatus::Rejected => "rejected",
        DocumentStatus::Done => "done",
    }
    .to_string()
}

fn parse_status(s: &str) -> Option<DocumentStatus> {
    match s {
        "pending" => Some(DocumentStatus::Pending),
        "in_movement" => Some(DocumentStatus::InMovement),
        "pending_approval" => Some(DocumentStatus::PendingApproval),
        "approved" => Some(DocumentStatus::Approved),
        "rejected" => Some(DocumentStatus::Rejected),
        "done" => Some(DocumentStatus::Done),
        _ => None,
    }
}

fn lifecycle_error_response(e: &LifecycleError) -> axum::response::Response {
    let status =
        StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = match e {
        // Storage details stay out of response bodies
        LifecycleError::Database(_) => "An error occurred".to_string(),
        other => other.to_string(),
    };

    (
        status,
        Json(json!({ "error": e.error_code(), "message": message })),
    )
        .into_response()
}


/// Router-level tests. The disconnected state never reaches the
/// database: every request here is refused by the middleware or by
/// request validation first.
#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::{Router, body::Body, http::Request, middleware::from_fn};
    use http_body_util::BodyExt;
    use sea_orm::DatabaseConnection;
    use tower::ServiceExt;

    use doctra_db::LogNotifier;

    use super::*;
    use crate::middleware::actor::{
        ACTOR_DEPARTMENT_HEADER, ACTOR_ID_HEADER, ACTOR_ROLE_HEADER, actor_middleware,
    };

    fn test_app() -> Router {
        let state = AppState {
            db: Arc::new(DatabaseConnection::Disconnected),
            notifier: Arc::new(LogNotifier),
        };
        Router::new()
            .merge(routes())
            .layer(from_fn(actor_middleware))
            .with_state(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_actor_headers_rejected() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/documents")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"], "missing_actor");
    }

    #[tokio::test]
    async fn test_malformed_actor_role_rejected() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/documents")
                    .header(ACTOR_ID_HEADER, Uuid::new_v4().to_string())
                    .header(ACTOR_ROLE_HEADER, "intern")
                    .header(ACTOR_DEPARTMENT_HEADER, Uuid::new_v4().to_string())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"], "invalid_actor");
    }

    #[tokio::test]
    async fn test_unknown_decision_rejected() {
        let document_id = Uuid::new_v4();
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/documents/{document_id}/decision"))
                    .header(ACTOR_ID_HEADER, Uuid::new_v4().to_string())
                    .header(ACTOR_ROLE_HEADER, "supervisor")
                    .header(ACTOR_DEPARTMENT_HEADER, Uuid::new_v4().to_string())
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"decision":"escalate"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "invalid_decision");
    }
}
