//! Actor identity middleware for protected routes.

use axum::{
    Json,
    extract::{FromRequestParts, Request},
    http::{HeaderMap, StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use uuid::Uuid;

use doctra_core::lifecycle::{Actor, ActorRole};

/// Header carrying the acting user's id (UUID).
pub const ACTOR_ID_HEADER: &str = "x-actor-id";
/// Header carrying the acting user's role.
pub const ACTOR_ROLE_HEADER: &str = "x-actor-role";
/// Header carrying the acting user's home department (UUID).
pub const ACTOR_DEPARTMENT_HEADER: &str = "x-actor-department";

/// Reads a header value as a string slice.
fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|h| h.to_str().ok())
}

fn actor_rejection(error: &str, message: String) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": error, "message": message })),
    )
        .into_response()
}

/// Actor resolution middleware for identity headers.
///
/// The gateway in front of this service authenticates users and forwards
/// the verified identity as headers. This middleware:
/// 1. Reads `x-actor-id`, `x-actor-role` and `x-actor-department`
/// 2. Parses them into an [`Actor`]
/// 3. Stores the actor in request extensions for handlers to access
pub async fn actor_middleware(mut request: Request, next: Next) -> Response {
    let headers = request.headers();

    let Some(raw_id) = header_str(headers, ACTOR_ID_HEADER) else {
        return actor_rejection(
            "missing_actor",
            format!("Header {ACTOR_ID_HEADER} is required"),
        );
    };
    let Ok(id) = Uuid::parse_str(raw_id) else {
        return actor_rejection(
            "invalid_actor",
            format!("Header {ACTOR_ID_HEADER} must be a UUID"),
        );
    };

    let Some(raw_role) = header_str(headers, ACTOR_ROLE_HEADER) else {
        return actor_rejection(
            "missing_actor",
            format!("Header {ACTOR_ROLE_HEADER} is required"),
        );
    };
    let Some(role) = ActorRole::parse(raw_role) else {
        return actor_rejection(
            "invalid_actor",
            format!("Header {ACTOR_ROLE_HEADER} must be one of clerk, supervisor, manager, admin"),
        );
    };

    let Some(raw_department) = header_str(headers, ACTOR_DEPARTMENT_HEADER) else {
        return actor_rejection(
            "missing_actor",
            format!("Header {ACTOR_DEPARTMENT_HEADER} is required"),
        );
    };
    let Ok(department_id) = Uuid::parse_str(raw_department) else {
        return actor_rejection(
            "invalid_actor",
            format!("Header {ACTOR_DEPARTMENT_HEADER} must be a UUID"),
        );
    };

    let actor = Actor {
        id,
        role,
        department_id,
    };
    request.extensions_mut().insert(actor);
    next.run(request).await
}

/// Extractor for the acting user.
///
/// Use this in handlers to get the actor resolved by the middleware:
///
/// ```ignore
/// async fn handler(actor: ActorContext) -> impl IntoResponse {
///     let actor_id = actor.get().id;
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ActorContext(pub Actor);

impl ActorContext {
    /// Returns the resolved actor.
    #[must_use]
    pub fn get(&self) -> &Actor {
        &self.0
    }
}

impl<S> FromRequestParts<S> for ActorContext
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Actor>()
            .copied()
            .map(ActorContext)
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({
                        "error": "unauthorized",
                        "message": "Actor identity required"
                    })),
                )
            })
    }
}
