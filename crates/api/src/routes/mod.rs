//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::actor::actor_middleware};

pub mod departments;
pub mod documents;
pub mod health;
pub mod trails;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    // Resource routes require actor identity headers
    let protected_routes = Router::new()
        .merge(documents::routes())
        .merge(trails::routes())
        .merge(departments::routes())
        .layer(middleware::from_fn(actor_middleware));

    Router::new()
        .merge(health::routes())
        .merge(protected_routes)
}
