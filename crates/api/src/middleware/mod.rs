//! Middleware for the API layer.

pub mod actor;

pub use actor::{ActorContext, actor_middleware};
