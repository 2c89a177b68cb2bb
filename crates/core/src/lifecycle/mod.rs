//! Document lifecycle management for Doctra.
//!
//! This module implements the document state machine, the access
//! policy, and the notification contract.
//!
//! # Modules
//!
//! - `types` - Lifecycle domain types (DocumentStatus, LifecycleAction, Actor)
//! - `error` - Lifecycle-specific error types
//! - `service` - The authoritative state transition logic
//! - `policy` - Pure access predicate (role and department scope)
//! - `notify` - Fire-and-forget notification contract

pub mod error;
pub mod notify;
pub mod policy;
pub mod service;
pub mod types;

#[cfg(test)]
mod policy_props;
#[cfg(test)]
mod service_props;

pub use error::LifecycleError;
pub use notify::{NotificationEvent, NotificationSink, NotifyError};
pub use policy::{AccessPolicy, PolicyAction};
pub use service::LifecycleService;
pub use types::{Actor, ActorRole, Decision, DocumentStatus, LifecycleAction};
