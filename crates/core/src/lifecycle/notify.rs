//! Notification contract for status-change events.
//!
//! The engine emits an event after a decision commits; delivery and
//! rendering belong to an external collaborator. Emission is
//! fire-and-forget: a failing sink must never affect the outcome of
//! the transaction that produced the event.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A status-change event handed to the notification collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEvent {
    /// The user to notify (the document's uploader).
    pub recipient_id: Uuid,
    /// The document the event concerns.
    pub document_id: Uuid,
    /// Human-readable description of what happened.
    pub message: String,
}

impl NotificationEvent {
    /// Creates an event describing a status change on a document.
    #[must_use]
    pub fn new(recipient_id: Uuid, document_id: Uuid, message: impl Into<String>) -> Self {
        Self {
            recipient_id,
            document_id,
            message: message.into(),
        }
    }
}

/// Delivery failure reported by a sink. Callers log and swallow it.
#[derive(Debug, Error)]
#[error("Notification delivery failed: {0}")]
pub struct NotifyError(pub String);

/// Receives status-change events.
///
/// Implementations must be cheap to call from request handlers; anything
/// slow belongs behind an internal queue inside the sink.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver one event.
    async fn send(&self, event: NotificationEvent) -> Result<(), NotifyError>;
}
