//! Notification sinks.

use async_trait::async_trait;

use doctra_core::lifecycle::{NotificationEvent, NotificationSink, NotifyError};

/// Notification sink that writes events to the application log.
///
/// Stands in for a real delivery channel. Delivery stays
/// fire-and-forget regardless of the sink behind the trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl NotificationSink for LogNotifier {
    async fn send(&self, event: NotificationEvent) -> Result<(), NotifyError> {
        tracing::info!(
            recipient_id = %event.recipient_id,
            document_id = %event.document_id,
            message = %event.message,
            "Notification"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_log_notifier_always_delivers() {
        let sink = LogNotifier;
        let event = NotificationEvent::new(Uuid::new_v4(), Uuid::new_v4(), "hello".to_string());
        assert!(sink.send(event).await.is_ok());
    }
}
