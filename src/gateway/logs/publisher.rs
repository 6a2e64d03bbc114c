use async_trait::async_trait;
use tracing::info;
use crate::books::events::InventoryEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher emits every inventory event as a structured log line.
#[derive(Debug, Default)]
pub struct LogPublisher {}

impl LogPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &InventoryEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        info!(event_id = event.event_id.as_str(), book_id = event.book_id.as_str(),
            kind = ?event.kind, quantity = event.quantity, "inventory event {}", json);
        Ok(())
    }
}
