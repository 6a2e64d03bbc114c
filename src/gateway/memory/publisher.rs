use std::sync::Mutex;
use async_trait::async_trait;
use crate::books::events::InventoryEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps published events in process, in publishing order.
#[derive(Debug, Default)]
pub struct MemoryPublisher {
    events: Mutex<Vec<InventoryEvent>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> LibraryResult<Vec<InventoryEvent>> {
        Ok(self.events.lock()?.clone())
    }

    pub fn events_for(&self, book_id: &str) -> LibraryResult<Vec<InventoryEvent>> {
        Ok(self.events.lock()?.iter().filter(|e| e.book_id == book_id).cloned().collect())
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &InventoryEvent) -> Result<(), LibraryError> {
        self.events.lock()?.push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::events::{InventoryEvent, InventoryEventKind};
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[tokio::test]
    async fn test_should_publish_to_memory() {
        let publisher = MemoryPublisher::new();
        let one = BookEntity::new("1", "one", "author", 1);
        let two = BookEntity::new("2", "two", "author", 1);
        let events = [
            InventoryEvent::book_added("test", &one),
            InventoryEvent::quantity_changed("test", &one, -1),
            InventoryEvent::book_added("test", &two),
        ];
        for event in &events {
            publisher.publish(event).await.expect("should publish");
        }
        assert_eq!(3, publisher.events().expect("should list").len());
        let events = publisher.events_for("1").expect("should filter");
        assert_eq!(2, events.len());
        assert_eq!(InventoryEventKind::BookAdded, events[0].kind);
        assert_eq!(InventoryEventKind::CheckedOut, events[1].kind);
    }
}
