use async_trait::async_trait;
use crate::books::events::InventoryEvent;
use crate::core::library::LibraryError;

#[async_trait]
pub trait EventPublisher: Sync + Send {
    async fn publish(&self, event: &InventoryEvent) -> Result<(), LibraryError>;
}
