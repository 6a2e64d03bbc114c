use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info, warn};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::books::events::InventoryEvent;
use crate::books::repository::BookRepository;
use crate::checkout::domain::{CHECKOUT_DELTA, CheckoutService, RETURN_DELTA};
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

pub struct CheckoutServiceImpl {
    branch_id: String,
    book_repository: Arc<dyn BookRepository>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl CheckoutServiceImpl {
    pub fn new(config: &Configuration, book_repository: Arc<dyn BookRepository>,
               events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            events_publisher,
        }
    }

    async fn adjust(&self, book_id: &str, delta: i64) -> LibraryResult<BookDto> {
        let updated = match self.book_repository.adjust_quantity(book_id, delta).await {
            Ok(updated) => updated,
            Err(err) => {
                debug!(book_id, delta, retryable = err.retryable(), "quantity change rejected: {}", err);
                return Err(err);
            }
        };
        let event = InventoryEvent::quantity_changed(&self.branch_id, &updated, delta);
        // the change is committed, a lost event does not undo it
        if let Err(err) = self.events_publisher.publish(&event).await {
            warn!(book_id, delta, "failed to publish quantity change: {}", err);
        }
        let book = BookDto::from(&updated);
        info!(book_id, quantity = book.quantity, available = book.is_available(), kind = ?event.kind, "quantity changed");
        Ok(book)
    }
}

#[async_trait]
impl CheckoutService for CheckoutServiceImpl {
    async fn checkout(&self, book_id: &str) -> LibraryResult<BookDto> {
        self.adjust(book_id, CHECKOUT_DELTA).await
    }

    async fn returned(&self, book_id: &str) -> LibraryResult<BookDto> {
        self.adjust(book_id, RETURN_DELTA).await
    }
}
