use std::sync::Arc;
use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::events::InventoryEvent;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::gateway::events::EventPublisher;

pub struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Arc<dyn BookRepository>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Arc<dyn BookRepository>,
               events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            events_publisher,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let entity = BookEntity::from(book);
        if let Err(err) = self.book_repository.create(&entity).await {
            warn!(book_id = book.id.as_str(), "rejected new book: {}", err);
            return Err(err);
        }
        // the book is stored at this point, a lost event does not undo it
        if let Err(err) = self.events_publisher.publish(&InventoryEvent::book_added(&self.branch_id, &entity)).await {
            warn!(book_id = book.id.as_str(), "failed to publish book added: {}", err);
        }
        info!(book_id = book.id.as_str(), quantity = book.quantity, "added book");
        Ok(book.clone())
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.list().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn count_books(&self) -> LibraryResult<usize> {
        self.book_repository.count().await
    }
}
