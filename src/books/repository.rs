pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    // changes the copies on the shelf by delta as one atomic read-check-write step
    async fn adjust_quantity(&self, id: &str, delta: i64) -> LibraryResult<BookEntity>;
}
