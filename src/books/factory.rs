use std::sync::Arc;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

pub fn seed_books() -> Vec<BookEntity> {
    vec![
        BookEntity::new("1", "In Search of Lost Time", "Marcel Proust", 2),
        BookEntity::new("2", "The Great Gatsby", "F. Scott Fitzgerald", 5),
        BookEntity::new("3", "War and Peace", "Leo Tolstoy", 6),
    ]
}

pub async fn create_book_repository(config: &Configuration) -> LibraryResult<Arc<dyn BookRepository>> {
    let repo = MemoryBookRepository::from_config(config);
    if config.seed_catalog {
        for book in seed_books() {
            repo.create(&book).await?;
        }
        info!(branch = config.branch_id.as_str(), books = repo.count().await?, "seeded catalog");
    }
    Ok(Arc::new(repo))
}

#[cfg(test)]
mod tests {
    use crate::books::factory::{create_book_repository, seed_books};
    use crate::core::domain::Configuration;
    use crate::core::repository::Repository;

    #[tokio::test]
    async fn test_should_seed_catalog() {
        let repo = create_book_repository(&Configuration::new("test")).await.expect("should create repository");
        let books = repo.list().await.expect("should list");
        assert_eq!(seed_books().len(), books.len());
        assert_eq!(vec!["1", "2", "3"], books.iter().map(|b| b.id.as_str()).collect::<Vec<_>>());
        assert_eq!(2, repo.get("1").await.expect("should get").quantity);
    }

    #[tokio::test]
    async fn test_should_start_empty() {
        let repo = create_book_repository(&Configuration::new("test").with_seed_catalog(false)).await.expect("should create repository");
        assert_eq!(0, repo.count().await.expect("should count"));
    }
}
