use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

#[derive(Debug, Default)]
struct Shelf {
    // insertion order, used for listing
    books: Vec<BookEntity>,
    // position of the first book stored under each id
    index: HashMap<String, usize>,
}

impl Shelf {
    fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }
}

/// In-memory inventory of the catalog.
///
/// Reads share a read lock; create and quantity changes hold the write lock for
/// their whole check-then-mutate sequence, so concurrent checkouts can never
/// take the quantity of a book below zero.
#[derive(Debug)]
pub struct MemoryBookRepository {
    shelf: RwLock<Shelf>,
    unique_ids: bool,
    max_quantity: Option<i64>,
}

impl MemoryBookRepository {
    pub fn new(unique_ids: bool, max_quantity: Option<i64>) -> Self {
        Self {
            shelf: RwLock::new(Shelf::default()),
            unique_ids,
            max_quantity,
        }
    }

    pub fn from_config(config: &Configuration) -> Self {
        Self::new(config.unique_ids, config.max_quantity)
    }

    fn read(&self) -> LibraryResult<RwLockReadGuard<'_, Shelf>> {
        Ok(self.shelf.read()?)
    }

    fn write(&self) -> LibraryResult<RwLockWriteGuard<'_, Shelf>> {
        Ok(self.shelf.write()?)
    }

    fn validate(entity: &BookEntity) -> LibraryResult<()> {
        if entity.id.is_empty() {
            return Err(LibraryError::validation("book id must not be empty", Some("id".to_string())));
        }
        if entity.quantity < 0 {
            return Err(LibraryError::validation(format!("quantity of book {} must not be negative {}",
                                                        entity.id, entity.quantity).as_str(), Some("quantity".to_string())));
        }
        Ok(())
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        Self::validate(entity)?;
        let mut shelf = self.write()?;
        if self.unique_ids && shelf.index.contains_key(entity.id.as_str()) {
            return Err(LibraryError::duplicate_key(format!("book {} already exists", entity.id).as_str()));
        }
        let pos = shelf.books.len();
        shelf.books.push(entity.clone());
        // the first book under an id keeps answering lookups when duplicates are allowed
        shelf.index.entry(entity.id.to_string()).or_insert(pos);
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let shelf = self.read()?;
        shelf.position(id)
            .map(|pos| shelf.books[pos].clone())
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.read()?.books.clone())
    }

    async fn count(&self) -> LibraryResult<usize> {
        Ok(self.read()?.books.len())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn adjust_quantity(&self, id: &str, delta: i64) -> LibraryResult<BookEntity> {
        let mut shelf = self.write()?;
        let pos = shelf.position(id)
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))?;
        let book = &mut shelf.books[pos];
        let next = book.quantity.checked_add(delta)
            .ok_or_else(|| LibraryError::overflow(format!("quantity of book {} cannot grow by {}", id, delta).as_str()))?;
        if delta < 0 && next < 0 {
            return Err(LibraryError::unavailable(format!("book {} is not available, {} left",
                                                         id, book.quantity).as_str(), Some("out_of_stock".to_string()), true));
        }
        if let Some(max) = self.max_quantity {
            if delta > 0 && next > max {
                return Err(LibraryError::overflow(format!("book {} cannot exceed {} copies", id, max).as_str()));
            }
        }
        book.quantity = next;
        book.version += 1;
        book.updated_at = Utc::now().naive_utc();
        Ok(book.clone())
    }
}
