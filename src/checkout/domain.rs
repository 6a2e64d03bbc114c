use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

pub mod service;

// quantity change applied when a copy leaves the shelf
pub const CHECKOUT_DELTA: i64 = -1;
// quantity change applied when a copy comes back
pub const RETURN_DELTA: i64 = 1;

#[async_trait]
pub trait CheckoutService: Sync + Send {
    async fn checkout(&self, book_id: &str) -> LibraryResult<BookDto>;
    async fn returned(&self, book_id: &str) -> LibraryResult<BookDto>;
}
