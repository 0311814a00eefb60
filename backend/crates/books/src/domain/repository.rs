//! Repository Traits
//!
//! Interface for book persistence. Implementations live in the infra layer.

use crate::domain::entity::book::{Book, BookPatch, NewBook};
use crate::domain::value_object::book_id::BookId;
use crate::error::StoreError;

/// Book repository trait
///
/// `Ok(None)` always means "no book with that id"; it is not an error.
#[trait_variant::make(BookRepository: Send)]
pub trait LocalBookRepository {
    /// All books, oldest first
    async fn list(&self) -> Result<Vec<Book>, StoreError>;

    /// Find book by ID
    async fn find_by_id(&self, book_id: &BookId) -> Result<Option<Book>, StoreError>;

    /// Insert a book. The store assigns id and timestamps.
    async fn insert(&self, new_book: &NewBook) -> Result<Book, StoreError>;

    /// Apply a partial update and return the post-update book
    async fn update_by_id(
        &self,
        book_id: &BookId,
        patch: &BookPatch,
    ) -> Result<Option<Book>, StoreError>;

    /// Delete a book and return what was removed
    async fn delete_by_id(&self, book_id: &BookId) -> Result<Option<Book>, StoreError>;
}
