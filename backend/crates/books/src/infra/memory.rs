//! In-Memory Repository Implementation
//!
//! Used by the router tests and when the server runs without `DATABASE_URL`.
//! Data lives only as long as the process.

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entity::book::{Book, BookPatch, NewBook};
use crate::domain::repository::BookRepository;
use crate::domain::value_object::book_id::BookId;
use crate::error::StoreError;

/// In-memory book repository
///
/// Clones share the same storage. Books are kept in insertion order.
#[derive(Clone, Default)]
pub struct InMemoryBookRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored books
    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

impl BookRepository for InMemoryBookRepository {
    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        Ok(self.books.read().await.clone())
    }

    async fn find_by_id(&self, book_id: &BookId) -> Result<Option<Book>, StoreError> {
        let books = self.books.read().await;
        Ok(books.iter().find(|b| &b.book_id == book_id).cloned())
    }

    async fn insert(&self, new_book: &NewBook) -> Result<Book, StoreError> {
        let book = Book::from_new(BookId::new(), new_book, Utc::now());
        self.books.write().await.push(book.clone());
        Ok(book)
    }

    async fn update_by_id(
        &self,
        book_id: &BookId,
        patch: &BookPatch,
    ) -> Result<Option<Book>, StoreError> {
        let mut books = self.books.write().await;
        let Some(book) = books.iter_mut().find(|b| &b.book_id == book_id) else {
            return Ok(None);
        };
        book.apply(patch, Utc::now());
        Ok(Some(book.clone()))
    }

    async fn delete_by_id(&self, book_id: &BookId) -> Result<Option<Book>, StoreError> {
        let mut books = self.books.write().await;
        let removed = books
            .iter()
            .position(|b| &b.book_id == book_id)
            .map(|index| books.remove(index));
        Ok(removed)
    }
}
