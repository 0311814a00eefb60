//! Delete Book Use Case

use std::sync::Arc;

use crate::domain::entity::book::Book;
use crate::domain::repository::BookRepository;
use crate::domain::value_object::book_id::parse_book_id;
use crate::error::{BookError, BookOperation, BookResult};

pub struct DeleteBookUseCase<R>
where
    R: BookRepository,
{
    book_repo: Arc<R>,
}

impl<R> DeleteBookUseCase<R>
where
    R: BookRepository,
{
    pub fn new(book_repo: Arc<R>) -> Self {
        Self { book_repo }
    }

    /// Returns the removed book
    pub async fn execute(&self, raw_book_id: &str) -> BookResult<Book> {
        let book_id = parse_book_id(raw_book_id)?;

        let book = self
            .book_repo
            .delete_by_id(&book_id)
            .await
            .map_err(BookError::store(BookOperation::Delete))?
            .ok_or(BookError::NotFound)?;

        tracing::info!(book_id = %book.book_id, "Book deleted");

        Ok(book)
    }
}
