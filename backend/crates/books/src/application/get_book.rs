//! Get Book Use Case

use std::sync::Arc;

use crate::domain::entity::book::Book;
use crate::domain::repository::BookRepository;
use crate::domain::value_object::book_id::parse_book_id;
use crate::error::{BookError, BookOperation, BookResult};

pub struct GetBookUseCase<R>
where
    R: BookRepository,
{
    book_repo: Arc<R>,
}

impl<R> GetBookUseCase<R>
where
    R: BookRepository,
{
    pub fn new(book_repo: Arc<R>) -> Self {
        Self { book_repo }
    }

    /// Missing book is `NotFound`; store failure stays a store failure
    pub async fn execute(&self, raw_book_id: &str) -> BookResult<Book> {
        let book_id = parse_book_id(raw_book_id)?;

        self.book_repo
            .find_by_id(&book_id)
            .await
            .map_err(BookError::store(BookOperation::Fetch))?
            .ok_or(BookError::NotFound)
    }
}
