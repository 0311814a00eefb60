//! Create Book Use Case
//!
//! Validates the required fields and inserts a new book. The id is always
//! assigned by the store.

use std::sync::Arc;

use crate::domain::entity::book::{Book, NewBook};
use crate::domain::repository::BookRepository;
use crate::domain::value_object::{book_description::BookDescription, book_title::BookTitle};
use crate::error::{BookError, BookOperation, BookResult};

/// Create book input
pub struct CreateBookInput {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Create book use case
pub struct CreateBookUseCase<R>
where
    R: BookRepository,
{
    book_repo: Arc<R>,
}

impl<R> CreateBookUseCase<R>
where
    R: BookRepository,
{
    pub fn new(book_repo: Arc<R>) -> Self {
        Self { book_repo }
    }

    pub async fn execute(&self, input: CreateBookInput) -> BookResult<Book> {
        // Title is checked first
        let title = BookTitle::new(input.title.ok_or(BookError::TitleRequired)?)?;
        let description =
            BookDescription::new(input.description.ok_or(BookError::DescriptionRequired)?)?;

        let book = self
            .book_repo
            .insert(&NewBook::new(title, description))
            .await
            .map_err(BookError::store(BookOperation::Create))?;

        tracing::info!(book_id = %book.book_id, title = %book.title, "Book created");

        Ok(book)
    }
}
