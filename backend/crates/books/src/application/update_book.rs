//! Update Book Use Case
//!
//! Partial update: only fields present in the request are written.
//! Empty strings count as absent, so a stored title never becomes empty.

use std::sync::Arc;

use crate::domain::entity::book::{Book, BookPatch};
use crate::domain::repository::BookRepository;
use crate::domain::value_object::{
    book_description::BookDescription, book_id::parse_book_id, book_title::BookTitle,
};
use crate::error::{BookError, BookOperation, BookResult};

/// Update book input
pub struct UpdateBookInput {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UpdateBookInput {
    fn into_patch(self) -> BookPatch {
        BookPatch {
            title: BookTitle::from_optional(self.title),
            description: BookDescription::from_optional(self.description),
        }
    }
}

/// Update book use case
pub struct UpdateBookUseCase<R>
where
    R: BookRepository,
{
    book_repo: Arc<R>,
}

impl<R> UpdateBookUseCase<R>
where
    R: BookRepository,
{
    pub fn new(book_repo: Arc<R>) -> Self {
        Self { book_repo }
    }

    pub async fn execute(&self, raw_book_id: &str, input: UpdateBookInput) -> BookResult<Book> {
        // Body is validated before the id is looked at
        let patch = input.into_patch();
        if patch.is_empty() {
            return Err(BookError::EmptyUpdate);
        }

        let book_id = parse_book_id(raw_book_id)?;

        let book = self
            .book_repo
            .update_by_id(&book_id, &patch)
            .await
            .map_err(BookError::store(BookOperation::Update))?
            .ok_or(BookError::NotFound)?;

        tracing::info!(
            book_id = %book.book_id,
            title_changed = patch.title.is_some(),
            description_changed = patch.description.is_some(),
            "Book updated"
        );

        Ok(book)
    }
}
