//! Book Entity
//!
//! The only entity of the service. Ids and timestamps are assigned by the
//! store on insert; callers hand a [`NewBook`] to the repository.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    book_description::BookDescription, book_id::BookId, book_title::BookTitle,
};

/// Persisted book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Store-assigned identifier, immutable
    pub book_id: BookId,
    pub title: BookTitle,
    pub description: BookDescription,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Materialize an inserted book with the id the store picked
    pub fn from_new(book_id: BookId, new_book: &NewBook, now: DateTime<Utc>) -> Self {
        Self {
            book_id,
            title: new_book.title.clone(),
            description: new_book.description.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. Absent fields keep their value.
    pub fn apply(&mut self, patch: &BookPatch, now: DateTime<Utc>) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        self.updated_at = now;
    }
}

/// Insert payload. Carries no id.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: BookTitle,
    pub description: BookDescription,
}

impl NewBook {
    pub fn new(title: BookTitle, description: BookDescription) -> Self {
        Self { title, description }
    }
}

/// Partial update payload
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub title: Option<BookTitle>,
    pub description: Option<BookDescription>,
}

impl BookPatch {
    /// True when there is nothing to write
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}
