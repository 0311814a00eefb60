//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::book::Book;

/// Message returned with a deleted book
pub const BOOK_DELETED_MESSAGE: &str = "Book deleted successfully";

// ============================================================================
// Requests
// ============================================================================

/// Request for POST /books
///
/// Unknown keys (including any client-sent `id` or `_id`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBookRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Request for PUT /books/{id}
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// A book as returned by every endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.book_id.into_uuid(),
            title: book.title.into_inner(),
            description: book.description.into_inner(),
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

/// Response for DELETE /books/{id}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBookResponse {
    pub message: String,
    pub deleted_book: BookResponse,
}
