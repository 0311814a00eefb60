//! Book Error Types
//!
//! Book-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use std::fmt;
use thiserror::Error;

/// Book-specific result type alias
pub type BookResult<T> = Result<T, BookError>;

/// Failure of the underlying store
///
/// Repositories return this. Use cases wrap it into [`BookError::Store`]
/// together with the operation that was running.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Store cannot serve requests (non-SQL stores)
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// The operation a store failure happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookOperation {
    List,
    Fetch,
    Create,
    Update,
    Delete,
}

impl BookOperation {
    /// Generic message returned to the caller when the store fails
    pub const fn failure_message(&self) -> &'static str {
        match self {
            BookOperation::List => "Failed to list books",
            BookOperation::Fetch => "Failed to fetch book",
            BookOperation::Create => "Failed to create book",
            BookOperation::Update => "Failed to update book",
            BookOperation::Delete => "Failed to delete book",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            BookOperation::List => "list",
            BookOperation::Fetch => "fetch",
            BookOperation::Create => "create",
            BookOperation::Update => "update",
            BookOperation::Delete => "delete",
        }
    }
}

impl fmt::Display for BookOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Book-specific error variants
#[derive(Debug, Error)]
pub enum BookError {
    /// Create without a (non-empty) title
    #[error("Title is required")]
    TitleRequired,

    /// Create without a (non-empty) description
    #[error("Description is required")]
    DescriptionRequired,

    /// Update with neither title nor description
    #[error("No fields to update")]
    EmptyUpdate,

    /// Body could not be decoded as the expected JSON payload
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// No book with the requested id
    #[error("Book not found")]
    NotFound,

    /// Store failure. The message stays generic; the source is only logged.
    #[error("{}", .operation.failure_message())]
    Store {
        operation: BookOperation,
        #[source]
        source: StoreError,
    },
}

impl BookError {
    /// Adapter for `map_err` at store call sites
    ///
    /// ```ignore
    /// self.repo.list().await.map_err(BookError::store(BookOperation::List))?;
    /// ```
    pub fn store(operation: BookOperation) -> impl FnOnce(StoreError) -> BookError {
        move |source| BookError::Store { operation, source }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookError::TitleRequired
            | BookError::DescriptionRequired
            | BookError::EmptyUpdate
            | BookError::InvalidBody(_) => ErrorKind::BadRequest,
            BookError::NotFound => ErrorKind::NotFound,
            BookError::Store { .. } => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BookError::Store { operation, source } => {
                tracing::error!(operation = %operation, error = %source, "Book store error");
            }
            _ => {
                tracing::debug!(error = %self, "Book request rejected");
            }
        }
    }
}

impl From<BookError> for AppError {
    fn from(err: BookError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            BookError::Store { source, .. } => AppError::new(kind, message).with_source(source),
            _ => AppError::new(kind, message),
        }
    }
}

impl From<JsonRejection> for BookError {
    fn from(rejection: JsonRejection) -> Self {
        BookError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for BookError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
