//! Books Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Book entity, value objects, repository trait
//! - `application/` - One use case per operation
//! - `infra/` - PostgreSQL and in-memory repository implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## HTTP surface
//! - `GET /books` - list every book
//! - `GET /books/{id}` - fetch one book
//! - `POST /books` - create a book (`title` and `description` required)
//! - `PUT /books/{id}` - partial update
//! - `DELETE /books/{id}` - delete and return the removed book
//!
//! The store is injected as router state, never held globally.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{BookError, BookResult, StoreError};
pub use infra::memory::InMemoryBookRepository;
pub use infra::postgres::PgBookRepository;
pub use presentation::router::{books_router, books_router_generic};

pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
