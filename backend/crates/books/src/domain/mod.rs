//! Domain Layer
//!
//! Contains the Book entity, its value objects and the repository trait.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::book::{Book, BookPatch, NewBook};
pub use repository::BookRepository;
