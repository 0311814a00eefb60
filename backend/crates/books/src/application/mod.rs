//! Application Layer - Use Cases
//!
//! One use case per HTTP operation. Each wraps its store call and turns
//! store failures into `BookError::Store` tagged with the operation.

pub mod create_book;
pub mod delete_book;
pub mod get_book;
pub mod list_books;
pub mod update_book;

pub use create_book::{CreateBookInput, CreateBookUseCase};
pub use delete_book::DeleteBookUseCase;
pub use get_book::GetBookUseCase;
pub use list_books::ListBooksUseCase;
pub use update_book::{UpdateBookInput, UpdateBookUseCase};
