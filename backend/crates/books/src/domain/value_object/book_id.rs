use kernel::id::Id;

use crate::error::{BookError, BookResult};

pub struct BookMarker;
pub type BookId = Id<BookMarker>;

/// Parse an id taken from a request path
///
/// A malformed id cannot address any book, so it is reported as not found.
pub fn parse_book_id(raw: &str) -> BookResult<BookId> {
    raw.parse().map_err(|_| {
        tracing::debug!(book_id = raw, "Malformed book id");
        BookError::NotFound
    })
}
