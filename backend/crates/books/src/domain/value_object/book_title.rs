//! Book Title Value Object
//!
//! A title is required and never empty. Content is otherwise kept as sent.

use crate::error::{BookError, BookResult};

/// Non-empty book title
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookTitle(String);

impl BookTitle {
    /// Create a title, rejecting empty text
    pub fn new(title: impl Into<String>) -> BookResult<Self> {
        let title = title.into();
        if title.is_empty() {
            return Err(BookError::TitleRequired);
        }
        Ok(Self(title))
    }

    /// Title from an optional request field. Missing and empty both yield `None`.
    pub fn from_optional(title: Option<String>) -> Option<Self> {
        title.and_then(|t| Self::new(t).ok())
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for BookTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for BookTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
