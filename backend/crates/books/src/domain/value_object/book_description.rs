//! Book Description Value Object

use crate::error::{BookError, BookResult};

/// Non-empty book description
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookDescription(String);

impl BookDescription {
    pub fn new(description: impl Into<String>) -> BookResult<Self> {
        let description = description.into();
        if description.is_empty() {
            return Err(BookError::DescriptionRequired);
        }
        Ok(Self(description))
    }

    /// Missing and empty both yield `None`
    pub fn from_optional(description: Option<String>) -> Option<Self> {
        description.and_then(|d| Self::new(d).ok())
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for BookDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for BookDescription {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
