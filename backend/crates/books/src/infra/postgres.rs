//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::book::{Book, BookPatch, NewBook};
use crate::domain::repository::BookRepository;
use crate::domain::value_object::{
    book_description::BookDescription, book_id::BookId, book_title::BookTitle,
};
use crate::error::StoreError;

/// PostgreSQL-backed book repository
#[derive(Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl BookRepository for PgBookRepository {
    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT
                book_id,
                title,
                description,
                created_at,
                updated_at
            FROM books
            ORDER BY created_at, book_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BookRow::into_book).collect())
    }

    async fn find_by_id(&self, book_id: &BookId) -> Result<Option<Book>, StoreError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT
                book_id,
                title,
                description,
                created_at,
                updated_at
            FROM books
            WHERE book_id = $1
            "#,
        )
        .bind(book_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BookRow::into_book))
    }

    async fn insert(&self, new_book: &NewBook) -> Result<Book, StoreError> {
        // book_id, created_at and updated_at come from column defaults
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (
                title,
                description
            ) VALUES ($1, $2)
            RETURNING
                book_id,
                title,
                description,
                created_at,
                updated_at
            "#,
        )
        .bind(new_book.title.as_str())
        .bind(new_book.description.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_book())
    }

    async fn update_by_id(
        &self,
        book_id: &BookId,
        patch: &BookPatch,
    ) -> Result<Option<Book>, StoreError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            UPDATE books SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                updated_at = now()
            WHERE book_id = $1
            RETURNING
                book_id,
                title,
                description,
                created_at,
                updated_at
            "#,
        )
        .bind(book_id.as_uuid())
        .bind(patch.title.as_ref().map(BookTitle::as_str))
        .bind(patch.description.as_ref().map(BookDescription::as_str))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BookRow::into_book))
    }

    async fn delete_by_id(&self, book_id: &BookId) -> Result<Option<Book>, StoreError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            DELETE FROM books
            WHERE book_id = $1
            RETURNING
                book_id,
                title,
                description,
                created_at,
                updated_at
            "#,
        )
        .bind(book_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BookRow::into_book))
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct BookRow {
    book_id: Uuid,
    title: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BookRow {
    fn into_book(self) -> Book {
        Book {
            book_id: BookId::from_uuid(self.book_id),
            title: BookTitle::from_db(self.title),
            description: BookDescription::from_db(self.description),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
