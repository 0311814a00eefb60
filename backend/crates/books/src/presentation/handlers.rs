//! HTTP Handlers
//!
//! Every handler builds its use case, awaits it, and lets `BookError`
//! render the failure. Nothing propagates past this layer.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::{
    CreateBookInput, CreateBookUseCase, DeleteBookUseCase, GetBookUseCase, ListBooksUseCase,
    UpdateBookInput, UpdateBookUseCase,
};
use crate::domain::repository::BookRepository;
use crate::error::BookResult;
use crate::presentation::dto::{
    BOOK_DELETED_MESSAGE, BookResponse, CreateBookRequest, DeleteBookResponse, UpdateBookRequest,
};

/// Shared state for book handlers
#[derive(Clone)]
pub struct BooksAppState<R>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /books
pub async fn list_books<R>(
    State(state): State<BooksAppState<R>>,
) -> BookResult<Json<Vec<BookResponse>>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListBooksUseCase::new(state.repo.clone());

    let books = use_case.execute().await?;

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// GET /books/{id}
pub async fn get_book<R>(
    State(state): State<BooksAppState<R>>,
    Path(book_id): Path<String>,
) -> BookResult<Json<BookResponse>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetBookUseCase::new(state.repo.clone());

    let book = use_case.execute(&book_id).await?;

    Ok(Json(book.into()))
}

/// POST /books
pub async fn create_book<R>(
    State(state): State<BooksAppState<R>>,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> BookResult<(StatusCode, Json<BookResponse>)>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = CreateBookUseCase::new(state.repo.clone());

    let input = CreateBookInput {
        title: req.title,
        description: req.description,
    };

    let book = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(book.into())))
}

/// PUT /books/{id}
pub async fn update_book<R>(
    State(state): State<BooksAppState<R>>,
    Path(book_id): Path<String>,
    payload: Result<Json<UpdateBookRequest>, JsonRejection>,
) -> BookResult<Json<BookResponse>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = UpdateBookUseCase::new(state.repo.clone());

    let input = UpdateBookInput {
        title: req.title,
        description: req.description,
    };

    let book = use_case.execute(&book_id, input).await?;

    Ok(Json(book.into()))
}

/// DELETE /books/{id}
pub async fn delete_book<R>(
    State(state): State<BooksAppState<R>>,
    Path(book_id): Path<String>,
) -> BookResult<Json<DeleteBookResponse>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteBookUseCase::new(state.repo.clone());

    let book = use_case.execute(&book_id).await?;

    Ok(Json(DeleteBookResponse {
        message: BOOK_DELETED_MESSAGE.to_string(),
        deleted_book: book.into(),
    }))
}
