//! Unit and router tests for the books crate

#[cfg(test)]
mod dto_tests {
    use crate::domain::entity::book::{Book, NewBook};
    use crate::domain::value_object::{
        book_description::BookDescription, book_id::BookId, book_title::BookTitle,
    };
    use crate::presentation::dto::*;
    use chrono::Utc;

    #[test]
    fn test_create_request_ignores_client_id() {
        let json = r#"{"_id":"abc","id":"def","title":"A","description":"B"}"#;
        let request: CreateBookRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.title.as_deref(), Some("A"));
        assert_eq!(request.description.as_deref(), Some("B"));
    }

    #[test]
    fn test_create_request_missing_fields() {
        let request: CreateBookRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(request.title.is_none());
        assert!(request.description.is_none());

        let request: CreateBookRequest =
            serde_json::from_str(r#"{"title":null,"description":"B"}"#).unwrap();
        assert!(request.title.is_none());
    }

    #[test]
    fn test_update_request_partial() {
        let request: UpdateBookRequest = serde_json::from_str(r#"{"title":"C"}"#).unwrap();
        assert_eq!(request.title.as_deref(), Some("C"));
        assert!(request.description.is_none());
    }

    #[test]
    fn test_book_response_serialization() {
        let new_book = NewBook::new(
            BookTitle::new("A").unwrap(),
            BookDescription::new("B").unwrap(),
        );
        let book = Book::from_new(BookId::new(), &new_book, Utc::now());
        let id = book.book_id.to_string();

        let json = serde_json::to_value(BookResponse::from(book)).unwrap();
        assert_eq!(json["id"], id.as_str());
        assert_eq!(json["title"], "A");
        assert_eq!(json["description"], "B");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }

    #[test]
    fn test_delete_response_serialization() {
        let new_book = NewBook::new(
            BookTitle::new("A").unwrap(),
            BookDescription::new("B").unwrap(),
        );
        let book = Book::from_new(BookId::new(), &new_book, Utc::now());

        let response = DeleteBookResponse {
            message: BOOK_DELETED_MESSAGE.to_string(),
            deleted_book: book.into(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""message":"Book deleted successfully""#));
        assert!(json.contains(r#""deletedBook":{"#));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::error::{app_error::AppError, kind::ErrorKind};
    use std::error::Error;

    fn store_error(operation: BookOperation) -> BookError {
        BookError::store(operation)(StoreError::Unavailable("disk on fire".into()))
    }

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(BookError, StatusCode)> = vec![
            (BookError::TitleRequired, StatusCode::BAD_REQUEST),
            (BookError::DescriptionRequired, StatusCode::BAD_REQUEST),
            (BookError::EmptyUpdate, StatusCode::BAD_REQUEST),
            (
                BookError::InvalidBody("expected value".into()),
                StatusCode::BAD_REQUEST,
            ),
            (BookError::NotFound, StatusCode::NOT_FOUND),
            (
                store_error(BookOperation::List),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                store_error(BookOperation::Fetch),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_store_error_message_is_generic() {
        let err = store_error(BookOperation::Update);
        assert_eq!(err.to_string(), "Failed to update book");
        assert!(err.source().is_some());

        let app_err = AppError::from(err);
        assert_eq!(app_err.kind(), ErrorKind::InternalServerError);
        assert_eq!(app_err.message(), "Failed to update book");
        assert!(app_err.source().is_some());
    }

    #[test]
    fn test_operation_messages() {
        assert_eq!(BookOperation::List.failure_message(), "Failed to list books");
        assert_eq!(BookOperation::Fetch.failure_message(), "Failed to fetch book");
        assert_eq!(BookOperation::Create.failure_message(), "Failed to create book");
        assert_eq!(BookOperation::Delete.failure_message(), "Failed to delete book");
        assert_eq!(BookOperation::Delete.to_string(), "delete");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(BookError::TitleRequired.kind(), ErrorKind::BadRequest);
        assert_eq!(BookError::NotFound.kind(), ErrorKind::NotFound);
        assert_eq!(
            store_error(BookOperation::Create).kind(),
            ErrorKind::InternalServerError
        );
    }
}

#[cfg(test)]
mod router_tests {
    use crate::domain::entity::book::{Book, BookPatch, NewBook};
    use crate::domain::repository::BookRepository;
    use crate::domain::value_object::book_id::BookId;
    use crate::error::StoreError;
    use crate::infra::memory::InMemoryBookRepository;
    use crate::presentation::dto::{BookResponse, DeleteBookResponse};
    use crate::presentation::router::books_router_generic;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    /// Store whose every call fails
    #[derive(Clone)]
    struct FailingBookRepository;

    impl FailingBookRepository {
        fn error() -> StoreError {
            StoreError::Unavailable("connection refused (db.internal:5432)".into())
        }
    }

    impl BookRepository for FailingBookRepository {
        async fn list(&self) -> Result<Vec<Book>, StoreError> {
            Err(Self::error())
        }

        async fn find_by_id(&self, _book_id: &BookId) -> Result<Option<Book>, StoreError> {
            Err(Self::error())
        }

        async fn insert(&self, _new_book: &NewBook) -> Result<Book, StoreError> {
            Err(Self::error())
        }

        async fn update_by_id(
            &self,
            _book_id: &BookId,
            _patch: &BookPatch,
        ) -> Result<Option<Book>, StoreError> {
            Err(Self::error())
        }

        async fn delete_by_id(&self, _book_id: &BookId) -> Result<Option<Book>, StoreError> {
            Err(Self::error())
        }
    }

    fn app() -> (Router, InMemoryBookRepository) {
        let repo = InMemoryBookRepository::new();
        (books_router_generic(repo.clone()), repo)
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn create(app: &Router, title: &str, description: &str) -> BookResponse {
        let (status, body) = send(
            app,
            json_request(
                Method::POST,
                "/books",
                json!({ "title": title, "description": description }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        serde_json::from_value(body).unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_created_book() {
        let (app, _) = app();

        let book = create(&app, "A", "B").await;

        assert_eq!(book.title, "A");
        assert_eq!(book.description, "B");
        assert!(!book.id.is_nil());
    }

    #[tokio::test]
    async fn test_create_ignores_client_id() {
        let (app, _) = app();
        let forced = uuid::Uuid::new_v4();

        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/books",
                json!({ "id": forced, "_id": forced, "title": "A", "description": "B" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_ne!(body["id"], json!(forced));
    }

    #[tokio::test]
    async fn test_create_without_title_is_rejected() {
        let (app, repo) = app();

        let (status, body) = send(
            &app,
            json_request(Method::POST, "/books", json!({ "description": "B" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Title is required" }));

        let (status, _) = send(
            &app,
            json_request(
                Method::POST,
                "/books",
                json!({ "title": "", "description": "B" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_without_description_is_rejected() {
        let (app, repo) = app();

        let (status, body) = send(
            &app,
            json_request(Method::POST, "/books", json!({ "title": "A" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Description is required" }));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_with_malformed_body() {
        let (app, repo) = app();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/books")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"title\": "))
            .unwrap();
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("Invalid request body")
        );
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_list_contains_created_books() {
        let (app, _) = app();

        let created = vec![
            create(&app, "one", "1").await,
            create(&app, "two", "2").await,
            create(&app, "three", "3").await,
        ];

        let (status, body) = send(&app, empty_request(Method::GET, "/books")).await;
        assert_eq!(status, StatusCode::OK);

        let listed: Vec<BookResponse> = serde_json::from_value(body).unwrap();
        assert!(listed.len() >= created.len());
        for book in &created {
            assert!(listed.contains(book));
        }
    }

    #[tokio::test]
    async fn test_list_empty() {
        let (app, _) = app();

        let (status, body) = send(&app, empty_request(Method::GET, "/books")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_get_round_trip() {
        let (app, _) = app();
        let created = create(&app, "A", "B").await;

        let (status, body) = send(
            &app,
            empty_request(Method::GET, &format!("/books/{}", created.id)),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let fetched: BookResponse = serde_json::from_value(body).unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_unknown_and_malformed_ids() {
        let (app, _) = app();

        let (status, body) = send(
            &app,
            empty_request(Method::GET, &format!("/books/{}", uuid::Uuid::new_v4())),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Book not found" }));

        let (status, _) = send(&app, empty_request(Method::GET, "/books/not-an-id")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_title_keeps_description() {
        let (app, repo) = app();
        let created = create(&app, "A", "B").await;

        let (status, body) = send(
            &app,
            json_request(
                Method::PUT,
                &format!("/books/{}", created.id),
                json!({ "title": "C" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let updated: BookResponse = serde_json::from_value(body).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "C");
        assert_eq!(updated.description, "B");
        assert_eq!(updated.created_at, created.created_at);

        let stored = repo
            .find_by_id(&BookId::from_uuid(created.id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.title.as_str(), "C");
        assert_eq!(stored.description.as_str(), "B");
    }

    #[tokio::test]
    async fn test_update_ignores_empty_fields() {
        let (app, _) = app();
        let created = create(&app, "A", "B").await;

        let (status, body) = send(
            &app,
            json_request(
                Method::PUT,
                &format!("/books/{}", created.id),
                json!({ "title": "", "description": "D" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "A");
        assert_eq!(body["description"], "D");
    }

    #[tokio::test]
    async fn test_update_without_fields_is_rejected() {
        let (app, _) = app();
        let created = create(&app, "A", "B").await;

        for payload in [json!({}), json!({ "title": "", "description": "" })] {
            let (status, body) = send(
                &app,
                json_request(Method::PUT, &format!("/books/{}", created.id), payload),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({ "error": "No fields to update" }));
        }
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let (app, _) = app();

        let (status, body) = send(
            &app,
            json_request(
                Method::PUT,
                &format!("/books/{}", uuid::Uuid::new_v4()),
                json!({ "title": "C" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Book not found" }));
    }

    #[tokio::test]
    async fn test_delete_returns_removed_book() {
        let (app, _) = app();
        let created = create(&app, "A", "B").await;
        let uri = format!("/books/{}", created.id);

        let (status, body) = send(&app, empty_request(Method::DELETE, &uri)).await;
        assert_eq!(status, StatusCode::OK);
        let deleted: DeleteBookResponse = serde_json::from_value(body).unwrap();
        assert_eq!(deleted.message, "Book deleted successfully");
        assert_eq!(deleted.deleted_book, created);

        let (status, _) = send(&app, empty_request(Method::GET, &uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, empty_request(Method::DELETE, &uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_store_failures_are_500_without_details() {
        let app = books_router_generic(FailingBookRepository);
        let id = uuid::Uuid::new_v4();
        let item = format!("/books/{}", id);

        let cases = vec![
            (empty_request(Method::GET, "/books"), "Failed to list books"),
            (empty_request(Method::GET, &item), "Failed to fetch book"),
            (
                json_request(
                    Method::POST,
                    "/books",
                    json!({ "title": "A", "description": "B" }),
                ),
                "Failed to create book",
            ),
            (
                json_request(Method::PUT, &item, json!({ "title": "C" })),
                "Failed to update book",
            ),
            (empty_request(Method::DELETE, &item), "Failed to delete book"),
        ];

        for (request, message) in cases {
            let (status, body) = send(&app, request).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, json!({ "error": message }));
        }
    }

    #[tokio::test]
    async fn test_validation_runs_before_store() {
        let app = books_router_generic(FailingBookRepository);

        let (status, _) = send(
            &app,
            json_request(Method::POST, "/books", json!({ "description": "B" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            json_request(
                Method::PUT,
                &format!("/books/{}", uuid::Uuid::new_v4()),
                json!({}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
