//! Error conversions
//!
//! HTTP rendering of [`AppError`]. Only compiled with the `axum` feature.

use super::app_error::AppError;

/// Renders `{"error": "<message>"}` with the status of the error kind.
/// The source error is never part of the body.
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({ "error": self.message() });

        (status, Json(body)).into_response()
    }
}
