//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the Maktab API.
//! It maps domain-specific errors to appropriate HTTP status codes and JSON
//! error responses, ensuring a consistent error handling experience across
//! the entire API.
//!
//! The mapping distinguishes "the data could not be loaded" (503, retryable)
//! from "there is genuinely nothing here" (an empty 200 body), so a transient
//! fetch failure never shows up to a student as a fully booked day.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use maktab_core::errors::MaktabError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `MaktabError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub MaktabError);

/// Converts application errors to HTTP responses
///
/// This implementation maps each error type to the appropriate HTTP status code
/// and formats the error message into a JSON response body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            MaktabError::NotFound(_) => StatusCode::NOT_FOUND,
            MaktabError::Validation(_) => StatusCode::BAD_REQUEST,
            MaktabError::DataUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            MaktabError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from MaktabError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, MaktabError>` in handler functions that return `Result<T, AppError>`.
impl From<MaktabError> for AppError {
    fn from(err: MaktabError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// Repository fetch failures surface as `DataUnavailable`, the retryable
/// condition, rather than being silently treated as empty data.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(MaktabError::DataUnavailable(err))
    }
}

/// Maps a MaktabError to an HTTP response
pub fn map_error(err: MaktabError) -> Response {
    AppError(err).into_response()
}
