//! Error types and error handling for the application
//!
//! This module defines the error taxonomy of the catalog service and its
//! conversion to HTTP responses. Every failure a handler can produce is an
//! `ApiError`; the mapping to a status code and the `{"errors": [...]}`
//! envelope happens in exactly one place, the `IntoResponse` impl.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// No book exists with the requested id
    #[error("Book not found")]
    NotFound,

    /// A book with the same isbn is already stored
    #[error("Isbn already exists.")]
    DuplicateIsbn,

    /// Required fields of an inbound book were missing or empty;
    /// carries one message per violated field
    #[error("Invalid book data")]
    Validation(Vec<String>),

    /// A book without an assigned id was passed to update or delete.
    /// Reaching this is a caller bug, not a client error.
    #[error("Book id cant be null")]
    MissingId,

    /// The record store failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error envelope: a single `errors` array of human-readable messages
#[derive(Debug, Serialize)]
pub struct ApiErrors {
    /// One message per failure
    pub errors: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, errors) = match self {
            // Not-found carries no body beyond the status.
            ApiError::NotFound => return StatusCode::NOT_FOUND.into_response(),
            ApiError::Validation(messages) => (StatusCode::BAD_REQUEST, messages),
            ApiError::DuplicateIsbn => (StatusCode::BAD_REQUEST, vec![self.to_string()]),
            ApiError::MissingId => (StatusCode::INTERNAL_SERVER_ERROR, vec![self.to_string()]),
            ApiError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, vec![self.to_string()]),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, vec![self.to_string()]),
        };

        (status, Json(ApiErrors { errors })).into_response()
    }
}
