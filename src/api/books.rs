//! Book catalog API handlers
//!
//! Contains HTTP request handlers for book CRUD operations. Handlers map
//! the wire shapes to the entity, call the service, and map the result
//! back; they never touch the record store directly.

use crate::catalog::models::{BookResponse, CreateBookRequest, UpdateBookRequest};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

/// POST /api/books - Create a new book
pub async fn create_book(
    State(state): State<AppState>,
    Json(request): Json<CreateBookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let violations = request.validate();
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    let book = state.books.save(request.into_book()).await?;

    Ok((StatusCode::CREATED, Json(BookResponse::from(book))))
}

/// GET /api/books/:id - Get a specific book
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = state
        .books
        .get_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(BookResponse::from(book)))
}

/// PUT /api/books/:id - Update a book's title and author
///
/// The isbn is immutable once assigned; the request body does not carry
/// one and the stored isbn survives the update.
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateBookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let mut book = state
        .books
        .get_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    book.title = request.title;
    book.author = request.author;
    let book = state.books.update(book).await?;

    Ok(Json(BookResponse::from(book)))
}

/// DELETE /api/books/:id - Delete a book
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let book = state
        .books
        .get_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    state.books.delete(&book).await?;

    Ok(StatusCode::NO_CONTENT)
}
