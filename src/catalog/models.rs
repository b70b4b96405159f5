//! Book data model
//!
//! Defines the persisted book shape, the wire-facing request and response
//! shapes, and the explicit mapping between them. Mapping is hand-written
//! per direction; validation is an explicit function returning one message
//! per violated field.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A book record in the catalog
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Book {
    /// Store-assigned identifier; `None` until the record is persisted,
    /// immutable once assigned
    pub id: Option<i64>,
    /// Book title
    pub title: String,
    /// Book author
    pub author: String,
    /// International Standard Book Number; unique across the catalog
    pub isbn: String,
}

impl Book {
    /// Create a not-yet-persisted book
    pub fn new(title: String, author: String, isbn: String) -> Self {
        Self {
            id: None,
            title,
            author,
            isbn,
        }
    }
}

/// Inbound representation for creating a book
///
/// Every field is optional so that an incomplete body still deserializes
/// and validation can report all missing fields at once.
#[derive(Debug, Default, Deserialize)]
pub struct CreateBookRequest {
    /// Title for the new book
    pub title: Option<String>,
    /// Author for the new book
    pub author: Option<String>,
    /// Isbn for the new book
    pub isbn: Option<String>,
}

impl CreateBookRequest {
    /// Check the required fields, returning one message per missing or
    /// empty field. An empty result means the request is valid.
    pub fn validate(&self) -> Vec<String> {
        let fields = [
            ("title", &self.title),
            ("author", &self.author),
            ("isbn", &self.isbn),
        ];

        fields
            .into_iter()
            .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
            .map(|(name, _)| format!("{name} must not be empty"))
            .collect()
    }

    /// Map the request into an entity. Call `validate` first; missing
    /// fields map to empty strings here.
    pub fn into_book(self) -> Book {
        Book::new(
            self.title.unwrap_or_default(),
            self.author.unwrap_or_default(),
            self.isbn.unwrap_or_default(),
        )
    }
}

/// Inbound representation for updating a book
///
/// Carries title and author only: the isbn is immutable after creation.
#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    /// Replacement title
    pub title: String,
    /// Replacement author
    pub author: String,
}

/// Outbound representation of a stored book
#[derive(Debug, Serialize)]
pub struct BookResponse {
    /// Store-assigned identifier
    pub id: i64,
    /// Book title
    pub title: String,
    /// Book author
    pub author: String,
    /// Book isbn
    pub isbn: String,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            // Responses are only built from persisted records, which
            // always carry an id.
            id: book.id.unwrap_or_default(),
            title: book.title,
            author: book.author,
            isbn: book.isbn,
        }
    }
}

/// Filter for the paginated find operation
#[derive(Debug, Default, Clone)]
pub struct BookFilter {
    /// Match on title
    pub title: Option<String>,
    /// Match on author
    pub author: Option<String>,
    /// Match on isbn
    pub isbn: Option<String>,
}

/// Page selection for the find operation
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: u32,
    /// Number of records per page
    pub size: u32,
}

/// One page of results
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Records on this page
    pub items: Vec<T>,
    /// Total number of matching records across all pages
    pub total: u64,
}

impl<T> Page<T> {
    /// A page with no results
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}
