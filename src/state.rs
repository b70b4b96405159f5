//! Shared application state
//!
//! All cross-request state lives in the record store; this struct is just
//! the cheap-to-clone service handle handed to every handler.

use crate::services::books::BookService;

/// State shared across request handlers
#[derive(Clone)]
pub struct AppState {
    /// Book business-rule layer
    pub books: BookService,
}

impl AppState {
    /// Build the application state around a book service
    pub fn new(books: BookService) -> Self {
        Self { books }
    }
}
