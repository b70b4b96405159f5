//! Book business rules
//!
//! The service layer owns the catalog's two rules: isbn uniqueness on
//! create and the assigned-id guard on update and delete. Everything else
//! is a single pass-through call to the record store, and store failures
//! propagate unchanged.

use crate::catalog::db::CatalogDb;
use crate::catalog::models::{Book, BookFilter, Page, PageRequest};
use crate::error::ApiError;

/// Business-rule layer over the catalog record store
#[derive(Clone)]
pub struct BookService {
    db: CatalogDb,
}

impl BookService {
    /// Build the service around a record store handle
    pub fn new(db: CatalogDb) -> Self {
        Self { db }
    }

    /// Persist a new book, enforcing isbn uniqueness
    ///
    /// The existence pre-check gives the clean failure path; the unique
    /// index on isbn closes the race between check and insert, and a
    /// violation of that index maps to the same failure. Returns the
    /// stored record with its assigned id.
    pub async fn save(&self, book: Book) -> Result<Book, ApiError> {
        if self.db.exists_by_isbn(&book.isbn).await? {
            return Err(ApiError::DuplicateIsbn);
        }

        match self.db.insert(book).await {
            Err(ApiError::Database(e)) if is_unique_violation(&e) => Err(ApiError::DuplicateIsbn),
            other => other,
        }
    }

    /// Look a book up by id; absence is `None`, never an error
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Book>, ApiError> {
        self.db.find_by_id(id).await
    }

    /// Remove a stored book
    ///
    /// The record must carry an assigned id; passing one without is a
    /// caller bug.
    pub async fn delete(&self, book: &Book) -> Result<(), ApiError> {
        let id = book.id.ok_or(ApiError::MissingId)?;
        self.db.delete(id).await
    }

    /// Persist the current title and author of a stored book
    ///
    /// Same id guard as `delete`. The isbn is left untouched.
    pub async fn update(&self, book: Book) -> Result<Book, ApiError> {
        let id = book.id.ok_or(ApiError::MissingId)?;
        self.db.update(id, &book).await?;
        Ok(book)
    }

    /// Paginated catalog search
    ///
    /// Declared but not implemented; always returns an empty page.
    pub async fn find(
        &self,
        _filter: &BookFilter,
        _page: PageRequest,
    ) -> Result<Page<Book>, ApiError> {
        Ok(Page::empty())
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}
