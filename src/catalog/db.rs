//! Catalog database operations
//!
//! Handles all record-store interactions for books. This is the only
//! module that talks SQL; the service layer above it never sees a query.

use crate::catalog::models::Book;
use crate::error::ApiError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};

/// Database connection pool for the book catalog
#[derive(Clone)]
pub struct CatalogDb {
    pool: SqlitePool,
}

impl CatalogDb {
    /// Initialize the record store at the given path
    ///
    /// Creates the database file (and its parent directory) if missing and
    /// applies the bootstrap migration.
    pub async fn new(db_path: &str) -> Result<Self, ApiError> {
        // Ensure parent directory exists
        if let Some(parent) = PathBuf::from(db_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ApiError::Internal(anyhow::anyhow!("Failed to create db directory: {}", e))
            })?;
        }

        // SQLite connection string format: sqlite://path/to/db.db
        let connection_string = if db_path.starts_with("sqlite:") {
            db_path.to_string()
        } else {
            format!("sqlite:{}", db_path)
        };

        let options = SqliteConnectOptions::from_str(&connection_string)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Invalid database path: {}", e)))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        info!("Connected to SQLite database at: {}", db_path);

        let db = Self { pool };
        db.run_migrations().await?;

        Ok(db)
    }

    /// Record store over a private in-memory database, for tests
    ///
    /// A single connection is mandatory here: every connection to
    /// `:memory:` opens its own database.
    pub async fn in_memory() -> Result<Self, ApiError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Invalid connection string: {}", e)))?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.run_migrations().await?;

        Ok(db)
    }

    /// Run database migrations
    async fn run_migrations(&self) -> Result<(), ApiError> {
        let migration_sql = include_str!("../../migrations/001_create_books.sql");

        // Strip comment lines and execute each statement separately;
        // SQLite takes one statement per execute.
        let cleaned_sql: String = migration_sql
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with("--"))
            .collect::<Vec<_>>()
            .join(" ");

        for statement in cleaned_sql.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        debug!("Database migrations completed");
        Ok(())
    }

    /// `true` if any stored book carries this isbn
    pub async fn exists_by_isbn(&self, isbn: &str) -> Result<bool, ApiError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE isbn = ?)")
            .bind(isbn)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    /// Fetch a book by id
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Book>, ApiError> {
        let book =
            sqlx::query_as::<_, Book>("SELECT id, title, author, isbn FROM books WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(book)
    }

    /// Insert a new book and return it with the store-assigned id
    ///
    /// A violation of the unique isbn index surfaces as a database error;
    /// the service maps it to the duplicate-isbn failure.
    pub async fn insert(&self, book: Book) -> Result<Book, ApiError> {
        let result = sqlx::query("INSERT INTO books (title, author, isbn) VALUES (?, ?, ?)")
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.isbn)
            .execute(&self.pool)
            .await?;

        let id = result.last_insert_rowid();
        debug!("Inserted book {} (isbn {})", id, book.isbn);

        Ok(Book {
            id: Some(id),
            ..book
        })
    }

    /// Persist the title and author of an existing record
    ///
    /// The isbn column is never touched; it is immutable after creation.
    pub async fn update(&self, id: i64, book: &Book) -> Result<(), ApiError> {
        sqlx::query("UPDATE books SET title = ?, author = ? WHERE id = ?")
            .bind(&book.title)
            .bind(&book.author)
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!("Updated book {}", id);
        Ok(())
    }

    /// Delete a book by id
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!("Deleted book {}", id);
        Ok(())
    }
}
