//! Book catalog domain: data model and record store access

pub mod db;
pub mod models;

pub use db::CatalogDb;
pub use models::Book;
