//! Business-rule services

pub mod books;

pub use books::BookService;
