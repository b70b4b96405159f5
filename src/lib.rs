//! Library API
//!
//! A REST service for managing a book catalog: CRUD over SQLite, JSON over
//! HTTP. This library exposes the modules for testing and external use;
//! the server binary is in `src/main.rs`.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod services;
pub mod state;
