//! End-to-end tests for the book catalog HTTP surface
//!
//! Each test drives the real router against a fresh store and asserts on
//! status codes and JSON bodies exactly as a client would see them.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use library_api::api;
use library_api::catalog::db::CatalogDb;
use library_api::services::books::BookService;
use library_api::state::AppState;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn test_app() -> Router {
    let db = CatalogDb::in_memory().await.expect("in-memory store");
    api::router(AppState::new(BookService::new(db)))
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn bare_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body")
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("json body")
}

async fn create_book(app: &Router, title: &str, author: &str, isbn: &str) -> Value {
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/books",
            json!({"title": title, "author": author, "isbn": isbn}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let app = test_app().await;

    let created = create_book(&app, "My book", "Author", "123456").await;
    let id = created["id"].as_i64().expect("assigned id");
    assert_eq!(created["title"], "My book");
    assert_eq!(created["author"], "Author");
    assert_eq!(created["isbn"], "123456");

    let response = app
        .clone()
        .oneshot(bare_request(Method::GET, &format!("/api/books/{id}")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(
        fetched,
        json!({"id": id, "title": "My book", "author": "Author", "isbn": "123456"})
    );
}

#[tokio::test]
async fn create_with_empty_body_reports_all_three_fields() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request(Method::POST, "/api/books", json!({})))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["errors"].as_array().expect("errors array").len(), 3);
}

#[tokio::test]
async fn create_with_duplicated_isbn_is_rejected() {
    let app = test_app().await;
    create_book(&app, "My book", "Author", "123456").await;

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/books",
            json!({"title": "Other book", "author": "Other author", "isbn": "123456"}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"errors": ["Isbn already exists."]})
    );
}

#[tokio::test]
async fn get_unknown_id_is_404_without_body() {
    let app = test_app().await;

    let response = app
        .oneshot(bare_request(Method::GET, "/api/books/42"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn delete_returns_204_and_the_book_is_gone() {
    let app = test_app().await;
    let created = create_book(&app, "My book", "Author", "123456").await;
    let id = created["id"].as_i64().expect("assigned id");

    let response = app
        .clone()
        .oneshot(bare_request(Method::DELETE, &format!("/api/books/{id}")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = app
        .oneshot(bare_request(Method::GET, &format!("/api/books/{id}")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let app = test_app().await;

    let response = app
        .oneshot(bare_request(Method::DELETE, "/api/books/42"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_overwrites_title_and_author_but_keeps_isbn() {
    let app = test_app().await;
    let created = create_book(&app, "My book", "Author", "123456").await;
    let id = created["id"].as_i64().expect("assigned id");

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/books/{id}"),
            json!({"title": "Renamed", "author": "Other author"}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"id": id, "title": "Renamed", "author": "Other author", "isbn": "123456"})
    );
}

#[tokio::test]
async fn update_unknown_id_is_404_and_writes_nothing() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/api/books/42",
            json!({"title": "Renamed", "author": "Other author"}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Nothing was written: the id still resolves to nothing.
    let response = app
        .oneshot(bare_request(Method::GET, "/api/books/42"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let app = test_app().await;

    let response = app
        .oneshot(bare_request(Method::GET, "/api/health"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn file_backed_store_survives_a_reconnect() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("library.db");
    let db_path = db_path.to_str().expect("utf-8 path");

    let id = {
        let db = CatalogDb::new(db_path).await.expect("store");
        let service = BookService::new(db);
        let saved = service
            .save(library_api::catalog::Book::new(
                "My book".to_string(),
                "Author".to_string(),
                "123456".to_string(),
            ))
            .await
            .expect("save");
        saved.id.expect("assigned id")
    };

    // A fresh connection to the same file still sees the record.
    let db = CatalogDb::new(db_path).await.expect("reopened store");
    let service = BookService::new(db);
    let found = service.get_by_id(id).await.expect("lookup").expect("book");
    assert_eq!(found.isbn, "123456");
}
