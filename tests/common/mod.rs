//! Test utilities and fixtures for products integration tests

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use serde_json::Value;
use tower::ServiceExt;

pub use products::db::{AppState, init_db, queries};
pub use products::error::{AppError, ErrorKind};
pub use products::handlers;
pub use products::models::*;

/// Create an in-memory test database with schema initialized
pub fn setup_test_db() -> Connection {
    let conn = Connection::open_in_memory().expect("Failed to create in-memory database");
    init_db(&conn).expect("Failed to initialize schema");
    conn
}

/// App state over a single in-memory connection.
///
/// Each in-memory connection is its own database, so the pool is capped at one.
pub fn test_state() -> AppState {
    let manager = SqliteConnectionManager::memory();
    let pool = Pool::builder().max_size(1).build(manager).unwrap();
    {
        let conn = pool.get().unwrap();
        init_db(&conn).unwrap();
    }
    AppState::new(pool)
}

pub fn test_app() -> (Router, AppState) {
    let state = test_state();
    let app = handlers::router().with_state(state.clone());
    (app, state)
}

pub fn product_input(title: &str, price: f64) -> CreateProduct {
    CreateProduct {
        title: title.to_string(),
        description: format!("{} description", title),
        status: "active".to_string(),
        price,
    }
}

/// Create a test product
pub fn create_test_product(conn: &Connection, title: &str, price: f64) -> Product {
    queries::create_product(conn, &product_input(title, price))
        .expect("Failed to create test product")
}

/// Send a request with an optional JSON body and decode the JSON response.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let raw = body.map(|json| json.to_string());
    send_raw(app, method, uri, raw.as_deref()).await
}

/// Send a request with a raw body (sent as `application/json`).
pub async fn send_raw(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(text) => {
            builder = builder.header("content-type", "application/json");
            Body::from(text.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response should be valid JSON")
    };
    (status, json)
}
