//! Products - a small CRUD service for a product catalog
//!
//! This library holds the data model, the SQLite data-access layer and the
//! HTTP handlers; `main.rs` wires them to a listener.

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod pagination;
