use chrono::Utc;
use rusqlite::{Connection, params, types::Value};

use crate::error::Result;
use crate::models::*;

use super::from_row::{FromRow, PRODUCT_COLS, query_all, query_one};

fn now() -> i64 {
    Utc::now().timestamp()
}

/// Builder for dynamic UPDATE statements with optional fields.
/// Combines multiple field updates into a single query.
struct UpdateBuilder {
    table: &'static str,
    id: i64,
    fields: Vec<(&'static str, Value)>,
    track_updated_at: bool,
}

impl UpdateBuilder {
    fn new(table: &'static str, id: i64) -> Self {
        Self {
            table,
            id,
            fields: Vec::new(),
            track_updated_at: false,
        }
    }

    fn with_updated_at(mut self) -> Self {
        self.track_updated_at = true;
        self
    }

    fn set(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.fields.push((column, value.into()));
        self
    }

    fn set_opt<V: Into<Value>>(self, column: &'static str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(column, v),
            None => self,
        }
    }

    /// Returns whether a row matched. With no fields set nothing is executed.
    fn execute(mut self, conn: &Connection) -> Result<bool> {
        if self.fields.is_empty() {
            return Ok(false);
        }
        if self.track_updated_at {
            self.fields.push(("updated_at", now().into()));
        }
        let sets: Vec<String> = self
            .fields
            .iter()
            .map(|(col, _)| format!("{} = ?", col))
            .collect();
        let mut values: Vec<Value> = self.fields.into_iter().map(|(_, v)| v).collect();
        values.push(self.id.into());
        let sql = format!("UPDATE {} SET {} WHERE id = ?", self.table, sets.join(", "));
        let affected = conn.execute(&sql, rusqlite::params_from_iter(values))?;
        Ok(affected > 0)
    }
}

// ============ Products ============

/// Insert a product. The store assigns the id and both timestamps.
pub fn create_product(conn: &Connection, input: &CreateProduct) -> Result<Product> {
    let now = now();
    let product = conn.query_row(
        &format!(
            "INSERT INTO products (title, description, status, price, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)
             RETURNING {}",
            PRODUCT_COLS
        ),
        params![
            &input.title,
            &input.description,
            &input.status,
            input.price,
            now
        ],
        Product::from_row,
    )?;
    Ok(product)
}

pub fn get_product_by_id(conn: &Connection, id: i64) -> Result<Option<Product>> {
    query_one(
        conn,
        &format!("SELECT {} FROM products WHERE id = ?1", PRODUCT_COLS),
        &[&id],
    )
}

pub fn count_products(conn: &Connection) -> Result<i64> {
    let total = conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
    Ok(total)
}

/// Fetch one page of products plus the total row count.
///
/// Both reads share one transaction so `total` always describes the same
/// snapshot as the returned page.
pub fn list_products_paginated(
    conn: &Connection,
    limit: i64,
    offset: i64,
) -> Result<(Vec<Product>, i64)> {
    let tx = conn.unchecked_transaction()?;

    let total = count_products(&tx)?;
    let products = query_all(
        &tx,
        &format!(
            "SELECT {} FROM products ORDER BY id LIMIT ?1 OFFSET ?2",
            PRODUCT_COLS
        ),
        params![limit, offset],
    )?;

    tx.commit()?;
    Ok((products, total))
}

/// Apply a partial update. Returns whether a row was changed.
pub fn update_product(conn: &Connection, id: i64, input: &UpdateProduct) -> Result<bool> {
    UpdateBuilder::new("products", id)
        .with_updated_at()
        .set_opt("title", input.title.clone())
        .set_opt("description", input.description.clone())
        .set_opt("status", input.status.clone())
        .set_opt("price", input.price)
        .execute(conn)
}

pub fn delete_product(conn: &Connection, id: i64) -> Result<bool> {
    let deleted = conn.execute("DELETE FROM products WHERE id = ?1", params![id])?;
    Ok(deleted > 0)
}
