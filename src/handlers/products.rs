use axum::{
    extract::State,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};

use crate::db::{queries, AppState};
use crate::error::Result;
use crate::extractors::{Json, ProductId, Query};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::pagination::{Paginated, PagingQuery};

/// Success envelope: `{ "data": ... }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Data<T> {
    pub data: T,
}

impl<T> Data<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> Result<Json<Data<i64>>> {
    input.validate()?;

    let conn = state.db.get()?;
    let product = queries::create_product(&conn, &input)?;
    tracing::debug!("Created product {} ({})", product.id, product.title);

    Ok(Json(Data::new(product.id)))
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<PagingQuery>,
) -> Result<Json<Paginated<Product>>> {
    let conn = state.db.get()?;
    let paging = query.normalize();
    let (products, total) = queries::list_products_paginated(&conn, paging.limit, paging.offset())?;
    Ok(Json(Paginated::new(products, paging.with_total(total))))
}

/// A missing row is answered with the zero-valued product, not an error.
pub async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Json<Data<Product>>> {
    let conn = state.db.get()?;
    let product = queries::get_product_by_id(&conn, id)?.unwrap_or_default();
    Ok(Json(Data::new(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    Json(input): Json<UpdateProduct>,
) -> Result<Json<Data<bool>>> {
    input.validate()?;

    let conn = state.db.get()?;
    let updated = queries::update_product(&conn, id, &input)?;
    if !updated && !input.is_empty() {
        tracing::debug!("Update matched no product with id {}", id);
    }

    Ok(Json(Data::new(true)))
}

pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Json<Data<bool>>> {
    let conn = state.db.get()?;
    if !queries::delete_product(&conn, id)? {
        tracing::debug!("Delete matched no product with id {}", id);
    }

    Ok(Json(Data::new(true)))
}
