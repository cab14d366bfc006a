use std::time::Instant;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::{
    catalog::{self, ByCategory},
    error::{AppError, AppResult, Operation},
    AppState,
};

use super::found;

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> AppResult<(StatusCode, Json<Value>)> {
    let start = Instant::now();
    let doc = state
        .source
        .load_document()
        .await
        .map_err(AppError::reading(Operation::Products))?;
    let products = catalog::list_products(&doc);

    info!(
        count = products.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Listed products"
    );

    Ok(found(Operation::Products, products))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Path(id) = path?;
    let start = Instant::now();
    let doc = state
        .source
        .load_document()
        .await
        .map_err(AppError::reading(Operation::ProductById))?;

    let product = catalog::product_by_id(&doc, &id)
        .ok_or_else(|| AppError::NotFound(format!("{} - PRODUCT NOT FOUND", id)))?;

    info!(
        id = %id,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Fetched product"
    );

    Ok(found(Operation::ProductById, product))
}

// ── By category ───────────────────────────────────────────────────────────────

pub async fn list_by_category(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Path(id_category) = path?;
    let start = Instant::now();
    let doc = state
        .source
        .load_document()
        .await
        .map_err(AppError::reading(Operation::ProductsByCategory))?;

    match catalog::products_by_category(&doc, &id_category) {
        ByCategory::CategoryNotFound => Err(AppError::NotFound("CATEGORY NOT FOUND".to_string())),
        ByCategory::NoProducts => {
            info!(category = %id_category, "Category has no products");
            Err(AppError::NoContent("PRODUCT BY CATEGORY NOT FOUND".to_string()))
        }
        ByCategory::Found(products) => {
            info!(
                category = %id_category,
                count = products.len(),
                elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Listed products by category"
            );
            Ok(found(Operation::ProductsByCategory, products))
        }
    }
}
