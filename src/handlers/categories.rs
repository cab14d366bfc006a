use std::time::Instant;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::{
    catalog,
    error::{AppError, AppResult, Operation},
    AppState,
};

use super::found;

pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let start = Instant::now();
    let doc = state
        .source
        .load_document()
        .await
        .map_err(AppError::reading(Operation::Categories))?;
    let categories = catalog::list_categories(&doc);

    info!(
        count = categories.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Listed categories"
    );

    Ok(found(Operation::Categories, categories))
}

pub async fn get_category(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Path(id) = path?;
    let start = Instant::now();
    let doc = state
        .source
        .load_document()
        .await
        .map_err(AppError::reading(Operation::CategoryById))?;

    let category = catalog::category_by_id(&doc, &id)
        .ok_or_else(|| AppError::NotFound(format!("{} - CATEGORY NOT FOUND", id)))?;

    info!(
        id = %id,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Fetched category"
    );

    Ok(found(Operation::CategoryById, category))
}
