use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use tracing::info;

use crate::{
    db::Snapshot,
    error::{AppError, AppResult, Operation},
    AppState,
};

use super::found;

/// The whole document, verbatim.
pub async fn get_database(State(state): State<AppState>) -> AppResult<(StatusCode, Json<Value>)> {
    let start = Instant::now();
    let snapshot = state
        .source
        .load()
        .await
        .map_err(AppError::reading(Operation::Database))?;

    match snapshot {
        Snapshot::Empty => {
            info!("Database is empty");
            Err(AppError::NoContent("DATABASE IS EMPTY".to_string()))
        }
        Snapshot::Loaded(doc) => {
            info!(
                products = doc.products.len(),
                categories = doc.categories.len(),
                elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Served database"
            );
            Ok(found(Operation::Database, &doc))
        }
    }
}
