pub mod categories;
pub mod database;
pub mod products;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::{error::Operation, AppState};

/// Standard 200 envelope for a catalog operation.
pub(crate) fn found(operation: Operation, data: impl Serialize) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "message": operation.success(), "data": data })),
    )
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": "catalog-api" })))
}

pub async fn api_index() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "message": "API INDEX", "data": [] })))
}

/// Discovery payload listing every catalog endpoint.
pub async fn discovery(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    let base = base_url(&state, &headers);
    let api = format!("{base}/api/v1");

    (
        StatusCode::OK,
        Json(json!({
            "message": "URL's API",
            "data": [
                {
                    "base_url": base,
                    "json_database": format!("{api}/database"),
                },
                [{
                    "product": {
                        "all": format!("{api}/product"),
                        "by_category": format!("{api}/product/by_category/:id_category"),
                        "by_id": format!("{api}/product/:id_product"),
                    },
                    "category": {
                        "all": format!("{api}/category"),
                        "by_id": format!("{api}/category/:id_category"),
                    },
                }],
            ],
        })),
    )
}

fn base_url(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(url) = &state.config.base_url {
        return url.clone();
    }
    match headers.get(header::HOST).and_then(|h| h.to_str().ok()) {
        Some(host) if !host.is_empty() => format!("https://{host}"),
        _ => format!("http://{}", state.config.bind_addr()),
    }
}
