use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::db::SourceError;

/// Body sent in place of any internal failure detail.
pub const GENERIC_ERROR: &str = "Unknown error occurred while reading database.";

pub type AppResult<T> = Result<T, AppError>;

/// The catalog endpoints. Used to build envelope messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Database,
    Products,
    Categories,
    ProductById,
    CategoryById,
    ProductsByCategory,
}

impl Operation {
    pub fn label(self) -> &'static str {
        match self {
            Operation::Database => "GET DATABASE",
            Operation::Products => "GET PRODUCT",
            Operation::Categories => "GET CATEGORY",
            Operation::ProductById => "GET PRODUCT BY ID",
            Operation::CategoryById => "GET CATEGORY BY ID",
            Operation::ProductsByCategory => "GET PRODUCT BY CATEGORY",
        }
    }

    pub fn success(self) -> String {
        format!("{} SUCCESS", self.label())
    }

    pub fn failure(self) -> String {
        format!("{} ERROR", self.label())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 404 with the given message.
    #[error("{0}")]
    NotFound(String),

    /// 204: the request was valid but there is nothing to return.
    #[error("{0}")]
    NoContent(String),

    /// 400: a path parameter could not be extracted (e.g. invalid UTF-8).
    #[error("invalid path parameter: {0}")]
    BadPath(#[from] PathRejection),

    #[error("{} failed: {source}", .operation.failure())]
    Source {
        operation: Operation,
        #[source]
        source: SourceError,
    },
}

impl AppError {
    pub fn reading(operation: Operation) -> impl FnOnce(SourceError) -> AppError {
        move |source| AppError::Source { operation, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::NoContent(_) => StatusCode::NO_CONTENT,
            AppError::BadPath(_) => StatusCode::BAD_REQUEST,
            AppError::Source { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::NotFound(message) => {
                warn!(%message, "Not found");
                json!({ "message": message, "data": [] })
            }
            AppError::NoContent(message) => json!({ "message": message, "data": [] }),
            AppError::BadPath(rejection) => {
                warn!(error = %rejection.body_text(), "Rejected path parameter");
                json!({ "message": "INVALID PATH PARAMETER", "data": [] })
            }
            AppError::Source { operation, source } => {
                error!(operation = operation.label(), error = %source, "Catalog source unreadable");
                json!({
                    "message": operation.failure(),
                    "data": [],
                    "error": GENERIC_ERROR,
                })
            }
        };
        (status, Json(body)).into_response()
    }
}
