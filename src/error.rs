use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::db::DatabaseError;

/// Application-level errors
///
/// The static `label` is the only text a client ever sees; `source` stays in
/// the server log.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{label}: {source}")]
    QueryFailure {
        label: &'static str,
        #[source]
        source: DatabaseError,
    },
}

impl AppError {
    pub fn query_failure(label: &'static str, source: DatabaseError) -> Self {
        AppError::QueryFailure { label, source }
    }

    /// Client-safe message for this error
    pub fn label(&self) -> &'static str {
        match self {
            AppError::QueryFailure { label, .. } => label,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::QueryFailure { label, source } => {
                tracing::error!(error = %source, "Error executing query ({})", label);
                (StatusCode::INTERNAL_SERVER_ERROR, *label)
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
