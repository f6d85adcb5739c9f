use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Errors surfaced by `TodoService` operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A required input was missing or blank.
    #[error("{0}")]
    Validation(String),

    /// No record exists with the given id.
    #[error("todo {0} not found")]
    NotFound(String),

    /// The record store failed.
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Missing(id) => ServiceError::NotFound(id),
            other => ServiceError::Store(other),
        }
    }
}

impl ServiceError {
    /// Name of the error class as reported to remote callers.
    pub fn exc_type(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "ValidationError",
            ServiceError::NotFound(_) => "NotFoundError",
            ServiceError::Store(_) => "StoreError",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body returned by every remote procedure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcError {
    pub exc_type: String,
    pub exception: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        if let ServiceError::Store(err) = &self {
            tracing::error!("record store failure: {}", err);
        }
        let body = RpcError {
            exc_type: self.exc_type().to_string(),
            exception: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
