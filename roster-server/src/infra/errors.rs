use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_model::api::ErrorBody;
use std::fmt;

use crate::catalog::CatalogError;

pub type AppResult<T> = Result<T, AppError>;

/// Message clients see for any store failure; details stay in the logs.
pub const STORE_FAILURE_MESSAGE: &str = "Database query failed";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody::new(self.message))).into_response()
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        tracing::error!(error = %err, "catalog store operation failed");
        Self::internal(STORE_FAILURE_MESSAGE)
    }
}
