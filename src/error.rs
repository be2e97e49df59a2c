use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CatalogError::Store(_) | CatalogError::JsonSerialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        }
        (status, Json(ErrorResponse::new(&self.to_string()))).into_response()
    }
}
