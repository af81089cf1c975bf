use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::error_body;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Not found")]
    RouteNotFound,
}

impl CatalogError {
    pub fn invalid(msg: &str) -> Self {
        CatalogError::InvalidInput(msg.to_owned())
    }

    pub fn conflict(msg: &str) -> Self {
        CatalogError::Conflict(msg.to_owned())
    }

    pub fn not_found(msg: &str) -> Self {
        CatalogError::NotFound(msg.to_owned())
    }

    pub fn status(&self) -> StatusCode {
        use CatalogError::*;
        match self {
            InvalidInput(_) | Conflict(_) => StatusCode::BAD_REQUEST,
            NotFound(_) | RouteNotFound => StatusCode::NOT_FOUND,
            MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), reason = %self, "request rejected");
        (status, error_body(&self.to_string())).into_response()
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
