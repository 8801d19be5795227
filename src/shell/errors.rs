use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::modules::dogs::core::registry_port::RegistryError;

/// How registry failures reach the client: a real status code, or a 200 whose body
/// carries `{"error": ...}` for clients built against the loose variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorStyle {
    #[default]
    Status,
    Body,
}

impl ErrorStyle {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "status" => Some(Self::Status),
            "body" => Some(Self::Body),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Rejected(String),

    #[error("{error}")]
    Registry {
        error: RegistryError,
        style: ErrorStyle,
    },
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Registry {
                style: ErrorStyle::Body,
                ..
            } => StatusCode::OK,
            ApiError::Registry {
                error: RegistryError::NotFound { .. },
                ..
            } => StatusCode::NOT_FOUND,
            ApiError::Registry {
                error: RegistryError::EmptyRegistry,
                ..
            } => StatusCode::CONFLICT,
        };
        match &self {
            ApiError::Registry {
                error: RegistryError::NotFound { key },
                ..
            } => tracing::warn!(key, %status, "dog not found"),
            _ => tracing::warn!(error = %self, %status, "request failed"),
        }
        (status, Json(serde_json::json!({"error": self.to_string()}))).into_response()
    }
}
