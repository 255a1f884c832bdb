use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Errors surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required input absent; rendered as a bare 400.
    #[error("validation error: {0}")]
    Validation(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST.into_response(),
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::json!({"error": msg}))).into_response()
            }
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        if e.is_validation() {
            ApiError::Validation(e.to_string())
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn validation_maps_to_bad_request() {
        let res = ApiError::Validation("marca is required".into()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_maps_to_server_error() {
        let res = ApiError::Internal("boom".into()).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn service_errors_are_classified() {
        assert!(matches!(ApiError::from(ServiceError::Validation("x".into())), ApiError::Validation(_)));
        assert!(matches!(ApiError::from(ServiceError::Model(ModelError::Validation("x".into()))), ApiError::Validation(_)));
        assert!(matches!(ApiError::from(ServiceError::Repository("down".into())), ApiError::Internal(_)));
        assert!(matches!(ApiError::from(ServiceError::Model(ModelError::Db("down".into()))), ApiError::Internal(_)));
    }
}
