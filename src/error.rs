use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// All caller-visible failure kinds. Each maps to a stable machine-readable
/// `error` string and an HTTP status; anything unexpected lands in
/// `Internal` and never leaks detail past the log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Email already registered")]
    EmailTaken,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("{0}")]
    Unauthorized(String),
    #[error("Not authorized to {0} this blog")]
    Forbidden(&'static str),
    #[error("Invalid blog ID")]
    MalformedId,
    #[error("Blog not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::EmailTaken => "email_taken",
            ApiError::InvalidCredentials => "invalid_credentials",
            ApiError::Unauthorized(_) => "unauthorized",
            ApiError::Forbidden(_) => "forbidden",
            ApiError::MalformedId => "malformed_id",
            ApiError::NotFound => "not_found",
            ApiError::Internal(_) => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::EmailTaken | ApiError::MalformedId => {
                StatusCode::BAD_REQUEST
            }
            ApiError::InvalidCredentials | ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Internal(e) => {
                error!(error = %e, "internal error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        let body = ErrorBody {
            error: self.kind(),
            message,
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_and_statuses_are_stable() {
        let cases: Vec<(ApiError, &str, StatusCode)> = vec![
            (
                ApiError::Validation("Title is required".into()),
                "validation_error",
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::EmailTaken, "email_taken", StatusCode::BAD_REQUEST),
            (
                ApiError::InvalidCredentials,
                "invalid_credentials",
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::Unauthorized("Missing Authorization header".into()),
                "unauthorized",
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::Forbidden("update"),
                "forbidden",
                StatusCode::FORBIDDEN,
            ),
            (ApiError::MalformedId, "malformed_id", StatusCode::BAD_REQUEST),
            (ApiError::NotFound, "not_found", StatusCode::NOT_FOUND),
        ];
        for (err, kind, status) in cases {
            assert_eq!(err.kind(), kind);
            assert_eq!(err.status(), status);
        }
    }

    #[test]
    fn internal_error_hides_detail() {
        let err = ApiError::Internal(anyhow::anyhow!("connection refused to 10.0.0.3:5432"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn credential_failures_share_one_message() {
        // Unknown email and wrong password both produce this exact value,
        // so callers cannot probe which emails are registered.
        let a = ApiError::InvalidCredentials;
        let b = ApiError::InvalidCredentials;
        assert_eq!(a.kind(), b.kind());
        assert_eq!(a.to_string(), b.to_string());
    }
}
