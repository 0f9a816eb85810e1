//! JSON envelopes and the parameter error boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use paramguard_core::ParameterError;
use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope wrapping a handler's return value.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub message: T,
}

impl<T> Envelope<T> {
    pub fn ok(message: T) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            message,
        }
    }
}

/// Envelope carrying a text message, used for error responses and text-returning handlers.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    pub code: u16,
    pub message: String,
}

/// An error rendered as `{code, message}` with a matching status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ParameterError> for ApiError {
    fn from(err: ParameterError) -> Self {
        tracing::debug!(kind = err.kind(), message = %err, "rejected request parameters");
        Self::bad_request(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = MessageBody {
            code: self.status.as_u16(),
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
