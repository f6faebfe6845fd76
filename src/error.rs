//! Error handling
//!
//! Application error types and their mapping onto HTTP responses.
//!
//! Provider failures keep their full detail for the logs, but every one of
//! them is collapsed into the same generic message before it reaches the
//! client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned when the Edamam credentials are missing.
pub const CONFIG_ERROR_MESSAGE: &str = "server credentials not configured";
/// Message returned when the `ingredients` parameter is absent.
pub const MISSING_INGREDIENTS_MESSAGE: &str = "ingredients parameter is required";
/// Message returned for every other failure.
pub const SEARCH_ERROR_MESSAGE: &str = "an error occurred while searching recipes";

/// Failure talking to an external provider.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The provider answered with a non-success status.
    #[error("{provider} responded with status {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    /// The request was sent but no response came back.
    #[error("no response received from {provider}: {reason}")]
    NoResponse {
        provider: &'static str,
        reason: String,
    },

    /// The request could not be built.
    #[error("could not build request to {provider}: {reason}")]
    Request {
        provider: &'static str,
        reason: String,
    },

    /// The provider answered, but the body was not what we expected.
    #[error("unexpected response from {provider}: {reason}")]
    InvalidResponse {
        provider: &'static str,
        reason: String,
    },
}

impl UpstreamError {
    /// Classifies a transport error raised while talking to `provider`.
    pub fn from_reqwest(provider: &'static str, e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            UpstreamError::Status {
                provider,
                status: status.as_u16(),
                body: e.to_string(),
            }
        } else if e.is_builder() {
            UpstreamError::Request {
                provider,
                reason: e.to_string(),
            }
        } else if e.is_decode() {
            UpstreamError::InvalidResponse {
                provider,
                reason: e.to_string(),
            }
        } else {
            UpstreamError::NoResponse {
                provider,
                reason: e.to_string(),
            }
        }
    }
}

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum AppError {
    /// Upstream credentials are not configured.
    #[error("{}", CONFIG_ERROR_MESSAGE)]
    Config,

    /// The client request is missing something required.
    #[error("{0}")]
    Validation(String),

    /// A provider call failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl AppError {
    /// Status code and the message safe to show to the client.
    pub fn public_parts(&self) -> (StatusCode, String) {
        match self {
            AppError::Config => (
                StatusCode::INTERNAL_SERVER_ERROR,
                CONFIG_ERROR_MESSAGE.to_string(),
            ),
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Upstream(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                SEARCH_ERROR_MESSAGE.to_string(),
            ),
        }
    }

    fn log(&self) {
        match self {
            AppError::Config => tracing::error!("Edamam credentials are not configured"),
            AppError::Validation(message) => tracing::debug!("Rejected request: {}", message),
            AppError::Upstream(UpstreamError::Status {
                provider,
                status,
                body,
            }) => tracing::error!(
                provider = *provider,
                kind = "status",
                status = *status,
                "Error response from provider: {}",
                body
            ),
            AppError::Upstream(UpstreamError::NoResponse { provider, reason }) => tracing::error!(
                provider = *provider,
                kind = "no_response",
                "No response received from provider: {}",
                reason
            ),
            AppError::Upstream(UpstreamError::Request { provider, reason }) => tracing::error!(
                provider = *provider,
                kind = "request",
                "Error setting up provider request: {}",
                reason
            ),
            AppError::Upstream(UpstreamError::InvalidResponse { provider, reason }) => {
                tracing::error!(
                    provider = *provider,
                    kind = "invalid_response",
                    "Unexpected provider response: {}",
                    reason
                )
            }
        }
    }
}

/// Axum response implementation for AppError
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let (status, message) = self.public_parts();
        (status, Json(ErrorResponse::new(&message))).into_response()
    }
}

/// 错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误消息
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, AppError>;
