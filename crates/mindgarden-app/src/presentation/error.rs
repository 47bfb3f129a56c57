use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::Serialize;

use super::state::SharedState;
use mindgarden_domain::shared::{DomainError, ErrorCode, ErrorSeverity};

pub type ApiResult<T> = Result<T, ApiError>;

/// Error body returned by every route.
///
/// - `code`: numeric domain error code (1xxx..6xxx)
/// - `severity` / `recoverable`: hints for the client's retry and display logic
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
    pub severity: ErrorSeverity,
    pub recoverable: bool,
    #[serde(skip)]
    status: StatusCode,
}

impl ApiError {
    pub fn from_code(error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: error_code.code(),
            message: message.into(),
            severity: error_code.severity(),
            recoverable: error_code.is_recoverable(),
            status: status_for(error_code),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::Unauthorized, message)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::InvalidInput, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Same error with the message replaced by a generic one.
    fn redacted(&self) -> Self {
        Self {
            message: "Internal server error".to_string(),
            ..self.clone()
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationError | ErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::from_code(err.code(), err.message())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!("[http] status={} code={} message={}", self.status, self.code, self.message);
        }
        let mut response = (self.status, Json(&self)).into_response();
        // Kept for `hide_internal_errors`, which may rewrite the body.
        response.extensions_mut().insert(self);
        response
    }
}

/// Outside development, 5xx bodies carry a generic message instead of the internal one.
pub async fn hide_internal_errors(
    State(state): State<SharedState>,
    mut response: Response,
) -> Response {
    if state.environment.is_development() {
        return response;
    }
    match response.extensions_mut().remove::<ApiError>() {
        Some(err) if err.status.is_server_error() => {
            let redacted = err.redacted();
            (redacted.status, Json(redacted)).into_response()
        }
        _ => response,
    }
}
