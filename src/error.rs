//! Error taxonomy: fatal startup errors and per-request API errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors raised while bringing the service up.
///
/// Any of these is fatal: the service cannot answer a single request
/// without configuration, a database connection, and the `texts` table.
/// They are still surfaced as values rather than aborting in place, so
/// the binary (or a supervisor-facing caller) decides how to terminate.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to open database connection: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to create texts table: {0}")]
    Schema(#[source] sqlx::Error),
}

/// Per-request errors surfaced to the HTTP client.
///
/// Bodies stay deliberately terse; driver errors and SQL text are
/// logged server-side, never sent to the caller.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be decoded as the expected JSON shape.
    #[error("Invalid request body")]
    InvalidBody,

    /// The insert against an otherwise-open handle failed.
    #[error("Failed to save text")]
    SaveFailed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = match self {
            ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::SaveFailed => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (code, self.to_string()).into_response()
    }
}
