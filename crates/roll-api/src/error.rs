//! API error types.

use thiserror::Error;

/// Errors that can occur when talking to the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The session cookie is missing or expired (HTTP 401). Callers clear
    /// the signed-in user and route back to the login screen.
    #[error("未登入或登入已過期")]
    Unauthorized,

    /// Field validation failed (HTTP 422). The message is already flattened
    /// to one `field: reasons` line per field, ready to show as-is.
    #[error("{message}")]
    Validation { message: String },

    /// Any other non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// An update succeeded but the response carried no record.
    #[error("更新失敗：沒有回傳資料")]
    MissingData,

    /// A response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// True when the error means the session is gone.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
