//! Shared HTTP response helpers for backend clients.
//!
//! Centralizes status-code checks (401 → [`ApiError::Unauthorized`], 422 →
//! flattened validation messages, other non-success → [`ApiError::Api`]) so
//! the client and resource modules stay focused on request construction and
//! response mapping.

use roll_core::responses::ApiErrorBody;

use crate::error::ApiError;

/// Generic failure notice when the backend gives no usable message.
pub const FALLBACK_MESSAGE: &str = "操作失敗";

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **401 Unauthorized** → [`ApiError::Unauthorized`].
/// - **422 Unprocessable Entity** → [`ApiError::Validation`] with the
///   `errors` map flattened to one `field: reasons` line per field.
/// - **Other non-success status** → [`ApiError::Api`] with the body's
///   `message`, then `error`, then [`FALLBACK_MESSAGE`].
///
/// # Errors
///
/// Returns the mapped [`ApiError`] for any non-success status.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await.unwrap_or_default();
    let body: ApiErrorBody = serde_json::from_str(&text).unwrap_or_default();

    if status == reqwest::StatusCode::UNPROCESSABLE_ENTITY {
        return Err(ApiError::Validation {
            message: flatten_validation(&body),
        });
    }
    Err(ApiError::Api {
        status: status.as_u16(),
        message: plain_message(&body),
    })
}

/// Flatten a 422 body's per-field errors into a display message: one
/// `field: reason, reason` line per field, lines joined by newlines.
fn flatten_validation(body: &ApiErrorBody) -> String {
    match &body.errors {
        Some(errors) if !errors.is_empty() => errors
            .iter()
            .map(|(field, reasons)| format!("{field}: {}", reasons.join(", ")))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => plain_message(body),
    }
}

fn plain_message(body: &ApiErrorBody) -> String {
    body.message
        .clone()
        .or_else(|| body.error.clone())
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
}
