//! Wire envelope types for the backend's REST responses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Success envelope: `{ message, data? }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub message: String,
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

const fn none<T>() -> Option<T> {
    None
}

/// Error body shape for non-2xx responses:
/// `{ message?, error?, errors?: { field: [messages] } }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
    /// Field-level validation errors (HTTP 422). Ordered by field key so
    /// flattened messages are deterministic.
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

/// Credentials for `POST /api/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
