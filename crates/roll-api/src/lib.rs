//! # roll-api
//!
//! HTTP plumbing for the Rollcall backend:
//! - [`ApiClient`]: a cookie-carrying `reqwest` client bound to the API base
//!   URL, with JSON request helpers
//! - [`check_response`]: shared status-code handling (401 → session lost,
//!   422 → flattened field validation messages)
//! - [`CrudResource`]: the per-entity list/insert/update/delete engine every
//!   screen drives; re-fetches the list after each mutation so the table
//!   always shows server state

pub mod client;
pub mod error;
pub mod http;
pub mod resource;

pub use client::ApiClient;
pub use error::ApiError;
pub use http::check_response;
pub use resource::{CrudResource, Messages, Notifier, TracingNotifier};
