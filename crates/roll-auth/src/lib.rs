//! # roll-auth
//!
//! Cookie-session authentication for Rollcall:
//! - [`SessionStore`]: shared current-user state (who is signed in, whether
//!   a session request is in flight)
//! - [`AuthService`]: login, idempotent logout, and session refresh against
//!   the backend, with an expiry buffer so a token is never trusted right up
//!   to its last second
//! - [`spawn_expiry_watcher`]: background task that re-checks the session
//!   before the token lapses

pub mod error;
pub mod service;
pub mod session;
pub mod watcher;

pub use error::AuthError;
pub use service::AuthService;
pub use session::SessionStore;
pub use watcher::spawn_expiry_watcher;

/// Margin kept before the token's `exp` claim. A session inside this window
/// is treated as stale and re-fetched.
pub const EXPIRY_BUFFER_SECS: i64 = 300;
