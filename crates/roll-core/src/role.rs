//! User roles as issued by the backend session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role carried by the session cookie's user.
///
/// Unknown role strings deserialize as [`Role::User`], the least-privileged
/// tier, so a backend-side role addition can never widen permissions here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    #[default]
    #[serde(other)]
    User,
}

impl Role {
    /// String representation matching the wire values.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    /// True for the roles allowed to manage records (admin tiers).
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::SuperAdmin | Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
