//! The current session user as returned by `GET /api/me`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Session user. Replaced wholesale on login/refresh, cleared on logout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Me {
    pub id: String,
    pub role: Role,
    pub name: String,
    /// Token expiry as a unix timestamp (seconds), from the `exp` claim.
    pub exp: i64,
}

impl Me {
    /// Expiry as a UTC timestamp, if `exp` is representable.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Whether the token is still valid at `now`, keeping `buffer_secs` of
    /// margin before the actual expiry to avoid acting on a token that is
    /// about to lapse mid-request.
    #[must_use]
    pub fn is_token_fresh(&self, now: DateTime<Utc>, buffer_secs: i64) -> bool {
        self.expires_at()
            .is_some_and(|exp| now < exp - chrono::TimeDelta::seconds(buffer_secs))
    }
}
