//! Sign-in credentials.
//!
//! The session cookie lives only as long as the process, so the CLI signs
//! in at the start of each invocation using these. Typically supplied via
//! `ROLLCALL_CREDENTIALS__USERNAME` / `ROLLCALL_CREDENTIALS__PASSWORD` in a
//! `.env` file rather than committed to a config file.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CredentialsConfig {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl CredentialsConfig {
    /// True when both fields are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unconfigured() {
        assert!(!CredentialsConfig::default().is_configured());
    }

    #[test]
    fn both_fields_required() {
        let partial = CredentialsConfig {
            username: "admin".into(),
            password: String::new(),
        };
        assert!(!partial.is_configured());
    }
}
