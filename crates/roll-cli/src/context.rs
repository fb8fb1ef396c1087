//! Per-invocation application context.

use std::sync::Arc;

use anyhow::Context as _;

use roll_api::ApiClient;
use roll_auth::{AuthService, SessionStore, spawn_expiry_watcher};
use roll_config::RollConfig;
use roll_core::Me;
use roll_table::Viewer;

/// Shared services for command handlers. The session cookie lives in the
/// HTTP client, so commands that touch data sign in once per invocation.
pub struct AppContext {
    pub config: RollConfig,
    pub client: Arc<ApiClient>,
    pub auth: Arc<AuthService>,
    watcher: Option<tokio::task::JoinHandle<()>>,
}

impl AppContext {
    pub fn init(config: RollConfig) -> anyhow::Result<Self> {
        let client = Arc::new(
            ApiClient::new(&config.api.base_url, config.api.timeout())
                .context("failed to build API client")?,
        );
        let auth = Arc::new(AuthService::new(client.clone(), SessionStore::new()));
        Ok(Self {
            config,
            client,
            auth,
            watcher: None,
        })
    }

    /// Sign in with the configured credentials and return the session user.
    /// Also starts the expiry watcher so long-running commands keep their
    /// session alive.
    pub async fn sign_in(&mut self) -> anyhow::Result<Me> {
        let credentials = &self.config.credentials;
        anyhow::ensure!(
            credentials.is_configured(),
            "no credentials configured; set ROLLCALL_CREDENTIALS__USERNAME and \
             ROLLCALL_CREDENTIALS__PASSWORD (a .env file works)"
        );
        let me = self
            .auth
            .login(&credentials.username, &credentials.password)
            .await?;
        if self.watcher.is_none() {
            self.watcher = Some(spawn_expiry_watcher(self.auth.clone()));
        }
        Ok(me)
    }

    /// Sign in and build the permission viewer for table rendering.
    pub async fn sign_in_viewer(&mut self) -> anyhow::Result<(Me, Viewer)> {
        let me = self.sign_in().await?;
        let viewer = Viewer::new(me.id.clone(), me.role);
        Ok((me, viewer))
    }
}

impl Drop for AppContext {
    fn drop(&mut self) {
        if let Some(watcher) = self.watcher.take() {
            watcher.abort();
        }
    }
}
