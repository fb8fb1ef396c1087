//! Background session refresh.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::EXPIRY_BUFFER_SECS;
use crate::service::AuthService;

/// How often the watcher re-checks the session.
const CHECK_INTERVAL: Duration = Duration::from_secs(60);

/// Spawn a task that refreshes the session whenever the cached token drifts
/// inside the expiry buffer. A refresh that fails signs the session out, so
/// an expired token never lingers past a tick. Stops once the session is
/// gone; the login flow spawns a fresh watcher.
pub fn spawn_expiry_watcher(service: Arc<AuthService>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(CHECK_INTERVAL);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if check_session(&service).await.is_break() {
                return;
            }
        }
    })
}

/// One watcher tick: refresh a near-expiry session, sign out when the
/// refresh fails.
async fn check_session(service: &AuthService) -> ControlFlow<()> {
    let Some(me) = service.session().me() else {
        tracing::debug!("session gone, stopping expiry watcher");
        return ControlFlow::Break(());
    };
    if me.is_token_fresh(Utc::now(), EXPIRY_BUFFER_SECS) {
        return ControlFlow::Continue(());
    }
    tracing::info!("session near expiry, refreshing");
    if let Err(err) = service.fetch_me(true).await {
        tracing::warn!("session refresh failed, signing out: {err}");
        service.logout().await;
        return ControlFlow::Break(());
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use roll_api::ApiClient;
    use roll_core::{Me, Role};

    use crate::session::SessionStore;

    use super::*;

    fn service() -> AuthService {
        // Port 9 (discard) refuses connections on test hosts.
        let client =
            ApiClient::new("http://127.0.0.1:9/api", Duration::from_secs(1)).expect("client");
        AuthService::new(Arc::new(client), SessionStore::new())
    }

    fn me_expiring_in(secs: i64) -> Me {
        Me {
            id: "t1".into(),
            role: Role::Admin,
            name: "王老師".into(),
            exp: (Utc::now() + chrono::TimeDelta::seconds(secs)).timestamp(),
        }
    }

    #[tokio::test]
    async fn fresh_session_passes_the_tick_untouched() {
        let svc = service();
        svc.session().set_me(Some(me_expiring_in(3600)));
        assert!(check_session(&svc).await.is_continue());
        assert!(svc.session().is_signed_in());
    }

    #[tokio::test]
    async fn failed_refresh_signs_the_session_out() {
        let svc = service();
        svc.session().set_me(Some(me_expiring_in(60)));
        // Refresh hits the dead port and fails; the tick must not leave
        // the expired session behind.
        assert!(check_session(&svc).await.is_break());
        assert!(!svc.session().is_signed_in());
        assert!(!svc.session().is_loading());
    }

    #[tokio::test]
    async fn missing_session_stops_the_watcher() {
        let svc = service();
        assert!(check_session(&svc).await.is_break());
    }
}
