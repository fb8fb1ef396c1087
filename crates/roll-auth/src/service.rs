//! Login, logout, and session refresh.

use std::sync::Arc;

use chrono::Utc;

use roll_api::{ApiClient, ApiError};
use roll_core::Me;
use roll_core::responses::{ApiEnvelope, LoginRequest};

use crate::EXPIRY_BUFFER_SECS;
use crate::error::AuthError;
use crate::session::SessionStore;

/// Authentication operations against the backend. The session cookie lives
/// in the shared [`ApiClient`]; this service only manages the user state
/// around it.
pub struct AuthService {
    client: Arc<ApiClient>,
    session: SessionStore,
}

impl AuthService {
    #[must_use]
    pub fn new(client: Arc<ApiClient>, session: SessionStore) -> Self {
        Self { client, session }
    }

    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Sign in and load the session user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] on bad credentials, or
    /// [`AuthError::Api`] for other backend failures.
    pub async fn login(&self, username: &str, password: &str) -> Result<Me, AuthError> {
        self.session.set_loading(true);
        let credentials = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let result: Result<ApiEnvelope<serde_json::Value>, ApiError> =
            self.client.post_json("login", &credentials).await;
        if let Err(err) = result {
            self.session.clear();
            return Err(map_session_error(err));
        }
        self.fetch_me(true).await
    }

    /// Current session user, re-fetched from the backend when the cached
    /// one is missing or inside the expiry buffer. `force` skips the cache.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] when the backend answers
    /// 401; the stored session is cleared before returning.
    pub async fn fetch_me(&self, force: bool) -> Result<Me, AuthError> {
        if !force
            && let Some(me) = self.session.me()
            && me.is_token_fresh(Utc::now(), EXPIRY_BUFFER_SECS)
        {
            return Ok(me);
        }

        self.session.set_loading(true);
        let result: Result<ApiEnvelope<Me>, ApiError> = self.client.get_json("me").await;
        match result {
            Ok(envelope) => match envelope.data {
                Some(me) => {
                    self.session.set_me(Some(me.clone()));
                    self.session.set_loading(false);
                    Ok(me)
                }
                None => {
                    self.session.clear();
                    Err(AuthError::NotAuthenticated)
                }
            },
            Err(err) if err.is_unauthorized() => {
                self.session.clear();
                Err(AuthError::NotAuthenticated)
            }
            Err(err) => {
                // Transport or server trouble says nothing about the
                // session itself, so the cached user survives.
                self.session.set_loading(false);
                Err(AuthError::Api(err))
            }
        }
    }

    /// Sign out. Best-effort on the wire and idempotent locally: the stored
    /// session is dropped even when the backend call fails, and signing out
    /// twice is not an error.
    pub async fn logout(&self) {
        let result: Result<ApiEnvelope<serde_json::Value>, ApiError> =
            self.client.post_json("logout", &serde_json::json!({})).await;
        if let Err(err) = result
            && !err.is_unauthorized()
        {
            tracing::warn!("logout request failed: {err}");
        }
        self.session.clear();
    }
}

/// A 401 from any session call means "not signed in", not a generic API
/// failure.
fn map_session_error(err: ApiError) -> AuthError {
    if err.is_unauthorized() {
        AuthError::NotAuthenticated
    } else {
        AuthError::Api(err)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn service() -> AuthService {
        // Port 9 (discard) refuses connections on test hosts.
        let client =
            ApiClient::new("http://127.0.0.1:9/api", Duration::from_secs(1)).expect("client");
        AuthService::new(Arc::new(client), SessionStore::new())
    }

    fn fresh_me() -> Me {
        Me {
            id: "t1".into(),
            role: roll_core::Role::Admin,
            name: "王老師".into(),
            exp: (Utc::now() + chrono::TimeDelta::hours(1)).timestamp(),
        }
    }

    fn stale_me() -> Me {
        Me {
            exp: (Utc::now() + chrono::TimeDelta::seconds(60)).timestamp(),
            ..fresh_me()
        }
    }

    #[tokio::test]
    async fn fetch_me_serves_fresh_cache_without_a_request() {
        let svc = service();
        svc.session().set_me(Some(fresh_me()));
        // The backend is unreachable, so success proves no request was made.
        let me = svc.fetch_me(false).await.expect("cached");
        assert_eq!(me.id, "t1");
    }

    #[tokio::test]
    async fn fetch_me_refreshes_inside_the_expiry_buffer() {
        let svc = service();
        svc.session().set_me(Some(stale_me()));
        // Stale cache forces a request, which fails against the dead port.
        let err = svc.fetch_me(false).await.unwrap_err();
        assert!(matches!(err, AuthError::Api(_)));
        assert!(!svc.session().is_loading());
        // A transport failure does not revoke the cached session.
        assert!(svc.session().is_signed_in());
    }

    #[tokio::test]
    async fn force_skips_a_fresh_cache() {
        let svc = service();
        svc.session().set_me(Some(fresh_me()));
        assert!(svc.fetch_me(true).await.is_err());
    }

    /// One-shot loopback server answering every request with `status` and
    /// a JSON body.
    async fn serve_once(status: u16, body: &'static str) -> std::net::SocketAddr {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status} X\r\ncontent-type: application/json\r\n\
                 content-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
        });
        addr
    }

    #[tokio::test]
    async fn backend_401_clears_the_session() {
        let addr = serve_once(401, r#"{"message":"未登入"}"#).await;
        let client = ApiClient::new(format!("http://{addr}/api"), Duration::from_secs(2))
            .expect("client");
        let svc = AuthService::new(Arc::new(client), SessionStore::new());
        svc.session().set_me(Some(stale_me()));

        let err = svc.fetch_me(true).await.unwrap_err();
        assert!(matches!(err, AuthError::NotAuthenticated));
        assert!(!svc.session().is_signed_in());
        assert!(!svc.session().is_loading());
    }

    #[tokio::test]
    async fn logout_clears_the_session_even_when_the_wire_fails() {
        let svc = service();
        svc.session().set_me(Some(fresh_me()));
        svc.logout().await;
        assert!(!svc.session().is_signed_in());
        // Idempotent: a second logout is fine.
        svc.logout().await;
        assert!(!svc.session().is_signed_in());
    }
}
