//! Shared session state.

use std::sync::{Arc, Mutex};

use roll_core::Me;

#[derive(Debug, Default)]
struct State {
    me: Option<Me>,
    loading: bool,
}

/// The signed-in user, shared across screens and the expiry watcher.
///
/// Cloning shares the same state. Reads return snapshots; holders never see
/// a half-updated session.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    state: Arc<Mutex<State>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current user, if signed in.
    #[must_use]
    pub fn me(&self) -> Option<Me> {
        self.lock().me.clone()
    }

    /// True while a session request (login or refresh) is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.lock().me.is_some()
    }

    pub(crate) fn set_me(&self, me: Option<Me>) {
        self.lock().me = me;
    }

    pub(crate) fn set_loading(&self, loading: bool) {
        self.lock().loading = loading;
    }

    /// Drop the session and any pending loading flag in one step. Used on
    /// logout and whenever the backend answers 401.
    pub(crate) fn clear(&self) {
        let mut state = self.lock();
        state.me = None;
        state.loading = false;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
