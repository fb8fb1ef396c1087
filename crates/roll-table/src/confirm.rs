//! Delete confirmation flow.
//!
//! A delete request never fires directly from a row action: it parks in
//! [`DeleteConfirm`] until the user confirms or cancels. Confirming hands
//! the id back exactly once and resets the state, so a double confirm
//! cannot issue a second request.

/// Pending-delete state for one table screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteConfirm {
    #[default]
    Idle,
    Pending {
        id: String,
    },
}

impl DeleteConfirm {
    /// Park a delete request for `id`, replacing any earlier pending one.
    pub fn request(&mut self, id: impl Into<String>) {
        *self = Self::Pending { id: id.into() };
    }

    /// Dismiss the pending request without deleting anything.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Take the confirmed id, resetting to [`Self::Idle`]. Returns `None`
    /// when nothing was pending.
    pub fn confirm(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::Pending { id } => Some(id),
            Self::Idle => None,
        }
    }

    #[must_use]
    pub fn pending_id(&self) -> Option<&str> {
        match self {
            Self::Pending { id } => Some(id),
            Self::Idle => None,
        }
    }
}
