//! Row-level permission predicates.

use roll_core::{FieldMap, FieldValue, Role};

/// The acting user, as far as permissions are concerned.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewer {
    pub id: String,
    pub role: Role,
}

impl Viewer {
    #[must_use]
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }
}

/// A pure row predicate: may inspect the record and the viewer, nothing
/// else. Re-evaluated for every row on every view build.
pub type Predicate = Box<dyn Fn(&FieldMap, &Viewer) -> bool + Send + Sync>;

/// Edit/delete gating for one entity screen.
pub struct Permissions {
    pub can_edit: Predicate,
    pub can_delete: Predicate,
}

impl Permissions {
    #[must_use]
    pub fn new(
        can_edit: impl Fn(&FieldMap, &Viewer) -> bool + Send + Sync + 'static,
        can_delete: impl Fn(&FieldMap, &Viewer) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            can_edit: Box::new(can_edit),
            can_delete: Box::new(can_delete),
        }
    }

    /// Both actions restricted to the admin tiers — the common case for
    /// people-record screens.
    #[must_use]
    pub fn admin_only() -> Self {
        Self::new(
            |_, viewer| viewer.role.is_admin(),
            |_, viewer| viewer.role.is_admin(),
        )
    }

    /// Admins may act on any row; other roles only on rows they authored
    /// (matched through `owner_key` against the viewer id). Used by the
    /// announcements screen.
    #[must_use]
    pub fn admin_or_owner(owner_key: &'static str) -> Self {
        let owns = move |record: &FieldMap, viewer: &Viewer| {
            viewer.role.is_admin()
                || record.get(owner_key)
                    == Some(&FieldValue::Text(viewer.id.clone()))
        };
        Self::new(owns.clone(), owns)
    }
}

impl std::fmt::Debug for Permissions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Permissions").finish_non_exhaustive()
    }
}
