//! Entity screen declarations.
//!
//! A screen is data: column descriptors, validation schema, permissions,
//! and the backend collection path. The generic table, form, and resource
//! engines do the rest, so adding an entity means adding one module here.

pub mod announcements;
pub mod grades;
pub mod members;
pub mod students;
pub mod teachers;

use roll_schema::{Column, SchemaConfig};
use roll_table::Permissions;

/// One entity screen's full declarative configuration.
pub struct EntityScreen {
    pub title: &'static str,
    /// Collection path under the API base URL.
    pub path: &'static str,
    /// Column the live text filter applies to.
    pub filter_key: &'static str,
    /// Fields normalized to `YYYY-MM-DD` on fetch.
    pub date_fields: &'static [&'static str],
    pub columns: Vec<Column>,
    pub schema: SchemaConfig,
    pub permissions: Permissions,
}

impl EntityScreen {
    /// Descriptor for a column key.
    #[must_use]
    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }
}
