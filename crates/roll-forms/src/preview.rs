//! The inline preview card: read-only presentation of a selected record
//! with an edit toggle over the same fields, no modal involved.

use roll_core::{FieldMap, FieldValue};
use roll_schema::{Column, Mode, SchemaConfig, coerce_input};

use crate::store::FormStore;

/// Card surface bound to at most one selected record.
#[derive(Debug, Clone)]
pub struct PreviewCard {
    columns: Vec<Column>,
    form: FormStore,
    snapshot: Option<FieldMap>,
    edit_mode: bool,
    has_changes: bool,
}

impl PreviewCard {
    #[must_use]
    pub fn new(columns: Vec<Column>, schema: SchemaConfig) -> Self {
        Self {
            columns,
            form: FormStore::new(schema),
            snapshot: None,
            edit_mode: false,
            has_changes: false,
        }
    }

    #[must_use]
    pub const fn form(&self) -> &FormStore {
        &self.form
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.edit_mode
    }

    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.has_changes
    }

    #[must_use]
    pub const fn has_selection(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Bind the card to a record: update mode, values seeded from the
    /// record, change tracking cleared. Called again whenever the selected
    /// record is refreshed from the server.
    pub fn select(&mut self, record: &FieldMap) {
        self.form.set_mode(Mode::Update);
        self.form.set_values(record.clone());
        self.snapshot = Some(record.clone());
        self.has_changes = false;
    }

    /// Clear the selection (e.g. after the record was deleted).
    pub fn clear(&mut self) {
        self.form.reset_form();
        self.snapshot = None;
        self.edit_mode = false;
        self.has_changes = false;
    }

    /// Toggle into inline editing.
    pub fn begin_edit(&mut self) {
        if self.has_selection() {
            self.edit_mode = true;
        }
    }

    /// Cancel inline editing, reverting values to the record snapshot.
    pub fn cancel_edit(&mut self) {
        if let Some(snapshot) = self.snapshot.clone() {
            self.form.set_values(snapshot);
        }
        self.edit_mode = false;
        self.has_changes = false;
    }

    /// Apply a raw input change: coerce, validate that field, mark dirty.
    pub fn change(&mut self, key: &str, raw: &str) {
        let value = self
            .columns
            .iter()
            .find(|c| c.key == key)
            .map_or_else(|| FieldValue::Text(raw.to_string()), |c| coerce_input(c, raw));
        self.form.set_values(FieldMap::from([(key.to_string(), value)]));
        self.form.validate_field(key);
        self.has_changes = true;
    }

    /// Whether the update action is enabled: something changed and the
    /// form is valid.
    #[must_use]
    pub const fn can_update(&self) -> bool {
        self.has_changes && self.form.is_valid()
    }

    /// Assemble the update payload when the form validates and there are
    /// changes; `None` otherwise.
    pub fn submit_update(&mut self) -> Option<FieldMap> {
        if !self.has_changes || !self.form.validate_form() {
            return None;
        }
        let view_only: Vec<&str> = self
            .columns
            .iter()
            .filter(|c| c.view_only)
            .map(|c| c.key.as_str())
            .collect();
        Some(
            self.form
                .values()
                .iter()
                .filter(|(key, _)| !view_only.contains(&key.as_str()))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Report the update outcome: success leaves edit mode and clears the
    /// dirty flag; failure keeps the card editing with values intact.
    pub fn complete_update(&mut self, succeeded: bool) {
        if succeeded {
            self.has_changes = false;
            self.edit_mode = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use roll_schema::{FieldRule, RuleSet};

    use super::*;

    fn card() -> PreviewCard {
        let columns = vec![
            Column::text("name", "姓名"),
            Column::date("updated_at", "更新時間").view_only(),
        ];
        let mut rules = RuleSet::new();
        rules.insert("name".into(), FieldRule::text_min(2, "名稱至少要2個字"));
        let mut defaults = FieldMap::new();
        defaults.insert("name".into(), FieldValue::Text(String::new()));
        PreviewCard::new(columns, SchemaConfig::symmetric(rules, defaults))
    }

    fn record() -> FieldMap {
        FieldMap::from([
            ("id".to_string(), FieldValue::Text("m1".into())),
            ("name".to_string(), FieldValue::Text("張媽媽".into())),
        ])
    }

    #[test]
    fn selecting_seeds_update_mode() {
        let mut card = card();
        card.select(&record());
        assert_eq!(card.form().mode(), Mode::Update);
        assert!(!card.has_changes());
        assert!(!card.can_update());
    }

    #[test]
    fn cancel_reverts_to_snapshot() {
        let mut card = card();
        card.select(&record());
        card.begin_edit();
        card.change("name", "改名");
        assert!(card.has_changes());

        card.cancel_edit();
        assert!(!card.is_editing());
        assert_eq!(card.form().value("name"), &FieldValue::Text("張媽媽".into()));
        assert!(!card.has_changes());
    }

    #[test]
    fn update_requires_changes_and_validity() {
        let mut card = card();
        card.select(&record());
        card.begin_edit();
        // No changes yet: nothing to submit.
        assert_eq!(card.submit_update(), None);

        card.change("name", "王");
        assert!(!card.can_update());
        assert_eq!(card.submit_update(), None);

        card.change("name", "王媽媽");
        let payload = card.submit_update().expect("valid and dirty");
        assert_eq!(payload.get("name"), Some(&FieldValue::Text("王媽媽".into())));
        assert!(!payload.contains_key("updated_at"));
    }

    #[test]
    fn successful_update_leaves_edit_mode() {
        let mut card = card();
        card.select(&record());
        card.begin_edit();
        card.change("name", "王媽媽");
        let _ = card.submit_update().expect("valid");
        card.complete_update(true);
        assert!(!card.is_editing());
        assert!(!card.has_changes());
    }

    #[test]
    fn failed_update_keeps_editing_with_values() {
        let mut card = card();
        card.select(&record());
        card.begin_edit();
        card.change("name", "王媽媽");
        let _ = card.submit_update().expect("valid");
        card.complete_update(false);
        assert!(card.is_editing());
        assert_eq!(card.form().value("name"), &FieldValue::Text("王媽媽".into()));
    }
}
