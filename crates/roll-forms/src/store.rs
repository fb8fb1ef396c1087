//! The per-entity form validation store.

use std::collections::BTreeMap;

use roll_core::{FieldMap, FieldValue};
use roll_schema::{Mode, SchemaConfig};

/// Field values, errors, and validity for one open edit surface.
///
/// `is_valid` always reflects the most recent [`FormStore::validate_form`]
/// run; [`FormStore::set_values`] and [`FormStore::set_mode`] revalidate
/// immediately so it is never stale.
#[derive(Debug, Clone)]
pub struct FormStore {
    schema: SchemaConfig,
    values: FieldMap,
    errors: BTreeMap<String, String>,
    is_valid: bool,
    mode: Mode,
}

impl FormStore {
    /// A fresh store in create mode, seeded with the create defaults.
    #[must_use]
    pub fn new(schema: SchemaConfig) -> Self {
        let values = schema.create_defaults.clone();
        Self {
            schema,
            values,
            errors: BTreeMap::new(),
            is_valid: false,
            mode: Mode::Create,
        }
    }

    #[must_use]
    pub const fn values(&self) -> &FieldMap {
        &self.values
    }

    #[must_use]
    pub fn value(&self, key: &str) -> &FieldValue {
        self.values.get(key).unwrap_or(&FieldValue::Null)
    }

    #[must_use]
    pub const fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    #[must_use]
    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(String::as_str)
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch mode, reset values to that mode's defaults, and revalidate.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.values = self.schema.defaults(mode).clone();
        self.validate_form();
    }

    /// Shallow-merge new values and revalidate the whole form.
    pub fn set_values(&mut self, new_values: FieldMap) {
        self.values.extend(new_values);
        self.validate_form();
    }

    /// Validate a single field against the active rule set, storing the
    /// first failure message or clearing a previous one.
    ///
    /// A field with no rule, or absent from `values`, counts as passing —
    /// the whole-form check in create mode is what catches missing
    /// required fields.
    pub fn validate_field(&mut self, key: &str) -> bool {
        let Some(rule) = self.schema.rules(self.mode).get(key) else {
            self.errors.remove(key);
            return true;
        };
        let Some(value) = self.values.get(key) else {
            self.errors.remove(key);
            return true;
        };
        match rule.check(value) {
            Ok(()) => {
                self.errors.remove(key);
                true
            }
            Err(message) => {
                self.errors.insert(key.to_string(), message);
                false
            }
        }
    }

    /// Validate the whole form against the active rule set.
    ///
    /// Create mode requires full conformance: a rule whose field is absent
    /// checks against null. Update mode is forgiving: absent fields are
    /// skipped, since update payloads need not supply every field.
    ///
    /// Populates `errors` with one message per failing field and returns
    /// the overall result, which `is_valid` then mirrors.
    pub fn validate_form(&mut self) -> bool {
        let mut errors = BTreeMap::new();
        for (key, rule) in self.schema.rules(self.mode) {
            let stored = self.values.get(key);
            let value = match (stored, self.mode) {
                (Some(v), _) => v,
                (None, Mode::Create) => &FieldValue::Null,
                (None, Mode::Update) => continue,
            };
            if let Err(message) = rule.check(value) {
                errors.insert(key.clone(), message);
            }
        }
        self.is_valid = errors.is_empty();
        self.errors = errors;
        self.is_valid
    }

    /// Restore create defaults, clear errors, and force create mode.
    pub fn reset_form(&mut self) {
        self.values = self.schema.create_defaults.clone();
        self.errors.clear();
        self.is_valid = false;
        self.mode = Mode::Create;
    }
}
