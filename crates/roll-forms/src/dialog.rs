//! The modal create/update dialog state machine.
//!
//! ```text
//! closed → open(create|update) → submitting → closed
//!                └── cancelled ──────────────→ closed
//! ```
//!
//! The dialog owns a [`FormStore`] and the column descriptors; the caller
//! performs the actual network mutation and reports the outcome through
//! [`EditDialog::complete_submit`].

use roll_core::{FieldMap, FieldValue};
use roll_schema::{Column, FieldType, Mode, SchemaConfig, coerce_input};

use crate::store::FormStore;

/// Dialog lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
    Submitting,
}

/// The mutation a valid submit assembled for the caller to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction {
    Insert(FieldMap),
    Update(FieldMap),
}

/// Modal edit surface for one entity type.
#[derive(Debug, Clone)]
pub struct EditDialog {
    columns: Vec<Column>,
    form: FormStore,
    state: DialogState,
}

impl EditDialog {
    #[must_use]
    pub fn new(columns: Vec<Column>, schema: SchemaConfig) -> Self {
        Self {
            columns,
            form: FormStore::new(schema),
            state: DialogState::Closed,
        }
    }

    #[must_use]
    pub const fn state(&self) -> DialogState {
        self.state
    }

    #[must_use]
    pub const fn form(&self) -> &FormStore {
        &self.form
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open | DialogState::Submitting)
    }

    /// Columns the dialog renders: everything not view-only.
    pub fn editable_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| !c.view_only)
    }

    /// Open the dialog. `None` enters create mode with schema defaults; a
    /// record enters update mode seeded from its current field values.
    pub fn open(&mut self, record: Option<&FieldMap>) {
        match record {
            Some(fields) => {
                self.form.set_mode(Mode::Update);
                self.form.set_values(fields.clone());
            }
            None => {
                self.form.reset_form();
            }
        }
        self.state = DialogState::Open;
    }

    /// Apply a raw input change to one field: coerce by the field's
    /// declared type, store, and validate only that field so feedback
    /// stays local.
    pub fn change(&mut self, key: &str, raw: &str) {
        let value = self
            .columns
            .iter()
            .find(|c| c.key == key)
            .map_or_else(|| FieldValue::Text(raw.to_string()), |c| coerce_input(c, raw));
        self.form.set_values(FieldMap::from([(key.to_string(), value)]));
        self.form.validate_field(key);
    }

    /// Whether the submit action is currently enabled.
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        self.form.is_valid() && matches!(self.state, DialogState::Open)
    }

    /// Attempt to submit: re-run whole-form validation and, when valid,
    /// hand the assembled payload to the caller. View-only columns are
    /// stripped; a locally invalid form yields `None` and nothing reaches
    /// the network.
    pub fn submit(&mut self) -> Option<SubmitAction> {
        if self.state != DialogState::Open || !self.form.validate_form() {
            return None;
        }
        let payload = self.assemble_payload();
        self.state = DialogState::Submitting;
        Some(match self.form.mode() {
            Mode::Create => SubmitAction::Insert(payload),
            Mode::Update => SubmitAction::Update(payload),
        })
    }

    /// Report the mutation outcome. Success resets the form and closes;
    /// failure reopens the dialog with the user's values intact.
    pub fn complete_submit(&mut self, succeeded: bool) {
        if succeeded {
            self.form.reset_form();
            self.state = DialogState::Closed;
        } else {
            self.state = DialogState::Open;
        }
    }

    /// Cancel and close, discarding state.
    pub fn cancel(&mut self) {
        self.form.reset_form();
        self.state = DialogState::Closed;
    }

    fn assemble_payload(&self) -> FieldMap {
        self.form
            .values()
            .iter()
            .filter(|(key, value)| {
                let column = self.columns.iter().find(|c| &c.key == *key);
                match column {
                    Some(c) if c.view_only => false,
                    // Blank passwords on update mean "leave unchanged".
                    Some(c) if c.field_type == FieldType::Password => {
                        !(self.form.mode() == Mode::Update
                            && matches!(value, FieldValue::Text(s) if s.is_empty()))
                    }
                    _ => true,
                }
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
