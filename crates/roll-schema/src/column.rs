//! Per-entity column descriptors.
//!
//! A screen declares one ordered `Vec<Column>` per entity; the table, edit
//! dialog, and preview card all render from it. Descriptors are data: no
//! behavior lives here beyond the invariant check.

use serde::{Deserialize, Serialize};

use crate::SchemaError;

/// UI field type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Bool,
    Date,
    Enum,
    Password,
}

/// An enum option's stored value: the backend uses numeric codes for most
/// enums and record ids (strings) for foreign-key selectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(f64),
    Text(String),
}

impl OptionValue {
    /// Whether a stored field value matches this option value.
    #[must_use]
    pub fn matches(&self, value: &roll_core::FieldValue) -> bool {
        use roll_core::FieldValue;
        match (self, value) {
            (Self::Number(n), FieldValue::Number(m)) => (n - m).abs() < f64::EPSILON,
            (Self::Text(s), FieldValue::Text(t)) => s == t,
            _ => false,
        }
    }

    /// The stored value as a [`roll_core::FieldValue`].
    #[must_use]
    pub fn to_field_value(&self) -> roll_core::FieldValue {
        match self {
            Self::Number(n) => roll_core::FieldValue::Number(*n),
            Self::Text(s) => roll_core::FieldValue::Text(s.clone()),
        }
    }
}

/// One selectable option of an enum column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: OptionValue,
    pub label: String,
}

impl FieldOption {
    #[must_use]
    pub fn number(value: f64, label: impl Into<String>) -> Self {
        Self {
            value: OptionValue::Number(value),
            label: label.into(),
        }
    }

    #[must_use]
    pub fn text(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: OptionValue::Text(value.into()),
            label: label.into(),
        }
    }
}

/// Declarative description of one entity field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Field key; must name a property of the entity's record type.
    pub key: String,
    /// Human label shown in headers and edit surfaces.
    pub label: String,
    #[serde(default)]
    pub field_type: FieldType,
    /// Options for [`FieldType::Enum`] columns; empty otherwise.
    #[serde(default)]
    pub options: Vec<FieldOption>,
    /// Multi-line text control instead of a single-line one.
    #[serde(default)]
    pub multiline: bool,
    /// Not shown in the table; used for foreign-key selector columns that
    /// exist only in edit surfaces.
    #[serde(default)]
    pub hidden: bool,
    /// Rendered but never included in submitted payloads.
    #[serde(default)]
    pub view_only: bool,
}

impl Column {
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            field_type,
            options: Vec::new(),
            multiline: false,
            hidden: false,
            view_only: false,
        }
    }

    #[must_use]
    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldType::Text)
    }

    #[must_use]
    pub fn number(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldType::Number)
    }

    #[must_use]
    pub fn bool(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldType::Bool)
    }

    #[must_use]
    pub fn date(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldType::Date)
    }

    #[must_use]
    pub fn password(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldType::Password)
    }

    #[must_use]
    pub fn enumeration(
        key: impl Into<String>,
        label: impl Into<String>,
        options: Vec<FieldOption>,
    ) -> Self {
        let mut column = Self::new(key, label, FieldType::Enum);
        column.options = options;
        column
    }

    #[must_use]
    pub const fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    #[must_use]
    pub const fn view_only(mut self) -> Self {
        self.view_only = true;
        self
    }

    /// Label of the option matching `value`, or `None` when nothing matches
    /// (stale or unknown stored values).
    #[must_use]
    pub fn option_label(&self, value: &roll_core::FieldValue) -> Option<&str> {
        self.options
            .iter()
            .find(|opt| opt.value.matches(value))
            .map(|opt| opt.label.as_str())
    }
}

/// Check a screen's column set against the descriptor invariants:
/// options present iff the column is an enum, and at most one hidden enum
/// (foreign-key selector) column. A hidden selector may have an empty
/// option list; its options come from another collection, and that
/// collection can legitimately be empty (the select just offers nothing).
///
/// # Errors
///
/// Returns the first violated [`SchemaError`]. Screens call this once at
/// construction: a failure is a programming mistake, not user input.
pub fn validate_columns(columns: &[Column]) -> Result<(), SchemaError> {
    for column in columns {
        match column.field_type {
            FieldType::Enum if column.options.is_empty() && !column.hidden => {
                return Err(SchemaError::EnumWithoutOptions {
                    key: column.key.clone(),
                });
            }
            FieldType::Enum => {}
            _ if !column.options.is_empty() => {
                return Err(SchemaError::OptionsOnNonEnum {
                    key: column.key.clone(),
                });
            }
            _ => {}
        }
    }

    let selector_count = columns
        .iter()
        .filter(|c| c.hidden && c.field_type == FieldType::Enum)
        .count();
    if selector_count > 1 {
        return Err(SchemaError::MultipleForeignKeySelectors {
            count: selector_count,
        });
    }

    Ok(())
}
