//! Validation rules and their interpreter.
//!
//! Rules are data (a tagged variant per field), so every entity shares one
//! validation engine. A rule checks a single [`FieldValue`] and reports the
//! first failure as a human-readable message; it never panics on user input.

use std::collections::BTreeMap;

use roll_core::FieldValue;

/// Validation rule for one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRule {
    /// Required text with optional length bounds (in characters).
    Text {
        min_len: Option<usize>,
        max_len: Option<usize>,
        message: String,
    },
    /// Text that may be null; length bounds apply only when present.
    NullableText {
        min_len: Option<usize>,
        max_len: Option<usize>,
        message: String,
    },
    /// Required non-empty text, e.g. a foreign-key selection.
    NonEmpty { message: String },
    /// Required number.
    Number { message: String },
    /// Number or null.
    NullableNumber { message: String },
    /// Required boolean.
    Bool { message: String },
    /// Required date.
    Date { message: String },
    /// Date or null.
    NullableDate { message: String },
}

/// One entity's rules for a validation mode, keyed by field.
pub type RuleSet = BTreeMap<String, FieldRule>;

impl FieldRule {
    /// Shorthand for required text with a minimum length.
    #[must_use]
    pub fn text_min(min_len: usize, message: impl Into<String>) -> Self {
        Self::Text {
            min_len: Some(min_len),
            max_len: None,
            message: message.into(),
        }
    }

    /// Shorthand for required text with exact length bounds.
    #[must_use]
    pub fn text_len(min_len: usize, max_len: usize, message: impl Into<String>) -> Self {
        Self::Text {
            min_len: Some(min_len),
            max_len: Some(max_len),
            message: message.into(),
        }
    }

    /// Shorthand for nullable text without length bounds.
    #[must_use]
    pub fn nullable_text() -> Self {
        Self::NullableText {
            min_len: None,
            max_len: None,
            message: "必須是文字".into(),
        }
    }

    /// Whether an absent value satisfies this rule.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(
            self,
            Self::NullableText { .. } | Self::NullableNumber { .. } | Self::NullableDate { .. }
        )
    }

    /// Check one value against this rule.
    ///
    /// # Errors
    ///
    /// Returns the rule's failure message when the value does not conform.
    pub fn check(&self, value: &FieldValue) -> Result<(), String> {
        match self {
            Self::Text {
                min_len,
                max_len,
                message,
            } => match value {
                FieldValue::Text(s) => check_len(s, *min_len, *max_len, message),
                _ => Err(message.clone()),
            },
            Self::NullableText {
                min_len,
                max_len,
                message,
            } => match value {
                FieldValue::Null => Ok(()),
                FieldValue::Text(s) => check_len(s, *min_len, *max_len, message),
                _ => Err(message.clone()),
            },
            Self::NonEmpty { message } => match value {
                FieldValue::Text(s) if !s.is_empty() => Ok(()),
                _ => Err(message.clone()),
            },
            Self::Number { message } => match value {
                FieldValue::Number(_) => Ok(()),
                _ => Err(message.clone()),
            },
            Self::NullableNumber { message } => match value {
                FieldValue::Null | FieldValue::Number(_) => Ok(()),
                _ => Err(message.clone()),
            },
            Self::Bool { message } => match value {
                FieldValue::Bool(_) => Ok(()),
                _ => Err(message.clone()),
            },
            Self::Date { message } => {
                if value.as_date().is_some() {
                    Ok(())
                } else {
                    Err(message.clone())
                }
            }
            Self::NullableDate { message } => match value {
                FieldValue::Null => Ok(()),
                _ if value.as_date().is_some() => Ok(()),
                _ => Err(message.clone()),
            },
        }
    }
}

fn check_len(
    s: &str,
    min_len: Option<usize>,
    max_len: Option<usize>,
    message: &str,
) -> Result<(), String> {
    let chars = s.chars().count();
    if min_len.is_some_and(|min| chars < min) || max_len.is_some_and(|max| chars > max) {
        return Err(message.to_string());
    }
    Ok(())
}
