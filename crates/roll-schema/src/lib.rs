//! # roll-schema
//!
//! The declarative layer every screen keys off of:
//! - [`Column`] descriptors: field key, label, UI field type, enum options,
//!   visibility flags
//! - [`FieldRule`] validation rules interpreted by a small, synchronous
//!   validation interpreter
//! - [`SchemaConfig`]: per-mode rule sets and default values
//! - The field renderer: raw input coercion, edit control selection, and
//!   read-only display formatting
//!
//! One engine, many entities: screens contribute data (descriptors), never
//! bespoke validation or rendering code.

pub mod column;
pub mod render;
pub mod rules;
pub mod schema;

pub use column::{Column, FieldOption, FieldType, OptionValue, validate_columns};
pub use render::{ControlKind, coerce_input, display_value, edit_control};
pub use rules::{FieldRule, RuleSet};
pub use schema::{Mode, SchemaConfig};

use thiserror::Error;

/// Programmer errors in a screen's declarative configuration. Raised at
/// screen construction, never during user input handling.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("column {key}: enum columns require options")]
    EnumWithoutOptions { key: String },

    #[error("column {key}: options are only valid on enum columns")]
    OptionsOnNonEnum { key: String },

    #[error("only one hidden enum (foreign-key selector) column is allowed, found {count}")]
    MultipleForeignKeySelectors { count: usize },
}
