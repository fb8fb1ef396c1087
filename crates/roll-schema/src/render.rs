//! Field rendering: edit control selection, input coercion, and read-only
//! display formatting.
//!
//! This is a pure mapping layer. Coercing an already-coerced value is a
//! no-op, and display never fails on stale or missing values.

use roll_core::FieldValue;
use roll_core::value::DATE_FORMAT;

use crate::column::{Column, FieldOption, FieldType, OptionValue};

/// Description of the editable control a column presents.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlKind {
    /// Single-line text input.
    TextInput,
    /// Multi-line text area.
    TextArea,
    /// Masked input; placeholder differs for new records ("enter a
    /// password") vs updates ("leave blank to keep").
    Password,
    /// Numeric input.
    NumberInput,
    /// Option picker over the column's options.
    Select { options: Vec<FieldOption> },
    /// Booleans present as a fixed binary picker, stored as true/false.
    YesNo,
    /// Date picker.
    DatePicker,
}

/// The editable control for a column.
#[must_use]
pub fn edit_control(column: &Column) -> ControlKind {
    match column.field_type {
        FieldType::Password => ControlKind::Password,
        FieldType::Number => ControlKind::NumberInput,
        FieldType::Enum => ControlKind::Select {
            options: column.options.clone(),
        },
        FieldType::Bool => ControlKind::YesNo,
        FieldType::Date => ControlKind::DatePicker,
        FieldType::Text => {
            if column.multiline {
                ControlKind::TextArea
            } else {
                ControlKind::TextInput
            }
        }
    }
}

/// Coerce a raw UI input string into the typed value the form stores.
///
/// - number: empty → null, unparseable → null
/// - enum with numeric options: same as number; enum with string options
///   (foreign-key selectors) keeps the raw id, empty → null
/// - bool: `"1"`/`"true"` → true, everything else → false
/// - date: unparseable → null, never an error
/// - text (and password): stored verbatim
#[must_use]
pub fn coerce_input(column: &Column, raw: &str) -> FieldValue {
    match column.field_type {
        FieldType::Number => coerce_number(raw),
        FieldType::Enum => {
            if column
                .options
                .first()
                .is_some_and(|opt| matches!(opt.value, OptionValue::Text(_)))
            {
                if raw.is_empty() {
                    FieldValue::Null
                } else {
                    FieldValue::Text(raw.to_string())
                }
            } else {
                coerce_number(raw)
            }
        }
        FieldType::Bool => FieldValue::Bool(raw == "1" || raw.eq_ignore_ascii_case("true")),
        FieldType::Date => chrono::NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_or(FieldValue::Null, FieldValue::Date),
        FieldType::Text | FieldType::Password => FieldValue::Text(raw.to_string()),
    }
}

fn coerce_number(raw: &str) -> FieldValue {
    if raw.is_empty() {
        return FieldValue::Null;
    }
    raw.parse::<f64>()
        .map_or(FieldValue::Null, FieldValue::Number)
}

/// Read-only presentation of a value under a column descriptor.
///
/// Enum values with no matching option render empty rather than failing;
/// password columns always render empty.
#[must_use]
pub fn display_value(column: &Column, value: &FieldValue) -> String {
    match column.field_type {
        FieldType::Password => String::new(),
        FieldType::Enum => column.option_label(value).unwrap_or_default().to_string(),
        FieldType::Bool => match value {
            FieldValue::Bool(true) => "是".to_string(),
            FieldValue::Bool(false) => "否".to_string(),
            _ => String::new(),
        },
        FieldType::Date => value
            .as_date()
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default(),
        FieldType::Number => match value {
            FieldValue::Number(n) => format_number(*n),
            FieldValue::Text(s) => s.clone(),
            _ => String::new(),
        },
        FieldType::Text => match value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => format_number(*n),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Date(d) => d.format(DATE_FORMAT).to_string(),
            FieldValue::Null => String::new(),
        },
    }
}

/// Integral values print without a trailing `.0`.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn gender() -> Column {
        Column::enumeration(
            "gender",
            "性別",
            vec![
                FieldOption::number(0.0, "Male"),
                FieldOption::number(1.0, "Female"),
            ],
        )
    }

    #[rstest]
    #[case("", FieldValue::Null)]
    #[case("87", FieldValue::Number(87.0))]
    #[case("abc", FieldValue::Null)]
    #[case("92.5", FieldValue::Number(92.5))]
    fn number_coercion(#[case] raw: &str, #[case] expected: FieldValue) {
        let column = Column::number("score", "分數");
        assert_eq!(coerce_input(&column, raw), expected);
    }

    #[test]
    fn enum_with_numeric_options_coerces_to_number() {
        assert_eq!(coerce_input(&gender(), "1"), FieldValue::Number(1.0));
        assert_eq!(coerce_input(&gender(), ""), FieldValue::Null);
    }

    #[test]
    fn enum_with_string_options_keeps_the_id() {
        let selector =
            Column::enumeration("student_id", "學生", vec![FieldOption::text("s1", "小明")])
                .hidden();
        assert_eq!(
            coerce_input(&selector, "s1"),
            FieldValue::Text("s1".into())
        );
        assert_eq!(coerce_input(&selector, ""), FieldValue::Null);
    }

    #[test]
    fn bool_toggle_round_trip() {
        let column = Column::bool("is_pg", "PG生");
        assert_eq!(coerce_input(&column, "1"), FieldValue::Bool(true));
        assert_eq!(coerce_input(&column, "0"), FieldValue::Bool(false));
        assert_eq!(display_value(&column, &FieldValue::Bool(true)), "是");
        assert_eq!(display_value(&column, &FieldValue::Bool(false)), "否");
    }

    #[test]
    fn invalid_date_coerces_to_null() {
        let column = Column::date("joined_at", "加入時間");
        assert_eq!(coerce_input(&column, "2024-13-45"), FieldValue::Null);
        assert_eq!(
            coerce_input(&column, "2024-09-01"),
            FieldValue::Date(chrono::NaiveDate::from_ymd_opt(2024, 9, 1).expect("valid"))
        );
    }

    #[test]
    fn stale_enum_value_displays_empty() {
        // Stored value 2 with options 0/1: renders empty, never panics.
        assert_eq!(display_value(&gender(), &FieldValue::Number(2.0)), "");
    }

    #[test]
    fn date_displays_in_wire_format_or_empty() {
        let column = Column::date("joined_at", "加入時間");
        let date = chrono::NaiveDate::from_ymd_opt(2024, 9, 1).expect("valid");
        assert_eq!(display_value(&column, &FieldValue::Date(date)), "2024-09-01");
        assert_eq!(display_value(&column, &FieldValue::Null), "");
    }

    #[test]
    fn password_never_displays() {
        let column = Column::password("password", "密碼");
        assert_eq!(
            display_value(&column, &FieldValue::Text("secret".into())),
            ""
        );
    }

    #[test]
    fn coercion_is_idempotent_through_display() {
        // Re-coercing the displayed form of a coerced value is a no-op.
        let column = Column::number("score", "分數");
        let coerced = coerce_input(&column, "87");
        let displayed = display_value(&column, &coerced);
        assert_eq!(coerce_input(&column, &displayed), coerced);

        let date_column = Column::date("joined_at", "加入時間");
        let coerced = coerce_input(&date_column, "2024-09-01");
        let displayed = display_value(&date_column, &coerced);
        assert_eq!(coerce_input(&date_column, &displayed), coerced);
    }

    #[test]
    fn multiline_text_gets_a_text_area() {
        let column = Column::text("description", "家庭情況").multiline();
        assert_eq!(edit_control(&column), ControlKind::TextArea);
        assert_eq!(
            edit_control(&Column::text("name", "姓名")),
            ControlKind::TextInput
        );
    }
}
