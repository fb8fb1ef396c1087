//! Student grade screen.
//!
//! The student is chosen through a hidden enum column whose options come
//! from the live student list, so the screen is built per invocation
//! rather than statically.

use roll_core::{FieldMap, FieldValue};
use roll_schema::{Column, FieldOption, FieldRule, RuleSet, SchemaConfig};
use roll_table::Permissions;

use super::EntityScreen;

#[must_use]
pub fn screen(students: &[FieldMap]) -> EntityScreen {
    EntityScreen {
        title: "成績資料",
        path: "student_grades",
        filter_key: "name",
        date_fields: &["updated_at"],
        columns: columns(students),
        schema: schema(),
        permissions: Permissions::admin_only(),
    }
}

fn columns(students: &[FieldMap]) -> Vec<Column> {
    let student_options: Vec<FieldOption> = students
        .iter()
        .filter_map(|record| {
            let id = record.get("id").and_then(FieldValue::as_text)?;
            let name = record.get("name").and_then(FieldValue::as_text)?;
            Some(FieldOption::text(id, name))
        })
        .collect();

    vec![
        Column::enumeration("student_id", "學生", student_options).hidden(),
        Column::text("name", "姓名").view_only(),
        Column::number("academic_year", "學年"),
        Column::enumeration(
            "semester",
            "學期",
            vec![
                FieldOption::number(0.0, "上學期"),
                FieldOption::number(1.0, "下學期"),
            ],
        ),
        Column::enumeration(
            "exam_type",
            "考試類別",
            vec![
                FieldOption::number(0.0, "期中考"),
                FieldOption::number(1.0, "期末考"),
            ],
        ),
        Column::number("chinese_score", "國文"),
        Column::number("english_score", "英文"),
        Column::number("math_score", "數學"),
        Column::number("science_score", "自然"),
        Column::number("social_studies_score", "社會"),
        Column::text("comment", "備註"),
        Column::date("updated_at", "更新時間").view_only(),
    ]
}

fn schema() -> SchemaConfig {
    let mut rules = RuleSet::new();
    rules.insert(
        "student_id".into(),
        FieldRule::NonEmpty {
            message: "請選擇要輸入資料的對象".into(),
        },
    );
    rules.insert(
        "academic_year".into(),
        FieldRule::Number {
            message: "必須是數字".into(),
        },
    );
    rules.insert(
        "semester".into(),
        FieldRule::Number {
            message: "請選擇學期".into(),
        },
    );
    rules.insert(
        "exam_type".into(),
        FieldRule::Number {
            message: "請選擇考試類別".into(),
        },
    );
    for key in [
        "chinese_score",
        "english_score",
        "math_score",
        "science_score",
        "social_studies_score",
    ] {
        rules.insert(
            key.into(),
            FieldRule::NullableNumber {
                message: "必須是數字".into(),
            },
        );
    }
    rules.insert("comment".into(), FieldRule::nullable_text());

    let mut defaults = FieldMap::new();
    defaults.insert("student_id".into(), FieldValue::Text(String::new()));
    defaults.insert("academic_year".into(), FieldValue::Number(0.0));
    defaults.insert("semester".into(), FieldValue::Number(0.0));
    defaults.insert("exam_type".into(), FieldValue::Number(0.0));
    for key in [
        "chinese_score",
        "english_score",
        "math_score",
        "science_score",
        "social_studies_score",
        "comment",
    ] {
        defaults.insert(key.into(), FieldValue::Null);
    }

    SchemaConfig::symmetric(rules, defaults)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use roll_forms::{EditDialog, SubmitAction};

    use super::*;

    fn student(id: &str, name: &str) -> FieldMap {
        FieldMap::from([
            ("id".to_string(), FieldValue::Text(id.into())),
            ("name".to_string(), FieldValue::Text(name.into())),
        ])
    }

    #[test]
    fn student_options_come_from_the_student_list() {
        let screen = screen(&[student("s1", "小明"), student("s2", "小美")]);
        let selector = screen.column("student_id").expect("selector");
        assert_eq!(selector.options.len(), 2);
        assert!(selector.hidden);
        assert_eq!(
            selector.option_label(&FieldValue::Text("s2".into())),
            Some("小美")
        );
    }

    #[test]
    fn empty_roster_still_yields_a_valid_screen() {
        let screen = screen(&[]);
        assert!(roll_schema::validate_columns(&screen.columns).is_ok());
        let selector = screen.column("student_id").expect("selector");
        assert!(selector.options.is_empty());
    }

    #[test]
    fn missing_student_selection_blocks_submit() {
        let screen = screen(&[student("s1", "小明")]);
        let mut dialog = EditDialog::new(screen.columns, screen.schema);
        dialog.open(None);
        assert!(!dialog.can_submit());
        assert_eq!(dialog.submit(), None);
        assert_eq!(
            dialog.form().error("student_id"),
            Some("請選擇要輸入資料的對象")
        );
    }

    #[test]
    fn selecting_a_student_keeps_the_id_as_text() {
        let screen = screen(&[student("s1", "小明")]);
        let mut dialog = EditDialog::new(screen.columns, screen.schema);
        dialog.open(None);
        dialog.change("student_id", "s1");
        assert!(dialog.can_submit());
        let SubmitAction::Insert(payload) = dialog.submit().expect("valid") else {
            panic!("create dialog must insert");
        };
        assert_eq!(payload.get("student_id"), Some(&FieldValue::Text("s1".into())));
        // The server-joined name never travels in a payload.
        assert!(!payload.contains_key("name"));
    }
}
