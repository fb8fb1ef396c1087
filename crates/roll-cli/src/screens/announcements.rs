//! Announcement screen.

use roll_core::{FieldMap, FieldValue};
use roll_schema::{Column, FieldRule, RuleSet, SchemaConfig};
use roll_table::Permissions;

use super::EntityScreen;

#[must_use]
pub fn screen() -> EntityScreen {
    EntityScreen {
        title: "公告",
        path: "announcements",
        filter_key: "title",
        date_fields: &["created_at", "updated_at"],
        columns: columns(),
        schema: schema(),
        permissions: Permissions::admin_only(),
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::text("title", "標題"),
        Column::text("content", "內文").multiline(),
        Column::text("teacher_name", "發布者").view_only(),
    ]
}

fn schema() -> SchemaConfig {
    let mut rules = RuleSet::new();
    rules.insert("title".into(), FieldRule::text_min(1, "標題不能為空"));
    rules.insert("content".into(), FieldRule::text_min(1, "內容不能為空"));

    let mut defaults = FieldMap::new();
    defaults.insert("title".into(), FieldValue::Text(String::new()));
    defaults.insert("content".into(), FieldValue::Text(String::new()));

    SchemaConfig::symmetric(rules, defaults)
}
