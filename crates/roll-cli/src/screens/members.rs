//! Community member screen.

use roll_core::{FieldMap, FieldValue};
use roll_schema::{Column, FieldRule, RuleSet, SchemaConfig};
use roll_table::Permissions;

use super::EntityScreen;

#[must_use]
pub fn screen() -> EntityScreen {
    EntityScreen {
        title: "會員資料",
        path: "members",
        filter_key: "name",
        date_fields: &["birth_date", "joined_at"],
        columns: columns(),
        schema: schema(),
        permissions: Permissions::admin_only(),
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::text("name", "姓名"),
        Column::text("id_number", "身份證字號"),
        Column::date("birth_date", "生日"),
        Column::text("home_phone_number", "市話"),
        Column::text("mobile_phone_number", "手機"),
        Column::text("address", "地址"),
        Column::text("title", "稱謂"),
        Column::text("line_id", "LINE ID"),
        Column::text("comment", "備註").multiline(),
        Column::date("joined_at", "加入時間"),
    ]
}

fn schema() -> SchemaConfig {
    let mut rules = RuleSet::new();
    rules.insert("name".into(), FieldRule::text_min(2, "名稱至少要2個字"));
    rules.insert(
        "birth_date".into(),
        FieldRule::NullableDate {
            message: "日期格式不正確".into(),
        },
    );
    rules.insert(
        "joined_at".into(),
        FieldRule::NullableDate {
            message: "日期格式不正確".into(),
        },
    );
    for key in [
        "id_number",
        "home_phone_number",
        "mobile_phone_number",
        "address",
        "title",
        "line_id",
        "comment",
    ] {
        rules.insert(key.into(), FieldRule::nullable_text());
    }

    let mut defaults = FieldMap::new();
    defaults.insert("name".into(), FieldValue::Text(String::new()));
    for key in [
        "id_number",
        "birth_date",
        "home_phone_number",
        "mobile_phone_number",
        "address",
        "title",
        "line_id",
        "comment",
        "joined_at",
    ] {
        defaults.insert(key.into(), FieldValue::Null);
    }

    SchemaConfig::symmetric(rules, defaults)
}

#[cfg(test)]
mod tests {
    use roll_forms::{EditDialog, SubmitAction};

    use super::*;

    #[test]
    fn minimal_valid_member_submits() {
        let screen = screen();
        let mut dialog = EditDialog::new(screen.columns, screen.schema);
        dialog.open(None);
        dialog.change("name", "陳媽媽");
        assert!(dialog.can_submit());
        let action = dialog.submit().expect("submit");
        assert!(matches!(action, SubmitAction::Insert(_)));
    }
}
