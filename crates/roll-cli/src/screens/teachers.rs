//! Staff account screen.
//!
//! Permissions are tighter here than elsewhere: an admin may edit only
//! their own account, and a super admin may edit anyone but delete only
//! others.

use roll_core::{FieldMap, FieldValue, Role};
use roll_schema::{Column, FieldOption, FieldRule, RuleSet, SchemaConfig};
use roll_table::{Permissions, Viewer};

use super::EntityScreen;

#[must_use]
pub fn screen() -> EntityScreen {
    EntityScreen {
        title: "教師資料",
        path: "teachers",
        filter_key: "name",
        date_fields: &["date_of_birth"],
        columns: columns(),
        schema: schema(),
        permissions: permissions(),
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::text("username", "帳號"),
        Column::password("password", "密碼"),
        Column::text("name", "姓名"),
        Column::enumeration(
            "employment_type",
            "聘用類型",
            vec![
                FieldOption::number(0.0, "全職"),
                FieldOption::number(1.0, "兼職"),
                FieldOption::number(2.0, "志工"),
            ],
        ),
        Column::text("phone", "電話"),
        Column::text("responsibility", "負責業務"),
        Column::text("background", "學經歷").multiline(),
        Column::text("id_number", "身份證字號"),
        Column::date("date_of_birth", "生日"),
    ]
}

fn schema() -> SchemaConfig {
    let mut rules = RuleSet::new();
    rules.insert("username".into(), FieldRule::text_min(1, "帳號不能為空"));
    rules.insert("name".into(), FieldRule::text_min(2, "名稱至少要2個字"));
    rules.insert(
        "employment_type".into(),
        FieldRule::Number {
            message: "請選擇聘用類型".into(),
        },
    );
    rules.insert(
        "date_of_birth".into(),
        FieldRule::NullableDate {
            message: "日期格式不正確".into(),
        },
    );
    for key in ["phone", "responsibility", "background", "id_number"] {
        rules.insert(key.into(), FieldRule::nullable_text());
    }

    // A new account needs a password; on update an empty one means "leave
    // unchanged", so the rule relaxes.
    let mut create_rules = rules.clone();
    create_rules.insert("password".into(), FieldRule::text_min(4, "密碼至少要4個字"));
    let mut update_rules = rules;
    update_rules.insert("password".into(), FieldRule::nullable_text());

    let mut defaults = FieldMap::new();
    defaults.insert("username".into(), FieldValue::Text(String::new()));
    defaults.insert("password".into(), FieldValue::Text(String::new()));
    defaults.insert("name".into(), FieldValue::Text(String::new()));
    defaults.insert("employment_type".into(), FieldValue::Number(0.0));
    for key in [
        "phone",
        "responsibility",
        "background",
        "id_number",
        "date_of_birth",
    ] {
        defaults.insert(key.into(), FieldValue::Null);
    }

    SchemaConfig {
        create_rules,
        update_rules,
        create_defaults: defaults.clone(),
        update_defaults: defaults,
    }
}

fn permissions() -> Permissions {
    Permissions::new(
        |record, viewer| match viewer.role {
            Role::SuperAdmin => true,
            Role::Admin => is_own_account(record, viewer),
            Role::User => false,
        },
        |record, viewer| match viewer.role {
            // A super admin cannot delete their own account.
            Role::SuperAdmin => !is_own_account(record, viewer),
            Role::Admin => is_own_account(record, viewer),
            Role::User => false,
        },
    )
}

fn is_own_account(record: &FieldMap, viewer: &Viewer) -> bool {
    record.get("id").and_then(FieldValue::as_text) == Some(viewer.id.as_str())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use roll_forms::{EditDialog, SubmitAction};
    use roll_schema::Mode;

    use super::*;

    fn record(id: &str) -> FieldMap {
        FieldMap::from([
            ("id".to_string(), FieldValue::Text(id.into())),
            ("name".to_string(), FieldValue::Text("王老師".into())),
            ("username".to_string(), FieldValue::Text("wang".into())),
            ("employment_type".to_string(), FieldValue::Number(0.0)),
        ])
    }

    #[test]
    fn admin_edits_only_their_own_account() {
        let perms = permissions();
        let admin = Viewer::new("t1", Role::Admin);
        assert!((perms.can_edit)(&record("t1"), &admin));
        assert!(!(perms.can_edit)(&record("t2"), &admin));
    }

    #[test]
    fn super_admin_deletes_others_but_not_self() {
        let perms = permissions();
        let root = Viewer::new("t1", Role::SuperAdmin);
        assert!(!(perms.can_delete)(&record("t1"), &root));
        assert!((perms.can_delete)(&record("t2"), &root));
    }

    #[test]
    fn password_required_only_on_create() {
        let schema = schema();
        assert_eq!(
            schema.rules(Mode::Create).get("password"),
            Some(&FieldRule::text_min(4, "密碼至少要4個字"))
        );
        assert_eq!(
            schema.rules(Mode::Update).get("password"),
            Some(&FieldRule::nullable_text())
        );
    }

    #[test]
    fn blank_password_is_dropped_from_update_payload() {
        let screen = screen();
        let mut dialog = EditDialog::new(screen.columns, screen.schema);
        dialog.open(Some(&record("t1")));
        dialog.change("name", "王大明");
        let action = dialog.submit().expect("submit");
        let SubmitAction::Update(payload) = action else {
            panic!("expected update");
        };
        assert!(!payload.contains_key("password"));
    }
}
