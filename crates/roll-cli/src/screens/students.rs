//! Student records screen.

use roll_core::{FieldMap, FieldValue};
use roll_schema::{Column, FieldOption, FieldRule, RuleSet, SchemaConfig};
use roll_table::Permissions;

use super::EntityScreen;

#[must_use]
pub fn screen() -> EntityScreen {
    EntityScreen {
        title: "學生資料",
        path: "students",
        filter_key: "name",
        date_fields: &["date_of_birth", "joined_at"],
        columns: columns(),
        schema: schema(),
        permissions: Permissions::admin_only(),
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::text("name", "姓名"),
        Column::enumeration(
            "gender",
            "性別",
            vec![
                FieldOption::number(0.0, "男性"),
                FieldOption::number(1.0, "女性"),
            ],
        ),
        Column::text("id_number", "身份證字號"),
        Column::date("date_of_birth", "生日"),
        Column::text("school_name", "學校名稱"),
        Column::bool("is_pg", "PG生"),
        Column::text("description", "家庭情況").multiline(),
        Column::text("family_type", "家庭組成"),
        Column::number("family_members", "家庭成員"),
        Column::text("breadwinner", "經濟來源"),
        Column::text("occupation", "職業"),
        Column::text("subsidy", "補助"),
        Column::text("address", "地址"),
        Column::enumeration(
            "home_ownership",
            "居住類型",
            vec![
                FieldOption::number(0.0, "自有"),
                FieldOption::number(1.0, "租賃"),
            ],
        ),
        Column::text("home_phone_number", "市話"),
        Column::text("mobile_phone_number", "手機"),
        Column::text("chinese_book", "國文"),
        Column::text("english_book", "英文"),
        Column::text("math_book", "數學"),
        Column::text("science_book", "自然"),
        Column::text("social_studies_book", "社會"),
        Column::text("line_id", "LINE ID"),
        Column::text("comment", "備註"),
        Column::date("joined_at", "加入時間"),
    ]
}

fn schema() -> SchemaConfig {
    let mut rules = RuleSet::new();
    rules.insert("name".into(), FieldRule::text_min(2, "名稱至少要2個字"));
    rules.insert("id_number".into(), FieldRule::text_len(10, 10, "格式不正確"));
    rules.insert(
        "gender".into(),
        FieldRule::Number {
            message: "請選擇性別".into(),
        },
    );
    rules.insert(
        "date_of_birth".into(),
        FieldRule::NullableDate {
            message: "日期格式不正確".into(),
        },
    );
    rules.insert(
        "is_pg".into(),
        FieldRule::Bool {
            message: "請選擇是否為PG生".into(),
        },
    );
    rules.insert(
        "family_members".into(),
        FieldRule::NullableNumber {
            message: "必須是數字".into(),
        },
    );
    rules.insert(
        "home_ownership".into(),
        FieldRule::NullableNumber {
            message: "請選擇居住類型".into(),
        },
    );
    rules.insert(
        "joined_at".into(),
        FieldRule::Date {
            message: "請選擇加入時間".into(),
        },
    );
    for key in [
        "school_name",
        "description",
        "family_type",
        "breadwinner",
        "occupation",
        "subsidy",
        "address",
        "home_phone_number",
        "mobile_phone_number",
        "chinese_book",
        "english_book",
        "math_book",
        "science_book",
        "social_studies_book",
        "line_id",
        "comment",
    ] {
        rules.insert(key.into(), FieldRule::nullable_text());
    }

    let mut defaults = FieldMap::new();
    defaults.insert("name".into(), FieldValue::Text(String::new()));
    defaults.insert("id_number".into(), FieldValue::Text(String::new()));
    defaults.insert("gender".into(), FieldValue::Number(0.0));
    defaults.insert("is_pg".into(), FieldValue::Bool(false));
    defaults.insert("family_members".into(), FieldValue::Number(0.0));
    defaults.insert(
        "joined_at".into(),
        FieldValue::Date(chrono::Local::now().date_naive()),
    );
    for key in [
        "date_of_birth",
        "school_name",
        "description",
        "family_type",
        "breadwinner",
        "occupation",
        "subsidy",
        "address",
        "home_ownership",
        "home_phone_number",
        "mobile_phone_number",
        "chinese_book",
        "english_book",
        "math_book",
        "science_book",
        "social_studies_book",
        "line_id",
        "comment",
    ] {
        defaults.insert(key.into(), FieldValue::Null);
    }

    SchemaConfig::symmetric(rules, defaults)
}
