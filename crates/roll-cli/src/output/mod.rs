//! Output rendering for command handlers.

use serde::Serialize;
use serde_json::Value as Json;

use roll_core::FieldMap;
use roll_table::TableView;

pub mod table;

/// Print a serializable value as pretty JSON.
pub fn output_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a rendered table view, including the actions column and the
/// record-count footer.
pub fn print_table_view(view: &TableView) {
    let mut headers: Vec<String> = view.headers.iter().map(|(_, label)| label.clone()).collect();
    headers.push("操作".to_string());

    let rows: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|row| {
            let mut cells = row.cells.clone();
            cells.push(actions_cell(row.actions.as_ref()));
            cells
        })
        .collect();

    println!("{}", table::render_table(&headers, &rows));
    if view.skeleton {
        println!("載入中…");
    } else {
        println!(
            "共 {} 筆，第 {}/{} 頁",
            view.filtered_count,
            view.page + 1,
            view.page_count.max(1)
        );
    }
}

fn actions_cell(actions: Option<&roll_table::RowActions>) -> String {
    match actions {
        Some(a) if a.can_delete => "編輯 刪除".to_string(),
        Some(_) => "編輯".to_string(),
        None => String::new(),
    }
}

/// Records as a JSON array, for `--format json` listings.
#[must_use]
pub fn records_to_json(records: &[FieldMap]) -> Json {
    Json::Array(records.iter().map(record_to_json).collect())
}

/// One record as a JSON object.
#[must_use]
pub fn record_to_json(record: &FieldMap) -> Json {
    Json::Object(
        record
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use roll_core::FieldValue;
    use roll_table::RowActions;

    use super::*;

    #[test]
    fn actions_cell_reflects_permissions() {
        assert_eq!(actions_cell(None), "");
        assert_eq!(actions_cell(Some(&RowActions { can_delete: false })), "編輯");
        assert_eq!(
            actions_cell(Some(&RowActions { can_delete: true })),
            "編輯 刪除"
        );
    }

    #[test]
    fn records_to_json_preserves_values() {
        let record = FieldMap::from([
            ("id".to_string(), FieldValue::Text("s1".into())),
            ("score".to_string(), FieldValue::Number(88.0)),
        ]);
        let json = records_to_json(&[record]);
        assert_eq!(json, serde_json::json!([{"id": "s1", "score": 88.0}]));
    }
}
