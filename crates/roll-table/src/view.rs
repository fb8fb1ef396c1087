//! Building a renderable [`TableView`] from records + descriptors + state.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use roll_core::{FieldMap, FieldValue};
use roll_schema::{Column, FieldType, display_value};

use crate::permissions::{Permissions, Viewer};

/// Number of placeholder rows shown while a fetch is in flight.
pub const SKELETON_ROWS: usize = 5;

/// Sort direction for the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

/// User-adjustable table state: filter, sort, pagination, and column
/// visibility. Adjusting it never mutates the underlying records.
#[derive(Debug, Clone)]
pub struct TableState {
    /// Field the text filter applies to (a name-like field).
    pub filter_key: String,
    pub filter: String,
    pub sort: Option<(String, SortDir)>,
    pub page: usize,
    pub page_size: usize,
    hidden: BTreeSet<String>,
}

impl TableState {
    #[must_use]
    pub fn new(filter_key: impl Into<String>, page_size: usize) -> Self {
        Self {
            filter_key: filter_key.into(),
            filter: String::new(),
            sort: None,
            page: 0,
            page_size,
            hidden: BTreeSet::new(),
        }
    }

    /// Update the live text filter and jump back to the first page.
    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter = query.into();
        self.page = 0;
    }

    /// Toggle sorting on a column: none → ascending → descending → none.
    pub fn toggle_sort(&mut self, key: &str) {
        self.sort = match self.sort.take() {
            Some((k, SortDir::Asc)) if k == key => Some((k, SortDir::Desc)),
            Some((k, SortDir::Desc)) if k == key => None,
            _ => Some((key.to_string(), SortDir::Asc)),
        };
    }

    /// Toggle one column's visibility.
    pub fn toggle_column(&mut self, key: &str) {
        if !self.hidden.remove(key) {
            self.hidden.insert(key.to_string());
        }
    }

    /// Show every column again.
    pub fn reset_columns(&mut self) {
        self.hidden.clear();
    }

    #[must_use]
    pub fn is_column_visible(&self, key: &str) -> bool {
        !self.hidden.contains(key)
    }
}

/// Actions available on one row. Present only when the viewer can edit the
/// row; a row the viewer cannot edit gets no actions cell at all, even when
/// deletion would be allowed on its own (delete-only rows are not a
/// supported state).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowActions {
    pub can_delete: bool,
}

/// One rendered row: formatted cell text per visible column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: String,
    pub cells: Vec<String>,
    pub actions: Option<RowActions>,
}

/// The rendered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// `(key, label)` per visible column, in descriptor order.
    pub headers: Vec<(String, String)>,
    pub rows: Vec<RowView>,
    /// Row count after filtering (across all pages); drives the visible
    /// "N records" readout.
    pub filtered_count: usize,
    pub page: usize,
    pub page_count: usize,
    /// True while loading: `rows` then holds fixed placeholder rows and no
    /// real data.
    pub skeleton: bool,
}

/// Columns that appear in the table at all: not hidden-by-descriptor, not
/// password-typed, and not toggled off by the user.
fn visible_columns<'a>(columns: &'a [Column], state: &'a TableState) -> Vec<&'a Column> {
    columns
        .iter()
        .filter(|c| !c.hidden && c.field_type != FieldType::Password)
        .filter(|c| state.is_column_visible(&c.key))
        .collect()
}

/// Build the renderable view for one frame.
#[must_use]
pub fn build_view(
    records: &[FieldMap],
    columns: &[Column],
    state: &TableState,
    permissions: &Permissions,
    viewer: &Viewer,
    loading: bool,
) -> TableView {
    let visible = visible_columns(columns, state);
    let headers: Vec<(String, String)> = visible
        .iter()
        .map(|c| (c.key.clone(), c.label.clone()))
        .collect();

    if loading {
        let rows = (0..SKELETON_ROWS)
            .map(|i| RowView {
                id: format!("skeleton-{i}"),
                cells: vec![String::new(); visible.len()],
                actions: None,
            })
            .collect();
        return TableView {
            headers,
            rows,
            filtered_count: 0,
            page: 0,
            page_count: 0,
            skeleton: true,
        };
    }

    let mut filtered: Vec<&FieldMap> = records
        .iter()
        .filter(|record| matches_filter(record, state))
        .collect();

    if let Some((key, dir)) = &state.sort {
        filtered.sort_by(|a, b| {
            let ord = compare_values(
                a.get(key).unwrap_or(&FieldValue::Null),
                b.get(key).unwrap_or(&FieldValue::Null),
            );
            match dir {
                SortDir::Asc => ord,
                SortDir::Desc => ord.reverse(),
            }
        });
    }

    let filtered_count = filtered.len();
    let page_count = filtered_count.div_ceil(state.page_size.max(1));
    let page = state.page.min(page_count.saturating_sub(1));
    let start = page * state.page_size;

    let rows = filtered
        .iter()
        .skip(start)
        .take(state.page_size)
        .map(|record| {
            let cells = visible
                .iter()
                .map(|column| {
                    display_value(
                        column,
                        record.get(&column.key).unwrap_or(&FieldValue::Null),
                    )
                })
                .collect();
            let actions = if (permissions.can_edit)(record, viewer) {
                Some(RowActions {
                    can_delete: (permissions.can_delete)(record, viewer),
                })
            } else {
                None
            };
            RowView {
                id: record
                    .get("id")
                    .and_then(|v| v.as_text())
                    .unwrap_or_default()
                    .to_string(),
                cells,
                actions,
            }
        })
        .collect();

    TableView {
        headers,
        rows,
        filtered_count,
        page,
        page_count,
        skeleton: false,
    }
}

fn matches_filter(record: &FieldMap, state: &TableState) -> bool {
    if state.filter.is_empty() {
        return true;
    }
    let needle = state.filter.to_lowercase();
    record
        .get(&state.filter_key)
        .and_then(|v| v.as_text())
        .is_some_and(|text| text.to_lowercase().contains(&needle))
}

/// Ordering across dynamic values: nulls first, then by type family.
fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    use FieldValue::{Bool, Date, Null, Number, Text};
    match (a, b) {
        (Null, Null) => Ordering::Equal,
        (Null, _) => Ordering::Less,
        (_, Null) => Ordering::Greater,
        (Number(x), Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (Bool(x), Bool(y)) => x.cmp(y),
        (Date(x), Date(y)) => x.cmp(y),
        _ => display_text(a).cmp(&display_text(b)),
    }
}

fn display_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) => s.clone(),
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use roll_core::Role;
    use roll_schema::FieldOption;

    use super::*;

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
            Column::password("password", "密碼"),
            Column::enumeration("student_id", "學生", vec![FieldOption::text("s1", "小明")])
                .hidden(),
        ]
    }

    fn record(id: &str, name: &str, gender: f64) -> FieldMap {
        FieldMap::from([
            ("id".to_string(), FieldValue::Text(id.into())),
            ("name".to_string(), FieldValue::Text(name.into())),
            ("gender".to_string(), FieldValue::Number(gender)),
        ])
    }

    fn admin() -> Viewer {
        Viewer::new("t1", Role::Admin)
    }

    #[test]
    fn password_and_hidden_columns_never_reach_the_table() {
        let state = TableState::new("name", 10);
        let view = build_view(
            &[record("a", "小明", 0.0)],
            &columns(),
            &state,
            &Permissions::admin_only(),
            &admin(),
            false,
        );
        let keys: Vec<&str> = view.headers.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["name", "gender"]);
    }

    #[test]
    fn loading_renders_fixed_skeleton_rows_only() {
        let state = TableState::new("name", 10);
        let view = build_view(
            &[record("a", "小明", 0.0)],
            &columns(),
            &state,
            &Permissions::admin_only(),
            &admin(),
            true,
        );
        assert!(view.skeleton);
        assert_eq!(view.rows.len(), SKELETON_ROWS);
        assert!(view.rows.iter().all(|r| r.actions.is_none()));
        assert!(view.rows.iter().all(|r| r.cells.iter().all(String::is_empty)));
    }

    #[test]
    fn filter_narrows_visible_rows_live() {
        let records = vec![
            record("a", "王小明", 0.0),
            record("b", "陳小美", 1.0),
            record("c", "王大明", 0.0),
        ];
        let mut state = TableState::new("name", 10);
        state.set_filter("王");
        let view = build_view(
            &records,
            &columns(),
            &state,
            &Permissions::admin_only(),
            &admin(),
            false,
        );
        assert_eq!(view.filtered_count, 2);
        assert_eq!(view.rows.len(), 2);
    }

    #[test]
    fn enum_cells_render_labels_and_stale_values_render_empty() {
        let records = vec![record("a", "小明", 1.0), record("b", "小華", 7.0)];
        let state = TableState::new("name", 10);
        let view = build_view(
            &records,
            &columns(),
            &state,
            &Permissions::admin_only(),
            &admin(),
            false,
        );
        assert_eq!(view.rows[0].cells[1], "女性");
        assert_eq!(view.rows[1].cells[1], "");
    }

    #[test]
    fn no_edit_means_no_actions_cell_even_when_delete_would_pass() {
        let permissions = Permissions::new(
            |_, _| false,
            |_, _| true, // delete alone must not surface anything
        );
        let state = TableState::new("name", 10);
        let view = build_view(
            &[record("a", "小明", 0.0)],
            &columns(),
            &state,
            &permissions,
            &admin(),
            false,
        );
        assert_eq!(view.rows[0].actions, None);
    }

    #[test]
    fn edit_with_delete_denied_yields_edit_only_actions() {
        let permissions = Permissions::new(|_, _| true, |_, _| false);
        let state = TableState::new("name", 10);
        let view = build_view(
            &[record("a", "小明", 0.0)],
            &columns(),
            &state,
            &permissions,
            &admin(),
            false,
        );
        assert_eq!(
            view.rows[0].actions,
            Some(RowActions { can_delete: false })
        );
    }

    #[test]
    fn sort_toggles_through_asc_desc_none() {
        let records = vec![
            record("a", "丙", 0.0),
            record("b", "甲", 0.0),
            record("c", "乙", 0.0),
        ];
        let mut state = TableState::new("name", 10);
        state.toggle_sort("name");
        let asc = build_view(
            &records,
            &columns(),
            &state,
            &Permissions::admin_only(),
            &admin(),
            false,
        );
        state.toggle_sort("name");
        let desc = build_view(
            &records,
            &columns(),
            &state,
            &Permissions::admin_only(),
            &admin(),
            false,
        );
        let ascending: Vec<&str> = asc.rows.iter().map(|r| r.cells[0].as_str()).collect();
        let mut reversed = ascending.clone();
        reversed.reverse();
        let descending: Vec<&str> = desc.rows.iter().map(|r| r.cells[0].as_str()).collect();
        assert_eq!(descending, reversed);

        state.toggle_sort("name");
        assert_eq!(state.sort, None);
    }

    #[test]
    fn column_toggle_hides_without_touching_records() {
        let records = vec![record("a", "小明", 0.0)];
        let mut state = TableState::new("name", 10);
        state.toggle_column("gender");
        let view = build_view(
            &records,
            &columns(),
            &state,
            &Permissions::admin_only(),
            &admin(),
            false,
        );
        assert_eq!(view.headers.len(), 1);
        // Source records are untouched.
        assert!(records[0].contains_key("gender"));

        state.reset_columns();
        assert!(state.is_column_visible("gender"));
    }

    #[test]
    fn pagination_slices_after_filter_and_sort() {
        let records: Vec<FieldMap> = (0..7)
            .map(|i| record(&format!("id{i}"), &format!("學生{i}"), 0.0))
            .collect();
        let mut state = TableState::new("name", 3);
        state.page = 2;
        let view = build_view(
            &records,
            &columns(),
            &state,
            &Permissions::admin_only(),
            &admin(),
            false,
        );
        assert_eq!(view.page_count, 3);
        assert_eq!(view.rows.len(), 1);
    }
}
