//! Generic in-memory controller behind every list page.
//!
//! The controller is a pure projection of the fetched records plus a mutable
//! [`GridState`] overlay. It does not own the records: pages keep them and
//! pass them in, so a refetch never has to rebuild the controller.

use super::column::ColumnSpec;
use super::filter::{is_all_option, FilterGroup};
use super::pagination::{page_count, paginate};
use super::record::RecordAccessor;
use super::state::{GridState, SelectionState, SortState};
use std::cmp::Ordering;

/// What a page declares about its records.
pub struct GridSchema<R> {
    pub columns: Vec<ColumnSpec<R>>,
    pub search_keys: Vec<String>,
    pub filter_groups: Vec<FilterGroup>,
    pub accessor: RecordAccessor<R>,
}

impl<R> Clone for GridSchema<R> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            search_keys: self.search_keys.clone(),
            filter_groups: self.filter_groups.clone(),
            accessor: self.accessor,
        }
    }
}

impl<R> std::fmt::Debug for GridSchema<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridSchema")
            .field("columns", &self.columns)
            .field("search_keys", &self.search_keys)
            .field("filter_groups", &self.filter_groups)
            .finish_non_exhaustive()
    }
}

impl<R> GridSchema<R> {
    /// Schema whose search keys default to the column keys.
    pub fn new(accessor: RecordAccessor<R>, columns: Vec<ColumnSpec<R>>) -> Self {
        let search_keys = columns.iter().map(|c| c.key.clone()).collect();
        Self {
            columns,
            search_keys,
            filter_groups: Vec::new(),
            accessor,
        }
    }

    pub fn with_search_keys<S: Into<String>>(mut self, keys: impl IntoIterator<Item = S>) -> Self {
        self.search_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_filter(mut self, group: FilterGroup) -> Self {
        self.filter_groups.push(group);
        self
    }
}

#[derive(Debug, Clone)]
pub struct DataGridController<R> {
    schema: GridSchema<R>,
    state: GridState,
}

impl<R> DataGridController<R> {
    pub fn new(schema: GridSchema<R>) -> Self {
        Self::with_state(schema, GridState::default())
    }

    pub fn with_state(schema: GridSchema<R>, state: GridState) -> Self {
        Self { schema, state }
    }

    pub fn schema(&self) -> &GridSchema<R> {
        &self.schema
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    pub fn accessor(&self) -> RecordAccessor<R> {
        self.schema.accessor
    }

    // ------------------------------------------------------------------
    // search & filters
    // ------------------------------------------------------------------

    /// Updates the search term and returns to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
        self.state.page = 1;
    }

    /// Activates `value` for the group at `group_key`; `"all"` deactivates it.
    /// Keys without a declared filter group are ignored.
    pub fn set_filter(&mut self, group_key: &str, value: &str) {
        if !self.schema.filter_groups.iter().any(|g| g.key == group_key) {
            log::debug!("grid: ignoring undeclared filter group {group_key}");
            return;
        }
        if is_all_option(value) {
            self.state.active_filters.remove(group_key);
        } else {
            self.state
                .active_filters
                .insert(group_key.to_string(), value.to_string());
        }
        self.state.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.state.active_filters.clear();
        self.state.page = 1;
    }

    /// Selected option of a group, `"all"` when inactive.
    pub fn filter_value(&self, group_key: &str) -> &str {
        self.state
            .active_filters
            .get(group_key)
            .map(String::as_str)
            .unwrap_or(super::filter::ALL_OPTION)
    }

    /// Number of declared groups currently narrowing the list.
    pub fn active_filter_count(&self) -> usize {
        self.schema
            .filter_groups
            .iter()
            .filter(|g| !is_all_option(self.filter_value(&g.key)))
            .count()
    }

    /// Search (OR over search keys) AND every active filter group.
    pub fn matches(&self, record: &R) -> bool {
        self.matches_search(record) && self.matches_filters(record)
    }

    fn matches_search(&self, record: &R) -> bool {
        let needle = self.state.search_term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let accessor = &self.schema.accessor;
        self.schema
            .search_keys
            .iter()
            .any(|key| accessor.field(record, key).to_lowercase().contains(&needle))
    }

    fn matches_filters(&self, record: &R) -> bool {
        let accessor = &self.schema.accessor;
        self.schema.filter_groups.iter().all(|group| {
            let selected = self.filter_value(&group.key);
            is_all_option(selected) || accessor.field(record, &group.key) == selected
        })
    }

    /// Records passing search and filters, in their original order.
    pub fn visible<'a>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    // ------------------------------------------------------------------
    // selection
    // ------------------------------------------------------------------

    pub fn toggle_row_selection(&mut self, id: &str) {
        if !self.state.selected_ids.remove(id) {
            self.state.selected_ids.insert(id.to_string());
        }
    }

    /// Replaces the selection with every visible row that has an id.
    pub fn select_all(&mut self, records: &[R]) {
        let accessor = self.schema.accessor;
        let ids = self
            .visible(records)
            .into_iter()
            .map(|r| accessor.id(r))
            .filter(|id| !id.is_empty())
            .collect();
        self.state.selected_ids = ids;
    }

    pub fn clear_selection(&mut self) {
        self.state.selected_ids.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.state.selected_ids.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.state.selected_ids.len()
    }

    /// Header checkbox state relative to the visible rows.
    pub fn selection_state(&self, records: &[R]) -> SelectionState {
        let accessor = self.schema.accessor;
        let ids: Vec<String> = self
            .visible(records)
            .into_iter()
            .map(|r| accessor.id(r))
            .filter(|id| !id.is_empty())
            .collect();
        if ids.is_empty() {
            return SelectionState::None;
        }
        let selected = ids.iter().filter(|id| self.is_selected(id)).count();
        match selected {
            0 => SelectionState::None,
            n if n == ids.len() => SelectionState::All,
            _ => SelectionState::Partial,
        }
    }

    pub fn selected_records<'a>(&self, records: &'a [R]) -> Vec<&'a R> {
        records
            .iter()
            .filter(|r| self.is_selected(&self.schema.accessor.id(r)))
            .collect()
    }

    // ------------------------------------------------------------------
    // paging & sorting
    // ------------------------------------------------------------------

    pub fn set_page(&mut self, page: usize) {
        self.state.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.state.page_size = page_size.max(1);
        self.state.page = 1;
    }

    pub fn total_pages(&self, records: &[R]) -> usize {
        page_count(self.visible(records).len(), self.state.page_size)
    }

    /// Moves back to the last page when the current one ran past the end,
    /// e.g. after rows were deleted.
    pub fn clamp_page(&mut self, records: &[R]) {
        let last = self.total_pages(records).max(1);
        if self.state.page > last {
            self.state.page = last;
        }
    }

    /// Ascending on first click, then flips direction on the same column.
    pub fn toggle_sort(&mut self, key: &str) {
        self.state.sort = match self.state.sort.take() {
            Some(sort) if sort.key == key => Some(SortState {
                key: sort.key,
                ascending: !sort.ascending,
            }),
            _ => Some(SortState {
                key: key.to_string(),
                ascending: true,
            }),
        };
    }

    pub fn clear_sort(&mut self) {
        self.state.sort = None;
    }

    /// Stable sort of `rows` by the active sort column, if any.
    pub fn sorted<'a>(&self, mut rows: Vec<&'a R>) -> Vec<&'a R> {
        if let Some(sort) = &self.state.sort {
            let accessor = &self.schema.accessor;
            let mut keyed: Vec<(SortKey, &'a R)> = rows
                .into_iter()
                .map(|r| (SortKey::of(&accessor.field(r, &sort.key)), r))
                .collect();
            keyed.sort_by(|(a, _), (b, _)| if sort.ascending { a.cmp(b) } else { b.cmp(a) });
            rows = keyed.into_iter().map(|(_, r)| r).collect();
        }
        rows
    }

    /// Rows to render: visible, then sorted, then the current page.
    pub fn page_rows<'a>(&self, records: &'a [R]) -> Vec<&'a R> {
        let rows = self.sorted(self.visible(records));
        paginate(&rows, self.state.page_size, self.state.page).to_vec()
    }
}

/// Sort key of a cell: finite numbers first, then case-insensitive text.
#[derive(Debug, Clone)]
enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    fn of(cell: &str) -> Self {
        match cell.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => SortKey::Number(n),
            _ => SortKey::Text(cell.to_lowercase()),
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::grid::{value_text, ALL_OPTION};
    use serde_json::{json, Value};

    fn schema() -> GridSchema<Value> {
        GridSchema::new(
            RecordAccessor::json(),
            vec![
                ColumnSpec::new("name", "Name"),
                ColumnSpec::new("payment_method.name", "Payment"),
                ColumnSpec::new("status", "Status"),
            ],
        )
        .with_search_keys(["name", "payment_method.name"])
        .with_filter(
            FilterGroup::new("status", "Status", "All")
                .option("active", "Active")
                .option("inactive", "Inactive"),
        )
    }

    fn records() -> Vec<Value> {
        vec![
            json!({"id": 1, "status": "active", "name": "A"}),
            json!({"id": 2, "status": "inactive", "name": "B"}),
        ]
    }

    fn ids(rows: &[&Value]) -> Vec<i64> {
        rows.iter().map(|r| r["id"].as_i64().unwrap_or(-1)).collect()
    }

    #[test]
    fn test_no_search_no_filters_returns_everything_in_order() {
        let data: Vec<Value> = (0..30).rev().map(|i| json!({"id": i, "name": format!("n{i}")})).collect();
        let grid = DataGridController::new(schema());
        let visible = grid.visible(&data);
        assert_eq!(visible.len(), 30);
        assert!(visible.iter().zip(&data).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_status_filter_scenario() {
        let data = records();
        let mut grid = DataGridController::new(schema());
        grid.set_filter("status", "active");
        assert_eq!(ids(&grid.visible(&data)), vec![1]);
        assert_eq!(grid.active_filter_count(), 1);

        grid.set_filter("status", ALL_OPTION);
        assert_eq!(ids(&grid.visible(&data)), vec![1, 2]);
        assert_eq!(grid.active_filter_count(), 0);
        assert!(grid.state().active_filters.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_and_ored_over_keys() {
        let data = vec![
            json!({"id": 1, "name": "Alpha", "payment_method": {"name": "Cash"}}),
            json!({"id": 2, "name": "Beta", "payment_method": {"name": "CARD"}}),
            json!({"id": 3, "name": "Gamma"}),
        ];
        let mut grid = DataGridController::new(schema());

        grid.set_search_term("card");
        assert_eq!(ids(&grid.visible(&data)), vec![2]);

        grid.set_search_term("A");
        assert_eq!(ids(&grid.visible(&data)), vec![1, 2, 3]);

        grid.set_search_term("ash");
        assert_eq!(ids(&grid.visible(&data)), vec![1]);

        grid.set_search_term("   ");
        assert_eq!(grid.visible(&data).len(), 3);
    }

    #[test]
    fn test_search_and_filters_are_anded() {
        let data = vec![
            json!({"id": 1, "name": "Anna", "status": "active"}),
            json!({"id": 2, "name": "Anton", "status": "inactive"}),
            json!({"id": 3, "name": "Boris", "status": "active"}),
        ];
        let mut grid = DataGridController::new(schema());
        grid.set_search_term("an");
        grid.set_filter("status", "active");
        assert_eq!(ids(&grid.visible(&data)), vec![1]);
    }

    #[test]
    fn test_filter_on_missing_field_never_matches_and_never_panics() {
        let data = vec![json!({"id": 1}), json!("not an object"), json!(null)];
        let mut grid = DataGridController::new(schema());
        grid.set_search_term("x");
        assert!(grid.visible(&data).is_empty());
        grid.set_search_term("");
        grid.set_filter("status", "active");
        assert!(grid.visible(&data).is_empty());
    }

    #[test]
    fn test_visible_is_idempotent() {
        let data = vec![
            json!({"id": 1, "name": "Anna", "status": "active"}),
            json!({"id": 2, "name": "Anton", "status": "inactive"}),
            json!({"id": 3, "name": "Boris", "status": "active"}),
        ];
        let mut grid = DataGridController::new(schema());
        grid.set_search_term("n");
        grid.set_filter("status", "active");

        let once: Vec<Value> = grid.visible(&data).into_iter().cloned().collect();
        let twice: Vec<Value> = grid.visible(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_search_does_not_touch_selection() {
        let data = records();
        let mut grid = DataGridController::new(schema());
        grid.toggle_row_selection("2");
        grid.set_search_term("A");
        grid.set_filter("status", "active");
        assert!(grid.is_selected("2"));
        assert_eq!(grid.selected_count(), 1);
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut grid = DataGridController::<Value>::new(schema());
        grid.toggle_row_selection("1");
        let before = grid.state().selected_ids.clone();

        grid.toggle_row_selection("7");
        grid.toggle_row_selection("7");
        assert_eq!(grid.state().selected_ids, before);

        grid.toggle_row_selection("1");
        grid.toggle_row_selection("1");
        assert_eq!(grid.state().selected_ids, before);
    }

    #[test]
    fn test_select_all_takes_visible_ids_and_clear_empties() {
        let data = vec![
            json!({"id": 1, "status": "active"}),
            json!({"id": 2, "status": "inactive"}),
            json!({"id": 3, "status": "active"}),
            json!({"status": "active"}),
        ];
        let mut grid = DataGridController::new(schema());
        grid.toggle_row_selection("2");
        grid.set_filter("status", "active");
        grid.select_all(&data);

        let mut selected: Vec<&str> = grid.state().selected_ids.iter().map(String::as_str).collect();
        selected.sort();
        assert_eq!(selected, vec!["1", "3"]);
        assert_eq!(grid.selection_state(&data), SelectionState::All);

        grid.clear_selection();
        assert!(grid.state().selected_ids.is_empty());
        assert_eq!(grid.selection_state(&data), SelectionState::None);
    }

    #[test]
    fn test_selection_state_partial() {
        let data = records();
        let mut grid = DataGridController::new(schema());
        grid.toggle_row_selection("1");
        assert_eq!(grid.selection_state(&data), SelectionState::Partial);
        assert_eq!(ids(&grid.selected_records(&data)), vec![1]);
    }

    #[test]
    fn test_page_rows_and_reset_on_search() {
        let data: Vec<Value> = (1..=25).map(|i| json!({"id": i, "name": format!("row {i}")})).collect();
        let mut grid = DataGridController::new(schema());
        grid.set_page_size(10);
        grid.set_page(3);
        assert_eq!(ids(&grid.page_rows(&data)), (21..=25).collect::<Vec<_>>());
        assert_eq!(grid.total_pages(&data), 3);

        grid.set_page(10);
        assert!(grid.page_rows(&data).is_empty());
        grid.clamp_page(&data);
        assert_eq!(grid.state().page, 3);

        grid.set_page(7);
        grid.clamp_page(&[]);
        assert_eq!(grid.state().page, 1);

        grid.set_search_term("row 1");
        assert_eq!(grid.state().page, 1);
        // "row 1", "row 10".."row 19"
        assert_eq!(grid.visible(&data).len(), 11);
        assert_eq!(grid.total_pages(&data), 2);
    }

    #[test]
    fn test_sort_numeric_and_text() {
        let data = vec![
            json!({"id": 1, "name": "beta", "price": 10}),
            json!({"id": 2, "name": "Alpha", "price": 9}),
            json!({"id": 3, "name": "gamma", "price": 100}),
        ];
        let mut grid = DataGridController::new(schema());

        grid.toggle_sort("price");
        assert_eq!(ids(&grid.page_rows(&data)), vec![2, 1, 3]);
        grid.toggle_sort("price");
        assert_eq!(ids(&grid.page_rows(&data)), vec![3, 1, 2]);

        grid.toggle_sort("name");
        assert_eq!(ids(&grid.page_rows(&data)), vec![2, 1, 3]);

        // sorting never changes the visible projection
        assert_eq!(ids(&grid.visible(&data)), vec![1, 2, 3]);

        grid.clear_sort();
        assert_eq!(ids(&grid.page_rows(&data)), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_mixed_cells_orders_numbers_before_text() {
        let cells = ["5", "3a", "55", "NaN", "12", "inf", "b7", "-1", "10"];
        let data: Vec<Value> = (0..300)
            .map(|i| json!({"id": i, "n": cells[i % cells.len()]}))
            .collect();
        let mut grid = DataGridController::new(schema());
        grid.toggle_sort("n");

        let sorted = grid.sorted(grid.visible(&data));
        assert_eq!(sorted.len(), data.len());
        let keys: Vec<SortKey> = sorted.iter().map(|r| SortKey::of(&value_text(&r["n"]))).collect();
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(value_text(&sorted[0]["n"]), "-1");
        assert_eq!(value_text(&sorted[data.len() - 1]["n"]), "NaN");

        grid.toggle_sort("n");
        let desc = grid.sorted(grid.visible(&data));
        let keys: Vec<SortKey> = desc.iter().map(|r| SortKey::of(&value_text(&r["n"]))).collect();
        assert!(keys.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_set_filter_ignores_undeclared_groups() {
        let data = records();
        let mut grid = DataGridController::new(schema());
        grid.set_page(2);

        grid.set_filter("role", "admin");
        assert!(grid.state().active_filters.is_empty());
        assert_eq!(grid.state().page, 2);
        assert_eq!(grid.visible(&data).len(), data.len());

        grid.set_filter("status", "active");
        assert_eq!(grid.state().active_filters.len(), 1);
        assert_eq!(grid.active_filter_count(), 1);
    }
}
