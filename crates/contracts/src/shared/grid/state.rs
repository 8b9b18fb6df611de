use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub const DEFAULT_PAGE_SIZE: usize = 50;
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [25, 50, 100];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: String,
    pub ascending: bool,
}

/// Per-page grid overlay: search, filters, selection, paging and sort.
///
/// Owned by exactly one list page and discarded with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridState {
    pub search_term: String,
    /// group key → selected option value; groups at `"all"` are absent
    pub active_filters: HashMap<String, String>,
    pub selected_ids: HashSet<String>,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
    pub sort: Option<SortState>,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            active_filters: HashMap::new(),
            selected_ids: HashSet::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort: None,
        }
    }
}

/// Tri-state of the "select all" header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    None,
    Partial,
    All,
}
