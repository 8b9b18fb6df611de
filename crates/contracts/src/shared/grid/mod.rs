//! Schema-agnostic list grid: search, filters, selection, paging.

pub mod column;
pub mod controller;
pub mod filter;
pub mod pagination;
pub mod record;
pub mod state;

pub use column::ColumnSpec;
pub use controller::{DataGridController, GridSchema};
pub use filter::{is_all_option, FilterGroup, FilterOption, ALL_OPTION};
pub use pagination::{page_count, paginate};
pub use record::{field_text, resolve_path, value_text, RecordAccessor};
pub use state::{GridState, SelectionState, SortState, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
