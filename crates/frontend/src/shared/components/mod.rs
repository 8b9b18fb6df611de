pub mod data_grid;
pub mod filter_panel;
pub mod page_header;
pub mod pagination_controls;
pub mod table;
pub mod ui;

pub use data_grid::DataGrid;
pub use filter_panel::{FilterPanel, FilterSelect, FilterTag};
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
