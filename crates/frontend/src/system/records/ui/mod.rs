pub mod editor;
pub mod list;

pub use editor::RecordEditor;
pub use list::RecordListPage;
