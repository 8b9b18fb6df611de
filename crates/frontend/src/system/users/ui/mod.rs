pub mod list;

pub use list::UsersListPage;
