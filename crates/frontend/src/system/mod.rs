pub mod auth;
pub mod pages;
pub mod records;
pub mod users;
