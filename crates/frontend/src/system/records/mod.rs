//! List pages over untyped JSON records.

pub mod api;
pub mod resources;
pub mod ui;
