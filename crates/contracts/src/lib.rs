//! Shared contracts of the admin console: wire DTOs plus the permission and
//! list-grid core used by every page.

pub mod shared;
pub mod system;
