//! Session permissions: grant index, evaluator and the legacy key adapter.

pub mod action;
pub mod composite_key;
pub mod error;
pub mod evaluator;
pub mod grant_index;

pub use action::{Action, Permission, WILDCARD_ACTION};
pub use error::AccessError;
pub use evaluator::AccessEvaluator;
pub use grant_index::{Grant, GrantIndex};
