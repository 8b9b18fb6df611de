//! Single choke point between list UI and the access evaluator.
//!
//! Row and toolbar components ask the gate which affordances to render; they
//! never query the evaluator themselves and never look at record fields to
//! guess permissions.

use crate::shared::access::{AccessEvaluator, Action};

/// Affordances enabled on one row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowActions {
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_toggle_status: bool,
    pub can_view: bool,
}

impl RowActions {
    pub fn any(&self) -> bool {
        self.can_edit || self.can_delete || self.can_toggle_status || self.can_view
    }
}

/// Affordances enabled in the page toolbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageActions {
    pub can_add: bool,
    /// delete permission and a non-empty selection
    pub can_delete_selected: bool,
}

/// Row flags for `record` on `module_key`.
///
/// The record is accepted for call-site symmetry only; flags depend on the
/// session's grants alone.
pub fn row_actions<R>(_record: &R, evaluator: &AccessEvaluator, module_key: &str) -> RowActions {
    RowActions {
        can_edit: evaluator.can_perform(module_key, Action::Edit.as_str()),
        can_delete: evaluator.can_perform(module_key, Action::Delete.as_str()),
        can_toggle_status: evaluator.can_perform(module_key, Action::Status.as_str()),
        can_view: evaluator.can_perform(module_key, Action::View.as_str()),
    }
}

pub fn page_actions(evaluator: &AccessEvaluator, module_key: &str, selected_count: usize) -> PageActions {
    PageActions {
        can_add: evaluator.can_perform(module_key, Action::Add.as_str()),
        can_delete_selected: selected_count > 0
            && evaluator.can_perform(module_key, Action::Delete.as_str()),
    }
}

/// Gate bound to one module, cheap to clone into UI closures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionGate {
    evaluator: AccessEvaluator,
    module_key: String,
}

impl ActionGate {
    pub fn new(evaluator: AccessEvaluator, module_key: impl Into<String>) -> Self {
        Self {
            evaluator,
            module_key: module_key.into(),
        }
    }

    pub fn module_key(&self) -> &str {
        &self.module_key
    }

    pub fn row<R>(&self, record: &R) -> RowActions {
        row_actions(record, &self.evaluator, &self.module_key)
    }

    /// Row flags without a concrete record, for column headers.
    pub fn module_actions(&self) -> RowActions {
        row_actions(&(), &self.evaluator, &self.module_key)
    }

    pub fn page(&self, selected_count: usize) -> PageActions {
        page_actions(&self.evaluator, &self.module_key, selected_count)
    }

    pub fn can_open(&self) -> bool {
        self.evaluator.can_view(&self.module_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::access::{Grant, GrantIndex};
    use serde_json::json;

    fn gate(grants: &[Grant], module: &str) -> ActionGate {
        ActionGate::new(AccessEvaluator::new(GrantIndex::build(grants)), module)
    }

    #[test]
    fn test_row_actions_follow_grants() {
        let gate = gate(
            &[Grant::new("Gallery", "edit"), Grant::new("Gallery", "status")],
            "Gallery",
        );
        let record = json!({"id": 1, "status": "active"});
        assert_eq!(
            gate.row(&record),
            RowActions {
                can_edit: true,
                can_delete: false,
                can_toggle_status: true,
                can_view: false,
            }
        );
    }

    #[test]
    fn test_wildcard_enables_everything() {
        let gate = gate(&[Grant::new("Admin Role", "all")], "Admin Role");
        let actions = gate.row(&json!({}));
        assert!(actions.can_edit && actions.can_delete && actions.can_toggle_status && actions.can_view);
        assert_eq!(
            gate.page(2),
            PageActions {
                can_add: true,
                can_delete_selected: true
            }
        );
        assert!(!gate.page(0).can_delete_selected);
        assert_eq!(gate.module_actions(), actions);
    }

    #[test]
    fn test_record_fields_do_not_grant_anything() {
        let gate = gate(&[], "Users");
        let record = json!({"id": 1, "can_edit": true, "permissions": ["all"]});
        assert_eq!(gate.row(&record), RowActions::default());
        assert!(!gate.row(&record).any());
        assert!(!gate.can_open());
    }

    #[test]
    fn test_fail_closed_evaluator_disables_all_affordances() {
        let evaluator = AccessEvaluator::from_grant_source(None);
        assert_eq!(row_actions(&(), &evaluator, "Users"), RowActions::default());
        assert_eq!(page_actions(&evaluator, "Users", 5), PageActions::default());
    }
}
