use super::action::{Action, Permission};
use super::composite_key;
use super::grant_index::GrantIndex;
use serde_json::Value;
use std::sync::Arc;

/// Answers "may this session perform action X on module Y".
///
/// Advisory only: it decides which affordances the console renders, the server
/// remains the authority. Every failure to obtain evidence of a grant results
/// in a denial, including a missing or corrupt grant list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessEvaluator {
    index: Arc<GrantIndex>,
    fail_closed: bool,
}

impl AccessEvaluator {
    pub fn new(index: GrantIndex) -> Self {
        Self {
            index: Arc::new(index),
            fail_closed: false,
        }
    }

    /// Evaluator that denies every check.
    pub fn deny_all() -> Self {
        Self {
            index: Arc::new(GrantIndex::default()),
            fail_closed: true,
        }
    }

    /// Builds an evaluator from the raw grant list kept in session storage.
    ///
    /// A missing source, invalid JSON or a non-array payload produces
    /// [`AccessEvaluator::deny_all`] and a single warning.
    pub fn from_grant_source(source: Option<&str>) -> Self {
        let Some(source) = source else {
            log::warn!("access: no grant list in session, denying all permissions");
            return Self::deny_all();
        };
        match GrantIndex::from_json(source) {
            Ok(index) => Self::new(index),
            Err(e) => {
                log::warn!("access: {}, denying all permissions", e);
                Self::deny_all()
            }
        }
    }

    /// Same as [`AccessEvaluator::from_grant_source`] for an already parsed payload.
    pub fn from_grant_value(value: &Value) -> Self {
        match GrantIndex::from_value(value) {
            Ok(index) => Self::new(index),
            Err(e) => {
                log::warn!("access: {}, denying all permissions", e);
                Self::deny_all()
            }
        }
    }

    pub fn can_perform(&self, module: &str, action: &str) -> bool {
        self.index.query(module, action)
    }

    pub fn can(&self, permission: &Permission) -> bool {
        self.can_perform(&permission.module, permission.action.as_str())
    }

    pub fn can_view(&self, module: &str) -> bool {
        self.can_perform(module, Action::View.as_str())
    }

    /// Legacy entry point for keys like `"Admin RoleDelete"`.
    pub fn can_perform_from_composite_key(&self, composite_key: &str) -> bool {
        match composite_key::parse_strict(composite_key) {
            Ok(permission) => self.can(&permission),
            Err(e) => {
                log::debug!("access: {}", e);
                false
            }
        }
    }

    /// True when the evaluator was built without usable grant data.
    pub fn is_fail_closed(&self) -> bool {
        self.fail_closed
    }

    pub fn index(&self) -> &GrantIndex {
        &self.index
    }
}

impl Default for AccessEvaluator {
    fn default() -> Self {
        Self::deny_all()
    }
}

#[cfg(test)]
mod tests {
    use super::super::grant_index::Grant;
    use super::*;
    use serde_json::json;

    fn evaluator(grants: &[Grant]) -> AccessEvaluator {
        AccessEvaluator::new(GrantIndex::build(grants))
    }

    #[test]
    fn test_composite_key_scenario() {
        let eval = evaluator(&[Grant::new("Admin Role", "edit")]);
        assert!(eval.can_perform_from_composite_key("Admin RoleEdit"));
        assert!(!eval.can_perform_from_composite_key("Admin RoleDelete"));
    }

    #[test]
    fn test_unparseable_composite_key_is_denied_even_with_wildcard() {
        let eval = evaluator(&[Grant::new("Admin Role", "all")]);
        assert!(eval.can_perform_from_composite_key("Admin RoleStatus"));
        assert!(!eval.can_perform_from_composite_key("Admin RoleExport"));
        assert!(!eval.can_perform_from_composite_key("Admin Role"));
    }

    #[test]
    fn test_wildcard_module_allows_any_action() {
        let eval = evaluator(&[Grant::new("X", "all")]);
        for action in Action::ALL {
            assert!(eval.can(&Permission::new("X", action)));
        }
        assert!(eval.can_perform("X", "publish"));
    }

    #[test]
    fn test_module_not_in_grants_is_denied() {
        let eval = evaluator(&[Grant::new("Y", "all"), Grant::new("Z", "view")]);
        for action in ["add", "edit", "delete", "status", "view", "all"] {
            assert!(!eval.can_perform("X", action));
        }
    }

    #[test]
    fn test_null_source_fails_closed() {
        let eval = AccessEvaluator::from_grant_source(Some("null"));
        assert!(eval.is_fail_closed());
        assert!(!eval.can_perform("Users", "view"));
        assert!(!eval.can_perform_from_composite_key("UsersView"));

        let eval = AccessEvaluator::from_grant_value(&Value::Null);
        assert!(eval.is_fail_closed());
        assert!(!eval.can_view("Users"));
    }

    #[test]
    fn test_missing_or_corrupt_source_fails_closed() {
        for source in [None, Some(""), Some("{not json"), Some("\"Users\"")] {
            let eval = AccessEvaluator::from_grant_source(source);
            assert!(eval.is_fail_closed(), "source {source:?}");
            assert!(!eval.can_perform("Users", "view"));
        }
    }

    #[test]
    fn test_valid_source_is_not_fail_closed() {
        let eval = AccessEvaluator::from_grant_value(&json!([
            {"module": "Users", "action": "view"}
        ]));
        assert!(!eval.is_fail_closed());
        assert!(eval.can_view("Users"));
        assert!(!eval.can_perform("Users", "edit"));
    }
}
