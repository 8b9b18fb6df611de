//! Adapter for the legacy `<Module><Action>` permission key convention.
//!
//! Older pages identify a permission with one string such as
//! `"Admin RoleDelete"`. The suffix must be one of the action words
//! (`Add`, `Edit`, `Delete`, `Status`, `View`, any case); everything before it
//! is the module. A key without a known suffix, or with nothing in front of
//! it, does not parse.
//!
//! Known ambiguity: a module whose own name ends in an action word (say a
//! module literally called `"Quick Edit"`) cannot be told apart from that
//! module's prefix plus an action, so `"Quick Edit"` parses as
//! `("Quick ", Edit)`. Such modules must be addressed through [`Permission`]
//! directly.

use super::action::{Action, Permission};
use super::error::AccessError;

/// Splits a composite key into a typed permission.
pub fn parse_composite_key(key: &str) -> Option<Permission> {
    parse_strict(key).ok()
}

/// Same as [`parse_composite_key`] but reports why parsing failed.
pub fn parse_strict(key: &str) -> Result<Permission, AccessError> {
    let unparseable = || AccessError::UnparseableCompositeKey(key.to_string());

    let trimmed = key.trim_end();
    let (split_at, action) = Action::ALL
        .into_iter()
        .filter_map(|action| suffix_start(trimmed, action.as_str()).map(|at| (at, action)))
        // longest suffix wins
        .min_by_key(|(at, _)| *at)
        .ok_or_else(unparseable)?;

    let module = trimmed[..split_at].trim();
    if module.is_empty() {
        return Err(unparseable());
    }
    Ok(Permission::new(module, action))
}

/// Byte offset where `word` starts if `key` ends with it, ignoring ASCII case.
fn suffix_start(key: &str, word: &str) -> Option<usize> {
    let at = key.len().checked_sub(word.len())?;
    if !key.is_char_boundary(at) {
        return None;
    }
    key[at..].eq_ignore_ascii_case(word).then_some(at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_module_with_spaces() {
        assert_eq!(
            parse_composite_key("Admin RoleDelete"),
            Some(Permission::new("Admin Role", Action::Delete))
        );
        assert_eq!(
            parse_composite_key("GalleryStatus"),
            Some(Permission::new("Gallery", Action::Status))
        );
    }

    #[test]
    fn test_suffix_is_case_insensitive() {
        assert_eq!(
            parse_composite_key("Usersview"),
            Some(Permission::new("Users", Action::View))
        );
        assert_eq!(
            parse_composite_key("Users ADD"),
            Some(Permission::new("Users", Action::Add))
        );
    }

    #[test]
    fn test_unknown_suffix_does_not_parse() {
        assert_eq!(parse_composite_key("UsersExport"), None);
        assert_eq!(
            parse_strict("Users"),
            Err(AccessError::UnparseableCompositeKey("Users".to_string()))
        );
    }

    #[test]
    fn test_bare_action_does_not_parse() {
        assert_eq!(parse_composite_key("Edit"), None);
        assert_eq!(parse_composite_key("  View"), None);
        assert_eq!(parse_composite_key(""), None);
    }

    #[test]
    fn test_non_ascii_module_names() {
        assert_eq!(
            parse_composite_key("ГалереяEdit"),
            Some(Permission::new("Галерея", Action::Edit))
        );
        assert_eq!(parse_composite_key("Галерея"), None);
    }

    #[test]
    fn test_module_ending_in_action_word_is_split() {
        // documented ambiguity: the trailing word is always read as the action
        assert_eq!(
            parse_composite_key("Quick EditView"),
            Some(Permission::new("Quick Edit", Action::View))
        );
        assert_eq!(
            parse_composite_key("Quick Edit"),
            Some(Permission::new("Quick", Action::Edit))
        );
    }
}
