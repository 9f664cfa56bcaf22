//! Authorization rule checks.

use std::collections::HashSet;

use crate::rules::AuthorizationRule;

pub(crate) fn validate_rules(errors: &mut Vec<String>, rules: &[AuthorizationRule]) {
    let mut seen = HashSet::new();

    for (i, rule) in rules.iter().enumerate() {
        let name = format!("admin-permission-flags[{i}]");
        let s = rule.as_str();

        let prefixed = matches!(
            rule,
            AuthorizationRule::PermissionFlag(_) | AuthorizationRule::GroupMembership(_)
        );
        if prefixed && s.len() == 1 {
            errors.push(format!("{name} = '{s}' has a prefix but no name"));
        }
        if s.chars().any(char::is_whitespace) {
            errors.push(format!("{name} = '{s}' contains whitespace"));
        }
        if !seen.insert(s) {
            errors.push(format!("{name} = '{s}' is a duplicate"));
        }
    }
}
