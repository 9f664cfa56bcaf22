//! Privilege checks against the configured authorization rules.

use adminspy_common::Participant;
use adminspy_config::AuthorizationRule;

use crate::host::Authorizer;

/// `true` if any rule matches `participant`.
///
/// Evaluated fresh on every call, since admins can be added or removed
/// while the session runs. Every rule is checked even after a match. An
/// empty rule list is never privileged.
pub fn is_privileged<A>(auth: &A, participant: &Participant, rules: &[AuthorizationRule]) -> bool
where
    A: Authorizer + ?Sized,
{
    rules
        .iter()
        .map(|rule| rule_matches(auth, participant, rule))
        .fold(false, |privileged, matched| privileged | matched)
}

fn rule_matches<A>(auth: &A, participant: &Participant, rule: &AuthorizationRule) -> bool
where
    A: Authorizer + ?Sized,
{
    match rule {
        AuthorizationRule::PermissionFlag(flag) => auth.has_permission_flag(participant.id, flag),
        AuthorizationRule::GroupMembership(group) => auth.is_in_group(participant.id, group),
        AuthorizationRule::CommandOverride(command) => {
            auth.has_command_override(participant.id, command)
        }
    }
}
