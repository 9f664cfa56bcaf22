//! Observer selection for a single chat line.

use adminspy_common::{Participant, ParticipantId};
use adminspy_config::SessionConfig;
use serde::Serialize;

use super::format::compose_relay_line;
use crate::host::{Authorizer, MessageFormatter};
use crate::permission::is_privileged;

/// Lines starting with one of these are commands, handled elsewhere.
pub const COMMAND_PREFIXES: [char; 3] = ['/', '!', '@'];

/// A rendered line and who should receive it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRelay {
    pub message: String,
    pub recipients: Vec<ParticipantId>,
}

/// Only the first non-blank character decides.
pub fn is_command(text: &str) -> bool {
    text.trim_start()
        .chars()
        .next()
        .is_some_and(|c| COMMAND_PREFIXES.contains(&c))
}

/// Whether a line is relay material at all, before looking at who sent it.
pub fn accepts_line(config: &SessionConfig, text: &str) -> bool {
    config.chat_relay_enabled && !text.trim().is_empty() && !is_command(text)
}

/// Decide who gets a copy of `sender`'s team chat line.
///
/// Returns `None` when nothing should be relayed: relay disabled, no or
/// disconnected sender, blank text, a command, or no eligible observer.
/// Recipients follow `participants` order.
pub fn relay_chat<A, F>(
    config: &SessionConfig,
    sender: Option<&Participant>,
    text: &str,
    participants: &[Participant],
    auth: &A,
    formatter: &F,
) -> Option<ChatRelay>
where
    A: Authorizer + ?Sized,
    F: MessageFormatter + ?Sized,
{
    if !accepts_line(config, text) {
        return None;
    }
    let sender = sender.filter(|s| s.is_connected())?;

    let recipients: Vec<ParticipantId> = participants
        .iter()
        .filter(|p| p.is_human() && p.id != sender.id && p.team != sender.team)
        .filter(|p| is_privileged(auth, p, &config.rules))
        .map(|p| p.id)
        .collect();

    if recipients.is_empty() {
        return None;
    }

    Some(ChatRelay {
        message: compose_relay_line(formatter, sender, text),
        recipients,
    })
}
