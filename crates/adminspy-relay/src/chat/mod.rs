//! Team chat relay.
//!
//! A team chat line is copied to privileged participants on other teams,
//! so admins can read what the opposing side says among itself. Admins on
//! the sender's own team already see the line and are skipped.

mod format;
mod relay;


pub use format::{compose_relay_line, team_label_key};
pub use relay::{accepts_line, is_command, relay_chat, ChatRelay, COMMAND_PREFIXES};
