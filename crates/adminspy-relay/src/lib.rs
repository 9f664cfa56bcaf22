//! Admin relay policy engine.
//!
//! Decides, for each team chat line, which privileged participants on
//! other teams get a copy, and tracks each participant's voice-routing
//! mode. Everything host-specific (who is connected, admin lookups,
//! delivering chat, applying voice flags) sits behind the traits in
//! [`host`]. The engine runs on the host's event thread and never blocks
//! or spawns.

pub mod chat;
pub mod engine;
pub mod host;
pub mod permission;
pub mod voice;

#[cfg(test)]
mod test_support;

pub use chat::{accepts_line, is_command, relay_chat, ChatRelay, COMMAND_PREFIXES};
pub use engine::{EngineOutcome, RelayEngine};
pub use host::{Authorizer, ChatSink, Host, MessageFormatter, ParticipantRegistry, VoiceSink};
pub use permission::is_privileged;
pub use voice::{VoiceRouter, VoiceTransition};
