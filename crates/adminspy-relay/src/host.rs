//! Collaborators supplied by the game host.

use adminspy_common::{Participant, ParticipantId, VoiceRoutingMode};
use adminspy_config::Phrasebook;

/// The host's admin subsystem. Rule identifiers are passed with their
/// prefix (`@css/chat`, `#css/admin`).
pub trait Authorizer {
    fn has_permission_flag(&self, participant: ParticipantId, flag: &str) -> bool;
    fn is_in_group(&self, participant: ParticipantId, group: &str) -> bool;
    fn has_command_override(&self, participant: ParticipantId, command: &str) -> bool;
}

/// Snapshot access to the participants the host currently knows about.
pub trait ParticipantRegistry {
    fn participants(&self) -> Vec<Participant>;

    fn participant(&self, id: ParticipantId) -> Option<Participant> {
        self.participants().into_iter().find(|p| p.id == id)
    }
}

/// Applies a voice-routing mode at the transport layer.
pub trait VoiceSink {
    fn set_voice_mode(&mut self, participant: ParticipantId, mode: VoiceRoutingMode);
}

/// Chat output towards a single participant.
pub trait ChatSink {
    fn print_to_chat(&mut self, participant: ParticipantId, message: &str);
    /// Reply to a console/chat command the participant issued.
    fn reply_to_command(&mut self, participant: ParticipantId, message: &str);
}

/// Renders a phrase by key with positional arguments.
pub trait MessageFormatter {
    fn format(&self, key: &str, args: &[&str]) -> String;
}

impl MessageFormatter for Phrasebook {
    fn format(&self, key: &str, args: &[&str]) -> String {
        Phrasebook::format(self, key, args)
    }
}

/// Everything the engine needs from the host.
pub trait Host: Authorizer + ParticipantRegistry + VoiceSink + ChatSink {}

impl<T> Host for T where T: Authorizer + ParticipantRegistry + VoiceSink + ChatSink {}
