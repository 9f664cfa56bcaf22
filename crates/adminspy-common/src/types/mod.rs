mod participant;

pub use participant::{Participant, ParticipantId, Team, VoiceRoutingMode};
