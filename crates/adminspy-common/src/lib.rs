pub mod errors;
pub mod events;
pub mod logging;
pub mod types;

pub use errors::ConfigError;
pub use events::HostEvent;
pub use logging::init_logging;
pub use types::{Participant, ParticipantId, Team, VoiceRoutingMode};
