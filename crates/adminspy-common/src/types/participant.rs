use serde::{Deserialize, Serialize};
use std::fmt;

/// Session handle the host assigns to a connected client (its player slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantId(pub u32);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Team affiliation as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    /// Team A.
    Terrorist,
    /// Team B.
    CounterTerrorist,
    Spectator,
    #[default]
    Unassigned,
}

/// Which voice streams a participant hears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VoiceRoutingMode {
    /// Only teammates. This is also the host default.
    #[default]
    TeamOnly,
    /// Every team, opponents included.
    All,
}

impl VoiceRoutingMode {
    pub fn toggled(self) -> Self {
        match self {
            VoiceRoutingMode::TeamOnly => VoiceRoutingMode::All,
            VoiceRoutingMode::All => VoiceRoutingMode::TeamOnly,
        }
    }
}

impl fmt::Display for VoiceRoutingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoiceRoutingMode::TeamOnly => f.write_str("team-only"),
            VoiceRoutingMode::All => f.write_str("all"),
        }
    }
}

/// Immutable snapshot of a participant, taken from the host registry right
/// before a decision is made. Nothing here is a live handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub team: Team,
    pub alive: bool,
    pub connected: bool,
    /// Host entity (controller and pawn) still resolves.
    pub valid: bool,
    pub bot: bool,
    /// Broadcast-only pseudo participant (SourceTV and friends).
    pub observer: bool,
}

impl Participant {
    pub fn new(id: ParticipantId, name: impl Into<String>, team: Team) -> Self {
        Self {
            id,
            name: name.into(),
            team,
            alive: true,
            connected: true,
            valid: true,
            bot: false,
            observer: false,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected && self.valid
    }

    /// A connected, real player: not a bot and not a broadcast observer.
    pub fn is_human(&self) -> bool {
        self.is_connected() && !self.bot && !self.observer
    }
}
