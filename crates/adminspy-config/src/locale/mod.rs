//! Localization phrasebook and chat color tokens.
//!
//! Phrases are looked up by symbolic key. Templates carry positional
//! placeholders (`{0}`, `{1}`, ...) and color tokens (`{Green}`), both
//! expanded in a single pass so argument text is never re-scanned.

mod colors;
mod phrasebook;


pub use colors::ChatColor;
pub use phrasebook::Phrasebook;

/// Phrase keys the relay engine renders.
pub mod keys {
    pub const TAG: &str = "startline.tag";
    pub const TEAM_TERRORIST: &str = "team.terrorist";
    pub const TEAM_COUNTER_TERRORIST: &str = "team.counterterrorist";
    pub const TEAM_SPECTATOR: &str = "team.spectator";
    pub const PLAYER_DEAD: &str = "player.isdead";
    pub const MESSAGE_FORMATTED: &str = "message.formatted";
    pub const VOICE_LISTEN_ALL: &str = "voice.set_listen_all";
    pub const VOICE_TEAM_ONLY: &str = "voice.set_team_only";
}
