//! Rendering of the relayed chat line.

use adminspy_common::{Participant, Team};
use adminspy_config::locale::keys;
use adminspy_config::ChatColor;

use crate::host::MessageFormatter;

/// Phrase key for the team label shown in front of the sender's name.
/// Anything that is not one of the two playing teams gets the spectator label.
pub fn team_label_key(team: Team) -> &'static str {
    match team {
        Team::Terrorist => keys::TEAM_TERRORIST,
        Team::CounterTerrorist => keys::TEAM_COUNTER_TERRORIST,
        Team::Spectator | Team::Unassigned => keys::TEAM_SPECTATOR,
    }
}

/// `" <tag> <team> <name><dead> <default>: <text>"`, with the head
/// rendered through `message.formatted`.
pub fn compose_relay_line<F>(formatter: &F, sender: &Participant, text: &str) -> String
where
    F: MessageFormatter + ?Sized,
{
    let tag = formatter.format(keys::TAG, &[]);
    let team = formatter.format(team_label_key(sender.team), &[]);
    let dead = if sender.alive {
        String::new()
    } else {
        formatter.format(keys::PLAYER_DEAD, &[])
    };

    let head = formatter.format(
        keys::MESSAGE_FORMATTED,
        &[tag.as_str(), team.as_str(), sender.name.as_str(), dead.as_str()],
    );
    format!(" {head} {}: {text}", ChatColor::Default.code())
}
