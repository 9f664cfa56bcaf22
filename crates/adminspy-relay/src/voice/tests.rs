//! Tests for the voice-routing state machine.

use super::*;
use crate::test_support::{bot, player, MockHost};
use adminspy_common::{ParticipantId, Team, VoiceRoutingMode};
use adminspy_config::{Phrasebook, SessionConfig};

const ADMIN: u32 = 1;
const PLAYER: u32 = 2;

fn host() -> MockHost {
    MockHost::new()
        .with(player(ADMIN, Team::CounterTerrorist))
        .with(player(PLAYER, Team::Terrorist))
        .grant_group(ADMIN, "#css/admin")
}

fn connect(
    router: &mut VoiceRouter,
    host: &mut MockHost,
    config: &SessionConfig,
    id: u32,
) -> Option<VoiceRoutingMode> {
    let p = host.participant_mut(id).clone();
    router.on_connect(&p, config, host)
}

fn toggle(router: &mut VoiceRouter, host: &mut MockHost, id: u32) -> Option<VoiceTransition> {
    let p = host.participant_mut(id).clone();
    router.on_toggle(
        Some(&p),
        &SessionConfig::default(),
        host,
        &Phrasebook::default(),
    )
}

#[test]
fn privileged_participant_starts_on_all() {
    let mut host = host();
    let mut router = VoiceRouter::new();

    let mode = connect(&mut router, &mut host, &SessionConfig::default(), ADMIN);
    assert_eq!(mode, Some(VoiceRoutingMode::All));
    assert_eq!(router.mode(ParticipantId(ADMIN)), Some(VoiceRoutingMode::All));
    assert_eq!(host.voice_pushes, vec![(ParticipantId(ADMIN), VoiceRoutingMode::All)]);
}

#[test]
fn regular_participant_starts_on_team_only() {
    let mut host = host();
    let mut router = VoiceRouter::new();

    let mode = connect(&mut router, &mut host, &SessionConfig::default(), PLAYER);
    assert_eq!(mode, Some(VoiceRoutingMode::TeamOnly));
    assert_eq!(
        host.voice_pushes,
        vec![(ParticipantId(PLAYER), VoiceRoutingMode::TeamOnly)]
    );
}

#[test]
fn disabled_voice_relay_leaves_host_default() {
    let mut host = host();
    let mut router = VoiceRouter::new();
    let config = SessionConfig {
        voice_relay_enabled: false,
        ..Default::default()
    };

    assert_eq!(connect(&mut router, &mut host, &config, ADMIN), None);
    assert_eq!(connect(&mut router, &mut host, &config, PLAYER), None);
    assert!(router.is_empty());
    assert!(host.voice_pushes.is_empty());
}

#[test]
fn invalid_participant_gets_no_mode() {
    let mut host = host();
    host.participant_mut(ADMIN).valid = false;
    let mut router = VoiceRouter::new();

    assert_eq!(connect(&mut router, &mut host, &SessionConfig::default(), ADMIN), None);
    assert!(host.voice_pushes.is_empty());
}

#[test]
fn connecting_bot_is_routed_like_anyone_else() {
    let mut host = host().with(bot(3, Team::Terrorist));
    let mut router = VoiceRouter::new();
    assert_eq!(
        connect(&mut router, &mut host, &SessionConfig::default(), 3),
        Some(VoiceRoutingMode::TeamOnly)
    );
}

#[test]
fn toggle_flips_and_confirms() {
    let mut host = host();
    let mut router = VoiceRouter::new();
    connect(&mut router, &mut host, &SessionConfig::default(), ADMIN);

    let transition = toggle(&mut router, &mut host, ADMIN).unwrap();
    assert_eq!(transition.from, VoiceRoutingMode::All);
    assert_eq!(transition.to, VoiceRoutingMode::TeamOnly);
    assert_eq!(router.mode(ParticipantId(ADMIN)), Some(VoiceRoutingMode::TeamOnly));
    assert_eq!(
        host.voice_pushes.last(),
        Some(&(ParticipantId(ADMIN), VoiceRoutingMode::TeamOnly))
    );
    assert_eq!(
        host.replies,
        vec![(
            ParticipantId(ADMIN),
            " \x07[AdminSpy] \x01Your voice settings have been set to \x04default".to_string()
        )]
    );
}

#[test]
fn toggle_twice_restores_original_mode() {
    let mut host = host();
    let mut router = VoiceRouter::new();
    connect(&mut router, &mut host, &SessionConfig::default(), ADMIN);
    let original = router.mode(ParticipantId(ADMIN));

    toggle(&mut router, &mut host, ADMIN).unwrap();
    let second = toggle(&mut router, &mut host, ADMIN).unwrap();

    assert_eq!(second.to, VoiceRoutingMode::All);
    assert_eq!(router.mode(ParticipantId(ADMIN)), original);
    assert!(host.replies[1].1.ends_with("\x04listen all"));
}

#[test]
fn toggle_by_non_privileged_participant_is_ignored() {
    let mut host = host();
    let mut router = VoiceRouter::new();
    connect(&mut router, &mut host, &SessionConfig::default(), PLAYER);
    let pushes = host.voice_pushes.len();

    assert_eq!(toggle(&mut router, &mut host, PLAYER), None);
    assert_eq!(router.mode(ParticipantId(PLAYER)), Some(VoiceRoutingMode::TeamOnly));
    assert_eq!(host.voice_pushes.len(), pushes);
    assert!(host.replies.is_empty());
}

#[test]
fn toggle_by_disconnected_admin_is_ignored() {
    let mut host = host();
    let mut router = VoiceRouter::new();
    connect(&mut router, &mut host, &SessionConfig::default(), ADMIN);
    host.participant_mut(ADMIN).connected = false;

    assert_eq!(toggle(&mut router, &mut host, ADMIN), None);
    assert_eq!(router.mode(ParticipantId(ADMIN)), Some(VoiceRoutingMode::All));
    assert!(host.replies.is_empty());
}

#[test]
fn toggle_without_invoker_is_ignored() {
    let mut host = host();
    let mut router = VoiceRouter::new();
    let result = router.on_toggle(
        None,
        &SessionConfig::default(),
        &mut host,
        &Phrasebook::default(),
    );
    assert_eq!(result, None);
    assert!(host.voice_pushes.is_empty());
}

#[test]
fn toggle_from_host_default_goes_to_all() {
    let mut host = host();
    let mut router = VoiceRouter::new();

    let transition = toggle(&mut router, &mut host, ADMIN).unwrap();
    assert_eq!(transition.from, VoiceRoutingMode::TeamOnly);
    assert_eq!(transition.to, VoiceRoutingMode::All);
}

#[test]
fn toggle_works_with_voice_relay_disabled() {
    let mut host = host();
    let mut router = VoiceRouter::new();
    let config = SessionConfig {
        voice_relay_enabled: false,
        ..Default::default()
    };
    let admin = host.participant_mut(ADMIN).clone();

    let transition = router.on_toggle(Some(&admin), &config, &mut host, &Phrasebook::default());
    assert_eq!(transition.map(|t| t.to), Some(VoiceRoutingMode::All));
}

#[test]
fn disconnect_discards_mode_and_reconnect_rederives() {
    let mut host = host();
    let mut router = VoiceRouter::new();
    connect(&mut router, &mut host, &SessionConfig::default(), ADMIN);
    toggle(&mut router, &mut host, ADMIN);
    assert_eq!(router.mode(ParticipantId(ADMIN)), Some(VoiceRoutingMode::TeamOnly));

    assert_eq!(
        router.on_disconnect(ParticipantId(ADMIN)),
        Some(VoiceRoutingMode::TeamOnly)
    );
    assert_eq!(router.mode(ParticipantId(ADMIN)), None);

    connect(&mut router, &mut host, &SessionConfig::default(), ADMIN);
    assert_eq!(router.mode(ParticipantId(ADMIN)), Some(VoiceRoutingMode::All));
}

#[test]
fn privilege_is_rechecked_on_toggle() {
    let mut host = host();
    let mut router = VoiceRouter::new();
    connect(&mut router, &mut host, &SessionConfig::default(), ADMIN);
    host.revoke_all(ADMIN);

    assert_eq!(toggle(&mut router, &mut host, ADMIN), None);
    assert_eq!(router.mode(ParticipantId(ADMIN)), Some(VoiceRoutingMode::All));
}
