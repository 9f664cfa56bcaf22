//! Voice-routing state machine.

use std::collections::HashMap;

use adminspy_common::{Participant, ParticipantId, VoiceRoutingMode};
use adminspy_config::locale::keys;
use adminspy_config::SessionConfig;
use serde::Serialize;
use tracing::{debug, info};

use crate::host::{Authorizer, ChatSink, MessageFormatter, VoiceSink};
use crate::permission::is_privileged;

/// A mode change made by the toggle command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoiceTransition {
    pub participant: ParticipantId,
    pub from: VoiceRoutingMode,
    pub to: VoiceRoutingMode,
}

/// Voice-routing modes of connected participants.
///
/// A participant without an entry is on the host default, which is
/// [`VoiceRoutingMode::TeamOnly`].
#[derive(Debug, Default)]
pub struct VoiceRouter {
    modes: HashMap<ParticipantId, VoiceRoutingMode>,
}

impl VoiceRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mode this router last set for `participant`, if any.
    pub fn mode(&self, participant: ParticipantId) -> Option<VoiceRoutingMode> {
        self.modes.get(&participant).copied()
    }

    /// Number of participants with a recorded mode.
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Set the initial mode for a freshly connected participant.
    ///
    /// Leaves the host default alone when voice relay is disabled or the
    /// participant no longer resolves.
    pub fn on_connect<H>(
        &mut self,
        participant: &Participant,
        config: &SessionConfig,
        host: &mut H,
    ) -> Option<VoiceRoutingMode>
    where
        H: Authorizer + VoiceSink + ?Sized,
    {
        if !config.voice_relay_enabled || !participant.is_connected() {
            return None;
        }

        let mode = if is_privileged(&*host, participant, &config.rules) {
            VoiceRoutingMode::All
        } else {
            VoiceRoutingMode::TeamOnly
        };
        self.apply(&mut *host, participant.id, mode);
        debug!(participant = %participant.id, %mode, "initial voice mode set");
        Some(mode)
    }

    /// Handle the toggle command from `invoker`.
    ///
    /// Silently ignored unless the invoker is connected and privileged.
    /// Works whether or not voice relay is enabled; that flag only decides
    /// the mode given on connect.
    pub fn on_toggle<H, F>(
        &mut self,
        invoker: Option<&Participant>,
        config: &SessionConfig,
        host: &mut H,
        formatter: &F,
    ) -> Option<VoiceTransition>
    where
        H: Authorizer + VoiceSink + ChatSink + ?Sized,
        F: MessageFormatter + ?Sized,
    {
        let invoker = invoker.filter(|p| p.is_connected())?;
        if !is_privileged(&*host, invoker, &config.rules) {
            debug!(participant = %invoker.id, "voice toggle ignored, not privileged");
            return None;
        }

        let from = self.mode(invoker.id).unwrap_or_default();
        let to = from.toggled();
        self.apply(&mut *host, invoker.id, to);

        let confirmation = match to {
            VoiceRoutingMode::All => keys::VOICE_LISTEN_ALL,
            VoiceRoutingMode::TeamOnly => keys::VOICE_TEAM_ONLY,
        };
        let reply = format!(
            " {} {}",
            formatter.format(keys::TAG, &[]),
            formatter.format(confirmation, &[])
        );
        host.reply_to_command(invoker.id, &reply);

        info!(participant = %invoker.id, %from, %to, "voice mode toggled");
        Some(VoiceTransition {
            participant: invoker.id,
            from,
            to,
        })
    }

    /// Forget `participant`. A later connect derives the mode afresh.
    pub fn on_disconnect(&mut self, participant: ParticipantId) -> Option<VoiceRoutingMode> {
        self.modes.remove(&participant)
    }

    fn apply<S>(&mut self, sink: &mut S, participant: ParticipantId, mode: VoiceRoutingMode)
    where
        S: VoiceSink + ?Sized,
    {
        self.modes.insert(participant, mode);
        sink.set_voice_mode(participant, mode);
    }
}
