//! Event dispatch for the relay engine.
//!
//! [`RelayEngine`] owns the host handle, the active config and the voice
//! router. Each host event resolves participant ids into snapshots, runs
//! the matching policy, and performs the resulting deliveries. An id the
//! registry no longer knows is a silent no-op.


use adminspy_common::{HostEvent, Participant, ParticipantId, VoiceRoutingMode};
use adminspy_config::{ConfigPolicy, Phrasebook, SessionConfig, VersionMismatch};
use serde::Serialize;
use tracing::debug;

use crate::chat::{accepts_line, relay_chat, ChatRelay};
use crate::host::{Host, MessageFormatter};
use crate::voice::{VoiceRouter, VoiceTransition};

/// What handling one event did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EngineOutcome {
    Ignored,
    VoiceModeSet {
        participant: ParticipantId,
        mode: VoiceRoutingMode,
    },
    VoiceStateDiscarded {
        participant: ParticipantId,
    },
    ChatRelayed(ChatRelay),
    VoiceToggled(VoiceTransition),
}

pub struct RelayEngine<H, F = Phrasebook> {
    host: H,
    formatter: F,
    policy: ConfigPolicy,
    voice: VoiceRouter,
}

impl<H: Host> RelayEngine<H, Phrasebook> {
    /// Engine with the built-in English phrasebook.
    pub fn new(host: H, config: SessionConfig) -> Self {
        Self::with_formatter(host, Phrasebook::default(), ConfigPolicy::new(config))
    }
}

impl<H: Host, F: MessageFormatter> RelayEngine<H, F> {
    pub fn with_formatter(host: H, formatter: F, policy: ConfigPolicy) -> Self {
        Self {
            host,
            formatter,
            policy,
            voice: VoiceRouter::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &SessionConfig {
        self.policy.config()
    }

    pub fn voice_mode(&self, participant: ParticipantId) -> Option<VoiceRoutingMode> {
        self.voice.mode(participant)
    }

    /// Swap in a reloaded config. Takes effect from the next event.
    pub fn reload_config(&mut self, config: SessionConfig) -> Option<VersionMismatch> {
        self.policy.on_reload(config)
    }

    pub fn dispatch(&mut self, event: HostEvent) -> EngineOutcome {
        debug!(participant = ?event.participant(), "dispatching host event");
        match event {
            HostEvent::ParticipantConnected(id) => match self.on_participant_connected(id) {
                Some(mode) => EngineOutcome::VoiceModeSet {
                    participant: id,
                    mode,
                },
                None => EngineOutcome::Ignored,
            },
            HostEvent::ParticipantDisconnected(id) => {
                match self.on_participant_disconnected(id) {
                    Some(_) => EngineOutcome::VoiceStateDiscarded { participant: id },
                    None => EngineOutcome::Ignored,
                }
            }
            HostEvent::ChatMessageSent { sender, text } => {
                match self.on_chat_message(sender, &text) {
                    Some(relay) => EngineOutcome::ChatRelayed(relay),
                    None => EngineOutcome::Ignored,
                }
            }
            HostEvent::ToggleVoiceRouting { invoker } => {
                match self.on_toggle_voice_routing(invoker) {
                    Some(transition) => EngineOutcome::VoiceToggled(transition),
                    None => EngineOutcome::Ignored,
                }
            }
        }
    }

    pub fn on_participant_connected(&mut self, id: ParticipantId) -> Option<VoiceRoutingMode> {
        let participant = self.host.participant(id)?;
        self.voice
            .on_connect(&participant, self.policy.config(), &mut self.host)
    }

    /// Returns the mode that was discarded, if one was recorded.
    pub fn on_participant_disconnected(&mut self, id: ParticipantId) -> Option<VoiceRoutingMode> {
        self.voice.on_disconnect(id)
    }

    /// Relay a team chat line and deliver it to every selected observer.
    pub fn on_chat_message(
        &mut self,
        sender: Option<ParticipantId>,
        text: &str,
    ) -> Option<ChatRelay> {
        if !accepts_line(self.policy.config(), text) {
            return None;
        }
        let sender = sender
            .and_then(|id| self.host.participant(id))
            .filter(Participant::is_connected)?;
        let participants = self.host.participants();
        let relay = relay_chat(
            self.policy.config(),
            Some(&sender),
            text,
            &participants,
            &self.host,
            &self.formatter,
        )?;

        for &recipient in &relay.recipients {
            self.host.print_to_chat(recipient, &relay.message);
        }
        debug!(recipients = relay.recipients.len(), "team chat relayed");
        Some(relay)
    }

    pub fn on_toggle_voice_routing(
        &mut self,
        invoker: Option<ParticipantId>,
    ) -> Option<VoiceTransition> {
        let invoker = invoker.and_then(|id| self.host.participant(id));
        self.voice.on_toggle(
            invoker.as_ref(),
            self.policy.config(),
            &mut self.host,
            &self.formatter,
        )
    }
}
