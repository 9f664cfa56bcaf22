use serde::{Deserialize, Serialize};

use crate::types::ParticipantId;

/// Events the host delivers, one at a time, on its game thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum HostEvent {
    /// Client finished connecting and has a controller.
    ParticipantConnected(ParticipantId),
    ParticipantDisconnected(ParticipantId),
    /// Team chat line. `sender` is `None` when typed from the server console.
    ChatMessageSent {
        sender: Option<ParticipantId>,
        text: String,
    },
    /// The voice-routing toggle command.
    ToggleVoiceRouting { invoker: Option<ParticipantId> },
}

impl HostEvent {
    /// The participant that caused the event, if any.
    pub fn participant(&self) -> Option<ParticipantId> {
        match self {
            HostEvent::ParticipantConnected(id) | HostEvent::ParticipantDisconnected(id) => {
                Some(*id)
            }
            HostEvent::ChatMessageSent { sender, .. } => *sender,
            HostEvent::ToggleVoiceRouting { invoker } => *invoker,
        }
    }
}
