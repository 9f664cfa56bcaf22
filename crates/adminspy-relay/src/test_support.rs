//! In-memory host used by the relay tests.

use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use adminspy_common::{Participant, ParticipantId, Team, VoiceRoutingMode};

use crate::host::{Authorizer, ChatSink, ParticipantRegistry, VoiceSink};

pub(crate) fn player(id: u32, team: Team) -> Participant {
    Participant::new(ParticipantId(id), format!("player{id}"), team)
}

pub(crate) fn bot(id: u32, team: Team) -> Participant {
    Participant {
        bot: true,
        ..player(id, team)
    }
}

#[derive(Default)]
pub(crate) struct MockHost {
    pub participants: Vec<Participant>,
    flags: HashMap<ParticipantId, HashSet<String>>,
    groups: HashMap<ParticipantId, HashSet<String>>,
    overrides: HashMap<ParticipantId, HashSet<String>>,
    lookups: Cell<usize>,
    snapshots: Cell<usize>,
    /// Every push to the voice sink, in order.
    pub voice_pushes: Vec<(ParticipantId, VoiceRoutingMode)>,
    pub chat: Vec<(ParticipantId, String)>,
    pub replies: Vec<(ParticipantId, String)>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, participant: Participant) -> Self {
        self.participants.push(participant);
        self
    }

    pub fn grant_flag(mut self, id: u32, flag: &str) -> Self {
        self.flags
            .entry(ParticipantId(id))
            .or_default()
            .insert(flag.into());
        self
    }

    pub fn grant_group(mut self, id: u32, group: &str) -> Self {
        self.groups
            .entry(ParticipantId(id))
            .or_default()
            .insert(group.into());
        self
    }

    pub fn grant_override(mut self, id: u32, command: &str) -> Self {
        self.overrides
            .entry(ParticipantId(id))
            .or_default()
            .insert(command.into());
        self
    }

    pub fn revoke_all(&mut self, id: u32) {
        let id = ParticipantId(id);
        self.flags.remove(&id);
        self.groups.remove(&id);
        self.overrides.remove(&id);
    }

    pub fn participant_mut(&mut self, id: u32) -> &mut Participant {
        self.participants
            .iter_mut()
            .find(|p| p.id == ParticipantId(id))
            .unwrap()
    }

    pub fn auth_lookups(&self) -> usize {
        self.lookups.get()
    }

    /// How many times the full participant list was taken.
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.get()
    }

    /// Ids that received a chat line, sorted.
    pub fn chat_recipients(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.chat.iter().map(|(id, _)| id.0).collect();
        ids.sort_unstable();
        ids
    }

    fn lookup(
        &self,
        table: &HashMap<ParticipantId, HashSet<String>>,
        id: ParticipantId,
        key: &str,
    ) -> bool {
        self.lookups.set(self.lookups.get() + 1);
        table.get(&id).is_some_and(|set| set.contains(key))
    }
}

impl Authorizer for MockHost {
    fn has_permission_flag(&self, participant: ParticipantId, flag: &str) -> bool {
        self.lookup(&self.flags, participant, flag)
    }

    fn is_in_group(&self, participant: ParticipantId, group: &str) -> bool {
        self.lookup(&self.groups, participant, group)
    }

    fn has_command_override(&self, participant: ParticipantId, command: &str) -> bool {
        self.lookup(&self.overrides, participant, command)
    }
}

impl ParticipantRegistry for MockHost {
    fn participants(&self) -> Vec<Participant> {
        self.snapshots.set(self.snapshots.get() + 1);
        self.participants.clone()
    }

    fn participant(&self, id: ParticipantId) -> Option<Participant> {
        self.participants.iter().find(|p| p.id == id).cloned()
    }
}

impl VoiceSink for MockHost {
    fn set_voice_mode(&mut self, participant: ParticipantId, mode: VoiceRoutingMode) {
        self.voice_pushes.push((participant, mode));
    }
}

impl ChatSink for MockHost {
    fn print_to_chat(&mut self, participant: ParticipantId, message: &str) {
        self.chat.push((participant, message.to_string()));
    }

    fn reply_to_command(&mut self, participant: ParticipantId, message: &str) {
        self.replies.push((participant, message.to_string()));
    }
}
