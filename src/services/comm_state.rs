use std::collections::HashMap;

use crate::host::GameHost;
use crate::models::{
    penalty::{CommunicationState, PenaltyKind},
    player::{PlayerSlot, VoiceFlags},
};

/// Per-slot mute/gag record. A slot has an entry only while it is restricted.
#[derive(Debug, Default)]
pub struct CommStateStore {
    entries: HashMap<PlayerSlot, CommunicationState>,
}

impl CommStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Voice also flips the host's voice flag; a gag is only consulted when the player types.
    pub fn apply(&mut self, host: &dyn GameHost, slot: PlayerSlot, kind: PenaltyKind) {
        let entry = self.entries.entry(slot).or_default();
        match kind {
            PenaltyKind::Voice => {
                entry.voice_muted = true;
                host.set_voice_flags(slot, VoiceFlags::Muted);
            }
            PenaltyKind::Chat => entry.chat_gagged = true,
        }
    }

    /// Removes the slot and returns what it held. Absent slots yield an empty state.
    pub fn clear(&mut self, host: &dyn GameHost, slot: PlayerSlot) -> CommunicationState {
        let cleared = self.entries.remove(&slot).unwrap_or_default();
        if cleared.voice_muted {
            host.set_voice_flags(slot, VoiceFlags::Normal);
        }
        cleared
    }

    /// Drops the slot without touching the host. Used once the player has left.
    pub fn forget(&mut self, slot: PlayerSlot) -> CommunicationState {
        self.entries.remove(&slot).unwrap_or_default()
    }

    pub fn clear_all(&mut self, host: &dyn GameHost) -> usize {
        let count = self.entries.len();
        for (slot, state) in self.entries.drain() {
            if !state.voice_muted {
                continue;
            }
            let still_here = host
                .player_from_slot(slot)
                .map(|p| p.is_eligible())
                .unwrap_or(false);
            if still_here {
                host.set_voice_flags(slot, VoiceFlags::Normal);
            }
        }
        count
    }

    pub fn state(&self, slot: PlayerSlot) -> CommunicationState {
        self.entries.get(&slot).copied().unwrap_or_default()
    }

    pub fn is_muted(&self, slot: PlayerSlot) -> bool {
        self.state(slot).voice_muted
    }

    pub fn is_gagged(&self, slot: PlayerSlot) -> bool {
        self.state(slot).chat_gagged
    }

    pub fn contains(&self, slot: PlayerSlot) -> bool {
        self.entries.contains_key(&slot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::SimulatedHost;

    const ALICE: PlayerSlot = PlayerSlot(1);
    const BOB: PlayerSlot = PlayerSlot(2);

    fn host() -> SimulatedHost {
        let host = SimulatedHost::new();
        host.connect_human(ALICE, "alice");
        host.connect_human(BOB, "bob");
        host
    }

    #[test]
    fn test_apply_voice_sets_host_flag() {
        let host = host();
        let mut store = CommStateStore::new();
        store.apply(&host, ALICE, PenaltyKind::Voice);

        assert!(store.is_muted(ALICE));
        assert!(!store.is_gagged(ALICE));
        assert_eq!(host.voice_flags(ALICE), Some(VoiceFlags::Muted));
    }

    #[test]
    fn test_apply_chat_has_no_host_side_effect() {
        let host = host();
        let mut store = CommStateStore::new();
        store.apply(&host, ALICE, PenaltyKind::Chat);

        assert!(store.is_gagged(ALICE));
        assert_eq!(host.voice_flags(ALICE), Some(VoiceFlags::Normal));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let host = host();
        let mut store = CommStateStore::new();
        store.apply(&host, ALICE, PenaltyKind::Voice);
        store.apply(&host, ALICE, PenaltyKind::Voice);

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.state(ALICE),
            CommunicationState {
                voice_muted: true,
                chat_gagged: false
            }
        );
    }

    #[test]
    fn test_clear_reports_facets_and_removes_entry() {
        let host = host();
        let mut store = CommStateStore::new();
        store.apply(&host, ALICE, PenaltyKind::Voice);
        store.apply(&host, ALICE, PenaltyKind::Chat);

        let cleared = store.clear(&host, ALICE);
        assert!(cleared.voice_muted && cleared.chat_gagged);
        assert!(!store.contains(ALICE));
        assert_eq!(host.voice_flags(ALICE), Some(VoiceFlags::Normal));

        // 二回目は何もしない
        assert_eq!(store.clear(&host, ALICE), CommunicationState::default());
    }

    #[test]
    fn test_clear_gag_only_leaves_voice_flag_alone() {
        let host = host();
        host.set_voice_flags(BOB, VoiceFlags::Muted); // muted by someone else
        let mut store = CommStateStore::new();
        store.apply(&host, BOB, PenaltyKind::Chat);

        store.clear(&host, BOB);
        assert_eq!(host.voice_flags(BOB), Some(VoiceFlags::Muted));
    }

    #[test]
    fn test_clear_all_restores_connected_players() {
        let host = host();
        let mut store = CommStateStore::new();
        store.apply(&host, ALICE, PenaltyKind::Voice);
        store.apply(&host, BOB, PenaltyKind::Chat);
        store.apply(&host, PlayerSlot(9), PenaltyKind::Voice); // not connected

        assert_eq!(store.clear_all(&host), 3);
        assert!(store.is_empty());
        assert_eq!(host.voice_flags(ALICE), Some(VoiceFlags::Normal));
        for slot in [ALICE, BOB, PlayerSlot(9)] {
            assert!(!store.is_muted(slot));
            assert!(!store.is_gagged(slot));
        }
    }
}
