use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use super::{GameHost, PermissionProvider};
use crate::models::player::{Player, PlayerSlot, VoiceFlags};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
    pub slot: PlayerSlot,
    pub text: String,
}

#[derive(Default)]
struct Grants {
    permissions: HashSet<String>,
    groups: HashSet<String>,
    overrides: HashSet<String>,
}

/// In-memory server used by the replay binary and the tests.
#[derive(Default)]
pub struct SimulatedHost {
    players: RwLock<HashMap<PlayerSlot, Player>>,
    grants: RwLock<HashMap<PlayerSlot, Grants>>,
    outbox: RwLock<Vec<ChatLine>>,
}

impl SimulatedHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&self, player: Player) {
        let slot = player.slot;
        self.players.write().unwrap().insert(slot, player);
        self.grants.write().unwrap().remove(&slot);
    }

    pub fn connect_human(&self, slot: PlayerSlot, name: &str) {
        self.connect(Player::new(slot, name.to_string()));
    }

    pub fn disconnect(&self, slot: PlayerSlot) -> bool {
        self.grants.write().unwrap().remove(&slot);
        self.players.write().unwrap().remove(&slot).is_some()
    }

    pub fn update<F>(&self, slot: PlayerSlot, f: F) -> bool
    where
        F: FnOnce(&mut Player),
    {
        match self.players.write().unwrap().get_mut(&slot) {
            Some(player) => {
                f(player);
                true
            }
            None => false,
        }
    }

    pub fn grant_permission(&self, slot: PlayerSlot, permission: &str) {
        self.grants
            .write()
            .unwrap()
            .entry(slot)
            .or_default()
            .permissions
            .insert(permission.to_string());
    }

    pub fn join_group(&self, slot: PlayerSlot, group: &str) {
        self.grants
            .write()
            .unwrap()
            .entry(slot)
            .or_default()
            .groups
            .insert(group.to_string());
    }

    pub fn grant_override(&self, slot: PlayerSlot, command: &str) {
        self.grants
            .write()
            .unwrap()
            .entry(slot)
            .or_default()
            .overrides
            .insert(command.to_string());
    }

    pub fn voice_flags(&self, slot: PlayerSlot) -> Option<VoiceFlags> {
        self.players.read().unwrap().get(&slot).map(|p| p.voice_flags)
    }

    pub fn messages(&self) -> Vec<ChatLine> {
        self.outbox.read().unwrap().clone()
    }

    pub fn messages_for(&self, slot: PlayerSlot) -> Vec<String> {
        self.outbox
            .read()
            .unwrap()
            .iter()
            .filter(|line| line.slot == slot)
            .map(|line| line.text.clone())
            .collect()
    }

    pub fn take_messages(&self) -> Vec<ChatLine> {
        std::mem::take(&mut *self.outbox.write().unwrap())
    }

    fn granted<F>(&self, player: &Player, f: F) -> bool
    where
        F: FnOnce(&Grants) -> bool,
    {
        self.grants
            .read()
            .unwrap()
            .get(&player.slot)
            .map(f)
            .unwrap_or(false)
    }
}

impl GameHost for SimulatedHost {
    fn player_from_slot(&self, slot: PlayerSlot) -> Option<Player> {
        self.players.read().unwrap().get(&slot).cloned()
    }

    fn players(&self) -> Vec<Player> {
        let mut players: Vec<Player> = self.players.read().unwrap().values().cloned().collect();
        players.sort_by_key(|p| p.slot);
        players
    }

    fn set_voice_flags(&self, slot: PlayerSlot, flags: VoiceFlags) {
        self.update(slot, |player| player.voice_flags = flags);
    }

    fn print_to_chat(&self, slot: PlayerSlot, message: &str) {
        // 接続していないスロットには送らない
        if !self.players.read().unwrap().contains_key(&slot) {
            return;
        }
        self.outbox.write().unwrap().push(ChatLine {
            slot,
            text: message.to_string(),
        });
    }
}

impl PermissionProvider for SimulatedHost {
    fn has_permission(&self, player: &Player, permission: &str) -> bool {
        self.granted(player, |g| g.permissions.contains(permission))
    }

    fn in_group(&self, player: &Player, group: &str) -> bool {
        self.granted(player, |g| g.groups.contains(group))
    }

    fn has_command_override(&self, player: &Player, command: &str) -> bool {
        self.granted(player, |g| g.overrides.contains(command))
    }
}
