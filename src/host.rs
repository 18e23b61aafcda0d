pub mod simulated;

pub use simulated::*;

use crate::models::player::{Player, PlayerSlot, VoiceFlags};

/// What the game server exposes to the plugin. Lookups return a snapshot;
/// `None` means nothing is connected in that slot.
pub trait GameHost: Send + Sync {
    fn player_from_slot(&self, slot: PlayerSlot) -> Option<Player>;
    fn players(&self) -> Vec<Player>;
    fn set_voice_flags(&self, slot: PlayerSlot, flags: VoiceFlags);
    fn print_to_chat(&self, slot: PlayerSlot, message: &str);
}

/// Query contract of the admin/permission system.
pub trait PermissionProvider: Send + Sync {
    fn has_permission(&self, player: &Player, permission: &str) -> bool;
    fn in_group(&self, player: &Player, group: &str) -> bool;
    fn has_command_override(&self, player: &Player, command: &str) -> bool;
}
