use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-session player slot. Not stable across disconnect/reconnect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerSlot(pub u32);

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for PlayerSlot {
    fn from(slot: u32) -> Self {
        PlayerSlot(slot)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceFlags {
    #[default]
    Normal,
    Muted,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub slot: PlayerSlot,
    pub name: String,
    pub is_valid: bool,
    pub pawn_valid: bool,
    pub is_bot: bool,
    pub is_hltv: bool,
    pub voice_flags: VoiceFlags,
}

impl Player {
    pub fn new(slot: PlayerSlot, name: String) -> Self {
        Self {
            slot,
            name,
            is_valid: true,
            pawn_valid: true,
            is_bot: false,
            is_hltv: false,
            voice_flags: VoiceFlags::Normal,
        }
    }

    /// A connected human with a live pawn. Bots and HLTV/demo observers never qualify.
    pub fn is_eligible(&self) -> bool {
        self.is_valid && self.pawn_valid && !self.is_bot && !self.is_hltv
    }

    pub fn is_voice_muted(&self) -> bool {
        self.voice_flags == VoiceFlags::Muted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligibility() {
        let mut player = Player::new(PlayerSlot(3), "alice".to_string());
        assert!(player.is_eligible());

        player.is_bot = true;
        assert!(!player.is_eligible());

        player.is_bot = false;
        player.is_hltv = true;
        assert!(!player.is_eligible());

        player.is_hltv = false;
        player.pawn_valid = false;
        assert!(!player.is_eligible());
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(PlayerSlot(7).to_string(), "#7");
    }
}
