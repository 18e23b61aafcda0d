use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::time::Instant;
use uuid::Uuid;

use super::player::PlayerSlot;

/// Hosts schedule no finer than this, so non-positive delays become "next tick".
pub const MIN_PENALTY_DELAY_SECS: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyKind {
    Voice, // mute
    Chat,  // gag
}

impl fmt::Display for PenaltyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PenaltyKind::Voice => write!(f, "voice"),
            PenaltyKind::Chat => write!(f, "chat"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunicationState {
    pub voice_muted: bool,
    pub chat_gagged: bool,
}

impl CommunicationState {
    pub fn is_restricted(&self) -> bool {
        self.voice_muted || self.chat_gagged
    }

    pub fn restore_notice(&self) -> Option<Notice> {
        restore_notice(self.voice_muted, self.chat_gagged)
    }
}

#[derive(Clone, Debug)]
pub struct PendingPenalty {
    pub id: Uuid,
    pub slot: PlayerSlot,
    pub kind: PenaltyKind,
    pub fire_at: Instant,
}

/// Player-facing messages. Each one maps to a phrase key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Muted,
    Gagged,
    VoiceRestored,
    ChatRestored,
    FullyRestored,
}

impl Notice {
    pub fn applied(kind: PenaltyKind) -> Self {
        match kind {
            PenaltyKind::Voice => Notice::Muted,
            PenaltyKind::Chat => Notice::Gagged,
        }
    }
}

/// Picks the single message shown on respawn from the facets held before clearing.
pub fn restore_notice(was_muted: bool, was_gagged: bool) -> Option<Notice> {
    match (was_muted, was_gagged) {
        (true, true) => Some(Notice::FullyRestored),
        (true, false) => Some(Notice::VoiceRestored),
        (false, true) => Some(Notice::ChatRestored),
        (false, false) => None,
    }
}

/// Returned by chat command listeners: `Handled` swallows the message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HookResult {
    Continue,
    Handled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_notice_selection() {
        assert_eq!(restore_notice(true, true), Some(Notice::FullyRestored));
        assert_eq!(restore_notice(true, false), Some(Notice::VoiceRestored));
        assert_eq!(restore_notice(false, true), Some(Notice::ChatRestored));
        assert_eq!(restore_notice(false, false), None);
    }

    #[test]
    fn test_applied_notice() {
        assert_eq!(Notice::applied(PenaltyKind::Voice), Notice::Muted);
        assert_eq!(Notice::applied(PenaltyKind::Chat), Notice::Gagged);
    }
}
