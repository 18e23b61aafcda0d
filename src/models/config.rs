use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{immunity::ImmunityRule, penalty::MIN_PENALTY_DELAY_SECS, penalty::PenaltyKind};

pub const CONFIG_VERSION: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    #[serde(rename = "block-voice-chat")]
    pub block_voice_chat: bool,
    #[serde(rename = "block-voice-after-seconds")]
    pub block_voice_after_seconds: i64,
    #[serde(rename = "block-chat")]
    pub block_chat: bool,
    #[serde(rename = "block-chat-after-seconds")]
    pub block_chat_after_seconds: i64,
    #[serde(rename = "immune-permissions")]
    pub immune_permissions: Vec<ImmunityRule>,
    #[serde(rename = "chat-notifications")]
    pub chat_notifications: bool,
    #[serde(rename = "ConfigVersion")]
    pub version: u32,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            block_voice_chat: true,
            block_voice_after_seconds: 5,
            block_chat: false,
            block_chat_after_seconds: 10,
            immune_permissions: vec![
                ImmunityRule::parse("@myplugin/wont-mute-permission"),
                ImmunityRule::parse("#myplugin/wont-mute-group"),
                ImmunityRule::parse("wont-mute-override"),
            ],
            chat_notifications: true,
            version: CONFIG_VERSION,
        }
    }
}

impl PluginConfig {
    pub fn is_enabled(&self, kind: PenaltyKind) -> bool {
        match kind {
            PenaltyKind::Voice => self.block_voice_chat,
            PenaltyKind::Chat => self.block_chat,
        }
    }

    pub fn delay_seconds(&self, kind: PenaltyKind) -> i64 {
        match kind {
            PenaltyKind::Voice => self.block_voice_after_seconds,
            PenaltyKind::Chat => self.block_chat_after_seconds,
        }
    }

    pub fn is_outdated(&self) -> bool {
        self.version < CONFIG_VERSION
    }
}

/// Converts a configured delay into a timer duration, clamping non-positive values.
pub fn penalty_delay(seconds: i64) -> Duration {
    if seconds > 0 {
        Duration::from_secs(seconds as u64)
    } else {
        Duration::from_secs_f32(MIN_PENALTY_DELAY_SECS)
    }
}
