use serde::{Deserialize, Serialize};

use super::penalty::Notice;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Phrases {
    #[serde(rename = "phrases.prefix")]
    pub prefix: String,
    #[serde(rename = "phrases.text-muted")]
    pub muted: String,
    #[serde(rename = "phrases.text-gagged")]
    pub gagged: String,
    #[serde(rename = "phrases.text-unmuted")]
    pub unmuted: String,
    #[serde(rename = "phrases.text-ungagged")]
    pub ungagged: String,
    #[serde(rename = "phrases.text-unall")]
    pub unall: String,
}

impl Default for Phrases {
    fn default() -> Self {
        Self {
            prefix: "[InfoTimeLimit]".to_string(),
            muted: "You are dead, your voice chat has been muted.".to_string(),
            gagged: "You are dead, your text chat has been disabled.".to_string(),
            unmuted: "You respawned, your voice chat is available again.".to_string(),
            ungagged: "You respawned, your text chat is available again.".to_string(),
            unall: "You respawned, your voice and text chat are available again.".to_string(),
        }
    }
}

impl Phrases {
    pub fn text(&self, notice: Notice) -> &str {
        match notice {
            Notice::Muted => &self.muted,
            Notice::Gagged => &self.gagged,
            Notice::VoiceRestored => &self.unmuted,
            Notice::ChatRestored => &self.ungagged,
            Notice::FullyRestored => &self.unall,
        }
    }

    /// Chat line as printed to the player, prefix first.
    pub fn render(&self, notice: Notice) -> String {
        format!(" {} {}", self.prefix, self.text(notice))
    }
}
