use serde::{Deserialize, Serialize};

use super::player::PlayerSlot;

/// Events the host runtime delivers, plus a few simulation-only entries
/// (`wait`, permission grants) used when replaying a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    Connect {
        slot: PlayerSlot,
        name: String,
        #[serde(default)]
        bot: bool,
        #[serde(default)]
        hltv: bool,
    },
    Disconnect {
        slot: PlayerSlot,
    },
    Death {
        slot: PlayerSlot,
    },
    Spawn {
        slot: PlayerSlot,
    },
    MapEnd,
    Say {
        slot: PlayerSlot,
        #[serde(default = "default_say_command")]
        command: String,
        message: String,
    },
    Wait {
        seconds: f64,
    },
    GrantPermission {
        slot: PlayerSlot,
        permission: String,
    },
    JoinGroup {
        slot: PlayerSlot,
        group: String,
    },
    GrantOverride {
        slot: PlayerSlot,
        command: String,
    },
}

fn default_say_command() -> String {
    "say".to_string()
}
