use dotenvy::dotenv;
use std::sync::{Arc, Once};

use crate::host::SimulatedHost;
use crate::models::{config::PluginConfig, phrases::Phrases, player::PlayerSlot};
use crate::state::Plugin;

static INIT: Once = Once::new();

pub fn setup_test_env() {
    INIT.call_once(|| {
        dotenv().ok();
        // .envが無い場合のデフォルト値
        if std::env::var("LOG_LEVEL").is_err() {
            std::env::set_var("LOG_LEVEL", "debug");
        }
    });
}

/// Plugin over a fresh simulated host with the given humans connected.
pub fn plugin_with_players(config: PluginConfig, slots: &[u32]) -> (Arc<SimulatedHost>, Plugin) {
    setup_test_env();
    let host = Arc::new(SimulatedHost::new());
    for &slot in slots {
        host.connect_human(PlayerSlot(slot), &format!("Player{}", slot));
    }
    let plugin = Plugin::new(config, Phrases::default(), host.clone(), host.clone());
    (host, plugin)
}
