use std::sync::Arc;

use crate::host::GameHost;
use crate::models::{penalty::Notice, phrases::Phrases, player::PlayerSlot};

/// Prints notices to a single player's chat, honouring `chat-notifications`.
#[derive(Clone)]
pub struct Notifier {
    host: Arc<dyn GameHost>,
    phrases: Arc<Phrases>,
    enabled: bool,
}

impl Notifier {
    pub fn new(host: Arc<dyn GameHost>, phrases: Arc<Phrases>, enabled: bool) -> Self {
        Self {
            host,
            phrases,
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn send(&self, slot: PlayerSlot, notice: Notice) {
        if !self.enabled {
            tracing::debug!("Notifications disabled, not sending {:?} to {}", notice, slot);
            return;
        }
        self.host.print_to_chat(slot, &self.phrases.render(notice));
    }
}
