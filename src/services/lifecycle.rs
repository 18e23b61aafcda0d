use std::sync::Arc;

use super::{
    comm_state::CommStateStore,
    immunity::ImmunityGate,
    notifier::Notifier,
    scheduler::{PenaltyScheduler, SharedStore},
};
use crate::host::{GameHost, PermissionProvider};
use crate::models::{
    config::PluginConfig,
    penalty::{HookResult, PenaltyKind, PendingPenalty},
    phrases::Phrases,
    player::{Player, PlayerSlot},
};
use tokio::sync::Mutex;

pub const CHAT_COMMANDS: [&str; 2] = ["say", "say_team"];

/// Reacts to host events and drives the gate, the scheduler and the store.
///
/// Per-slot lifecycle, derived from the store and the scheduler:
/// clear -> pending restriction (death) -> restricted (timer) -> clear (spawn / map end).
/// Spawn, map end and disconnect also unregister the slot's pending penalties.
pub struct LifecycleController {
    config: Arc<PluginConfig>,
    host: Arc<dyn GameHost>,
    permissions: Arc<dyn PermissionProvider>,
    gate: ImmunityGate,
    store: SharedStore,
    scheduler: PenaltyScheduler,
    notifier: Notifier,
}

impl LifecycleController {
    pub fn new(
        config: Arc<PluginConfig>,
        phrases: Arc<Phrases>,
        host: Arc<dyn GameHost>,
        permissions: Arc<dyn PermissionProvider>,
    ) -> Self {
        let store: SharedStore = Arc::new(Mutex::new(CommStateStore::new()));
        let notifier = Notifier::new(host.clone(), phrases, config.chat_notifications);
        let scheduler = PenaltyScheduler::new(host.clone(), store.clone(), notifier.clone());
        let gate = ImmunityGate::new(config.immune_permissions.clone());

        Self {
            config,
            host,
            permissions,
            gate,
            store,
            scheduler,
            notifier,
        }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &PenaltyScheduler {
        &self.scheduler
    }

    fn eligible(&self, slot: PlayerSlot) -> Option<Player> {
        self.host
            .player_from_slot(slot)
            .filter(|player| player.is_eligible())
    }

    /// Schedules the configured penalties for a dead player and returns them.
    pub async fn on_player_death(&self, slot: PlayerSlot) -> Vec<PendingPenalty> {
        let mut scheduled = Vec::new();

        let player = match self.eligible(slot) {
            Some(player) => player,
            None => return scheduled,
        };

        if self.gate.has_immunity(self.permissions.as_ref(), &player) {
            tracing::debug!("{} ({}) is immune, not restricting", player.name, slot);
            return scheduled;
        }

        // 既にミュートされている場合はボイスを再スケジュールしない
        if self.config.block_voice_chat && !player.is_voice_muted() {
            let delay = self.config.delay_seconds(PenaltyKind::Voice);
            scheduled.push(self.scheduler.schedule(slot, PenaltyKind::Voice, delay).await);
        }

        // No "already gagged" guard here; a second death re-schedules the gag.
        if self.config.block_chat {
            let delay = self.config.delay_seconds(PenaltyKind::Chat);
            scheduled.push(self.scheduler.schedule(slot, PenaltyKind::Chat, delay).await);
        }

        scheduled
    }

    pub async fn on_player_spawn(&self, slot: PlayerSlot) {
        if self.eligible(slot).is_none() {
            return;
        }

        // A respawn supersedes penalties still waiting from the last death.
        self.scheduler.invalidate_slot(slot).await;

        let mut store = self.store.lock().await;
        if let Some(notice) = store.state(slot).restore_notice() {
            self.notifier.send(slot, notice);
        }

        let cleared = store.clear(self.host.as_ref(), slot);
        if cleared.is_restricted() {
            tracing::debug!("Restored communication for {}: {:?}", slot, cleared);
        }
    }

    /// Silent reset: no notifications, every tracked slot cleared.
    pub async fn on_map_end(&self) {
        let dropped = self.scheduler.invalidate_all().await;
        let cleared = self.store.lock().await.clear_all(self.host.as_ref());
        tracing::info!(
            "Map end: cleared {} restricted player(s), invalidated {} pending penalt(ies)",
            cleared,
            dropped
        );
    }

    pub async fn on_player_disconnect(&self, slot: PlayerSlot) {
        let dropped = self.scheduler.invalidate_slot(slot).await;
        let forgotten = self.store.lock().await.forget(slot);
        if dropped > 0 || forgotten.is_restricted() {
            tracing::debug!(
                "{} disconnected: dropped {} pending penalt(ies), forgot {:?}",
                slot,
                dropped,
                forgotten
            );
        }
    }

    /// Listener for `say` / `say_team`. `first_arg` is the message text.
    pub async fn on_chat_command(&self, slot: PlayerSlot, command: &str, first_arg: &str) -> HookResult {
        if !CHAT_COMMANDS.contains(&command) || first_arg.is_empty() {
            return HookResult::Continue;
        }
        if self.eligible(slot).is_none() {
            return HookResult::Continue;
        }

        if self.store.lock().await.is_gagged(slot) {
            tracing::debug!("Suppressed {} from gagged player {}", command, slot);
            return HookResult::Handled;
        }

        HookResult::Continue
    }

    pub async fn is_muted(&self, slot: PlayerSlot) -> bool {
        self.store.lock().await.is_muted(slot)
    }

    pub async fn is_gagged(&self, slot: PlayerSlot) -> bool {
        self.store.lock().await.is_gagged(slot)
    }
}
