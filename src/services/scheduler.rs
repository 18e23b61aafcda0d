use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::Instant;
use uuid::Uuid;

use super::{comm_state::CommStateStore, notifier::Notifier};
use crate::host::GameHost;
use crate::models::{
    config::penalty_delay,
    penalty::{Notice, PenaltyKind, PendingPenalty},
    player::PlayerSlot,
};

pub type SharedStore = Arc<Mutex<CommStateStore>>;

/// Runs delayed penalties as tokio timers.
///
/// Timers are never aborted. A penalty only takes effect if its id is still
/// registered when the timer elapses and the slot resolves to an eligible
/// player at that moment; anything else is dropped silently.
#[derive(Clone)]
pub struct PenaltyScheduler {
    host: Arc<dyn GameHost>,
    store: SharedStore,
    notifier: Notifier,
    pending: Arc<Mutex<HashMap<Uuid, PendingPenalty>>>,
}

impl PenaltyScheduler {
    pub fn new(host: Arc<dyn GameHost>, store: SharedStore, notifier: Notifier) -> Self {
        Self {
            host,
            store,
            notifier,
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn schedule(
        &self,
        slot: PlayerSlot,
        kind: PenaltyKind,
        delay_seconds: i64,
    ) -> PendingPenalty {
        let delay = penalty_delay(delay_seconds);
        let penalty = PendingPenalty {
            id: Uuid::new_v4(),
            slot,
            kind,
            fire_at: Instant::now() + delay,
        };
        self.pending
            .lock()
            .await
            .insert(penalty.id, penalty.clone());

        tracing::debug!(
            "Scheduled {} penalty {} for {} in {:?}",
            kind,
            penalty.id,
            slot,
            delay
        );

        let scheduler = self.clone();
        let (id, fire_at) = (penalty.id, penalty.fire_at);
        tokio::spawn(async move {
            tokio::time::sleep_until(fire_at).await;
            scheduler.fire(id).await;
        });

        penalty
    }

    async fn fire(&self, id: Uuid) {
        let penalty = match self.pending.lock().await.remove(&id) {
            Some(penalty) => penalty,
            None => {
                tracing::debug!("Penalty {} was invalidated before firing", id);
                return;
            }
        };

        let player = match self.host.player_from_slot(penalty.slot) {
            Some(player) if player.is_eligible() => player,
            _ => {
                tracing::debug!(
                    "Dropping {} penalty for {}: player no longer eligible",
                    penalty.kind,
                    penalty.slot
                );
                return;
            }
        };

        self.store
            .lock()
            .await
            .apply(self.host.as_ref(), penalty.slot, penalty.kind);
        tracing::info!("Applied {} penalty to {} ({})", penalty.kind, player.name, penalty.slot);

        self.notifier.send(penalty.slot, Notice::applied(penalty.kind));
    }

    /// Unregisters every pending penalty. Returns how many were dropped.
    pub async fn invalidate_all(&self) -> usize {
        let mut pending = self.pending.lock().await;
        let count = pending.len();
        pending.clear();
        count
    }

    pub async fn invalidate_slot(&self, slot: PlayerSlot) -> usize {
        let mut pending = self.pending.lock().await;
        let before = pending.len();
        pending.retain(|_, p| p.slot != slot);
        before - pending.len()
    }

    pub async fn pending(&self) -> Vec<PendingPenalty> {
        let mut pending: Vec<PendingPenalty> = self.pending.lock().await.values().cloned().collect();
        pending.sort_by_key(|p| p.fire_at);
        pending
    }

    pub async fn pending_for(&self, slot: PlayerSlot) -> Vec<PendingPenalty> {
        self.pending()
            .await
            .into_iter()
            .filter(|p| p.slot == slot)
            .collect()
    }
}
