use std::sync::Arc;

use crate::error::ConfigError;
use crate::host::{GameHost, PermissionProvider};
use crate::models::{config::PluginConfig, event::HostEvent, penalty::HookResult, phrases::Phrases};
use crate::services::{config_loader, lifecycle::LifecycleController};
use crate::utils::config::AppConfig;

/// The loaded plugin: config plus the controller wired to a host.
#[derive(Clone)]
pub struct Plugin {
    pub config: Arc<PluginConfig>,
    pub controller: Arc<LifecycleController>,
}

impl Plugin {
    pub fn new(
        config: PluginConfig,
        phrases: Phrases,
        host: Arc<dyn GameHost>,
        permissions: Arc<dyn PermissionProvider>,
    ) -> Self {
        let config = Arc::new(config);
        let controller = LifecycleController::new(config.clone(), Arc::new(phrases), host, permissions);

        tracing::info!(
            "{} {} loaded (voice: {} after {}s, chat: {} after {}s, {} immunity rule(s))",
            crate::MODULE_NAME,
            crate::MODULE_VERSION,
            config.block_voice_chat,
            config.block_voice_after_seconds,
            config.block_chat,
            config.block_chat_after_seconds,
            config.immune_permissions.len()
        );

        Plugin {
            config,
            controller: Arc::new(controller),
        }
    }

    pub fn load(
        app_config: &AppConfig,
        host: Arc<dyn GameHost>,
        permissions: Arc<dyn PermissionProvider>,
    ) -> Result<Self, ConfigError> {
        let config = config_loader::load_plugin_config(&app_config.config_path)?;
        let phrases = config_loader::load_phrases(app_config.phrases_path.as_deref())?;
        Ok(Self::new(config, phrases, host, permissions))
    }

    /// Routes a game event to the controller. Only chat commands produce a result.
    pub async fn handle(&self, event: &HostEvent) -> Option<HookResult> {
        match event {
            HostEvent::Death { slot } => {
                self.controller.on_player_death(*slot).await;
                None
            }
            HostEvent::Spawn { slot } => {
                self.controller.on_player_spawn(*slot).await;
                None
            }
            HostEvent::MapEnd => {
                self.controller.on_map_end().await;
                None
            }
            HostEvent::Disconnect { slot } => {
                self.controller.on_player_disconnect(*slot).await;
                None
            }
            HostEvent::Say {
                slot,
                command,
                message,
            } => Some(self.controller.on_chat_command(*slot, command, message).await),
            HostEvent::Connect { .. }
            | HostEvent::Wait { .. }
            | HostEvent::GrantPermission { .. }
            | HostEvent::JoinGroup { .. }
            | HostEvent::GrantOverride { .. } => None,
        }
    }
}
