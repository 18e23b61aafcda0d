use std::io::BufRead;
use std::time::Duration;

use crate::error::ReplayError;
use crate::host::{ChatLine, SimulatedHost};
use crate::models::{event::HostEvent, penalty::HookResult, player::Player};
use crate::state::Plugin;

#[derive(Debug, Clone, PartialEq)]
pub enum ReplayOutput {
    Chat(ChatLine),
    Say {
        line: usize,
        message: String,
        result: HookResult,
    },
}

pub fn parse_script<R: BufRead>(reader: R) -> Result<Vec<HostEvent>, ReplayError> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }
        let event = serde_json::from_str(trimmed).map_err(|source| ReplayError::InvalidEvent {
            line: index + 1,
            source,
        })?;
        events.push(event);
    }
    Ok(events)
}

/// Feeds events to the simulated host and the plugin in order.
/// `wait` sleeps on the tokio clock so pending penalties get a chance to fire.
pub async fn run(plugin: &Plugin, host: &SimulatedHost, events: &[HostEvent]) -> Vec<ReplayOutput> {
    let mut output = Vec::new();

    for (index, event) in events.iter().enumerate() {
        apply_to_host(host, event);

        if let HostEvent::Wait { seconds } = event {
            tokio::time::sleep(Duration::from_secs_f64(seconds.max(0.0))).await;
        }

        let result = plugin.handle(event).await;
        if let (Some(result), HostEvent::Say { message, .. }) = (result, event) {
            output.push(ReplayOutput::Say {
                line: index + 1,
                message: message.clone(),
                result,
            });
        }

        output.extend(host.take_messages().into_iter().map(ReplayOutput::Chat));
    }

    output
}

fn apply_to_host(host: &SimulatedHost, event: &HostEvent) {
    match event {
        HostEvent::Connect {
            slot,
            name,
            bot,
            hltv,
        } => {
            let mut player = Player::new(*slot, name.clone());
            player.is_bot = *bot;
            player.is_hltv = *hltv;
            host.connect(player);
        }
        HostEvent::Disconnect { slot } => {
            host.disconnect(*slot);
        }
        HostEvent::GrantPermission { slot, permission } => host.grant_permission(*slot, permission),
        HostEvent::JoinGroup { slot, group } => host.join_group(*slot, group),
        HostEvent::GrantOverride { slot, command } => host.grant_override(*slot, command),
        _ => {}
    }
}
