use info_time_limit::{
    models::{
        config::PluginConfig,
        penalty::{HookResult, Notice},
        phrases::Phrases,
        player::PlayerSlot,
    },
    replay::{self, ReplayOutput},
    utils::test_setup::plugin_with_players,
};

const SCRIPT: &str = r#"
// two humans and a bot
{"event":"connect","slot":1,"name":"alice"}
{"event":"connect","slot":2,"name":"bob"}
{"event":"connect","slot":3,"name":"BOT Kev","bot":true}
{"event":"grant_permission","slot":2,"permission":"@myplugin/wont-mute-permission"}
{"event":"death","slot":1}
{"event":"death","slot":2}
{"event":"death","slot":3}
{"event":"wait","seconds":11}
{"event":"say","slot":1,"message":"why can't I talk"}
{"event":"say","slot":2,"command":"say_team","message":"eco"}
{"event":"spawn","slot":1}
{"event":"say","slot":1,"message":"ok now"}
"#;

fn chat_lines(output: &[ReplayOutput], slot: PlayerSlot) -> Vec<String> {
    output
        .iter()
        .filter_map(|o| match o {
            ReplayOutput::Chat(line) if line.slot == slot => Some(line.text.clone()),
            _ => None,
        })
        .collect()
}

fn say_results(output: &[ReplayOutput]) -> Vec<HookResult> {
    output
        .iter()
        .filter_map(|o| match o {
            ReplayOutput::Say { result, .. } => Some(*result),
            _ => None,
        })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_replay_full_round() {
    let config = PluginConfig {
        block_chat: true,
        ..PluginConfig::default()
    };
    let (host, plugin) = plugin_with_players(config, &[]);
    let events = replay::parse_script(SCRIPT.as_bytes()).unwrap();

    let output = replay::run(&plugin, &host, &events).await;
    let phrases = Phrases::default();

    assert_eq!(
        chat_lines(&output, PlayerSlot(1)),
        vec![
            phrases.render(Notice::Muted),
            phrases.render(Notice::Gagged),
            phrases.render(Notice::FullyRestored),
        ]
    );
    // Immune player and bot never hear from the plugin.
    assert!(chat_lines(&output, PlayerSlot(2)).is_empty());
    assert!(chat_lines(&output, PlayerSlot(3)).is_empty());

    assert_eq!(
        say_results(&output),
        vec![HookResult::Handled, HookResult::Continue, HookResult::Continue]
    );
}

#[tokio::test(start_paused = true)]
async fn test_replay_map_end_between_death_and_timer() {
    let script = r#"
{"event":"connect","slot":5,"name":"eve"}
{"event":"death","slot":5}
{"event":"wait","seconds":2}
{"event":"map_end"}
{"event":"wait","seconds":10}
{"event":"spawn","slot":5}
"#;
    let (host, plugin) = plugin_with_players(PluginConfig::default(), &[]);
    let events = replay::parse_script(script.as_bytes()).unwrap();

    let output = replay::run(&plugin, &host, &events).await;
    assert!(output.is_empty(), "unexpected output: {:?}", output);
    assert!(!plugin.controller.is_muted(PlayerSlot(5)).await);
}
