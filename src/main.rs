use dotenvy::dotenv;
use env_logger::Builder;
use log::LevelFilter;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::sync::Arc;
use structopt::StructOpt;

use info_time_limit::{
    replay::{self, ReplayOutput},
    utils::config::CONFIG,
    HookResult, Plugin, SimulatedHost, MODULE_AUTHOR, MODULE_NAME, MODULE_VERSION,
};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "info-time-limit",
    about = "Replays game events against the InfoTimeLimit plugin on a simulated server."
)]
struct Opt {
    /// plugin config (JSON); created with defaults if missing
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,
    /// phrase file (JSON)
    #[structopt(long, parse(from_os_str))]
    phrases: Option<PathBuf>,
    /// event script, one JSON event per line; stdin when omitted
    #[structopt(parse(from_os_str))]
    script: Option<PathBuf>,
}

// ログ設定
fn init_logger(level: LevelFilter) {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format_timestamp(Some(env_logger::TimestampPrecision::Millis))
        .format_target(true)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenv() {
        eprintln!("Warning: failed to read .env: {}", e);
    }

    let opt = Opt::from_args();
    let mut app_config = CONFIG.clone();
    if let Some(config) = opt.config {
        app_config.config_path = config;
    }
    if opt.phrases.is_some() {
        app_config.phrases_path = opt.phrases;
    }

    init_logger(app_config.log_level_filter());
    log::info!("{} {} by {}", MODULE_NAME, MODULE_VERSION, MODULE_AUTHOR);

    let events = match &opt.script {
        Some(path) => replay::parse_script(BufReader::new(File::open(path)?))?,
        None => replay::parse_script(io::stdin().lock())?,
    };

    let host = Arc::new(SimulatedHost::new());
    let plugin = Plugin::load(&app_config, host.clone(), host.clone())?;

    for output in replay::run(&plugin, &host, &events).await {
        match output {
            ReplayOutput::Chat(line) => println!("[chat -> {}] {}", line.slot, line.text.trim()),
            ReplayOutput::Say {
                line,
                message,
                result,
            } => {
                let verdict = match result {
                    HookResult::Continue => "relayed",
                    HookResult::Handled => "suppressed",
                };
                println!("[say @{}] {:?} {}", line, message, verdict);
            }
        }
    }

    Ok(())
}
