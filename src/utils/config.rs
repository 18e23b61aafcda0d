use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

pub const DEFAULT_CONFIG_PATH: &str = "configs/plugins/InfoTimeLimit/InfoTimeLimit.json";

/// Process-level settings, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub config_path: PathBuf,
    pub phrases_path: Option<PathBuf>,
    pub log_level: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config_path = env::var("ITL_CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        let phrases_path = env::var("ITL_PHRASES_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            config_path,
            phrases_path,
            log_level,
        }
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
