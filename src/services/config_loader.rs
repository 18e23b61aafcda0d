use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::models::{
    config::{PluginConfig, CONFIG_VERSION},
    phrases::Phrases,
};

/// Loads the plugin config, writing the defaults first if the file does not exist.
///
/// Keys missing from an older file fall back to their defaults; a stale
/// `ConfigVersion` is only reported.
pub fn load_plugin_config(path: &Path) -> Result<PluginConfig, ConfigError> {
    if !path.exists() {
        tracing::info!("No config at {}, writing defaults", path.display());
        let config = PluginConfig::default();
        write_json(path, &config)?;
        return Ok(config);
    }

    let config: PluginConfig = read_json(path)?;
    if config.is_outdated() {
        tracing::warn!(
            "Configuration version mismatch (Expected: {} | Current: {})",
            CONFIG_VERSION,
            config.version
        );
    }
    Ok(config)
}

/// Phrase files are optional; absent means the built-in English text.
pub fn load_phrases(path: Option<&Path>) -> Result<Phrases, ConfigError> {
    match path {
        Some(path) if path.exists() => read_json(path),
        Some(path) => {
            tracing::warn!("Phrase file {} not found, using defaults", path.display());
            Ok(Phrases::default())
        }
        None => Ok(Phrases::default()),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    let text = serde_json::to_string_pretty(value).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, text).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::immunity::ImmunityRule;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("configs/info-time-limit.json");

        let config = load_plugin_config(&path).unwrap();
        assert_eq!(config, PluginConfig::default());
        assert!(path.exists());

        // 書き出したファイルを読み直しても同じ内容になる
        assert_eq!(load_plugin_config(&path).unwrap(), config);
    }

    #[test]
    fn test_old_version_still_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "block-voice-chat": false,
                "block-chat": true,
                "block-chat-after-seconds": 3,
                "immune-permissions": ["@css/vip", ""],
                "ConfigVersion": 1
            }"#,
        )
        .unwrap();

        let config = load_plugin_config(&path).unwrap();
        assert!(!config.block_voice_chat);
        assert!(config.block_chat);
        assert_eq!(config.block_chat_after_seconds, 3);
        assert_eq!(config.block_voice_after_seconds, 5);
        assert_eq!(
            config.immune_permissions,
            vec![
                ImmunityRule::Permission("@css/vip".to_string()),
                ImmunityRule::CommandOverride(String::new())
            ]
        );
        assert!(config.is_outdated());
    }

    #[test]
    fn test_malformed_config_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            load_plugin_config(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_phrases_fallbacks() {
        assert_eq!(load_phrases(None).unwrap(), Phrases::default());

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("en.json");
        assert_eq!(load_phrases(Some(missing.as_path())).unwrap(), Phrases::default());

        fs::write(&missing, r#"{ "phrases.prefix": "[ITL]" }"#).unwrap();
        assert_eq!(load_phrases(Some(missing.as_path())).unwrap().prefix, "[ITL]");
    }
}
