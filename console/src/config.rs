use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use xo_engine::SessionSettings;
use xo_engine::config::{ConfigStore, FileConfigSource, Validate, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "xo_console_config.yaml";

pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_store(path: Option<PathBuf>) -> ConfigStore<FileConfigSource, YamlConfigSerializer> {
    ConfigStore::yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ConsoleConfig {
    pub session: SessionSettings,
    pub log_prefix: Option<String>,
    pub show_help: bool,
}

impl Validate for ConsoleConfig {
    fn validate(&self) -> Result<(), String> {
        self.session.validate()?;
        if let Some(prefix) = &self.log_prefix
            && prefix.trim().is_empty()
        {
            return Err("Log prefix must not be blank".to_string());
        }
        Ok(())
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            session: SessionSettings::default(),
            log_prefix: None,
            show_help: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xo_engine::config::ConfigSerializer;
    use xo_engine::{ConfigError, PlacementRules};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_xo_console_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = ConsoleConfig::default();
        let serializer = YamlConfigSerializer;

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: ConsoleConfig = serializer.deserialize(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_default_config_can_be_saved_and_loaded() {
        let path = get_temp_file_path();
        let store = get_config_store(Some(path.clone()));
        let config = ConsoleConfig {
            log_prefix: Some("XO".to_string()),
            ..ConsoleConfig::default()
        };

        store.save(&config).unwrap();
        let loaded: ConsoleConfig = store.load_or_default().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(config, loaded);
    }

    #[test]
    fn test_nested_session_settings_are_read() {
        let serializer = YamlConfigSerializer;
        let yaml = "session:\n  opponent_delay_ms: 100\n  rules: permissive\nshow_help: false\n";

        let config: ConsoleConfig = serializer.deserialize(yaml).unwrap();

        assert_eq!(config.session.opponent_delay_ms, 100);
        assert_eq!(config.session.restart_delay_ms, 2000);
        assert_eq!(config.session.rules, PlacementRules::Permissive);
        assert!(!config.show_help);
    }

    #[test]
    fn test_blank_log_prefix_is_rejected() {
        let path = get_temp_file_path();
        std::fs::write(&path, "log_prefix: '  '\n").unwrap();
        let store = get_config_store(Some(path.clone()));

        let result: Result<ConsoleConfig, ConfigError> = store.load_or_default();
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
