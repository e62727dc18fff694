mod config_serializer;
mod config_source;
mod validate;

pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use config_source::{ConfigSource, FileConfigSource};
pub use validate::Validate;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Loads and stores one config type through a source and a serializer.
pub struct ConfigStore<TSource, TSerializer = YamlConfigSerializer>
where
    TSource: ConfigSource,
{
    source: TSource,
    serializer: TSerializer,
}

impl ConfigStore<FileConfigSource, YamlConfigSerializer> {
    pub fn yaml_file(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(FileConfigSource::new(path), YamlConfigSerializer)
    }
}

impl<TSource, TSerializer> ConfigStore<TSource, TSerializer>
where
    TSource: ConfigSource,
{
    pub fn new(source: TSource, serializer: TSerializer) -> Self {
        Self { source, serializer }
    }

    pub fn source(&self) -> &TSource {
        &self.source
    }

    /// A missing config yields `TConfig::default()`; a present one must parse
    /// and validate.
    pub fn load_or_default<TConfig>(&self) -> Result<TConfig, ConfigError>
    where
        TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
        TSerializer: ConfigSerializer<TConfig>,
    {
        let Some(content) = self.source.read()? else {
            return Ok(TConfig::default());
        };

        let config = self.serializer.deserialize(&content)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    pub fn save<TConfig>(&self, config: &TConfig) -> Result<(), ConfigError>
    where
        TConfig: for<'de> Deserialize<'de> + Serialize + Validate,
        TSerializer: ConfigSerializer<TConfig>,
    {
        config.validate().map_err(ConfigError::Invalid)?;
        let content = self.serializer.serialize(config)?;
        self.source.write(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SessionSettings;
    use crate::types::PlacementRules;

    fn get_temp_file_path() -> std::path::PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_xo_engine_config_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_file_yields_default() {
        let store = ConfigStore::yaml_file(get_temp_file_path());

        let settings: SessionSettings = store.load_or_default().unwrap();

        assert_eq!(settings, SessionSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = get_temp_file_path();
        let store = ConfigStore::yaml_file(&path);
        let settings = SessionSettings {
            opponent_delay_ms: 300,
            restart_delay_ms: 1200,
            rules: PlacementRules::Permissive,
            seed: Some(17),
        };

        store.save(&settings).unwrap();
        let loaded: SessionSettings = store.load_or_default().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let path = get_temp_file_path();
        std::fs::write(&path, "opponent_delay_ms: 0\n").unwrap();
        let store = ConfigStore::yaml_file(&path);

        let result: Result<SessionSettings, ConfigError> = store.load_or_default();
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let path = get_temp_file_path();
        std::fs::write(&path, "rules: [not, a, rule").unwrap();
        let store = ConfigStore::yaml_file(&path);

        let result: Result<SessionSettings, ConfigError> = store.load_or_default();
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_save_refuses_invalid_settings() {
        let path = get_temp_file_path();
        let store = ConfigStore::yaml_file(&path);
        let settings = SessionSettings {
            restart_delay_ms: 0,
            ..SessionSettings::default()
        };

        let result = store.save(&settings);

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
        assert!(!path.exists());
    }
}
