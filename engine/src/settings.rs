use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::types::PlacementRules;

pub const DEFAULT_OPPONENT_DELAY_MS: u64 = 750;
pub const DEFAULT_RESTART_DELAY_MS: u64 = 2000;
const MAX_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Pause before the opponent plays.
    pub opponent_delay_ms: u64,
    /// How long a verdict stays on screen before the next round starts.
    pub restart_delay_ms: u64,
    pub rules: PlacementRules,
    pub seed: Option<u64>,
}

impl SessionSettings {
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }

    pub fn restart_delay(&self) -> Duration {
        Duration::from_millis(self.restart_delay_ms)
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            opponent_delay_ms: DEFAULT_OPPONENT_DELAY_MS,
            restart_delay_ms: DEFAULT_RESTART_DELAY_MS,
            rules: PlacementRules::Strict,
            seed: None,
        }
    }
}

impl Validate for SessionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.opponent_delay_ms == 0 || self.opponent_delay_ms > MAX_DELAY_MS {
            return Err(format!(
                "Opponent delay must be between 1 and {} ms, got {}",
                MAX_DELAY_MS, self.opponent_delay_ms
            ));
        }
        if self.restart_delay_ms == 0 || self.restart_delay_ms > MAX_DELAY_MS {
            return Err(format!(
                "Restart delay must be between 1 and {} ms, got {}",
                MAX_DELAY_MS, self.restart_delay_ms
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSerializer, YamlConfigSerializer};

    #[test]
    fn test_default_settings_are_valid() {
        let settings = SessionSettings::default();

        assert!(settings.validate().is_ok());
        assert_eq!(settings.opponent_delay(), Duration::from_millis(750));
        assert_eq!(settings.restart_delay(), Duration::from_millis(2000));
        assert_eq!(settings.rules, PlacementRules::Strict);
    }

    #[test]
    fn test_default_settings_survive_yaml() {
        let serializer = YamlConfigSerializer;
        let yaml = serializer.serialize(&SessionSettings::default()).unwrap();

        let parsed: SessionSettings = serializer.deserialize(&yaml).unwrap();

        assert_eq!(parsed, SessionSettings::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let serializer = YamlConfigSerializer;

        let parsed: SessionSettings = serializer.deserialize("rules: permissive\n").unwrap();

        assert_eq!(parsed.rules, PlacementRules::Permissive);
        assert_eq!(parsed.opponent_delay_ms, DEFAULT_OPPONENT_DELAY_MS);
        assert_eq!(parsed.seed, None);
    }

    #[test]
    fn test_zero_delay_is_invalid() {
        let settings = SessionSettings {
            opponent_delay_ms: 0,
            ..SessionSettings::default()
        };

        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_excessive_restart_delay_is_invalid() {
        let settings = SessionSettings {
            restart_delay_ms: MAX_DELAY_MS + 1,
            ..SessionSettings::default()
        };

        assert!(settings.validate().is_err());
    }
}
