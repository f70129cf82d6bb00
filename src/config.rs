//! Navigator configuration, read from TOML
//!
//! ```toml
//! walking_speed = 1.4            # metres per second, used for time estimates
//! allow_same_endpoints = false   # reject routes whose start is the goal
//! default_algorithm = "astar-euclidean"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::navigator::Algorithm;

/// Average walking pace in metres per second
pub const DEFAULT_WALKING_SPEED: f64 = 1.4;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    pub walking_speed: f64,
    pub allow_same_endpoints: bool,
    pub default_algorithm: Algorithm,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            walking_speed: DEFAULT_WALKING_SPEED,
            allow_same_endpoints: false,
            default_algorithm: Algorithm::default(),
        }
    }
}

impl NavigatorConfig {

    /// Read a TOML config file; absent keys keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading config");
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: NavigatorConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.walking_speed.is_finite() && self.walking_speed > 0.0) {
            return Err(ConfigError::InvalidValue {
                key: "walking_speed",
                reason: format!("must be a positive number, got {}", self.walking_speed),
            });
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::HeuristicKind;

    #[test]
    fn test_empty_config_is_default() {
        let config = NavigatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, NavigatorConfig::default());
        assert_eq!(config.default_algorithm, Algorithm::AStar(HeuristicKind::Euclidean));
    }

    #[test]
    fn test_full_config() {
        let config = NavigatorConfig::from_toml_str(
            r#"
            walking_speed = 1.1
            allow_same_endpoints = true
            default_algorithm = "dijkstra"
            "#,
        ).unwrap();

        assert_eq!(config.walking_speed, 1.1);
        assert!(config.allow_same_endpoints);
        assert_eq!(config.default_algorithm, Algorithm::Dijkstra);
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let result = NavigatorConfig::from_toml_str(r#"default_algorithm = "bfs""#);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_non_positive_speed_is_rejected() {
        for text in ["walking_speed = 0.0", "walking_speed = -2.5"] {
            let result = NavigatorConfig::from_toml_str(text);
            assert!(matches!(result, Err(ConfigError::InvalidValue { key: "walking_speed", .. })));
        }
    }

    #[test]
    fn test_missing_file() {
        let result = NavigatorConfig::load("/no/such/dir/campus-nav.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
