//! Outline configuration persistence
//!
//! Reads timing preferences from `todo-outline/config.yaml` in the platform
//! config directory

use serde::{Deserialize, Serialize};

/// Timing configuration for outline synchronization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineConfig {
    /// Interval between change-monitor samples of the tracked document
    #[serde(default = "default_sample_interval_ms")]
    pub sample_interval_ms: u64,

    /// Quiet period after a detected change before the outline refreshes
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Delay after a host event before the current document is resolved,
    /// giving the host's own view activation time to complete
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,

    /// Retry resolution once after opening if no document is found
    #[serde(default = "default_retry_on_empty")]
    pub retry_on_empty: bool,
}

fn default_sample_interval_ms() -> u64 {
    500
}

fn default_debounce_ms() -> u64 {
    200
}

fn default_settle_ms() -> u64 {
    50
}

fn default_retry_on_empty() -> bool {
    true
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: default_sample_interval_ms(),
            debounce_ms: default_debounce_ms(),
            settle_ms: default_settle_ms(),
            retry_on_empty: default_retry_on_empty(),
        }
    }
}

impl OutlineConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse a YAML document; missing keys take their defaults
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OutlineConfig::default();
        assert_eq!(config.sample_interval_ms, 500);
        assert_eq!(config.debounce_ms, 200);
        assert_eq!(config.settle_ms, 50);
        assert!(config.retry_on_empty);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = OutlineConfig::from_yaml("debounce_ms: 75\n").unwrap();
        assert_eq!(config.debounce_ms, 75);
        assert_eq!(config.sample_interval_ms, 500);
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        assert!(OutlineConfig::from_yaml("debounce_ms: [").is_err());
    }
}
