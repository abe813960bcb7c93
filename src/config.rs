use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

fn default_backend_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_health_interval() -> u64 {
    30
}

fn default_history_limit() -> usize {
    100
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the prediction backend
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    /// Seconds between automatic health probes
    #[serde(default = "default_health_interval")]
    pub health_interval_secs: u64,
    /// Maximum prediction history entries kept on disk
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            health_interval_secs: default_health_interval(),
            history_limit: default_history_limit(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".sequia-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the config file, falling back to defaults, then apply the
    /// `SEQUIA_BACKEND_URL` override.
    pub fn load() -> Config {
        let mut config = Self::config_path()
            .filter(|p| p.exists())
            .and_then(|p| fs::read_to_string(p).ok())
            .and_then(|contents| serde_json::from_str::<Config>(&contents).ok())
            .unwrap_or_default();

        if let Ok(url) = env::var("SEQUIA_BACKEND_URL") {
            if !url.trim().is_empty() {
                config.backend_url = url;
            }
        }

        config
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_always_yields_usable_config() {
        // Whatever is (or is not) on disk, load falls back to defaults.
        let config = Config::load();
        assert!(!config.backend_url.is_empty());
        assert!(config.health_interval_secs > 0);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"backend_url": "http://example:9000"}"#).unwrap();
        assert_eq!(config.backend_url, "http://example:9000");
        assert_eq!(config.health_interval_secs, 30);
        assert_eq!(config.history_limit, 100);
    }
}
