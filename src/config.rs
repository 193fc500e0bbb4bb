use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Read-only launch configuration from `~/.learner-tui/config.json`
///
/// Nothing in the app writes config; a missing or malformed file just
/// means defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Optional path to a JSON dataset file; the built-in sample data is
    /// used when unset or unreadable
    #[serde(default)]
    pub data_path: Option<String>,
    /// Whether to show the splash screen on startup
    #[serde(default = "default_show_splash")]
    pub show_splash: bool,
}

fn default_show_splash() -> bool {
    true
}

impl Config {
    fn config_path() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".learner-tui").join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_parses_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.data_path, None);
        assert!(config.show_splash);
    }

    #[test]
    fn test_full_config_parses() {
        let config: Config = serde_json::from_str(
            r#"{"data_path": "/tmp/dataset.json", "show_splash": false}"#,
        )
        .unwrap();
        assert_eq!(config.data_path.as_deref(), Some("/tmp/dataset.json"));
        assert!(!config.show_splash);
    }
}
