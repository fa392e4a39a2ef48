use crate::error::MailError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "mailfind";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the user's config directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Mailbox file loaded at startup
    #[serde(default = "default_mailbox_path")]
    pub mailbox_path: PathBuf,

    /// Index the built-in example messages before the mailbox file
    #[serde(default = "default_load_seed_records")]
    pub load_seed_records: bool,

    /// Use colors in terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_mailbox_path() -> PathBuf {
    PathBuf::from("correos.txt")
}

fn default_load_seed_records() -> bool {
    true
}

fn default_color() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mailbox_path: default_mailbox_path(),
            load_seed_records: default_load_seed_records(),
            color: default_color(),
        }
    }
}

impl AppConfig {
    /// Load config from an explicit path, or return default if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the config directory
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(path, content)
            .context("Failed to write config file")?;
        Ok(())
    }

    pub fn validate(&self) -> crate::error::Result<()> {
        if self.mailbox_path.as_os_str().is_empty() {
            return Err(MailError::Config("mailbox_path must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Path of the config file, if the platform has a config directory
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("mailfind_config_{}_{}", name, std::process::id()))
            .join(CONFIG_FILE)
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.mailbox_path, PathBuf::from("correos.txt"));
        assert!(config.load_seed_records);
        assert!(config.color);
    }

    #[test]
    fn test_app_config_partial_json() {
        // Should use defaults for missing fields
        let json = r#"{"load_seed_records": false}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert!(!config.load_seed_records);
        assert_eq!(config.mailbox_path, PathBuf::from("correos.txt"));
        assert!(config.color);
    }

    #[test]
    fn test_app_config_empty_json() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_missing_file_gives_default() {
        let path = temp_config_path("missing");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_config_path("roundtrip");
        let config = AppConfig {
            mailbox_path: PathBuf::from("/var/mail/bandeja.txt"),
            load_seed_records: false,
            color: false,
        };

        config.save(&path).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let path = temp_config_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert!(AppConfig::load_from(&path).is_err());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_empty_mailbox_path_rejected() {
        let config = AppConfig {
            mailbox_path: PathBuf::new(),
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(MailError::Config(_))));
    }
}
