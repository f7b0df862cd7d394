use anyhow::{Context, Result, anyhow};
use log::LevelFilter;
use std::path::PathBuf;

use crate::generator::DEFAULT_LENGTH;
use crate::logging::LogConfig;
use crate::storage::DEFAULT_FILE_NAME;

pub const ENV_FILE: &str = "LOCKER_FILE";
pub const ENV_PASSWORD_LENGTH: &str = "LOCKER_PASSWORD_LENGTH";
pub const ENV_LOG_FILE: &str = "LOCKER_LOG_FILE";
pub const ENV_LOG_LEVEL: &str = "LOCKER_LOG_LEVEL";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Runtime settings for the locker binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Accounts file.
    pub store_path: PathBuf,
    /// Length of generated passwords.
    pub password_length: usize,
    /// Whether menu output uses ANSI colors.
    pub color: bool,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_FILE_NAME),
            password_length: DEFAULT_LENGTH,
            color: true,
            log: LogConfig::new(default_log_path()),
        }
    }
}

impl AppConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_FILE) {
            config.store_path = PathBuf::from(path);
        }
        if let Some(length) = lookup(ENV_PASSWORD_LENGTH) {
            config.password_length = length
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: '{}'", ENV_PASSWORD_LENGTH, length))?;
        }
        if let Some(path) = lookup(ENV_LOG_FILE) {
            config.log.path = PathBuf::from(path);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log.level = level
                .trim()
                .parse::<LevelFilter>()
                .map_err(|_| anyhow!("Invalid {}: '{}'", ENV_LOG_LEVEL, level))?;
        }
        if lookup(ENV_NO_COLOR).is_some() {
            config.color = false;
        }

        Ok(config)
    }
}

/// `~/.locker/locker.log`, or `locker.log` when there is no home directory.
pub fn default_log_path() -> PathBuf {
    match dirs_next::home_dir() {
        Some(home) => home.join(".locker").join("locker.log"),
        None => PathBuf::from("locker.log"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.store_path, PathBuf::from("users.txt"));
        assert_eq!(config.password_length, 12);
        assert!(config.color);
        assert_eq!(config.log.level, LevelFilter::Info);
        assert!(config.log.path.ends_with("locker.log"));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_FILE, "/tmp/accounts.json"),
            (ENV_PASSWORD_LENGTH, " 20 "),
            (ENV_LOG_FILE, "/tmp/locker-debug.log"),
            (ENV_LOG_LEVEL, "debug"),
            (ENV_NO_COLOR, "1"),
        ]))
        .unwrap();

        assert_eq!(config.store_path, PathBuf::from("/tmp/accounts.json"));
        assert_eq!(config.password_length, 20);
        assert_eq!(config.log.path, PathBuf::from("/tmp/locker-debug.log"));
        assert_eq!(config.log.level, LevelFilter::Debug);
        assert!(!config.color);
    }

    #[test]
    fn test_invalid_length() {
        for value in ["-3", "twelve"] {
            let err = AppConfig::from_lookup(lookup_from(&[(ENV_PASSWORD_LENGTH, value)]))
                .unwrap_err();
            assert!(err.to_string().contains(ENV_PASSWORD_LENGTH));
        }
    }

    #[test]
    fn test_invalid_log_level() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "loud")])).unwrap_err();
        assert!(err.to_string().contains(ENV_LOG_LEVEL));
    }
}
