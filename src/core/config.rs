// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

// Configuration for the password keeper
#[derive(Debug, Clone)]
pub struct Config {
    // Database
    pub database_path: PathBuf,

    // Password Generation
    pub default_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Database
            database_path: PathBuf::from("database.db"),

            // Password Generation
            default_password_length: 16,

            // Logging
            log_level: LevelFilter::Info,
            log_file: PathBuf::from("logs/passkeeper.log"),
        }
    }
}

impl Config {
    // Load configuration from environment variables.
    // Problems with individual values are returned as warnings, since the
    // logger is configured from the result and cannot report them yet.
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Database
        if let Some(path) = lookup("PASSKEEPER_DB_PATH") {
            if path.trim().is_empty() {
                warnings.push(format!(
                    "PASSKEEPER_DB_PATH is empty, using {}",
                    config.database_path.display()
                ));
            } else {
                config.database_path = PathBuf::from(path);
            }
        }

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) if length > 0 => config.default_password_length = length,
                _ => warnings.push(format!("Ignoring invalid DEFAULT_PASSWORD_LENGTH '{}'", val)),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                "off" => config.log_level = LevelFilter::Off,
                _ => warnings.push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = PathBuf::from(file);
        }

        (config, warnings)
    }

    // Create directories needed for operation
    pub fn ensure_directories_exist(&self) -> std::io::Result<()> {
        if let Some(parent) = self.log_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> (Config, Vec<String>) {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let (config, warnings) = from_pairs(&[]);
        assert!(warnings.is_empty());
        assert_eq!(config.database_path, PathBuf::from("database.db"));
        assert_eq!(config.default_password_length, 16);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn environment_overrides() {
        let (config, warnings) = from_pairs(&[
            ("PASSKEEPER_DB_PATH", "/tmp/keys.db"),
            ("DEFAULT_PASSWORD_LENGTH", "24"),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_FILE", "/tmp/pk.log"),
        ]);
        assert_eq!(config.database_path, PathBuf::from("/tmp/keys.db"));
        assert_eq!(config.default_password_length, 24);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, PathBuf::from("/tmp/pk.log"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn invalid_values_are_ignored_with_a_warning() {
        let (config, warnings) = from_pairs(&[
            ("DEFAULT_PASSWORD_LENGTH", "zero"),
            ("LOG_LEVEL", "loud"),
            ("PASSKEEPER_DB_PATH", "  "),
        ]);
        assert_eq!(config.default_password_length, 16);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.database_path, PathBuf::from("database.db"));

        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().any(|w| w.contains("DEFAULT_PASSWORD_LENGTH 'zero'")));
        assert!(warnings.iter().any(|w| w.contains("Unknown log level 'loud'")));
        assert!(warnings.iter().any(|w| w.contains("PASSKEEPER_DB_PATH is empty")));

        let (config, warnings) = from_pairs(&[("DEFAULT_PASSWORD_LENGTH", "0")]);
        assert_eq!(config.default_password_length, 16);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn creates_missing_log_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let log_file = dir.path().join("nested").join("logs").join("pk.log");
        let log_value = log_file.to_string_lossy().into_owned();
        let (config, _) = from_pairs(&[("LOG_FILE", log_value.as_str())]);

        config.ensure_directories_exist().unwrap();
        assert!(log_file.parent().unwrap().is_dir());
    }

    #[test]
    fn unusable_log_directory_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let log_value = blocker.join("logs").join("pk.log").to_string_lossy().into_owned();
        let (config, _) = from_pairs(&[("LOG_FILE", log_value.as_str())]);

        assert!(config.ensure_directories_exist().is_err());
    }
}
