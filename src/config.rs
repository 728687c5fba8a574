use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Longest delay accepted for deferred command effects
pub const MAX_REGISTER_DELAY_MS: u64 = 60_000;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    #[serde(default)]
    pub terminal: TerminalConfig,
}

/// Terminal widget behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TerminalConfig {
    /// Prompt printed in front of every echoed command
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Delay before `register` closes the terminal and opens the
    /// registration page, in milliseconds
    #[serde(default = "default_register_delay_ms")]
    pub register_delay_ms: u64,

    /// Identity reported by `whoami`
    #[serde(default)]
    pub identity: IdentityConfig,

    /// Open the terminal window when the app starts
    #[serde(default = "default_true")]
    pub start_open: bool,
}

fn default_prompt() -> String {
    "user@innohacks:~$".to_string()
}

fn default_register_delay_ms() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            register_delay_ms: default_register_delay_ms(),
            identity: IdentityConfig::default(),
            start_open: true,
        }
    }
}

impl TerminalConfig {
    pub fn register_delay(&self) -> Duration {
        Duration::from_millis(self.register_delay_ms)
    }

    /// Text of the echo line for a submitted command
    pub fn echo(&self, command: &str) -> String {
        format!("{} {}", self.prompt, command)
    }
}

/// Placeholder identity shown by `whoami`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IdentityConfig {
    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_role")]
    pub role: String,

    #[serde(default = "default_status")]
    pub status: String,
}

fn default_user() -> String {
    "Guest Hacker".to_string()
}

fn default_role() -> String {
    "Participant".to_string()
}

fn default_status() -> String {
    "Ready to Innovate".to_string()
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            role: default_role(),
            status: default_status(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;

        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is
    /// missing or invalid
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from_file(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, contents)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.terminal.prompt.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "terminal.prompt must not be empty".to_string(),
            ));
        }

        if self.terminal.register_delay_ms > MAX_REGISTER_DELAY_MS {
            return Err(ConfigError::ValidationError(format!(
                "terminal.register_delay_ms must be at most {} (got {})",
                MAX_REGISTER_DELAY_MS, self.terminal.register_delay_ms
            )));
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.terminal.prompt, "user@innohacks:~$");
        assert_eq!(config.terminal.register_delay(), Duration::from_millis(1000));
        assert_eq!(config.terminal.identity.user, "Guest Hacker");
        assert!(config.terminal.start_open);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_echo_format() {
        let config = TerminalConfig::default();
        assert_eq!(config.echo("HELP"), "user@innohacks:~$ HELP");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"terminal": {"register_delay_ms": 250}}"#).unwrap();
        assert_eq!(config.terminal.register_delay_ms, 250);
        assert_eq!(config.terminal.prompt, "user@innohacks:~$");
        assert_eq!(config.terminal.identity, IdentityConfig::default());

        let empty: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn test_validate_rejects_empty_prompt() {
        let mut config = Config::default();
        config.terminal.prompt = "   ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_huge_delay() {
        let mut config = Config::default();
        config.terminal.register_delay_ms = MAX_REGISTER_DELAY_MS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.terminal.identity.user = "Ada".to_string();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Config::load_from_file(&path),
            Err(ConfigError::ParseError(_))
        ));
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("missing.json"));
        assert_eq!(config, Config::default());
    }
}
