use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::roster::{RetryPolicy, Roster, RosterError};
use crate::scorebook::{DEFAULT_AWAY_TEAM, DEFAULT_HOME_TEAM};

pub const DEFAULT_TIMEZONE: &str = "America/Toronto";
pub const DEFAULT_API_KEY_ENV: &str = "SCOREKEEPER_API_KEY";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: Defaults,
    pub roster: RosterConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Name shown for the home side when no roster team is picked.
    pub home_team: String,
    pub away_team: String,
    /// IANA zone used for play history timestamps.
    pub timezone: String,
    pub copy_to_clipboard: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            home_team: DEFAULT_HOME_TEAM.to_owned(),
            away_team: DEFAULT_AWAY_TEAM.to_owned(),
            timezone: DEFAULT_TIMEZONE.to_owned(),
            copy_to_clipboard: true,
        }
    }
}

/// Where teams and players come from. Both unset means no roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub file: Option<PathBuf>,
    pub base_url: Option<String>,
    /// Environment variable holding the backend API key.
    pub api_key_env: String,
    pub max_retries: u32,
    pub retry_sleep_ms: u64,
}

impl Default for RosterConfig {
    fn default() -> Self {
        let retry = RetryPolicy::default();
        Self {
            file: None,
            base_url: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_owned(),
            max_retries: retry.max_retries,
            retry_sleep_ms: retry.sleep.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    File(PathBuf),
    Remote {
        base_url: String,
        api_key_env: String,
        retry: RetryPolicy,
    },
}

impl RosterSource {
    pub fn load(&self) -> Result<Roster, RosterError> {
        match self {
            Self::File(path) => Roster::from_file(path),
            Self::Remote { base_url, api_key_env, retry } => {
                let api_key = std::env::var(api_key_env).map_err(|_| RosterError::MissingApiKey {
                    var: api_key_env.clone(),
                })?;
                Roster::fetch(base_url, &api_key, *retry)
            }
        }
    }
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `scorekeeper/config.toml` under `dirs::config_dir()`, falling back
    /// to the current directory if there is none.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("scorekeeper").join("config.toml")
    }

    /// Loads configuration from the default config file, or defaults if it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_owned(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_owned(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Both default team names are non-empty
    /// - The timezone is a known IANA zone
    /// - At most one roster source is configured
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (side, name) in [("home", &self.defaults.home_team), ("away", &self.defaults.away_team)] {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("Default {side} team name must not be empty"),
                });
            }
        }

        self.timezone()?;

        if self.roster.file.is_some() && self.roster.base_url.is_some() {
            return Err(ConfigError::ValidationError {
                message: "Roster can come from a file or a backend, not both".to_string(),
            });
        }

        Ok(())
    }

    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        Tz::from_str(&self.defaults.timezone).map_err(|e| ConfigError::ValidationError {
            message: format!("Unknown timezone '{}': {e}", self.defaults.timezone),
        })
    }

    pub fn roster_source(&self) -> Option<RosterSource> {
        if let Some(file) = &self.roster.file {
            return Some(RosterSource::File(file.clone()));
        }
        self.roster.base_url.as_ref().map(|base_url| RosterSource::Remote {
            base_url: base_url.clone(),
            api_key_env: self.roster.api_key_env.clone(),
            retry: RetryPolicy {
                max_retries: self.roster.max_retries,
                sleep: Duration::from_millis(self.roster.retry_sleep_ms),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_values() {
        let config = Config::default();
        assert_eq!(config.defaults.home_team, "Home Team");
        assert_eq!(config.defaults.away_team, "Away Team");
        assert_eq!(config.timezone().unwrap(), chrono_tz::America::Toronto);
        assert!(config.defaults.copy_to_clipboard);
        assert_eq!(config.roster_source(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_path_ends_with_expected() {
        assert!(Config::config_path().ends_with("scorekeeper/config.toml"));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config("[defaults]\nhome_team = \"Blue Jays\"\n");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.defaults.home_team, "Blue Jays");
        assert_eq!(config.defaults.away_team, "Away Team");
        assert_eq!(config.roster, RosterConfig::default());
    }

    #[test]
    fn remote_roster_source() {
        let file = write_config(
            "[roster]\nbase_url = \"https://example.invalid\"\nmax_retries = 5\nretry_sleep_ms = 250\n",
        );
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(
            config.roster_source(),
            Some(RosterSource::Remote {
                base_url: "https://example.invalid".to_owned(),
                api_key_env: DEFAULT_API_KEY_ENV.to_owned(),
                retry: RetryPolicy { max_retries: 5, sleep: Duration::from_millis(250) },
            })
        );
    }

    #[test]
    fn validation_rejects_blank_team_names() {
        let file = write_config("[defaults]\naway_team = \"  \"\n");
        match Config::load_from(file.path()) {
            Err(ConfigError::ValidationError { message }) => assert!(message.contains("away")),
            other => panic!("Expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn validation_rejects_unknown_timezone() {
        let mut config = Config::default();
        config.defaults.timezone = "Mars/Olympus_Mons".to_owned();
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn validation_rejects_two_roster_sources() {
        let mut config = Config::default();
        config.roster.file = Some(PathBuf::from("roster.json"));
        config.roster.base_url = Some("https://example.invalid".to_owned());
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn remote_roster_needs_an_api_key() {
        let source = RosterSource::Remote {
            base_url: "https://example.invalid".to_owned(),
            api_key_env: "SCOREKEEPER_TEST_KEY_THAT_IS_NEVER_SET".to_owned(),
            retry: RetryPolicy::default(),
        };
        assert!(matches!(source.load(), Err(RosterError::MissingApiKey { .. })));
    }

    #[test]
    fn unparsable_file() {
        let file = write_config("[defaults\n");
        assert!(matches!(Config::load_from(file.path()), Err(ConfigError::ParseError { .. })));
    }
}
