use crate::consts;
use crate::game::Grid;
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Simulation parameters
    #[serde(default)]
    pub(crate) game: GameSettings,

    /// Where & how much to log
    #[serde(default)]
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if the file's contents
    /// could not be deserialized, or if the settings are out of range.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        let config = toml::from_str::<Config>(&content)?;
        config.game.validate()?;
        Ok(config)
    }

    /// Return the log file path: the one given in the configuration or, if
    /// that is not set, a file in the local data directory.
    pub(crate) fn log_file(&self) -> Option<PathBuf> {
        self.log.file.clone().or_else(|| {
            dirs::data_local_dir().map(|p| p.join("gridsnake").join("gridsnake.log"))
        })
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct GameSettings {
    /// Grid width, walls included
    pub(crate) width: u16,

    /// Grid height, walls included
    pub(crate) height: u16,

    pub(crate) initial_length: u16,

    /// Milliseconds between ticks
    pub(crate) tick_ms: u64,

    /// Fixed seed for food placement.  Random if unset.
    pub(crate) seed: Option<u64>,
}

impl GameSettings {
    pub(crate) fn grid(&self) -> Grid {
        Grid {
            width: self.width,
            height: self.height,
        }
    }

    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Check that the initial snake fits in the interior with room left over
    /// for food, and that time actually passes between ticks.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::Invalid(String::from(
                "tick-ms must be greater than zero",
            )));
        }
        if self.initial_length == 0 {
            return Err(ConfigError::Invalid(String::from(
                "initial-length must be at least 1",
            )));
        }
        if u32::from(self.width) < u32::from(self.initial_length) + 3 {
            return Err(ConfigError::Invalid(format!(
                "width {} is too narrow for a snake of length {}; need at least {}",
                self.width,
                self.initial_length,
                u32::from(self.initial_length) + 3
            )));
        }
        if self.height < 3 {
            return Err(ConfigError::Invalid(format!(
                "height {} is too short; need at least 3",
                self.height
            )));
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> GameSettings {
        GameSettings {
            width: consts::DEFAULT_GRID_WIDTH,
            height: consts::DEFAULT_GRID_HEIGHT,
            initial_length: consts::INITIAL_SNAKE_LENGTH,
            tick_ms: consts::DEFAULT_TICK_MILLIS,
            seed: None,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct LogConfig {
    /// File to write the log to
    pub(crate) file: Option<PathBuf>,

    pub(crate) level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
