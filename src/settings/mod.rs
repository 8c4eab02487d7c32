use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{dims::Dims, maze::MazeConfig, search::SearchKind};

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot access settings file; {0}")]
    Io(#[from] io::Error),
    #[error("cannot parse settings file; {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Warn
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub tick_ms: Option<u64>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub strategy: Option<SearchKind>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

impl Settings {
    pub const DEFAULT_WIDTH: i32 = 100;
    pub const DEFAULT_HEIGHT: i32 = 60;
    pub const DEFAULT_TICK_MS: u64 = 5;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_width(mut self, value: i32) -> Self {
        self.width = Some(value);
        self
    }

    pub fn get_width(&self) -> i32 {
        self.width.unwrap_or(Self::DEFAULT_WIDTH)
    }

    pub fn set_height(mut self, value: i32) -> Self {
        self.height = Some(value);
        self
    }

    pub fn get_height(&self) -> i32 {
        self.height.unwrap_or(Self::DEFAULT_HEIGHT)
    }

    pub fn set_tick_ms(mut self, value: u64) -> Self {
        self.tick_ms = Some(value);
        self
    }

    pub fn get_tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.unwrap_or(Self::DEFAULT_TICK_MS))
    }

    pub fn set_seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_strategy(mut self, value: SearchKind) -> Self {
        self.strategy = Some(value);
        self
    }

    pub fn get_strategy(&self) -> SearchKind {
        self.strategy.unwrap_or_default()
    }

    pub fn set_log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn maze_config(&self) -> MazeConfig {
        MazeConfig {
            size: Dims(self.get_width(), self.get_height()),
            seed: self.get_seed(),
        }
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gridmaze")
            .join("settings.ron")
    }

    /// Reads the settings file, creating it with the defaults when it does not exist yet.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(content) => content.parse(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Self::reset_config(path)?;
                DEFAULT_SETTINGS.parse()
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}

impl FromStr for Settings {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(options.from_str(s)?)
    }
}
