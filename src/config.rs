use chrono::format::{Item, StrftimeItems};
use crossterm::style::{Color, Colored};
use crossterm::tty::IsTty;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::ConfigError;
use crate::options::{ColorMode, DisplaySettings, ListingOptions};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub defaults: Defaults,
    pub display: Display,
}

/// Flags that are switched on for every run.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub long: bool,
    pub all: bool,
    pub recursive: bool,
    pub inode: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Display {
    pub color: ColorMode,
    pub directory_color: String,
    pub time_format: String,
    pub size_width: usize,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            directory_color: "dark_blue".to_string(),
            time_format: DisplaySettings::DEFAULT_TIME_FORMAT.to_string(),
            size_width: DisplaySettings::DEFAULT_SIZE_WIDTH,
        }
    }
}

impl Config {
    /// `None` when the platform has no config directory.
    pub fn get_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dirlist/config.toml"))
    }

    /// Loads the default config file. A missing file means defaults, a
    /// broken one is reported and ignored.
    pub fn load() -> Self {
        let Some(config_path) = Self::get_path() else {
            return Self::default();
        };

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        // surface bad values now rather than mid-listing
        config.display.directory_color()?;
        config.display.validate_time_format()?;
        Ok(config)
    }

    pub fn listing_options(&self) -> ListingOptions {
        ListingOptions {
            long: self.defaults.long,
            all: self.defaults.all,
            recursive: self.defaults.recursive,
            inode: self.defaults.inode,
        }
    }

    /// `color_override` is the command line's `--color`, which wins over the file.
    pub fn display_settings(&self, color_override: Option<ColorMode>) -> Result<DisplaySettings, ConfigError> {
        let mode = color_override.unwrap_or(self.display.color);
        let use_color = mode.use_color(io::stdout().is_tty(), Colored::ansi_color_disabled());
        self.display_settings_with(use_color)
    }

    fn display_settings_with(&self, use_color: bool) -> Result<DisplaySettings, ConfigError> {
        Ok(DisplaySettings {
            directory_color: if use_color {
                Some(self.display.directory_color()?)
            } else {
                None
            },
            time_format: self.display.time_format.clone(),
            size_width: self.display.size_width,
        })
    }
}

impl Display {
    pub fn directory_color(&self) -> Result<Color, ConfigError> {
        Color::try_from(self.directory_color.as_str())
            .map_err(|_| ConfigError::UnknownColor(self.directory_color.clone()))
    }

    fn validate_time_format(&self) -> Result<(), ConfigError> {
        if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidTimeFormat(self.time_format.clone()));
        }
        Ok(())
    }
}
