use crossterm::style::Color;
use serde::{Deserialize, Serialize};

/// The four listing flags. Built once by the shell, read-only afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingOptions {
    pub long: bool,
    pub all: bool,
    pub recursive: bool,
    pub inode: bool,
}

impl ListingOptions {
    /// Flags are additive: a flag set on either side stays set.
    pub fn merge(self, other: Self) -> Self {
        Self {
            long: self.long || other.long,
            all: self.all || other.all,
            recursive: self.recursive || other.recursive,
            inode: self.inode || other.inode,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Always,
    Never,
    Auto,
}

impl ColorMode {
    /// `NO_COLOR` wins over `always` as well as `auto`.
    pub fn use_color(self, is_tty: bool, no_color: bool) -> bool {
        match self {
            Self::Never => false,
            _ if no_color => false,
            Self::Always => true,
            Self::Auto => is_tty,
        }
    }
}

/// Render-time settings for the formatter.
#[derive(Debug, Clone)]
pub struct DisplaySettings {
    /// `None` disables colored names.
    pub directory_color: Option<Color>,
    pub time_format: String,
    pub size_width: usize,
}

impl DisplaySettings {
    pub const DEFAULT_TIME_FORMAT: &'static str = "%b %d %H:%M";
    pub const DEFAULT_SIZE_WIDTH: usize = 7;
    pub const DEFAULT_DIRECTORY_COLOR: Color = Color::DarkBlue;

    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            directory_color: None,
            ..Self::default()
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            directory_color: Some(Self::DEFAULT_DIRECTORY_COLOR),
            time_format: Self::DEFAULT_TIME_FORMAT.to_string(),
            size_width: Self::DEFAULT_SIZE_WIDTH,
        }
    }
}
