use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListingError {
    /// The directory itself could not be opened. Fatal for that path only.
    #[error("cannot open directory '{}': {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `stat` failed for one member. The entry is dropped from the listing.
    #[error("cannot access '{}': {source}", path.display())]
    EntryMetadataUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write error: {0}")]
    Output(#[from] io::Error),
}

impl ListingError {
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::DirectoryUnreadable { path, .. } | Self::EntryMetadataUnavailable { path, .. } => {
                Some(path)
            }
            Self::Output(_) => None,
        }
    }

    /// Whether the run can carry on with other paths after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Output(_))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown color '{0}'")]
    UnknownColor(String),

    #[error("invalid time format '{0}'")]
    InvalidTimeFormat(String),
}
