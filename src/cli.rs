use clap::Parser;
use std::path::PathBuf;

use crate::options::{ColorMode, ListingOptions};

#[derive(Debug, Parser)]
#[command(name = "dirlist", version, about = "List directory contents, sorted by name")]
pub struct Cli {
    /// Use the long listing format
    #[arg(short = 'l')]
    pub long: bool,

    /// Include entries whose names begin with '.'
    #[arg(short = 'a')]
    pub all: bool,

    /// List subdirectories recursively
    #[arg(short = 'R')]
    pub recursive: bool,

    /// Print the inode number of each entry
    #[arg(short = 'i')]
    pub inode: bool,

    /// When to color directory names
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directories to list
    #[arg(required = true, value_name = "DIR")]
    pub paths: Vec<PathBuf>,
}

impl Cli {
    pub fn listing_options(&self) -> ListingOptions {
        ListingOptions {
            long: self.long,
            all: self.all,
            recursive: self.recursive,
            inode: self.inode,
        }
    }
}
