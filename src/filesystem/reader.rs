use std::ffi::OsString;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ListingError;
use crate::filesystem::entry::{Entry, MetadataSnapshot, is_hidden_name};
use crate::options::ListingOptions;

/// Reads the members of `path` in platform order, unsorted.
///
/// Members whose metadata cannot be read are dropped. Only a failure to open
/// the directory itself is an error.
pub fn read_directory(path: &Path, options: &ListingOptions) -> Result<Vec<Entry>, ListingError> {
    let dir = fs::read_dir(path).map_err(|source| ListingError::DirectoryUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();

    // read_dir never yields these two, readdir(3) does
    if options.all {
        for name in [".", ".."] {
            if let Some(entry) = stat_entry(path, OsString::from(name)) {
                entries.push(entry);
            }
        }
    }

    for dir_entry in dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping unreadable directory member");
                continue;
            }
        };

        let name = dir_entry.file_name();
        if !options.all && is_hidden_name(&name) {
            continue;
        }

        if let Some(entry) = stat_entry(path, name) {
            entries.push(entry);
        }
    }

    Ok(entries)
}

fn stat_entry(dir: &Path, name: OsString) -> Option<Entry> {
    let full_path = dir.join(&name);
    let snapshot = fs::metadata(&full_path).and_then(|m| MetadataSnapshot::from_metadata(&m));

    match snapshot {
        Ok(metadata) => Some(Entry::new(name, metadata)),
        Err(source) => {
            let err = ListingError::EntryMetadataUnavailable {
                path: full_path,
                source,
            };
            debug!("{err}; entry dropped");
            None
        }
    }
}
