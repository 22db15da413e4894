use std::io::Write;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use tracing::debug;

use crate::error::ListingError;
use crate::filesystem::{read_directory, sort_entries};
use crate::format::{IdentityCache, write_entry};
use crate::options::{DisplaySettings, ListingOptions};

/// Totals for one run across all paths.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListingSummary {
    pub directories: usize,
    pub entries: usize,
    pub failures: usize,
}

/// Drives reader, sorter and formatter for each path.
///
/// Listings go to `out`; per-path failures are reported on `err` and the run
/// carries on.
pub struct Lister<W: Write, E: Write> {
    options: ListingOptions,
    display: DisplaySettings,
    identities: IdentityCache,
    out: W,
    err: E,
    summary: ListingSummary,
}

impl<W: Write, E: Write> Lister<W, E> {
    pub const PROGRAM: &'static str = "dirlist";

    pub fn new(options: ListingOptions, display: DisplaySettings, out: W, err: E) -> Self {
        Self {
            options,
            display,
            identities: IdentityCache::new(),
            out,
            err,
            summary: ListingSummary::default(),
        }
    }

    /// Lists `path` and, with recursion on, every subdirectory under it.
    ///
    /// Only output errors are returned. An unreadable directory is reported
    /// and counted in the summary.
    pub fn list(&mut self, path: &Path) -> Result<(), ListingError> {
        let entries = match read_directory(path, &self.options) {
            Ok(entries) => entries,
            Err(e) => return self.report(e),
        };
        let entries = sort_entries(entries);
        debug!(path = %path.display(), count = entries.len(), "listing directory");

        self.out.write_all(b"\n")?;
        self.out.write_all(path.as_os_str().as_bytes())?;
        self.out.write_all(b":\n")?;

        for entry in &entries {
            write_entry(
                &mut self.out,
                entry,
                &self.options,
                &self.display,
                &mut self.identities,
            )?;
        }
        self.summary.directories += 1;
        self.summary.entries += entries.len();

        if self.options.recursive {
            // the dot guard also keeps "." and ".." out
            for entry in entries.iter().filter(|e| e.metadata.is_dir() && !e.is_hidden()) {
                self.list(&path.join(&entry.name))?;
            }
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn summary(&self) -> &ListingSummary {
        &self.summary
    }

    pub fn finish(mut self) -> Result<(ListingSummary, W, E), ListingError> {
        self.out.flush()?;
        self.err.flush()?;
        Ok((self.summary, self.out, self.err))
    }

    fn report(&mut self, error: ListingError) -> Result<(), ListingError> {
        if !error.is_recoverable() {
            return Err(error);
        }
        debug!(path = ?error.path(), "directory skipped");
        self.out.flush()?;
        writeln!(self.err, "{}: {error}", Self::PROGRAM)?;
        self.summary.failures += 1;
        Ok(())
    }
}
