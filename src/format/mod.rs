pub mod identity;

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, ResetColor, SetForegroundColor};

use crate::filesystem::{Entry, EntryKind};
use crate::options::{DisplaySettings, ListingOptions};

pub use identity::IdentityCache;

const PERMISSION_BITS: [(u32, char); 9] = [
    (0o400, 'r'),
    (0o200, 'w'),
    (0o100, 'x'),
    (0o040, 'r'),
    (0o020, 'w'),
    (0o010, 'x'),
    (0o004, 'r'),
    (0o002, 'w'),
    (0o001, 'x'),
];

/// How an entry's name is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    Plain,
    Directory,
}

impl NameStyle {
    pub fn for_entry(entry: &Entry) -> Self {
        if entry.metadata.is_dir() {
            Self::Directory
        } else {
            Self::Plain
        }
    }

    pub fn color(self, display: &DisplaySettings) -> Option<Color> {
        match self {
            Self::Plain => None,
            Self::Directory => display.directory_color,
        }
    }
}

/// `drwxr-xr-x` style mode string. Setuid, setgid and sticky are not shown.
pub fn permission_string(kind: EntryKind, permissions: u32) -> String {
    let mut s = String::with_capacity(10);
    s.push(if kind == EntryKind::Dir { 'd' } else { '-' });
    for (bit, ch) in PERMISSION_BITS {
        s.push(if permissions & bit != 0 { ch } else { '-' });
    }
    s
}

/// Writes one entry as a single line.
pub fn write_entry<W: Write>(
    out: &mut W,
    entry: &Entry,
    options: &ListingOptions,
    display: &DisplaySettings,
    identities: &mut IdentityCache,
) -> io::Result<()> {
    let meta = &entry.metadata;

    if options.inode {
        write!(out, "{} ", meta.inode)?;
    }

    if options.long {
        write!(out, "{}", permission_string(meta.kind, meta.permissions))?;
        write!(out, " {}", meta.nlink)?;
        write!(out, " {}", identities.user_name(meta.uid))?;
        write!(out, " {}", identities.group_name(meta.gid))?;
        write!(out, " {:>width$}", meta.size, width = display.size_width)?;
        write!(out, " {}", meta.modified.format(&display.time_format))?;
    }

    out.write_all(b" ")?;
    write_name(out, entry, display)?;
    out.write_all(b"\n")
}

fn write_name<W: Write>(out: &mut W, entry: &Entry, display: &DisplaySettings) -> io::Result<()> {
    match NameStyle::for_entry(entry).color(display) {
        Some(color) => {
            queue!(out, SetForegroundColor(color))?;
            out.write_all(entry.name_bytes())?;
            queue!(out, ResetColor)
        }
        None => out.write_all(entry.name_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::entry::MetadataSnapshot;
    use chrono::{Local, TimeZone};

    const UNKNOWN_ID: u32 = 3_999_999_002;

    fn snapshot(kind: EntryKind, permissions: u32, size: u64) -> MetadataSnapshot {
        MetadataSnapshot {
            kind,
            permissions,
            nlink: 1,
            uid: UNKNOWN_ID,
            gid: UNKNOWN_ID,
            size,
            modified: Local.with_ymd_and_hms(2024, 3, 7, 14, 5, 0).unwrap(),
            inode: 123456,
        }
    }

    fn render(entry: &Entry, options: ListingOptions, display: &DisplaySettings) -> String {
        let mut out = Vec::new();
        let mut ids = IdentityCache::new();
        write_entry(&mut out, entry, &options, display, &mut ids).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_permission_strings() {
        assert_eq!(permission_string(EntryKind::File, 0o644), "-rw-r--r--");
        assert_eq!(permission_string(EntryKind::Dir, 0o755), "drwxr-xr-x");
        assert_eq!(permission_string(EntryKind::Other, 0o000), "----------");
        assert_eq!(permission_string(EntryKind::File, 0o777), "-rwxrwxrwx");
        assert_eq!(permission_string(EntryKind::File, 0o421), "-r---w---x");
    }

    #[test]
    fn test_short_format_is_space_and_name() {
        let entry = Entry::new("a.txt", snapshot(EntryKind::File, 0o644, 42));
        let line = render(&entry, ListingOptions::default(), &DisplaySettings::default());
        assert_eq!(line, " a.txt\n");
    }

    #[test]
    fn test_inode_comes_first() {
        let entry = Entry::new("a.txt", snapshot(EntryKind::File, 0o644, 42));
        let options = ListingOptions {
            inode: true,
            ..Default::default()
        };
        let line = render(&entry, options, &DisplaySettings::default());
        assert_eq!(line, "123456  a.txt\n");
    }

    #[test]
    fn test_long_format_regular_file() {
        let entry = Entry::new("a.txt", snapshot(EntryKind::File, 0o644, 42));
        let options = ListingOptions {
            long: true,
            ..Default::default()
        };
        let line = render(&entry, options, &DisplaySettings::default());
        assert_eq!(
            line,
            "-rw-r--r-- 1 3999999002 3999999002      42 Mar 07 14:05 a.txt\n"
        );
    }

    #[test]
    fn test_long_format_with_inode() {
        let entry = Entry::new("a.txt", snapshot(EntryKind::File, 0o600, 1234567890));
        let options = ListingOptions {
            long: true,
            inode: true,
            ..Default::default()
        };
        let line = render(&entry, options, &DisplaySettings::plain());
        assert!(line.starts_with("123456 -rw------- 1 "));
        // wider than the minimum width, not truncated
        assert!(line.contains(" 1234567890 Mar 07 14:05 a.txt\n"));
    }

    #[test]
    fn test_directory_name_is_colored_and_reset() {
        let entry = Entry::new("sub", snapshot(EntryKind::Dir, 0o755, 4096));
        let line = render(&entry, ListingOptions::default(), &DisplaySettings::default());

        let mut expected = b" ".to_vec();
        queue!(expected, SetForegroundColor(DisplaySettings::DEFAULT_DIRECTORY_COLOR)).unwrap();
        expected.extend_from_slice(b"sub");
        queue!(expected, ResetColor).unwrap();
        expected.push(b'\n');

        assert_eq!(line.as_bytes(), expected.as_slice());
        assert!(line.ends_with("\x1b[0m\n"));
    }

    #[test]
    fn test_plain_display_never_colors() {
        let entry = Entry::new("sub", snapshot(EntryKind::Dir, 0o755, 4096));
        let line = render(&entry, ListingOptions::default(), &DisplaySettings::plain());
        assert_eq!(line, " sub\n");
    }

    #[test]
    fn test_custom_layout_settings() {
        let entry = Entry::new("a.txt", snapshot(EntryKind::File, 0o644, 42));
        let display = DisplaySettings {
            directory_color: None,
            time_format: "%Y-%m-%d".to_string(),
            size_width: 3,
        };
        let options = ListingOptions {
            long: true,
            ..Default::default()
        };
        let line = render(&entry, options, &display);
        assert!(line.ends_with("  42 2024-03-07 a.txt\n"));
    }

    #[test]
    fn test_non_utf8_name_written_raw() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let name = OsString::from_vec(vec![b'f', 0xff, b'o']);
        let entry = Entry::new(name, snapshot(EntryKind::File, 0o644, 0));
        let mut out = Vec::new();
        write_entry(
            &mut out,
            &entry,
            &ListingOptions::default(),
            &DisplaySettings::default(),
            &mut IdentityCache::new(),
        )
        .unwrap();
        assert_eq!(out, vec![b' ', b'f', 0xff, b'o', b'\n']);
    }
}
