use chrono::{DateTime, Local};
use std::ffi::{OsStr, OsString};
use std::fs::Metadata;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::MetadataExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Symlinks are followed, so this covers devices, pipes and sockets.
    Other,
}

/// Point-in-time `stat` capture for one directory member.
#[derive(Debug, Clone)]
pub struct MetadataSnapshot {
    pub kind: EntryKind,
    /// Owner/group/other rwx bits only. Special bits are masked off.
    pub permissions: u32,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    pub modified: DateTime<Local>,
    pub inode: u64,
}

impl MetadataSnapshot {
    pub const PERMISSION_MASK: u32 = 0o777;

    pub fn from_metadata(metadata: &Metadata) -> io::Result<Self> {
        let file_type = metadata.file_type();
        let kind = if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };

        Ok(Self {
            kind,
            permissions: metadata.mode() & Self::PERMISSION_MASK,
            nlink: metadata.nlink(),
            uid: metadata.uid(),
            gid: metadata.gid(),
            size: metadata.len(),
            modified: metadata.modified()?.into(),
            inode: metadata.ino(),
        })
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

#[derive(Debug, Clone)]
pub struct Entry {
    pub name: OsString,
    pub metadata: MetadataSnapshot,
}

impl Entry {
    pub fn new(name: impl Into<OsString>, metadata: MetadataSnapshot) -> Self {
        Self {
            name: name.into(),
            metadata,
        }
    }

    pub fn name_bytes(&self) -> &[u8] {
        self.name.as_bytes()
    }

    pub fn is_hidden(&self) -> bool {
        is_hidden_name(&self.name)
    }
}

pub fn is_hidden_name(name: &OsStr) -> bool {
    name.as_bytes().first() == Some(&b'.')
}
