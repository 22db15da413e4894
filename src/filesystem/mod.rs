pub mod entry;
pub mod reader;
pub mod sorter;

pub use entry::{Entry, EntryKind};
pub use reader::read_directory;
pub use sorter::sort_entries;
