use crate::filesystem::entry::Entry;

/// Orders entries by the raw bytes of their names.
///
/// `sort_by` is a stable merge sort, so entries that compare equal keep the
/// order they were read in.
pub fn sort_entries(mut entries: Vec<Entry>) -> Vec<Entry> {
    entries.sort_by(|a, b| a.name_bytes().cmp(b.name_bytes()));
    entries
}
