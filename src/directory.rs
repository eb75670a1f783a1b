//! The in-memory phone book.
//!
//! A [`Directory`] is an append-only, insertion-ordered list of [`Entry`]
//! values. Duplicate checks and searches are linear scans.
//!
//! The directory has no internal locking. `add_entry` takes `&mut self`, so
//! sharing one across threads requires wrapping it in a `Mutex` or `RwLock`.

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Entry;

/// An ordered collection of phone book entries with unique phone numbers.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    entries: Vec<Entry>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a new entry.
    ///
    /// Checks run in order and stop at the first failure:
    /// 1. every field must be non-blank
    /// 2. the phone number must be digits only
    /// 3. the phone number must not already be present
    ///
    /// The directory is left untouched when any check fails.
    ///
    /// # Errors
    ///
    /// `DirectoryError::InvalidArgument` for 1 and 2,
    /// `DirectoryError::DuplicateEntry` for 3.
    pub fn add_entry(
        &mut self,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
    ) -> DirectoryResult<()> {
        let entry = Entry::new(first_name, last_name, phone_number)?;

        if self.contains_phone(entry.phone_number()) {
            return Err(DirectoryError::DuplicateEntry {
                phone_number: entry.phone_number().to_string(),
            });
        }

        self.entries.push(entry);
        Ok(())
    }

    /// Return every entry matching `query`, in insertion order.
    ///
    /// An entry matches when its first or last name contains `query`
    /// ignoring case, or its phone number contains `query` literally. The
    /// empty query matches every entry.
    pub fn search(&self, query: &str) -> Vec<&Entry> {
        let lowered = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.matches(query, &lowered))
            .collect()
    }

    /// Whether an entry with exactly this phone number exists.
    pub fn contains_phone(&self, phone_number: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.phone_number() == phone_number)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
