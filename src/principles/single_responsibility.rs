//! Single responsibility: `Journal` manages entries, `PersistenceManager`
//! saves and loads. Neither changes when the other's job does.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PatternError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<String>,
}

impl Journal {
    pub fn new() -> Self {
        Journal::default()
    }

    pub fn add_entry(&mut self, thought: impl Into<String>) {
        self.entries.push(thought.into());
    }

    /// Removes by 0-based position. Later entries are renumbered.
    pub fn remove_entry(&mut self, index: usize) -> Result<String> {
        if index >= self.entries.len() {
            return Err(PatternError::EntryOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", i + 1, entry)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PersistenceManager;

impl PersistenceManager {
    pub fn save_to_file(value: &impl fmt::Display, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, value.to_string()).map_err(|err| PatternError::io(path, err))?;
        debug!(path = %path.display(), "saved");
        Ok(())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        fs::read_to_string(path).map_err(|err| PatternError::io(path, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Journal {
        let mut journal = Journal::new();
        journal.add_entry("I ate Poha today, it was very yummy.");
        journal.add_entry("Now I am learning System Design at the office.");
        journal.add_entry("I think I need to revise my OOP concepts.");
        journal
    }

    #[test]
    fn test_entries_are_numbered_from_one() {
        let journal = sample();
        assert!(journal.to_string().starts_with("1: I ate Poha"));
        assert_eq!(journal.len(), 3);
    }

    #[test]
    fn test_removal_renumbers() {
        let mut journal = sample();
        journal.remove_entry(1).unwrap();

        assert_eq!(
            journal.to_string(),
            "1: I ate Poha today, it was very yummy.\n\
             2: I think I need to revise my OOP concepts."
        );
    }

    #[test]
    fn test_entries_containing_colons_survive_renumbering() {
        let mut journal = Journal::new();
        journal.add_entry("first");
        journal.add_entry("note: keep this colon");
        journal.remove_entry(0).unwrap();
        assert_eq!(journal.to_string(), "1: note: keep this colon");
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut journal = sample();
        let err = journal.remove_entry(3).unwrap_err();
        assert!(matches!(err, PatternError::EntryOutOfRange { index: 3, len: 3 }));
        assert_eq!(journal.len(), 3);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.txt");
        let journal = sample();

        PersistenceManager::save_to_file(&journal, &path).unwrap();
        let loaded = PersistenceManager::load_from_file(&path).unwrap();

        assert_eq!(loaded, journal.to_string());
    }

    #[test]
    fn test_saved_journal_goes_away_with_its_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.txt");
        PersistenceManager::save_to_file(&sample(), &path).unwrap();
        assert!(path.exists());

        drop(dir);
        assert!(!path.exists());
    }

    #[test]
    fn test_persistence_manager_is_a_plain_value() {
        let manager = PersistenceManager::default();
        let copied = manager;
        assert_eq!(format!("{manager:?}"), "PersistenceManager");
        assert_eq!(format!("{copied:?}"), "PersistenceManager");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PersistenceManager::load_from_file(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, PatternError::Io { .. }));
    }
}
