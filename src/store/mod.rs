//! The entry collection and its persistence boundary.

pub mod blob;

pub use blob::{BlobStore, ENTRIES_KEY, FileStore};

use crate::errors::{AppError, AppResult};
use crate::models::TimeEntry;
use crate::ui::messages::warning;

/// Ordered collection of saved entries, newest first.
///
/// Invariant: at most one entry per calendar day. Identity is the day key
/// ("YYYY-MM-DD"), never instant equality.
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Vec<TimeEntry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(mut entries: Vec<TimeEntry>) -> Self {
        sort_newest_first(&mut entries);
        Self { entries }
    }

    /// Seed the collection from persisted storage.
    ///
    /// Missing data yields an empty collection; malformed data is a
    /// non-fatal condition and also falls back to empty, with a warning.
    pub fn load(store: &dyn BlobStore) -> Self {
        match store.read(ENTRIES_KEY) {
            Ok(Some(raw)) => match serde_json::from_slice::<Vec<TimeEntry>>(&raw) {
                Ok(entries) => Self::from_entries(entries),
                Err(e) => {
                    warning(format!(
                        "Saved entries could not be parsed ({}). Starting with an empty collection.",
                        e
                    ));
                    Self::new()
                }
            },
            Ok(None) => Self::new(),
            Err(e) => {
                warning(format!(
                    "Saved entries could not be read ({}). Starting with an empty collection.",
                    e
                ));
                Self::new()
            }
        }
    }

    /// Mirror the full collection back to persisted storage.
    pub fn persist(&self, store: &dyn BlobStore) -> AppResult<()> {
        let blob = serde_json::to_vec_pretty(&self.entries)
            .map_err(|e| AppError::Storage(format!("failed to serialize entries: {}", e)))?;
        store.write(ENTRIES_KEY, &blob)
    }

    /// Insert or replace the entry for `entry`'s calendar day, then restore
    /// newest-first ordering.
    pub fn upsert(&mut self, entry: TimeEntry) {
        let key = entry.day_key();

        match self.entries.iter_mut().find(|e| e.day_key() == key) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }

        sort_newest_first(&mut self.entries);
    }

    /// Remove the entry for `day_key`, if any. Returns whether an entry was
    /// removed; an absent day key is a no-op, not an error.
    pub fn remove(&mut self, day_key: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.day_key() != day_key);
        self.entries.len() < before
    }

    pub fn find_by_day(&self, day_key: &str) -> Option<&TimeEntry> {
        self.entries.iter().find(|e| e.day_key() == day_key)
    }

    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_overtime(&self) -> f64 {
        let sum: f64 = self.entries.iter().map(|e| e.overtime_hours).sum();
        crate::core::calculator::round2(sum)
    }

    pub fn total_regular_hours(&self) -> f64 {
        let sum: f64 = self.entries.iter().map(|e| e.regular_hours()).sum();
        crate::core::calculator::round2(sum)
    }
}

fn sort_newest_first(entries: &mut [TimeEntry]) {
    // stable: same-day ties keep their relative order
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}
