//! The team roster: an ordered, bounded, deduplicated list of entries
//!
//! The roster owns the [`ImageCache`] for its members so that removing an
//! entry also evicts its sprites.

use thiserror::Error;

use crate::image_cache::ImageCache;
use crate::models::TeamEntry;

/// Maximum number of entries in a team
pub const MAX_TEAM_SIZE: usize = 6;

/// Error when a roster mutation is rejected. The roster is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("team is full (max {} entries)", MAX_TEAM_SIZE)]
    Full,
    #[error("{0} is already in the team")]
    Duplicate(String),
    #[error("no team slot at index {index} (team has {len} entries)")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug)]
pub struct Roster {
    entries: Vec<TeamEntry>,
    cache: ImageCache,
}

impl Roster {
    pub fn new(cache: ImageCache) -> Self {
        Self { entries: Vec::with_capacity(MAX_TEAM_SIZE), cache }
    }

    /// Append an entry at the end of the team.
    ///
    /// # Errors
    ///
    /// * `RosterError::Full` if the team already has six entries
    /// * `RosterError::Duplicate` if an entry with the same id or
    ///   (case-insensitive) name is present
    pub fn add(&mut self, entry: TeamEntry) -> Result<(), RosterError> {
        if self.is_full() {
            return Err(RosterError::Full);
        }
        if self
            .entries
            .iter()
            .any(|e| e.id == entry.id || e.name.eq_ignore_ascii_case(&entry.name))
        {
            return Err(RosterError::Duplicate(entry.display_name()));
        }
        tracing::debug!(id = entry.id, name = %entry.name, "added to roster");
        self.entries.push(entry);
        Ok(())
    }

    /// Remove the entry at `index`, keeping the order of the others, and
    /// evict its cached sprites.
    pub fn remove_at(&mut self, index: usize) -> Result<TeamEntry, RosterError> {
        if index >= self.entries.len() {
            return Err(RosterError::OutOfRange { index, len: self.entries.len() });
        }
        let entry = self.entries.remove(index);
        self.cache.evict(entry.id);
        tracing::debug!(id = entry.id, name = %entry.name, "removed from roster");
        Ok(entry)
    }

    /// Whether an entry matches `key` by case-insensitive name or by id.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.matches_key(key))
    }

    pub fn get(&self, index: usize) -> Option<&TeamEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[TeamEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_TEAM_SIZE
    }

    /// Sprite cache for the current members.
    pub fn cache(&self) -> &ImageCache {
        &self.cache
    }
}
