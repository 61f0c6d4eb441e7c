//! `CredentialEntry` and the ordered `RecordSet` that holds them.
//!
//! Entries have no identifier of their own.  They are addressed by their
//! 0-based position in the record set, which is stable within a session
//! but shifts whenever an earlier entry is removed.

use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};

/// One stored credential.
///
/// Serialized as a JSON object with the keys `site`, `username`,
/// `password` and `note`, in that order.  `note` may be absent when
/// reading and then defaults to an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialEntry {
    pub site: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub note: String,
}

impl CredentialEntry {
    pub fn new(
        site: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            username: username.into(),
            password: password.into(),
            note: note.into(),
        }
    }

    /// Case-insensitive substring match on site, username and note.
    ///
    /// The password is never searched.  `keyword` must already be
    /// lowercase.
    fn matches(&self, keyword: &str) -> bool {
        self.site.to_lowercase().contains(keyword)
            || self.username.to_lowercase().contains(keyword)
            || self.note.to_lowercase().contains(keyword)
    }
}

/// Replacement values for an existing entry.  `None` keeps the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryUpdate {
    pub site: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub note: Option<String>,
}

impl EntryUpdate {
    /// `true` if applying this update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.site.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && self.note.is_none()
    }

    fn apply_to(self, entry: &mut CredentialEntry) {
        if let Some(site) = self.site {
            entry.site = site;
        }
        if let Some(username) = self.username {
            entry.username = username;
        }
        if let Some(password) = self.password {
            entry.password = password;
        }
        if let Some(note) = self.note {
            entry.note = note;
        }
    }
}

/// The ordered collection of credential entries; the unit of persistence.
///
/// Insertion order is preserved and duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    entries: Vec<CredentialEntry>,
}

impl RecordSet {
    /// An empty record set (first-run state).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Result<&CredentialEntry> {
        self.entries
            .get(position)
            .ok_or(PassVaultError::PositionOutOfRange {
                position,
                len: self.entries.len(),
            })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CredentialEntry> {
        self.entries.iter()
    }

    /// Append an entry and return its position.
    pub fn push(&mut self, entry: CredentialEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// Apply `update` to the entry at `position`.
    pub fn update(&mut self, position: usize, update: EntryUpdate) -> Result<()> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(position)
            .ok_or(PassVaultError::PositionOutOfRange { position, len })?;
        update.apply_to(entry);
        Ok(())
    }

    /// Remove and return the entry at `position`, shifting later entries
    /// down by one.
    pub fn remove(&mut self, position: usize) -> Result<CredentialEntry> {
        if position >= self.entries.len() {
            return Err(PassVaultError::PositionOutOfRange {
                position,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(position))
    }

    /// Entries whose site, username or note contain `keyword`
    /// (case-insensitive), paired with their positions.
    ///
    /// An empty keyword matches every entry.
    pub fn search(&self, keyword: &str) -> Vec<(usize, &CredentialEntry)> {
        let keyword = keyword.to_lowercase();
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| keyword.is_empty() || entry.matches(&keyword))
            .collect()
    }
}

impl From<Vec<CredentialEntry>> for RecordSet {
    fn from(entries: Vec<CredentialEntry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a CredentialEntry;
    type IntoIter = std::slice::Iter<'a, CredentialEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
