use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::catalog::{CatalogItem, ItemId};
use crate::storage::{KeyValueStore, StorageError};

pub const DEFAULT_FAVORITES_KEY: &str = "myCatFavorites";

#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("failed to serialize favorites: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write favorites slot {key:?}: {source}")]
    Write {
        key: String,
        #[source]
        source: StorageError,
    },
}

pub type FavoritesResult<T> = std::result::Result<T, FavoritesError>;

/// Favorited items keyed by id, in the order they were added.
///
/// Each entry is a snapshot of the item taken when it was favorited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesSet {
    entries: Vec<CatalogItem>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from stored snapshots, keeping the first entry per id.
    /// Every entry comes out flagged as favorite whatever the stored flag says.
    pub fn from_snapshots(snapshots: Vec<CatalogItem>) -> Self {
        let mut seen = HashSet::with_capacity(snapshots.len());
        let entries = snapshots
            .into_iter()
            .filter(|item| seen.insert(item.id))
            .map(|item| CatalogItem {
                is_favorite: true,
                ..item
            })
            .collect();
        Self { entries }
    }

    pub fn from_json(serialized: &str) -> serde_json::Result<Self> {
        let snapshots: Vec<CatalogItem> = serde_json::from_str(serialized)?;
        Ok(Self::from_snapshots(snapshots))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.entries)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Adds a snapshot of `item` flagged as favorite. No-op when the id is
    /// already present.
    pub fn insert(&mut self, item: &CatalogItem) -> bool {
        if self.contains(item.id) {
            return false;
        }
        self.entries.push(item.with_favorite(true));
        true
    }

    pub fn remove(&mut self, id: ItemId) -> Option<CatalogItem> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Flips membership of `item` and returns the new membership.
    pub fn toggle(&mut self, item: &CatalogItem) -> bool {
        if self.remove(item.id).is_some() {
            false
        } else {
            self.insert(item)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Binds the favorites set to one durable storage slot.
pub struct FavoritesStore {
    backend: Box<dyn KeyValueStore>,
    key: String,
}

impl FavoritesStore {
    pub fn new(backend: impl KeyValueStore + 'static, key: impl Into<String>) -> Self {
        Self {
            backend: Box::new(backend),
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the slot once. Absent, unreadable or malformed content yields
    /// an empty set.
    pub fn load(&self) -> FavoritesSet {
        let serialized = match self.backend.get(&self.key) {
            Ok(Some(serialized)) => serialized,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no stored favorites; starting empty");
                return FavoritesSet::new();
            }
            Err(err) => {
                tracing::warn!(key = %self.key, ?err, "failed to read stored favorites; starting empty");
                return FavoritesSet::new();
            }
        };

        match FavoritesSet::from_json(&serialized) {
            Ok(set) => {
                tracing::info!(key = %self.key, count = set.len(), "restored favorites");
                set
            }
            Err(err) => {
                tracing::warn!(key = %self.key, ?err, "failed to parse stored favorites; starting empty");
                FavoritesSet::new()
            }
        }
    }

    /// Replaces the slot contents with the whole set.
    pub fn save(&self, set: &FavoritesSet) -> FavoritesResult<()> {
        let serialized = set.to_json()?;
        self.backend
            .set(&self.key, &serialized)
            .map_err(|source| FavoritesError::Write {
                key: self.key.clone(),
                source,
            })?;
        tracing::debug!(key = %self.key, count = set.len(), "favorites persisted");
        Ok(())
    }
}

impl fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
