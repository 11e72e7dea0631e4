//! Preference store: theme plus read and favorite books

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexSet;

use crate::{
    models::preferences::{toggle_membership, PreferenceSet, Theme},
    storage::KeyValueStorage,
};

pub const THEME_KEY: &str = "theme";
pub const READ_BOOKS_KEY: &str = "readBooks";
pub const FAVORITE_BOOKS_KEY: &str = "favoriteBooks";

/// Single preference store, shared by reference with every consumer.
///
/// State lives in memory and every change is written through to the storage
/// synchronously. When the storage is unavailable reads fall back to
/// defaults and writes are dropped with a warning; the in-memory state keeps
/// working for the rest of the session.
#[derive(Clone)]
pub struct PreferenceStore {
    storage: Arc<dyn KeyValueStorage>,
    state: Arc<RwLock<PreferenceSet>>,
}

impl PreferenceStore {
    /// Create the store and load whatever the storage holds
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let state = load(storage.as_ref());
        tracing::debug!(
            "Preferences loaded: theme={}, {} read, {} favorite",
            state.theme,
            state.read.len(),
            state.favorites.len()
        );
        Self {
            storage,
            state: Arc::new(RwLock::new(state)),
        }
    }

    pub fn snapshot(&self) -> PreferenceSet {
        self.read().clone()
    }

    pub fn theme(&self) -> Theme {
        self.read().theme
    }

    pub fn set_theme(&self, theme: Theme) {
        let mut state = self.write();
        state.theme = theme;
        self.persist(THEME_KEY, theme.as_str().to_string());
    }

    /// Switch between light and dark; returns the new theme
    pub fn toggle_theme(&self) -> Theme {
        let mut state = self.write();
        state.theme = state.theme.toggled();
        self.persist(THEME_KEY, state.theme.as_str().to_string());
        state.theme
    }

    pub fn is_read(&self, book_id: &str) -> bool {
        self.read().read.contains(book_id)
    }

    /// Flip the read flag of `book_id`; returns whether it is now read
    pub fn toggle_read(&self, book_id: &str) -> bool {
        let mut state = self.write();
        let now_read = toggle_membership(&mut state.read, book_id);
        self.persist_ids(READ_BOOKS_KEY, &state.read);
        now_read
    }

    pub fn is_favorite(&self, book_id: &str) -> bool {
        self.read().favorites.contains(book_id)
    }

    /// Flip the favorite flag of `book_id`; returns whether it is now a favorite
    pub fn toggle_favorite(&self, book_id: &str) -> bool {
        let mut state = self.write();
        let now_favorite = toggle_membership(&mut state.favorites, book_id);
        self.persist_ids(FAVORITE_BOOKS_KEY, &state.favorites);
        now_favorite
    }

    fn persist_ids(&self, key: &str, ids: &IndexSet<String>) {
        match serde_json::to_string(ids) {
            Ok(json) => self.persist(key, json),
            Err(e) => tracing::warn!("Failed to encode {}: {}", key, e),
        }
    }

    fn persist(&self, key: &str, value: String) {
        if let Err(e) = self.storage.set(key, &value) {
            tracing::warn!("Preference {} kept for this session only: {}", key, e);
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, PreferenceSet> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, PreferenceSet> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn load(storage: &dyn KeyValueStorage) -> PreferenceSet {
    let theme = read_key(storage, THEME_KEY)
        .and_then(|raw| match raw.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!("Ignoring stored theme: {}", e);
                None
            }
        })
        .unwrap_or_default();

    PreferenceSet {
        theme,
        read: read_ids(storage, READ_BOOKS_KEY),
        favorites: read_ids(storage, FAVORITE_BOOKS_KEY),
    }
}

fn read_key(storage: &dyn KeyValueStorage, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Using default for {}: {}", key, e);
            None
        }
    }
}

fn read_ids(storage: &dyn KeyValueStorage, key: &str) -> IndexSet<String> {
    read_key(storage, key)
        .and_then(|raw| match serde_json::from_str::<IndexSet<String>>(&raw) {
            Ok(ids) => Some(ids),
            Err(e) => {
                tracing::warn!("Ignoring corrupt {}: {}", key, e);
                None
            }
        })
        .unwrap_or_default()
}
