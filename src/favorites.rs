//! Favorites Store
//!
//! Durable membership tracking of favorited entity ids, partitioned by
//! entity kind and persisted as JSON arrays in browser local storage. One
//! generic implementation covers both kinds.
//!
//! Persistence is best-effort by design: a read that fails or does not
//! parse degrades to "no favorites", and a failed write is only warned to
//! the console — a favorite toggle never surfaces a storage error.

/// Entity kinds that can be favorited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteKind {
    House,
    Spell,
}

impl FavoriteKind {
    /// Local-storage key holding this kind's favorite-id list.
    pub fn storage_key(self) -> &'static str {
        match self {
            FavoriteKind::House => "favorite_houses",
            FavoriteKind::Spell => "favorite_spells",
        }
    }

    /// Lowercase label used in analytics properties.
    pub fn label(self) -> &'static str {
        match self {
            FavoriteKind::House => "house",
            FavoriteKind::Spell => "spell",
        }
    }

    /// Prefix for kind-specific analytics event names.
    pub fn event_prefix(self) -> &'static str {
        match self {
            FavoriteKind::House => "House",
            FavoriteKind::Spell => "Spell",
        }
    }
}

/// Favorite toggle state of a mounted detail view. `Unknown` until the
/// entity load settles; toggling is only meaningful afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteState {
    Unknown,
    Favorited,
    NotFavorited,
}

impl FavoriteState {
    pub fn from_membership(favorited: bool) -> Self {
        if favorited {
            FavoriteState::Favorited
        } else {
            FavoriteState::NotFavorited
        }
    }

    pub fn is_favorited(self) -> bool {
        matches!(self, FavoriteState::Favorited)
    }
}

/// Seam between favorites logic and the durable key-value boundary.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// Browser `localStorage` backend.
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = local_storage().ok_or_else(|| "local storage unavailable".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|_| format!("failed to write key {key}"))
    }
}

/// Favorite-id lists over a key-value backend, one list per kind.
#[derive(Clone, Copy)]
pub struct FavoritesStore<S = LocalStorage> {
    storage: S,
}

impl FavoritesStore<LocalStorage> {
    pub fn browser() -> Self {
        Self::new(LocalStorage)
    }
}

impl<S: KeyValueStorage> FavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persisted id list for a kind. Absent or malformed storage reads as
    /// an empty list, never an error.
    pub fn list(&self, kind: FavoriteKind) -> Vec<String> {
        self.storage
            .get(kind.storage_key())
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn is_favorited(&self, kind: FavoriteKind, id: &str) -> bool {
        self.list(kind).iter().any(|fav| fav == id)
    }

    /// Append `id` if absent, preserving prior order. Idempotent.
    pub fn add(&self, kind: FavoriteKind, id: &str) {
        let mut ids = self.list(kind);
        if ids.iter().any(|fav| fav == id) {
            return;
        }
        ids.push(id.to_string());
        self.persist(kind, &ids);
    }

    /// Remove all occurrences of `id`. Idempotent when absent.
    pub fn remove(&self, kind: FavoriteKind, id: &str) {
        let mut ids = self.list(kind);
        ids.retain(|fav| fav != id);
        self.persist(kind, &ids);
    }

    fn persist(&self, kind: FavoriteKind, ids: &[String]) {
        let raw = match serde_json::to_string(ids) {
            Ok(raw) => raw,
            Err(err) => {
                warn(&format!("favorites: failed to serialize {}: {err}", kind.label()));
                return;
            }
        };
        if let Err(err) = self.storage.set(kind.storage_key(), &raw) {
            warn(&format!("favorites: failed to persist {}: {err}", kind.label()));
        }
    }
}

fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{message}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory stand-in for local storage.
    #[derive(Default)]
    struct MemoryStorage {
        map: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStorage for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.map.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            self.map.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Backend whose writes always fail, reads always empty.
    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
            Err("quota exceeded".to_string())
        }
    }

    #[test]
    fn test_add_then_remove_round_trip() {
        let store = FavoritesStore::new(MemoryStorage::default());

        store.add(FavoriteKind::House, "1");
        assert!(store.is_favorited(FavoriteKind::House, "1"));

        store.remove(FavoriteKind::House, "1");
        assert!(!store.is_favorited(FavoriteKind::House, "1"));
        assert!(store.list(FavoriteKind::House).is_empty());
    }

    #[test]
    fn test_add_is_idempotent() {
        let store = FavoritesStore::new(MemoryStorage::default());

        store.add(FavoriteKind::Spell, "abc");
        store.add(FavoriteKind::Spell, "abc");

        assert_eq!(store.list(FavoriteKind::Spell), vec!["abc".to_string()]);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let store = FavoritesStore::new(MemoryStorage::default());

        store.add(FavoriteKind::House, "3");
        store.add(FavoriteKind::House, "1");
        store.add(FavoriteKind::House, "2");

        assert_eq!(
            store.list(FavoriteKind::House),
            vec!["3".to_string(), "1".to_string(), "2".to_string()]
        );
    }

    #[test]
    fn test_remove_absent_id_leaves_list_unchanged() {
        let store = FavoritesStore::new(MemoryStorage::default());

        store.add(FavoriteKind::House, "1");
        store.remove(FavoriteKind::House, "9");

        assert_eq!(store.list(FavoriteKind::House), vec!["1".to_string()]);
    }

    #[test]
    fn test_kinds_are_partitioned() {
        let store = FavoritesStore::new(MemoryStorage::default());

        store.add(FavoriteKind::House, "x");
        assert!(store.is_favorited(FavoriteKind::House, "x"));
        assert!(!store.is_favorited(FavoriteKind::Spell, "x"));
    }

    #[test]
    fn test_malformed_storage_reads_as_empty() {
        let storage = MemoryStorage::default();
        storage.set("favorite_houses", "not json{{").unwrap();
        storage.set("favorite_spells", "{\"a\":1}").unwrap();
        let store = FavoritesStore::new(storage);

        assert!(store.list(FavoriteKind::House).is_empty());
        assert!(store.list(FavoriteKind::Spell).is_empty());
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let store = FavoritesStore::new(BrokenStorage);
        // Must not panic; persistence silently degrades.
        store.add(FavoriteKind::Spell, "abc");
        store.remove(FavoriteKind::Spell, "abc");
        assert!(store.list(FavoriteKind::Spell).is_empty());
    }
}
