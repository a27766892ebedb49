//! The durable favorite-identifier set.
//!
//! Persisted as a single JSON array of strings, rewritten whole on every
//! mutation. The set stays small (tens of entries), so full rewrites are
//! cheaper than any delta scheme would be. Missing or corrupt data reads
//! as an empty set: favorites are non-critical, and nothing here is
//! allowed to take the UI down.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::favorites::signal::{ChangeSignal, Subscription};

/// Process-local store for the favorite set.
///
/// Clones share the same file and the same change signal. Mutations are
/// synchronous: by the time `add`/`remove` returns, the file has been
/// rewritten and every subscriber has been notified.
#[derive(Clone)]
pub struct FavoritesStore {
    path: PathBuf,
    signal: ChangeSignal,
}

impl FavoritesStore {
    /// Store backed by an explicit file path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            signal: ChangeSignal::new(),
        }
    }

    /// Store backed by the default per-user data file.
    pub fn open_default() -> Self {
        Self::new(Self::data_path())
    }

    /// `~/.local/share/reelscout/favorites.json` on Linux, or the
    /// platform equivalent. Falls back to the current directory.
    pub fn data_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("reelscout").join("favorites.json")
    }

    /// Path of the backing file, for external-change watching.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Attach a listener to the change signal.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.signal.subscribe(listener)
    }

    /// Current favorites in insertion order.
    ///
    /// Never fails: a missing file or unparseable content reads as empty.
    pub fn list(&self) -> Vec<String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&content) {
            Ok(ids) => ids,
            Err(err) => {
                tracing::debug!("ignoring corrupt favorites file: {}", err);
                Vec::new()
            }
        }
    }

    /// Whether `id` is currently a favorite.
    pub fn contains(&self, id: &str) -> bool {
        self.list().iter().any(|fav| fav == id)
    }

    /// Append `id` to the set.
    ///
    /// Adding an existing member is a no-op: the set is returned
    /// unchanged and no signal fires. Otherwise the new set is persisted
    /// and the change signal fires before this returns.
    pub fn add(&self, id: &str) -> Vec<String> {
        let mut favorites = self.list();
        if favorites.iter().any(|fav| fav == id) {
            return favorites;
        }

        favorites.push(id.to_string());
        self.persist(&favorites);
        self.signal.emit();
        favorites
    }

    /// Remove `id` from the set.
    ///
    /// The result is persisted and the change signal fires whether or
    /// not `id` was a member.
    pub fn remove(&self, id: &str) -> Vec<String> {
        let mut favorites = self.list();
        favorites.retain(|fav| fav != id);
        self.persist(&favorites);
        self.signal.emit();
        favorites
    }

    /// Write the full set. Persistence failure degrades to a warning;
    /// the in-memory result is still returned to the caller and the
    /// signal still fires.
    fn persist(&self, favorites: &[String]) {
        if let Err(err) = self.write_file(favorites) {
            tracing::warn!(
                "failed to persist favorites to {}: {}",
                self.path.display(),
                err
            );
        }
    }

    fn write_file(&self, favorites: &[String]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)?;

        // Exclusive lock guards against interleaved writes from another
        // process sharing the same file. Truncate only after the lock
        // is held.
        file.lock_exclusive()?;
        file.set_len(0)?;
        let body = serde_json::to_vec(favorites)?;
        file.write_all(&body)?;
        file.flush()
    }
}
