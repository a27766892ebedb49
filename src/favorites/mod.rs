//! Durable favorites set with change notification.
//!
//! The store is the single source of truth for favorite status. Every
//! mutation persists the full identifier list and then raises a
//! payload-less change signal; subscribers respond by re-reading the
//! store, never by applying a delta. A file watcher provides the same
//! invalidation for writes made by other processes sharing the file.

mod signal;
mod store;
mod watcher;

pub use signal::{ChangeSignal, Subscription};
pub use store::FavoritesStore;
pub use watcher::{FavoritesWatcher, WatcherError};
