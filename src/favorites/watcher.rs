//! External-change detection for the favorites file.
//!
//! Another process sharing the same favorites file (a second instance of
//! this app, or anything else editing it) has no way to reach our
//! in-process change signal. Watching the file gives us the equivalent
//! notification: on any change we emit an invalidation event, and the
//! UI re-reads the store, the same invalidate-and-re-read handling as
//! the in-process signal, with no merge logic.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use thiserror::Error;

use crate::ui::events::AppEvent;

/// Errors that can occur when starting the watcher.
#[derive(Debug, Error)]
pub enum WatcherError {
    #[error("Failed to create file watcher: {0}")]
    WatcherInit(#[from] notify::Error),

    #[error("Favorites path has no parent directory")]
    NoParentDir,
}

/// Watches the favorites file and reports changes to the UI loop.
///
/// Runs in a background thread with debouncing so bursts of file events
/// (and our own writes, which the OS watcher also reports) collapse into
/// a single `FavoritesInvalidated`. Re-reading is idempotent, so a
/// self-originated notification is harmless.
pub struct FavoritesWatcher {
    // Dropping the watcher stops event delivery; the debounce thread
    // then exits on channel disconnect.
    _watcher: RecommendedWatcher,
    _debounce_handle: thread::JoinHandle<()>,
}

impl FavoritesWatcher {
    /// Start watching `path`. The parent directory is watched rather
    /// than the file itself so deletion and recreation are still seen.
    pub fn start(
        path: PathBuf,
        event_tx: mpsc::Sender<AppEvent>,
        debounce_ms: u64,
    ) -> Result<Self, WatcherError> {
        let watch_dir = match path.parent() {
            Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
            Some(parent) => parent,
            None => return Err(WatcherError::NoParentDir),
        };
        // The directory must exist before notify can watch it.
        let _ = std::fs::create_dir_all(watch_dir);

        let filename = path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();

        let (raw_tx, raw_rx) = mpsc::channel();
        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                if let Ok(event) = result {
                    let _ = raw_tx.send(event);
                }
            },
            notify::Config::default(),
        )?;
        watcher.watch(watch_dir, RecursiveMode::NonRecursive)?;

        let debounce_handle = thread::spawn(move || {
            debounce_loop(raw_rx, event_tx, filename, debounce_ms);
        });

        Ok(Self {
            _watcher: watcher,
            _debounce_handle: debounce_handle,
        })
    }
}

/// Group rapid file events; emit one invalidation after `debounce_ms`
/// of quiet.
fn debounce_loop(
    rx: mpsc::Receiver<Event>,
    event_tx: mpsc::Sender<AppEvent>,
    filename: OsString,
    debounce_ms: u64,
) {
    let debounce = Duration::from_millis(debounce_ms);
    let mut pending: Option<Instant> = None;

    loop {
        let timeout = if pending.is_some() {
            debounce
        } else {
            Duration::from_secs(60)
        };

        match rx.recv_timeout(timeout) {
            Ok(event) => {
                if affects_file(&event, &filename) {
                    pending = Some(Instant::now());
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                if let Some(last) = pending {
                    if last.elapsed() >= debounce {
                        if event_tx.send(AppEvent::FavoritesInvalidated).is_err() {
                            // UI loop is gone.
                            break;
                        }
                        pending = None;
                    }
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

fn affects_file(event: &Event, filename: &OsString) -> bool {
    let relevant = matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    );
    if !relevant {
        return false;
    }

    event.paths.iter().any(|p| {
        p.file_name()
            .map(|name| name == filename.as_os_str())
            .unwrap_or(false)
    })
}
