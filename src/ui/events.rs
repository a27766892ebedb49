use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::catalog::{MovieDetail, MovieSummary};

/// Everything the main loop reacts to: terminal input, ticks, catalog
/// results from the worker, and favorites invalidations.
///
/// Catalog results are tagged with the generation of the request that
/// produced them; reducers drop results from superseded requests.
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    SearchLoaded {
        generation: u64,
        movies: Vec<MovieSummary>,
    },
    SearchFailed {
        generation: u64,
        message: String,
    },
    DetailLoaded {
        generation: u64,
        detail: Box<MovieDetail>,
    },
    DetailFailed {
        generation: u64,
        message: String,
    },
    FavoritesLoaded {
        generation: u64,
        movies: Vec<MovieDetail>,
    },
    /// The in-process change signal fired: re-read the store.
    FavoritesChanged,
    /// The favorites file changed on disk (another process wrote it).
    /// Handled exactly like `FavoritesChanged`.
    FavoritesInvalidated,
}

/// Fans terminal input and ticks into one channel the main loop reads.
/// Other producers (worker, watcher, signal subscription) clone the
/// sender.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            if event_tx.send(AppEvent::Resize(cols, rows)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::error!("terminal event read failed: {}", err);
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!("terminal event poll failed: {}", err);
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
