use crate::config::ConfigStore;
use crate::favorites::{FavoritesStore, FavoritesWatcher};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::worker;
use crate::catalog::CatalogClient;
use std::io;
use std::time::Duration;

const WATCHER_DEBOUNCE_MS: u64 = 200;

pub fn run(config_store: ConfigStore, store: FavoritesStore) -> io::Result<()> {
    let config = config_store.get();
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    // In-process mutations reach the loop through the change signal.
    let signal_tx = events.sender();
    let _subscription = store.subscribe(move || {
        let _ = signal_tx.send(AppEvent::FavoritesChanged);
    });

    // Writes from other processes reach it through the file watcher.
    // Losing the watcher degrades cross-process sync only, so we log
    // and keep going.
    let _watcher = match FavoritesWatcher::start(
        store.path().to_path_buf(),
        events.sender(),
        WATCHER_DEBOUNCE_MS,
    ) {
        Ok(watcher) => Some(watcher),
        Err(err) => {
            tracing::warn!("Favorites file watcher unavailable: {}", err);
            None
        }
    };

    let client = CatalogClient::new(&config.catalog);
    let commands = worker::spawn(client, events.sender());

    let mut app = App::new(store, commands);
    app.bootstrap(&config.ui.default_query);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::SearchLoaded { generation, movies }) => {
                app.on_search_loaded(generation, movies);
            }
            Ok(AppEvent::SearchFailed {
                generation,
                message,
            }) => app.on_search_failed(generation, message),
            Ok(AppEvent::DetailLoaded { generation, detail }) => {
                app.on_detail_loaded(generation, detail);
            }
            Ok(AppEvent::DetailFailed {
                generation,
                message,
            }) => app.on_detail_failed(generation, message),
            Ok(AppEvent::FavoritesLoaded { generation, movies }) => {
                app.on_favorites_loaded(generation, movies);
            }
            Ok(AppEvent::FavoritesChanged) | Ok(AppEvent::FavoritesInvalidated) => {
                app.on_favorites_changed();
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
