//! Controller-level favorites behavior: membership snapshots, badge
//! count, screen reconciliation after change signals, and the worker
//! command traffic each interaction produces.

mod common;

use reelscout::favorites::FavoritesStore;
use reelscout::ui::app::{App, Screen};
use reelscout::worker::CatalogCommand;
use tempfile::TempDir;
use tokio::sync::mpsc::Receiver;

fn app_in(dir: &TempDir) -> (App, Receiver<CatalogCommand>) {
    let store = FavoritesStore::new(dir.path().join("favorites.json"));
    let (tx, rx) = tokio::sync::mpsc::channel(16);
    (App::new(store, tx), rx)
}

fn drain(rx: &mut Receiver<CatalogCommand>) -> Vec<CatalogCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

#[test]
fn toggle_adds_then_removes() {
    let dir = TempDir::new().unwrap();
    let (mut app, _rx) = app_in(&dir);

    assert_eq!(app.favorite_count(), 0);

    app.toggle_favorite("tt0372784");
    assert!(app.is_favorite("tt0372784"));
    assert_eq!(app.favorite_count(), 1);

    app.toggle_favorite("tt0372784");
    assert!(!app.is_favorite("tt0372784"));
    assert_eq!(app.favorite_count(), 0);
}

#[test]
fn membership_survives_a_new_session() {
    let dir = TempDir::new().unwrap();
    {
        let (mut app, _rx) = app_in(&dir);
        app.toggle_favorite("tt0372784");
        app.toggle_favorite("tt0468569");
    }

    let (app, _rx) = app_in(&dir);
    assert_eq!(app.favorite_count(), 2);
    assert!(app.is_favorite("tt0372784"));
    assert!(app.is_favorite("tt0468569"));
}

#[test]
fn empty_favorites_screen_loads_without_fetching() {
    let dir = TempDir::new().unwrap();
    let (mut app, mut rx) = app_in(&dir);

    app.show_favorites();

    assert_eq!(app.screen(), Screen::Favorites);
    assert!(!app.favorites_view().is_loading());
    assert!(app.favorites_view().movies().is_empty());
    assert!(drain(&mut rx).is_empty(), "no fetch for an empty set");
}

#[test]
fn entering_favorites_fetches_the_whole_set_in_order() {
    let dir = TempDir::new().unwrap();
    let (mut app, mut rx) = app_in(&dir);
    app.toggle_favorite("tt2");
    app.toggle_favorite("tt1");

    app.show_favorites();

    let commands = drain(&mut rx);
    assert_eq!(commands.len(), 1);
    match &commands[0] {
        CatalogCommand::FetchFavorites { ids, .. } => {
            assert_eq!(ids, &vec!["tt2".to_string(), "tt1".to_string()]);
        }
        other => panic!("expected FetchFavorites, got {:?}", other),
    }
    assert!(app.favorites_view().is_loading());
}

#[test]
fn loaded_batch_is_pruned_against_current_membership() {
    let dir = TempDir::new().unwrap();
    let (mut app, mut rx) = app_in(&dir);
    app.toggle_favorite("tt1");
    app.toggle_favorite("tt2");
    app.show_favorites();

    let generation = match drain(&mut rx).pop() {
        Some(CatalogCommand::FetchFavorites { generation, .. }) => generation,
        other => panic!("expected FetchFavorites, got {:?}", other),
    };

    // tt2 was unfavorited while the batch was in flight.
    app.toggle_favorite("tt2");

    app.on_favorites_loaded(
        generation,
        vec![common::detail("tt1", "One"), common::detail("tt2", "Two")],
    );

    assert_eq!(app.favorites_view().displayed_ids(), vec!["tt1"]);
}

#[test]
fn removal_on_favorites_screen_prunes_in_place() {
    let dir = TempDir::new().unwrap();
    let (mut app, mut rx) = app_in(&dir);
    app.toggle_favorite("tt1");
    app.toggle_favorite("tt2");
    app.show_favorites();

    let generation = match drain(&mut rx).pop() {
        Some(CatalogCommand::FetchFavorites { generation, .. }) => generation,
        other => panic!("expected FetchFavorites, got {:?}", other),
    };
    app.on_favorites_loaded(
        generation,
        vec![common::detail("tt1", "One"), common::detail("tt2", "Two")],
    );

    app.toggle_favorite("tt1");

    assert_eq!(app.favorites_view().displayed_ids(), vec!["tt2"]);
    assert_eq!(app.favorite_count(), 1);
    assert!(drain(&mut rx).is_empty(), "in-place removal must not refetch");
}

#[test]
fn external_removal_reconciles_without_refetch() {
    let dir = TempDir::new().unwrap();
    let (mut app, mut rx) = app_in(&dir);
    app.toggle_favorite("tt1");
    app.toggle_favorite("tt2");
    app.show_favorites();

    let generation = match drain(&mut rx).pop() {
        Some(CatalogCommand::FetchFavorites { generation, .. }) => generation,
        other => panic!("expected FetchFavorites, got {:?}", other),
    };
    app.on_favorites_loaded(
        generation,
        vec![common::detail("tt1", "One"), common::detail("tt2", "Two")],
    );

    // Another instance sharing the file removes tt1; our app only sees
    // the invalidation.
    let other = FavoritesStore::new(dir.path().join("favorites.json"));
    other.remove("tt1");
    app.on_favorites_changed();

    assert_eq!(app.favorite_count(), 1);
    assert_eq!(app.favorites_view().displayed_ids(), vec!["tt2"]);
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn external_addition_triggers_a_refetch() {
    let dir = TempDir::new().unwrap();
    let (mut app, mut rx) = app_in(&dir);
    app.toggle_favorite("tt1");
    app.show_favorites();

    let generation = match drain(&mut rx).pop() {
        Some(CatalogCommand::FetchFavorites { generation, .. }) => generation,
        other => panic!("expected FetchFavorites, got {:?}", other),
    };
    app.on_favorites_loaded(generation, vec![common::detail("tt1", "One")]);

    let other = FavoritesStore::new(dir.path().join("favorites.json"));
    other.add("tt2");
    app.on_favorites_changed();

    assert_eq!(app.favorite_count(), 2);
    let commands = drain(&mut rx);
    match commands.last() {
        Some(CatalogCommand::FetchFavorites { ids, .. }) => {
            assert_eq!(ids, &vec!["tt1".to_string(), "tt2".to_string()]);
        }
        other => panic!("expected FetchFavorites, got {:?}", other),
    }
}

#[test]
fn signal_off_the_favorites_screen_only_updates_the_snapshot() {
    let dir = TempDir::new().unwrap();
    let (mut app, mut rx) = app_in(&dir);
    assert_eq!(app.screen(), Screen::Search);

    let other = FavoritesStore::new(dir.path().join("favorites.json"));
    other.add("tt1");
    app.on_favorites_changed();

    assert_eq!(app.favorite_count(), 1);
    assert!(app.is_favorite("tt1"));
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn detail_round_trip_from_favorites_refreshes_on_return() {
    let dir = TempDir::new().unwrap();
    let (mut app, mut rx) = app_in(&dir);
    app.toggle_favorite("tt1");
    app.show_favorites();
    drain(&mut rx);

    app.open_detail("tt1");
    assert_eq!(app.screen(), Screen::Detail);
    assert!(matches!(
        drain(&mut rx).pop(),
        Some(CatalogCommand::FetchDetail { .. })
    ));

    app.close_detail();
    assert_eq!(app.screen(), Screen::Favorites);
    assert!(matches!(
        drain(&mut rx).pop(),
        Some(CatalogCommand::FetchFavorites { .. })
    ));
}

#[test]
fn dropped_worker_surfaces_a_command_error() {
    let dir = TempDir::new().unwrap();
    let (mut app, rx) = app_in(&dir);
    drop(rx);

    app.toggle_favorite("tt1");
    app.show_favorites();

    assert!(app.last_command_error().is_some());
}

#[test]
fn blank_search_term_sends_nothing() {
    let dir = TempDir::new().unwrap();
    let (mut app, mut rx) = app_in(&dir);

    app.submit_search();

    assert!(drain(&mut rx).is_empty());
    assert!(!app.search().is_loading());
}

#[test]
fn bootstrap_seeds_and_submits_the_default_query() {
    let dir = TempDir::new().unwrap();
    let (mut app, mut rx) = app_in(&dir);

    app.bootstrap("batman");

    assert_eq!(app.search().term, "batman");
    assert!(app.search().is_loading());
    assert!(matches!(
        drain(&mut rx).pop(),
        Some(CatalogCommand::Search { .. })
    ));
}
