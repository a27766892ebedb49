use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Screen};
use crate::ui::search::{SearchField, SearchIntent};
use crate::ui::favorites::FavoritesIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'f') {
        app.show_favorites();
        return;
    }
    if is_ctrl_char(key, 'h') && app.screen() != Screen::Detail {
        app.show_search();
        return;
    }

    match app.screen() {
        Screen::Search => handle_search_key(app, key),
        Screen::Detail => handle_detail_key(app, key),
        Screen::Favorites => handle_favorites_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    // Filter changes re-run the search, like the year rule.
    if is_ctrl_char(key, 't') {
        app.dispatch_search(SearchIntent::CycleMediaType);
        app.submit_search();
        return;
    }

    match key.code {
        KeyCode::Tab => app.dispatch_search(SearchIntent::FocusNext),
        KeyCode::Up => app.dispatch_search(SearchIntent::MoveSelection(-1)),
        KeyCode::Down => app.dispatch_search(SearchIntent::MoveSelection(1)),
        KeyCode::Enter => {
            if app.search().focus == SearchField::Results {
                if let Some(id) = app.search().selected_movie().map(|m| m.imdb_id.clone()) {
                    app.open_detail(&id);
                }
            } else {
                app.submit_search();
            }
        }
        KeyCode::Char(' ') if app.search().focus == SearchField::Results => {
            if let Some(id) = app.search().selected_movie().map(|m| m.imdb_id.clone()) {
                app.toggle_favorite(&id);
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let was_year = app.search().focus == SearchField::Year;
            app.dispatch_search(SearchIntent::TypeChar(c));
            if was_year {
                app.on_year_edited();
            }
        }
        KeyCode::Backspace => {
            let was_year = app.search().focus == SearchField::Year;
            app.dispatch_search(SearchIntent::Backspace);
            if was_year {
                app.on_year_edited();
            }
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => app.close_detail(),
        KeyCode::Char('f') | KeyCode::Char(' ') => {
            if let Some(id) = app.detail().detail().map(|d| d.imdb_id.clone()) {
                app.toggle_favorite(&id);
            }
        }
        _ => {}
    }
}

fn handle_favorites_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.dispatch_favorites(FavoritesIntent::MoveSelection(-1)),
        KeyCode::Down => app.dispatch_favorites(FavoritesIntent::MoveSelection(1)),
        KeyCode::Enter => {
            if let Some(id) = app
                .favorites_view()
                .selected_movie()
                .map(|m| m.imdb_id.clone())
            {
                app.open_detail(&id);
            }
        }
        KeyCode::Char('x') | KeyCode::Char('d') | KeyCode::Char(' ') => {
            if let Some(id) = app
                .favorites_view()
                .selected_movie()
                .map(|m| m.imdb_id.clone())
            {
                // Removes the membership and drops the row in place.
                app.toggle_favorite(&id);
            }
        }
        KeyCode::Char('r') => app.refresh_favorites(),
        KeyCode::Esc => app.show_search(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}
