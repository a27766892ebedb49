use crate::catalog::SearchQuery;
use crate::favorites::FavoritesStore;
use crate::ui::detail::{DetailIntent, DetailReducer, DetailViewState};
use crate::ui::favorites::{FavoritesIntent, FavoritesReducer, FavoritesViewState};
use crate::ui::mvi::Reducer;
use crate::ui::search::{SearchIntent, SearchReducer, SearchViewState};
use crate::worker::{CatalogCommand, CatalogCommandSender};

/// Top-level navigation target.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Search,
    Favorites,
    Detail,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Central controller: owns the per-screen states, the favorites store
/// handle, and the channel to the catalog worker.
///
/// Favorite membership lives in `members`, a snapshot re-read from the
/// store on every change-signal delivery (and refreshed from mutation
/// return values). Rendering derives every toggle mark and the badge
/// count from this snapshot; nothing else in the view layer holds
/// membership.
pub struct App {
    should_quit: bool,
    screen: Screen,
    /// Where closing the detail screen returns to.
    return_to: Screen,
    search: SearchViewState,
    detail: DetailViewState,
    favorites_view: FavoritesViewState,
    store: FavoritesStore,
    members: Vec<String>,
    commands: CatalogCommandSender,
    next_generation: u64,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(store: FavoritesStore, commands: CatalogCommandSender) -> Self {
        let members = store.list();
        Self {
            should_quit: false,
            screen: Screen::Search,
            return_to: Screen::Search,
            search: SearchViewState::default(),
            detail: DetailViewState::default(),
            favorites_view: FavoritesViewState::default(),
            store,
            members,
            commands,
            next_generation: 0,
            last_command_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn search(&self) -> &SearchViewState {
        &self.search
    }

    pub fn detail(&self) -> &DetailViewState {
        &self.detail
    }

    pub fn favorites_view(&self) -> &FavoritesViewState {
        &self.favorites_view
    }

    /// Count shown in the navigation badge.
    pub fn favorite_count(&self) -> usize {
        self.members.len()
    }

    /// Membership check for render-time toggle marks.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.members.iter().any(|member| member == id)
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn show_search(&mut self) {
        self.screen = Screen::Search;
    }

    /// Switch to the favorites screen and refetch its records: entering
    /// the view always re-reads the store.
    pub fn show_favorites(&mut self) {
        self.screen = Screen::Favorites;
        self.refresh_favorites();
    }

    /// Open the detail screen for `id`, remembering where to return.
    pub fn open_detail(&mut self, id: &str) {
        if self.screen != Screen::Detail {
            self.return_to = self.screen;
        }
        self.screen = Screen::Detail;

        let generation = self.bump_generation();
        self.dispatch_detail(DetailIntent::Open {
            id: id.to_string(),
            generation,
        });
        self.send_command(CatalogCommand::FetchDetail {
            id: id.to_string(),
            generation,
        });
    }

    pub fn close_detail(&mut self) {
        self.dispatch_detail(DetailIntent::Close);
        self.screen = self.return_to;
        if self.screen == Screen::Favorites {
            // Membership may have changed while the detail screen was up.
            self.refresh_favorites();
        }
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Seed the term and run the startup search.
    pub fn bootstrap(&mut self, default_query: &str) {
        if self.search.term.is_empty() {
            self.search.term = default_query.to_string();
        }
        self.submit_search();
    }

    /// Submit the current term + filters. A blank term is not executed.
    pub fn submit_search(&mut self) {
        let query = match SearchQuery::new(
            &self.search.term,
            &self.search.year,
            self.search.media_type,
        ) {
            Some(query) => query,
            None => return,
        };

        let generation = self.bump_generation();
        self.dispatch_search(SearchIntent::Submitted { generation });
        self.send_command(CatalogCommand::Search { query, generation });
    }

    pub fn dispatch_search(&mut self, intent: SearchIntent) {
        dispatch_mvi!(self, search, SearchReducer, intent);
    }

    /// Re-run the search when the year filter becomes empty or complete.
    /// Partial years neither trigger nor join a request.
    pub fn on_year_edited(&mut self) {
        let len = self.search.year.len();
        if len == 0 || len == 4 {
            self.submit_search();
        }
    }

    pub fn on_search_loaded(
        &mut self,
        generation: u64,
        movies: Vec<crate::catalog::MovieSummary>,
    ) {
        self.dispatch_search(SearchIntent::Loaded { generation, movies });
    }

    pub fn on_search_failed(&mut self, generation: u64, message: String) {
        self.dispatch_search(SearchIntent::Failed {
            generation,
            message,
        });
    }

    // ========================================================================
    // Detail
    // ========================================================================

    pub fn dispatch_detail(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, detail, DetailReducer, intent);
    }

    pub fn on_detail_loaded(&mut self, generation: u64, detail: Box<crate::catalog::MovieDetail>) {
        self.dispatch_detail(DetailIntent::Loaded { generation, detail });
    }

    pub fn on_detail_failed(&mut self, generation: u64, message: String) {
        self.dispatch_detail(DetailIntent::Failed {
            generation,
            message,
        });
    }

    // ========================================================================
    // Favorites
    // ========================================================================

    pub fn dispatch_favorites(&mut self, intent: FavoritesIntent) {
        dispatch_mvi!(self, favorites_view, FavoritesReducer, intent);
    }

    /// Flip favorite status for `id`. The store persists and signals;
    /// the returned set refreshes the membership snapshot immediately so
    /// the very next frame renders the new state.
    pub fn toggle_favorite(&mut self, id: &str) {
        if self.store.contains(id) {
            self.members = self.store.remove(id);
            if self.screen == Screen::Favorites {
                self.dispatch_favorites(FavoritesIntent::Removed { id: id.to_string() });
            }
        } else {
            self.members = self.store.add(id);
        }
    }

    /// Refetch full records for the favorite set.
    pub fn refresh_favorites(&mut self) {
        let ids = self.store.list();
        let generation = self.bump_generation();
        self.dispatch_favorites(FavoritesIntent::Refresh { generation });

        if ids.is_empty() {
            // Nothing to fetch; short-circuit to an empty loaded state.
            self.dispatch_favorites(FavoritesIntent::Loaded {
                generation,
                movies: Vec::new(),
            });
            return;
        }

        self.send_command(CatalogCommand::FetchFavorites { ids, generation });
    }

    pub fn on_favorites_loaded(
        &mut self,
        generation: u64,
        movies: Vec<crate::catalog::MovieDetail>,
    ) {
        self.dispatch_favorites(FavoritesIntent::Loaded { generation, movies });
        // Membership may have shrunk while the fetch was in flight.
        self.dispatch_favorites(FavoritesIntent::Prune {
            members: self.members.clone(),
        });
    }

    /// Change-signal delivery (in-process or from the file watcher):
    /// re-read the store, then reconcile the favorites screen.
    pub fn on_favorites_changed(&mut self) {
        self.members = self.store.list();

        if self.screen != Screen::Favorites {
            return;
        }

        let displayed = self.favorites_view.displayed_ids();
        let gained = self
            .members
            .iter()
            .any(|id| !displayed.iter().any(|shown| shown == id));

        if gained && !self.favorites_view.is_loading() {
            // A member we are not showing appeared (e.g. another
            // process added one); only a refetch can supply its record.
            self.refresh_favorites();
        } else {
            self.dispatch_favorites(FavoritesIntent::Prune {
                members: self.members.clone(),
            });
        }
    }

    // ========================================================================
    // Worker channel
    // ========================================================================

    fn bump_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    fn send_command(&mut self, command: CatalogCommand) {
        match self.commands.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
            }
            Err(err) => {
                tracing::warn!("catalog command dropped: {}", err);
                self.last_command_error = Some(format!("Request could not be queued: {}", err));
            }
        }
    }
}
