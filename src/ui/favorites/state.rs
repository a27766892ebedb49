//! State for the favorites screen.

use crate::catalog::MovieDetail;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FavoritesPhase {
    #[default]
    Idle,
    Loading,
    Loaded {
        movies: Vec<MovieDetail>,
    },
}

/// Full state of the favorites screen.
///
/// The displayed collection is a fetched projection of the store's
/// id set; it is pruned in place on removals and invalidations so it
/// never shows a title that is no longer a member.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesViewState {
    pub selected: usize,
    pub generation: u64,
    pub phase: FavoritesPhase,
}

impl UiState for FavoritesViewState {}

impl FavoritesViewState {
    pub fn movies(&self) -> &[MovieDetail] {
        match &self.phase {
            FavoritesPhase::Loaded { movies } => movies,
            _ => &[],
        }
    }

    pub fn selected_movie(&self) -> Option<&MovieDetail> {
        self.movies().get(self.selected)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FavoritesPhase::Loading)
    }

    /// Ids currently on screen, in display order.
    pub fn displayed_ids(&self) -> Vec<&str> {
        self.movies().iter().map(|m| m.imdb_id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle_and_empty() {
        let state = FavoritesViewState::default();
        assert!(state.movies().is_empty());
        assert!(!state.is_loading());
        assert!(state.displayed_ids().is_empty());
    }
}
