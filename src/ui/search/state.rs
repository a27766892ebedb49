//! State for the search screen.

use crate::catalog::{MediaType, MovieSummary};
use crate::ui::mvi::UiState;

/// Which part of the screen receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Term,
    Year,
    Results,
}

/// Request lifecycle of the current search.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
    Loaded {
        movies: Vec<MovieSummary>,
    },
    Failed {
        message: String,
    },
}

/// Full state of the search screen.
///
/// `generation` is the id of the most recently submitted request;
/// results tagged with any other generation are superseded and dropped
/// by the reducer, so a slow response never overwrites a newer one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchViewState {
    pub term: String,
    pub year: String,
    pub media_type: Option<MediaType>,
    pub focus: SearchField,
    pub selected: usize,
    pub generation: u64,
    pub phase: SearchPhase,
}

impl UiState for SearchViewState {}

impl SearchViewState {
    pub fn movies(&self) -> &[MovieSummary] {
        match &self.phase {
            SearchPhase::Loaded { movies } => movies,
            _ => &[],
        }
    }

    pub fn selected_movie(&self) -> Option<&MovieSummary> {
        self.movies().get(self.selected)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SearchPhase::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_starts_idle_on_term_field() {
        let state = SearchViewState::default();
        assert_eq!(state.focus, SearchField::Term);
        assert_eq!(state.phase, SearchPhase::Idle);
        assert!(state.movies().is_empty());
    }

    #[test]
    fn selected_movie_requires_loaded_phase() {
        let state = SearchViewState {
            phase: SearchPhase::Loading,
            ..Default::default()
        };
        assert!(state.selected_movie().is_none());
        assert!(state.is_loading());
    }
}
