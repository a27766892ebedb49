//! Reducer for the search screen.

use crate::catalog::MediaType;
use crate::ui::mvi::Reducer;

use super::intent::SearchIntent;
use super::state::{SearchField, SearchPhase, SearchViewState};

/// Pure state transitions for the search screen. Issuing the actual
/// catalog request happens at the dispatch site in `App`.
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchViewState;
    type Intent = SearchIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::TypeChar(c) => {
                match state.focus {
                    SearchField::Term => state.term.push(c),
                    SearchField::Year => {
                        // The year filter is at most 4 digits; anything
                        // else never reaches the query.
                        if c.is_ascii_digit() && state.year.len() < 4 {
                            state.year.push(c);
                        }
                    }
                    SearchField::Results => {}
                }
                state
            }

            SearchIntent::Backspace => {
                match state.focus {
                    SearchField::Term => {
                        state.term.pop();
                    }
                    SearchField::Year => {
                        state.year.pop();
                    }
                    SearchField::Results => {}
                }
                state
            }

            SearchIntent::FocusNext => {
                state.focus = match state.focus {
                    SearchField::Term => SearchField::Year,
                    // Skip the result list when there is nothing to select.
                    SearchField::Year if state.movies().is_empty() => SearchField::Term,
                    SearchField::Year => SearchField::Results,
                    SearchField::Results => SearchField::Term,
                };
                state
            }

            SearchIntent::CycleMediaType => {
                state.media_type = match state.media_type {
                    None => Some(MediaType::Movie),
                    Some(current) => current.next(),
                };
                state
            }

            SearchIntent::MoveSelection(direction) => {
                let len = state.movies().len();
                if len == 0 {
                    state.selected = 0;
                    return state;
                }
                let current = state.selected.min(len - 1);
                state.selected = if direction.is_negative() {
                    if current == 0 {
                        len - 1
                    } else {
                        current - 1
                    }
                } else if current + 1 >= len {
                    0
                } else {
                    current + 1
                };
                state
            }

            SearchIntent::Submitted { generation } => {
                state.generation = generation;
                state.selected = 0;
                state.phase = SearchPhase::Loading;
                state
            }

            SearchIntent::Loaded { generation, movies } => {
                if generation != state.generation {
                    // Superseded request; a newer search is in flight
                    // or already rendered.
                    return state;
                }
                state.selected = 0;
                state.phase = SearchPhase::Loaded { movies };
                state
            }

            SearchIntent::Failed {
                generation,
                message,
            } => {
                if generation != state.generation {
                    return state;
                }
                state.phase = SearchPhase::Failed { message };
                state
            }
        }
    }
}
