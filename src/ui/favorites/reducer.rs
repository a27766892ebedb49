//! Reducer for the favorites screen.

use crate::ui::mvi::Reducer;

use super::intent::FavoritesIntent;
use super::state::{FavoritesPhase, FavoritesViewState};

pub struct FavoritesReducer;

impl Reducer for FavoritesReducer {
    type State = FavoritesViewState;
    type Intent = FavoritesIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FavoritesIntent::Refresh { generation } => {
                state.generation = generation;
                state.selected = 0;
                state.phase = FavoritesPhase::Loading;
                state
            }

            FavoritesIntent::Loaded { generation, movies } => {
                if generation != state.generation {
                    return state;
                }
                state.selected = 0;
                state.phase = FavoritesPhase::Loaded { movies };
                state
            }

            FavoritesIntent::Removed { id } => {
                if let FavoritesPhase::Loaded { movies } = &mut state.phase {
                    movies.retain(|movie| movie.imdb_id != id);
                }
                clamp_selection(&mut state);
                state
            }

            FavoritesIntent::Prune { members } => {
                if let FavoritesPhase::Loaded { movies } = &mut state.phase {
                    movies.retain(|movie| members.iter().any(|id| *id == movie.imdb_id));
                }
                clamp_selection(&mut state);
                state
            }

            FavoritesIntent::MoveSelection(direction) => {
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
        }
    }
}

fn clamp_selection(state: &mut FavoritesViewState) {
    let len = state.movies().len();
    if len == 0 {
        state.selected = 0;
    } else if state.selected >= len {
        state.selected = len - 1;
    }
}
