//! Reducer for the detail screen.

use crate::ui::mvi::Reducer;

use super::intent::DetailIntent;
use super::state::DetailViewState;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailViewState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Open { id, generation } => {
                DetailViewState::Loading { id, generation }
            }

            DetailIntent::Loaded { generation, detail } => match state {
                DetailViewState::Loading {
                    generation: current,
                    ..
                } if current == generation => DetailViewState::Loaded { detail },
                // Result for a lookup the user already navigated away
                // from, or superseded by a newer one.
                other => other,
            },

            DetailIntent::Failed {
                generation,
                message,
            } => match state {
                DetailViewState::Loading {
                    generation: current,
                    ..
                } if current == generation => DetailViewState::Failed { message },
                other => other,
            },

            DetailIntent::Close => DetailViewState::Idle,
        }
    }
}
