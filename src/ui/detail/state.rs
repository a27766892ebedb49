//! State for the detail screen.

use crate::catalog::MovieDetail;
use crate::ui::mvi::UiState;

/// Lifecycle of a single-title lookup.
///
/// `Failed` keeps the screen alive with the catalog's message and a way
/// back to where the user came from; a bad identifier is never fatal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailViewState {
    #[default]
    Idle,
    Loading {
        id: String,
        generation: u64,
    },
    Loaded {
        detail: Box<MovieDetail>,
    },
    Failed {
        message: String,
    },
}

impl UiState for DetailViewState {}

impl DetailViewState {
    pub fn detail(&self) -> Option<&MovieDetail> {
        match self {
            DetailViewState::Loaded { detail } => Some(detail),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailViewState::Loading { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(DetailViewState::default(), DetailViewState::Idle);
    }

    #[test]
    fn detail_accessor_only_in_loaded() {
        let state = DetailViewState::Loading {
            id: "tt001".to_string(),
            generation: 1,
        };
        assert!(state.detail().is_none());
        assert!(state.is_loading());
    }
}
