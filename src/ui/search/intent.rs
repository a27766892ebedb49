//! Intents for the search screen.

use crate::catalog::MovieSummary;
use crate::ui::mvi::Intent;

#[derive(Debug)]
pub enum SearchIntent {
    /// Character typed into the focused text field.
    TypeChar(char),
    /// Delete from the focused text field.
    Backspace,
    /// Move focus: term → year → results → term.
    FocusNext,
    /// Rotate the media-type filter: all → movie → series → episode.
    CycleMediaType,
    /// Move the result selection up (-1) or down (+1), wrapping.
    MoveSelection(i32),
    /// A search was handed to the worker under this generation.
    Submitted { generation: u64 },
    /// Results arrived from the worker.
    Loaded {
        generation: u64,
        movies: Vec<MovieSummary>,
    },
    /// The search failed; `message` is already user-facing.
    Failed { generation: u64, message: String },
}

impl Intent for SearchIntent {}
