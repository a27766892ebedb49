//! Intents for the favorites screen.

use crate::catalog::MovieDetail;
use crate::ui::mvi::Intent;

#[derive(Debug)]
pub enum FavoritesIntent {
    /// A full refetch of the favorite set was handed to the worker.
    Refresh { generation: u64 },
    /// The fetched records arrived (failed fetches already omitted).
    Loaded {
        generation: u64,
        movies: Vec<MovieDetail>,
    },
    /// One title was unfavorited from this screen; drop it from the
    /// displayed collection without a reload.
    Removed { id: String },
    /// The store changed: keep only titles still in `members`.
    Prune { members: Vec<String> },
    /// Move the selection up (-1) or down (+1), wrapping.
    MoveSelection(i32),
}

impl Intent for FavoritesIntent {}
