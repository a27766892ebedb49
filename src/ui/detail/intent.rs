//! Intents for the detail screen.

use crate::catalog::MovieDetail;
use crate::ui::mvi::Intent;

#[derive(Debug)]
pub enum DetailIntent {
    /// A detail fetch was handed to the worker.
    Open { id: String, generation: u64 },
    /// The record arrived.
    Loaded {
        generation: u64,
        detail: Box<MovieDetail>,
    },
    /// The lookup failed; `message` is already user-facing.
    Failed { generation: u64, message: String },
    /// Leave the screen.
    Close,
}

impl Intent for DetailIntent {}
