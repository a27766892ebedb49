//! Model-View-Intent primitives for the view layer.
//!
//! Each screen is a small state machine: intents (key presses, catalog
//! responses, favorites invalidations) go through a pure reducer that
//! yields the next state, and rendering is a function of that state plus
//! the favorites membership snapshot. Side effects (sending catalog
//! commands, touching the store) happen at the dispatch site, never
//! inside a reducer.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
