//! Search screen: query + filters, result list, favorite markers.

mod intent;
mod reducer;
mod state;

pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::{SearchField, SearchPhase, SearchViewState};
