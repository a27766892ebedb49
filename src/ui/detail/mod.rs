//! Detail screen: full record for one title, favorite toggle, back path.

mod intent;
mod reducer;
mod state;

pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::DetailViewState;
