//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is anything a screen reacts to: a user action, a catalog
/// response arriving from the worker, or a favorites change. Reducers
/// consume intents to produce new states.
pub trait Intent: Send + 'static {}
