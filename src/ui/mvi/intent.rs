/// Marker trait for intents.
///
/// Intents are either user actions (typing, paging, picking a filter) or
/// system events (a fetch was started or finished).
pub trait Intent: Send + 'static {}
