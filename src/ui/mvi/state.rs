/// Marker trait for reducer-owned state.
///
/// States are cloned rather than shared, compared to detect changes, and
/// have a `Default` that matches their value at mount time.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
