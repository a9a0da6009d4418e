//! Fetch lifecycle slice.
//!
//! Owns the single `{data, loading, error}` record for the Data page.
//!
//! # Architecture
//!
//! - `state.rs` - `DataState` and the `RequestId` tag
//! - `intent.rs` - lifecycle events (started, succeeded, failed)
//! - `reducer.rs` - transitions; completions for superseded requests are dropped
//! - `store.rs` - `DataStore`, the container that issues request tags

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::DataIntent;
pub use reducer::DataReducer;
pub use state::{DataState, RequestId};
pub use store::DataStore;
