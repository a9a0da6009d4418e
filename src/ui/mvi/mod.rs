//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of dashboard state that changes over time (the fetch slice,
//! the table) is a [`UiState`] transformed by a [`Reducer`] in response to an
//! [`Intent`].
//!
//! ```text
//! Intent → Reducer → State → View
//!   ↑                          │
//!   └──────────────────────────┘
//! ```
//!
//! Side effects (network requests, emitting table events) live next to the
//! dispatch call, never inside a reducer.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
