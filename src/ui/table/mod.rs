//! Generic data table.
//!
//! The table owns its search text, active filter and current page, and
//! reports what the container should fetch next as a [`TableEvent`]. It never
//! talks to the network itself.
//!
//! # Architecture
//!
//! - `state.rs` / `intent.rs` / `reducer.rs` - the MVI state machine
//! - `pagination.rs` - page arithmetic and the page label
//! - `model.rs` - `TableModel`, which dispatches intents and emits events
//! - `cells.rs` - per-column cell renderers
//! - `view.rs` - props and the ratatui widget

mod cells;
mod intent;
mod model;
mod pagination;
mod reducer;
mod state;
mod view;

pub use cells::{
    format_currency, plain_text, star_rating, CellRenderer, CellRenderers, CurrencyRenderer,
    PlainTextRenderer, StarRatingRenderer, MISSING_VALUE,
};
pub use intent::TableIntent;
pub use model::{TableEvent, TableModel};
pub use pagination::Pagination;
pub use reducer::TableReducer;
pub use state::TableState;
pub use view::{
    Column, FilterOptions, TableBody, TableView, TableWidget, EMPTY_MESSAGE, LOADING_MESSAGE,
};
