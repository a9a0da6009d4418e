use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableIntent {
    /// Search box text changed (not yet committed).
    EditSearch { text: String },

    /// User confirmed the search (Enter).
    CommitSearch { text: String },

    /// Search box became empty.
    ClearSearch,

    /// A filter value was picked; empty means "All".
    ChangeFilter { value: String },

    PrevPage,

    /// `last_page` is `max(total_pages, 1)` at the time of the click.
    NextPage { last_page: u32 },
}

impl Intent for TableIntent {}
