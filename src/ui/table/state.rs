use crate::ui::mvi::UiState;

/// Local table state.
///
/// Search and filter are mutually exclusive: committing a search clears the
/// filter and choosing a filter clears the search. The one exception is
/// clearing the search box, which leaves an active filter in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub search: String,
    pub filter: String,
    /// 1-based.
    pub page: u32,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            search: String::new(),
            filter: String::new(),
            page: 1,
        }
    }
}

impl UiState for TableState {}
