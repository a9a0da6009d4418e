use crate::ui::mvi::Reducer;

use super::intent::TableIntent;
use super::pagination::Pagination;
use super::reducer::TableReducer;
use super::state::TableState;

/// What the table asks its container to load next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// Search committed; load the first page of matches.
    Search(String),
    /// Filter picked; load the first page of that category.
    Filter(String),
    /// Load the page at `skip` for the current search/filter.
    PageChange {
        skip: u64,
        search: String,
        category: String,
    },
}

/// Table state machine plus the pagination props it is rendered with.
///
/// Every operation returns the event the container should act on, or `None`
/// when the operation was a no-op (a disabled button, an edit that doesn't
/// need a fetch).
#[derive(Debug, Clone)]
pub struct TableModel {
    state: TableState,
    pagination: Pagination,
}

impl TableModel {
    pub fn new(page_size: u32) -> Self {
        Self {
            state: TableState::default(),
            pagination: Pagination::new(page_size, 0),
        }
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Sync the total from the latest page result.
    pub fn set_total(&mut self, total: u64) {
        self.pagination.total = total;
    }

    /// Back to mount defaults: empty search, no filter, page 1.
    pub fn reset(&mut self) {
        self.state = TableState::default();
    }

    /// Search box edited. Emptying the box clears the search.
    pub fn edit_search(&mut self, text: impl Into<String>) -> Option<TableEvent> {
        let text = text.into();
        if text.is_empty() {
            if self.state.search.is_empty() {
                return None;
            }
            return Some(self.clear_search());
        }
        self.dispatch(TableIntent::EditSearch { text });
        None
    }

    pub fn commit_search(&mut self, text: impl Into<String>) -> TableEvent {
        let text = text.into();
        self.dispatch(TableIntent::CommitSearch { text: text.clone() });
        TableEvent::Search(text)
    }

    pub fn clear_search(&mut self) -> TableEvent {
        self.dispatch(TableIntent::ClearSearch);
        self.page_change()
    }

    pub fn change_filter(&mut self, value: impl Into<String>) -> TableEvent {
        let value = value.into();
        self.dispatch(TableIntent::ChangeFilter {
            value: value.clone(),
        });
        TableEvent::Filter(value)
    }

    pub fn prev_page(&mut self) -> Option<TableEvent> {
        if !self.pagination.can_prev(self.state.page) {
            return None;
        }
        self.dispatch(TableIntent::PrevPage);
        Some(self.page_change())
    }

    pub fn next_page(&mut self) -> Option<TableEvent> {
        if !self.pagination.can_next(self.state.page) {
            return None;
        }
        self.dispatch(TableIntent::NextPage {
            last_page: self.pagination.last_page(),
        });
        Some(self.page_change())
    }

    pub fn page_label(&self) -> String {
        self.pagination.label(self.state.page)
    }

    fn page_change(&self) -> TableEvent {
        TableEvent::PageChange {
            skip: self.pagination.skip_for(self.state.page),
            search: self.state.search.clone(),
            category: self.state.filter.clone(),
        }
    }

    fn dispatch(&mut self, intent: TableIntent) {
        self.state = TableReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(total: u64) -> TableModel {
        let mut model = TableModel::new(12);
        model.set_total(total);
        model
    }

    #[test]
    fn edit_to_empty_emits_clear() {
        let mut model = model(100);
        model.change_filter("beauty");
        assert_eq!(model.edit_search("p"), None);
        assert_eq!(
            model.edit_search(""),
            Some(TableEvent::PageChange {
                skip: 0,
                search: String::new(),
                category: "beauty".into(),
            })
        );
    }

    #[test]
    fn edit_empty_to_empty_is_noop() {
        let mut model = model(100);
        assert_eq!(model.edit_search(""), None);
    }

    #[test]
    fn prev_on_first_page_is_noop() {
        let mut model = model(100);
        assert_eq!(model.prev_page(), None);
        assert_eq!(model.state().page, 1);
    }

    #[test]
    fn paging_carries_search() {
        let mut model = model(100);
        model.commit_search("phone");
        assert_eq!(
            model.next_page(),
            Some(TableEvent::PageChange {
                skip: 12,
                search: "phone".into(),
                category: String::new(),
            })
        );
    }
}
