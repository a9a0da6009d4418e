use crate::ui::mvi::Reducer;

use super::intent::TableIntent;
use super::state::TableState;

pub struct TableReducer;

impl Reducer for TableReducer {
    type State = TableState;
    type Intent = TableIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TableIntent::EditSearch { text } => TableState {
                search: text,
                ..state
            },

            TableIntent::CommitSearch { text } => TableState {
                search: text,
                filter: String::new(),
                page: 1,
            },

            TableIntent::ClearSearch => TableState {
                search: String::new(),
                page: 1,
                ..state
            },

            TableIntent::ChangeFilter { value } => TableState {
                search: String::new(),
                filter: value,
                page: 1,
            },

            TableIntent::PrevPage => TableState {
                page: state.page.saturating_sub(1).max(1),
                ..state
            },

            TableIntent::NextPage { last_page } => TableState {
                page: state.page.saturating_add(1).min(last_page.max(1)),
                ..state
            },
        }
    }
}
