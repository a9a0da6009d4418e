use crate::api::{FetchError, PageResult};
use crate::ui::mvi::Reducer;

use super::intent::DataIntent;
use super::reducer::DataReducer;
use super::state::{DataState, RequestId};

/// Explicit container for the fetch slice.
///
/// Owned by the app for the whole session and handed to views by reference.
/// Issues a fresh [`RequestId`] for every fetch so late responses can be
/// told apart from the current one.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    state: DataState,
    last_issued: RequestId,
}

impl DataStore {
    pub fn new(page_size: u64) -> Self {
        Self {
            state: DataState::with_page_size(page_size),
            last_issued: RequestId::NONE,
        }
    }

    pub fn state(&self) -> &DataState {
        &self.state
    }

    /// Tag a new fetch and transition to loading.
    pub fn begin_fetch(&mut self) -> RequestId {
        let request = self.last_issued.next();
        self.last_issued = request;
        self.dispatch(DataIntent::FetchStarted { request });
        request
    }

    /// Apply the outcome of the fetch tagged `request`.
    ///
    /// Returns `false` when the outcome was discarded because a newer fetch
    /// has started since.
    pub fn complete(
        &mut self,
        request: RequestId,
        outcome: Result<PageResult, FetchError>,
    ) -> bool {
        let current = request == self.state.latest_request;
        let intent = match outcome {
            Ok(result) => DataIntent::FetchSucceeded { request, result },
            Err(err) => {
                if current {
                    tracing::debug!(request = request.0, kind = err.kind(), "Storing fetch error");
                }
                DataIntent::FetchFailed {
                    request,
                    message: err.to_string(),
                }
            }
        };
        self.dispatch(intent);
        current
    }

    pub fn dispatch(&mut self, intent: DataIntent) {
        self.state = DataReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}
