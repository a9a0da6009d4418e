use crate::ui::mvi::Reducer;

use super::intent::DataIntent;
use super::state::DataState;

/// Reducer for the fetch lifecycle.
///
/// Only the most recently started request may complete the state. A late
/// response from an older request leaves the state untouched.
pub struct DataReducer;

impl Reducer for DataReducer {
    type State = DataState;
    type Intent = DataIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DataIntent::FetchStarted { request } => DataState {
                loading: true,
                error: None,
                latest_request: request,
                ..state
            },

            DataIntent::FetchSucceeded { request, result } => {
                if request != state.latest_request {
                    tracing::debug!(
                        request = request.0,
                        latest = state.latest_request.0,
                        "Discarding stale fetch result"
                    );
                    return state;
                }
                DataState {
                    data: result,
                    loading: false,
                    error: None,
                    ..state
                }
            }

            DataIntent::FetchFailed { request, message } => {
                if request != state.latest_request {
                    tracing::debug!(
                        request = request.0,
                        latest = state.latest_request.0,
                        "Discarding stale fetch failure"
                    );
                    return state;
                }
                DataState {
                    loading: false,
                    error: Some(message),
                    ..state
                }
            }
        }
    }
}
