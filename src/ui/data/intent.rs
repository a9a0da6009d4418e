use crate::api::PageResult;
use crate::ui::mvi::Intent;

use super::state::RequestId;

/// Fetch lifecycle events.
#[derive(Debug, Clone)]
pub enum DataIntent {
    /// A fetch tagged `request` was dispatched.
    FetchStarted { request: RequestId },

    /// The fetch tagged `request` returned a page.
    FetchSucceeded {
        request: RequestId,
        result: PageResult,
    },

    /// The fetch tagged `request` failed.
    FetchFailed { request: RequestId, message: String },
}

impl Intent for DataIntent {}
