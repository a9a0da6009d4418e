use crate::api::PageResult;
use crate::ui::mvi::UiState;

/// Records per page before any configuration is applied.
pub const DEFAULT_PAGE_SIZE: u64 = 12;

/// Monotonic tag attached to every dispatched fetch.
///
/// `RequestId::NONE` is never issued; it marks "no fetch yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(pub u64);

impl RequestId {
    pub const NONE: RequestId = RequestId(0);

    pub fn next(self) -> RequestId {
        RequestId(self.0 + 1)
    }
}

/// Fetch state for the product page.
///
/// Invariants: `loading` implies `error.is_none()`, and a set `error`
/// implies `!loading`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataState {
    pub data: PageResult,
    pub loading: bool,
    pub error: Option<String>,
    /// Tag of the most recently started fetch.
    pub latest_request: RequestId,
}

impl DataState {
    pub fn with_page_size(page_size: u64) -> Self {
        Self {
            data: PageResult::empty(page_size),
            loading: false,
            error: None,
            latest_request: RequestId::NONE,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.latest_request == RequestId::NONE
    }
}

impl Default for DataState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl UiState for DataState {}
