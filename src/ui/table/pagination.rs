/// Pagination props supplied by the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_size: u32,
    pub total: u64,
}

impl Pagination {
    pub fn new(page_size: u32, total: u64) -> Self {
        Self { page_size, total }
    }

    /// `ceil(total / page_size)`; zero when there is nothing to show.
    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        let pages = self.total.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Last reachable page; at least 1.
    pub fn last_page(&self) -> u32 {
        self.total_pages().max(1)
    }

    pub fn can_prev(&self, page: u32) -> bool {
        page > 1
    }

    pub fn can_next(&self, page: u32) -> bool {
        page < self.last_page()
    }

    /// Item offset of the first record on `page`.
    pub fn skip_for(&self, page: u32) -> u64 {
        u64::from(page.saturating_sub(1)) * u64::from(self.page_size)
    }

    pub fn label(&self, page: u32) -> String {
        format!("Page {} of {}", page, self.last_page())
    }
}
