//! Page math for server-paginated lists.
//!
//! Windowing: up to five pages are listed in full. Past that the window
//! collapses around the current page with ellipses:
//!
//! ```text
//! current <= 3        1 2 3 4 … N
//! current >= N - 2    1 … N-3 N-2 N-1 N
//! otherwise           1 … c-1 c c+1 … N
//! ```

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Rows per page on every paginated screen.
pub const PAGE_SIZE: u32 = 10;

/// Page count at or below which every page number is shown.
const MAX_VISIBLE: u32 = 5;

/// One slot in the page selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Pager state for one list: 1-based current page plus the server total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub current: u32,
    pub total_items: u64,
    pub page_size: u32,
}

impl Pagination {
    #[must_use]
    pub fn new(current: u32, total_items: u64) -> Self {
        Self { current: current.max(1), total_items, page_size: PAGE_SIZE }
    }

    /// `ceil(total_items / page_size)`; zero for an empty list.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_items, self.page_size)
    }

    #[must_use]
    pub fn window(&self) -> Vec<PageItem> {
        page_window(self.current, self.total_pages())
    }

    /// 1-based index of the first row on this page, 0 when empty.
    #[must_use]
    pub fn start_item(&self) -> u64 {
        if self.total_items == 0 {
            return 0;
        }
        (u64::from(self.current) - 1) * u64::from(self.page_size) + 1
    }

    #[must_use]
    pub fn end_item(&self) -> u64 {
        (u64::from(self.current) * u64::from(self.page_size)).min(self.total_items)
    }

    /// `"Showing <start> to <end> of <total> results"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Showing {} to {} of {} results", self.start_item(), self.end_item(), self.total_items)
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current < self.total_pages()
    }

    /// Move to `page`, clamped to `1..=total_pages`.
    #[must_use]
    pub fn go_to(self, page: u32) -> Self {
        let last = self.total_pages().max(1);
        Self { current: page.clamp(1, last), ..self }
    }
}

#[must_use]
pub fn total_pages(total_items: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    u32::try_from(total_items.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX)
}

/// Page selector slots for `current` out of `total` pages.
#[must_use]
pub fn page_window(current: u32, total: u32) -> Vec<PageItem> {
    if total <= MAX_VISIBLE {
        return (1..=total).map(PageItem::Page).collect();
    }
    let mut items = Vec::with_capacity(7);
    if current <= 3 {
        items.extend((1..=4).map(PageItem::Page));
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total));
    } else if current >= total - 2 {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        items.extend((total - 3..=total).map(PageItem::Page));
    } else {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        items.extend((current - 1..=current + 1).map(PageItem::Page));
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total));
    }
    items
}
