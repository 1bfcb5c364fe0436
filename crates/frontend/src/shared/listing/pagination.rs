use contracts::shared::listing::total_pages;

/// 1-based pagination state machine.
///
/// Navigation outside `[1, total_pages]` is a no-op; a new total from the
/// server clamps the current page down when the result set shrank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
    total: u64,
}

impl Pagination {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
            total: 0,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.limit)
    }

    /// Returns true when the page actually changed (a refetch is needed).
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if page < 1 || page > self.total_pages() || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// New page size always starts over from page 1.
    pub fn set_limit(&mut self, limit: u32) -> bool {
        if limit == 0 || limit == self.limit {
            return false;
        }
        self.limit = limit;
        self.page = 1;
        true
    }

    /// Record the total reported by the last fetch. Returns true when the
    /// current page had to be clamped down (it now points past the end).
    pub fn on_new_total(&mut self, total: u64) -> bool {
        self.total = total;
        let max_page = self.total_pages();
        if self.page > max_page {
            self.page = max_page;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_total(page: u32, limit: u32, total: u64) -> Pagination {
        let mut p = Pagination::new(page, limit);
        p.on_new_total(total);
        p
    }

    #[test]
    fn starts_on_page_one() {
        let p = Pagination::new(1, 20);
        assert_eq!(p.page(), 1);
        assert_eq!(p.total_pages(), 1);
    }

    #[test]
    fn out_of_range_navigation_is_a_no_op() {
        let mut p = with_total(1, 20, 100); // 5 pages
        assert!(!p.go_to_page(0));
        assert!(!p.go_to_page(6));
        assert_eq!(p.page(), 1);
        assert!(p.go_to_page(5));
        assert_eq!(p.page(), 5);
    }

    #[test]
    fn same_page_does_not_signal_refetch() {
        let mut p = with_total(1, 20, 100);
        assert!(!p.go_to_page(1));
    }

    #[test]
    fn shrinking_total_clamps_page_down() {
        let mut p = with_total(1, 20, 100);
        p.go_to_page(5);
        assert!(p.on_new_total(45)); // now 3 pages
        assert_eq!(p.page(), 3);
        assert!(!p.on_new_total(45));
    }

    #[test]
    fn empty_result_clamps_to_page_one() {
        let mut p = with_total(1, 20, 100);
        p.go_to_page(4);
        assert!(p.on_new_total(0));
        assert_eq!(p.page(), 1);
        assert_eq!(p.total_pages(), 1);
    }

    #[test]
    fn new_limit_resets_to_first_page() {
        let mut p = with_total(1, 20, 100);
        p.go_to_page(3);
        assert!(p.set_limit(50));
        assert_eq!(p.page(), 1);
        assert!(!p.set_limit(50));
        assert!(!p.set_limit(0));
    }
}
