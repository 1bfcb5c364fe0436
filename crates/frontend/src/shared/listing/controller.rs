use contracts::shared::errors::GatewayError;
use contracts::shared::listing::{ListPage, ListQuery, SortOrder};

use super::pagination::Pagination;

/// A fetch the view layer has to issue: the effective query plus the
/// sequence number used to recognize the response when it comes back.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket<F> {
    pub seq: u64,
    pub query: ListQuery<F>,
}

/// Outcome of feeding a fetch result back into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The result belonged to the latest issued query and was applied.
    Current,
    /// A newer query superseded this fetch; the result was discarded.
    Stale,
}

/// Client-side state behind every paginated, searchable, sortable table.
///
/// The controller is pure: it never touches the network or the DOM. The
/// widget reads UI events into it, drains [`take_fetch`](Self::take_fetch)
/// tickets, runs the gateway call and feeds the result back through
/// [`apply`](Self::apply). Late responses to superseded queries are dropped
/// there, so out-of-order arrival over the network can never corrupt the
/// view state.
#[derive(Debug)]
pub struct ListController<T, F> {
    query: ListQuery<F>,
    pagination: Pagination,
    rows: Vec<T>,
    loading: bool,
    error: Option<GatewayError>,
    /// Sequence number of the latest issued fetch; only a matching result
    /// is ever applied.
    seq: u64,
    /// Effective query changed since the last issued fetch.
    dirty: bool,
}

impl<T, F: Clone + PartialEq> ListController<T, F> {
    pub fn new(query: ListQuery<F>) -> Self {
        let pagination = Pagination::new(query.page, query.limit);
        Self {
            query,
            pagination,
            rows: Vec::new(),
            loading: false,
            error: None,
            seq: 0,
            dirty: true,
        }
    }

    // ------------------------------------------------------------------
    // View model
    // ------------------------------------------------------------------

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&GatewayError> {
        self.error.as_ref()
    }

    pub fn page(&self) -> u32 {
        self.pagination.page()
    }

    pub fn limit(&self) -> u32 {
        self.pagination.limit()
    }

    pub fn total(&self) -> u64 {
        self.pagination.total()
    }

    pub fn total_pages(&self) -> u32 {
        self.pagination.total_pages()
    }

    pub fn search(&self) -> &str {
        &self.query.search
    }

    pub fn sort_by(&self) -> &str {
        &self.query.sort_by
    }

    pub fn sort_order(&self) -> SortOrder {
        self.query.sort_order
    }

    pub fn filter(&self) -> &F {
        &self.query.filter
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Search text after the debounce window settled. A changed search
    /// resets to page 1 before the fetch is issued, so a stale page number
    /// is never sent against a new needle.
    pub fn search_settled(&mut self, search: impl Into<String>) {
        let search = search.into();
        if search == self.query.search {
            return;
        }
        self.query.search = search;
        self.pagination.reset_page();
        self.dirty = true;
    }

    /// Filter changes take effect immediately (no debounce) and also start
    /// over from page 1.
    pub fn set_filter(&mut self, filter: F) {
        if filter == self.query.filter {
            return;
        }
        self.query.filter = filter;
        self.pagination.reset_page();
        self.dirty = true;
    }

    /// Clicking the active column flips asc/desc; clicking a new column
    /// activates it ascending. The current page is kept.
    pub fn toggle_sort(&mut self, column: &str) {
        if self.query.sort_by == column {
            self.query.sort_order = self.query.sort_order.flipped();
        } else {
            self.query.sort_by = column.to_string();
            self.query.sort_order = SortOrder::Asc;
        }
        self.dirty = true;
    }

    pub fn go_to_page(&mut self, page: u32) {
        if self.pagination.go_to_page(page) {
            self.dirty = true;
        }
    }

    pub fn set_page_size(&mut self, limit: u32) {
        if self.pagination.set_limit(limit) {
            self.dirty = true;
        }
    }

    /// Re-issue the current effective query (manual refresh).
    pub fn refresh(&mut self) {
        self.dirty = true;
    }

    // ------------------------------------------------------------------
    // Fetch lifecycle
    // ------------------------------------------------------------------

    /// Hand out the next fetch to run, if the effective query changed.
    ///
    /// Issuing a new ticket supersedes any fetch still in flight: `loading`
    /// stays true until the *superseding* fetch resolves, and the old
    /// result will be rejected by [`apply`](Self::apply).
    pub fn take_fetch(&mut self) -> Option<FetchTicket<F>> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        self.seq += 1;
        self.loading = true;
        let mut query = self.query.clone();
        query.page = self.pagination.page();
        query.limit = self.pagination.limit();
        Some(FetchTicket {
            seq: self.seq,
            query,
        })
    }

    /// Feed a fetch result back. Results for anything but the latest
    /// issued query are discarded wholesale, success and failure alike.
    ///
    /// On success rows/total/page are replaced atomically; if the server
    /// reports fewer pages than the one we asked for, the page is clamped
    /// and the controller goes dirty again so the next pump fetches the
    /// valid page. On failure the previous rows are retained so the user
    /// can retry without losing context.
    pub fn apply(&mut self, seq: u64, result: Result<ListPage<T>, GatewayError>) -> Applied {
        if seq != self.seq {
            return Applied::Stale;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.rows = page.items;
                if self.pagination.on_new_total(page.total) {
                    self.dirty = true;
                }
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err);
            }
        }
        Applied::Current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::customer::ActivityFilter;

    type Ctl = ListController<&'static str, ActivityFilter>;

    fn controller() -> Ctl {
        ListController::new(ListQuery::new(
            "date_created",
            SortOrder::Asc,
            ActivityFilter::All,
        ))
    }

    fn page_of(items: Vec<&'static str>, total: u64, q: &ListQuery<ActivityFilter>) -> ListPage<&'static str> {
        ListPage {
            items,
            total,
            page: q.page,
            limit: q.limit,
        }
    }

    #[test]
    fn initial_state_wants_one_fetch() {
        let mut c = controller();
        let t = c.take_fetch().expect("initial fetch");
        assert_eq!(t.seq, 1);
        assert_eq!(t.query.page, 1);
        assert!(c.loading());
        assert!(c.take_fetch().is_none(), "no second fetch without changes");
    }

    #[test]
    fn success_replaces_rows_atomically() {
        let mut c = controller();
        let t = c.take_fetch().unwrap();
        let page = page_of(vec!["a", "b"], 42, &t.query);
        assert_eq!(c.apply(t.seq, Ok(page)), Applied::Current);
        assert_eq!(c.rows(), ["a", "b"]);
        assert_eq!(c.total(), 42);
        assert_eq!(c.total_pages(), 3);
        assert!(!c.loading());
        assert!(c.error().is_none());
    }

    #[test]
    fn late_result_of_superseded_query_is_dropped() {
        let mut c = controller();
        let q1 = c.take_fetch().unwrap();
        // user types before Q1 resolves
        c.search_settled("budi");
        let q2 = c.take_fetch().unwrap();
        assert!(c.loading(), "loading stays true across supersession");

        // Q2 resolves first
        let p2 = page_of(vec!["budi"], 1, &q2.query);
        assert_eq!(c.apply(q2.seq, Ok(p2)), Applied::Current);
        // Q1 arrives afterwards, out of order
        let p1 = page_of(vec!["everyone", "else"], 200, &q1.query);
        assert_eq!(c.apply(q1.seq, Ok(p1)), Applied::Stale);

        assert_eq!(c.rows(), ["budi"]);
        assert_eq!(c.total(), 1);
    }

    #[test]
    fn stale_failure_is_also_dropped() {
        let mut c = controller();
        let q1 = c.take_fetch().unwrap();
        c.refresh();
        let q2 = c.take_fetch().unwrap();
        assert_eq!(
            c.apply(q1.seq, Err(GatewayError::network("timeout"))),
            Applied::Stale
        );
        assert!(c.error().is_none());
        assert!(c.loading());
        let p = page_of(vec!["x"], 1, &q2.query);
        c.apply(q2.seq, Ok(p));
        assert!(!c.loading());
    }

    #[test]
    fn filter_change_resets_page_before_fetch() {
        let mut c = controller();
        let t = c.take_fetch().unwrap();
        c.apply(t.seq, Ok(page_of(vec!["a"], 100, &t.query))); // 5 pages
        c.go_to_page(5);
        let t = c.take_fetch().unwrap();
        assert_eq!(t.query.page, 5);
        c.apply(t.seq, Ok(page_of(vec!["e"], 100, &t.query)));

        c.set_filter(ActivityFilter::Inactive);
        let t = c.take_fetch().unwrap();
        assert_eq!(t.query.page, 1, "stale page must not leak into new filter");
        assert_eq!(t.query.filter, ActivityFilter::Inactive);
    }

    #[test]
    fn search_change_resets_page_but_identical_search_does_not_refetch() {
        let mut c = controller();
        let t = c.take_fetch().unwrap();
        c.apply(t.seq, Ok(page_of(vec!["a"], 60, &t.query)));
        c.go_to_page(3);
        c.take_fetch().unwrap();

        c.search_settled("siti");
        let t = c.take_fetch().unwrap();
        assert_eq!(t.query.page, 1);
        assert_eq!(t.query.search, "siti");

        // settled value equals the current effective search: no new fetch
        c.search_settled("siti");
        assert!(c.take_fetch().is_none());
    }

    #[test]
    fn sort_toggle_activates_new_column_ascending_then_flips() {
        let mut c = controller();
        assert_eq!(c.sort_by(), "date_created");
        assert_eq!(c.sort_order(), SortOrder::Asc);

        c.toggle_sort("nama");
        assert_eq!(c.sort_by(), "nama");
        assert_eq!(c.sort_order(), SortOrder::Asc);

        c.toggle_sort("nama");
        assert_eq!(c.sort_by(), "nama");
        assert_eq!(c.sort_order(), SortOrder::Desc);
    }

    #[test]
    fn out_of_range_page_is_a_no_op() {
        let mut c = controller();
        let t = c.take_fetch().unwrap();
        c.apply(t.seq, Ok(page_of(vec!["a"], 40, &t.query))); // 2 pages
        c.go_to_page(0);
        c.go_to_page(3);
        assert!(c.take_fetch().is_none());
        assert_eq!(c.page(), 1);
    }

    #[test]
    fn failure_surfaces_error_and_retains_rows() {
        let mut c = controller();
        let t = c.take_fetch().unwrap();
        c.apply(t.seq, Ok(page_of(vec!["a", "b"], 2, &t.query)));

        c.refresh();
        let t = c.take_fetch().unwrap();
        c.apply(t.seq, Err(GatewayError::http(500)));

        assert_eq!(c.rows(), ["a", "b"], "rows survive a failed refresh");
        assert_eq!(c.error().unwrap().code, "HTTP_ERROR");
        assert!(!c.loading());

        // successful retry clears the error
        c.refresh();
        let t = c.take_fetch().unwrap();
        c.apply(t.seq, Ok(page_of(vec!["a"], 1, &t.query)));
        assert!(c.error().is_none());
    }

    #[test]
    fn shrunk_total_clamps_page_and_requeues_fetch() {
        let mut c = controller();
        let t = c.take_fetch().unwrap();
        c.apply(t.seq, Ok(page_of(vec!["a"], 100, &t.query))); // 5 pages
        c.go_to_page(5);
        let t = c.take_fetch().unwrap();
        // server shrank meanwhile: only 2 pages left
        c.apply(t.seq, Ok(page_of(vec![], 30, &t.query)));
        assert_eq!(c.page(), 2);
        let t = c.take_fetch().expect("clamp issues a follow-up fetch");
        assert_eq!(t.query.page, 2);
    }

    #[test]
    fn page_size_change_starts_from_page_one() {
        let mut c = controller();
        let t = c.take_fetch().unwrap();
        c.apply(t.seq, Ok(page_of(vec!["a"], 100, &t.query)));
        c.go_to_page(4);
        c.take_fetch().unwrap();
        c.set_page_size(50);
        let t = c.take_fetch().unwrap();
        assert_eq!(t.query.limit, 50);
        assert_eq!(t.query.page, 1);
    }
}
