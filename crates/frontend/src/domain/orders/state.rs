use std::collections::HashSet;

use chrono::Utc;
use contracts::domain::order::{
    fixtures,
    pipeline::{
        filter_orders, page_slice, search_orders, sort_orders, total_pages, DateRangeFilter,
        OrderFilters, SortKey, SortState, StatusFilter,
    },
    Order, OrderDraft, OrderId,
};
use leptos::prelude::*;

/// Reactive state behind the orders view. One instance lives for the whole
/// session; every derived accessor re-runs the pipeline stages it needs.
///
/// Selection is page-relative: `selected` holds row indices into the current
/// page, so any change to the pipeline inputs or the page clears it.
#[derive(Clone, Copy)]
pub struct OrdersState {
    pub orders: RwSignal<Vec<Order>>,
    pub search: RwSignal<String>,
    pub filters: RwSignal<OrderFilters>,
    pub sort: RwSignal<SortState>,
    pub page: RwSignal<usize>,
    pub selected: RwSignal<HashSet<usize>>,
}

impl OrdersState {
    pub fn new() -> Self {
        Self {
            orders: RwSignal::new(fixtures::seed_orders()),
            search: RwSignal::new(String::new()),
            filters: RwSignal::new(OrderFilters::default()),
            sort: RwSignal::new(SortState::default()),
            page: RwSignal::new(1),
            selected: RwSignal::new(HashSet::new()),
        }
    }

    /// Filter -> search -> sort, recomputed on any input change.
    pub fn processed(&self) -> Vec<Order> {
        let filtered = self
            .orders
            .with(|orders| self.filters.with(|f| filter_orders(orders, f)));
        let searched = self.search.with(|q| search_orders(filtered, q));
        self.sort.with(|s| sort_orders(searched, s))
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.processed().len())
    }

    /// The stored page clamped into range, so shrinking the result set never
    /// leaves the view on a page that no longer exists.
    pub fn current_page(&self) -> usize {
        self.page.get().min(self.total_pages()).max(1)
    }

    pub fn visible_rows(&self) -> Vec<Order> {
        let processed = self.processed();
        page_slice(&processed, self.current_page()).to_vec()
    }

    fn reset_to_first_page(&self) {
        self.page.set(1);
        self.selected.update(|s| s.clear());
    }

    pub fn set_search(&self, query: String) {
        self.search.set(query);
        self.reset_to_first_page();
    }

    pub fn clear_search(&self) {
        self.set_search(String::new());
    }

    pub fn set_status_filter(&self, status: StatusFilter) {
        self.filters.update(|f| f.status = status);
        self.reset_to_first_page();
    }

    pub fn set_date_filter(&self, date_range: DateRangeFilter) {
        self.filters.update(|f| f.date_range = date_range);
        self.reset_to_first_page();
    }

    pub fn toggle_sort(&self, key: SortKey) {
        self.sort.update(|s| s.toggle(key));
        self.reset_to_first_page();
    }

    pub fn set_page(&self, page: usize) {
        let clamped = page.min(self.total_pages()).max(1);
        self.page.set(clamped);
        self.selected.update(|s| s.clear());
    }

    /// Id the next created order will get: highest existing suffix plus one.
    pub fn next_order_id(&self) -> OrderId {
        let max_suffix = self.orders.with_untracked(|orders| {
            orders
                .iter()
                .map(|o| o.id.numeric_suffix())
                .max()
                .unwrap_or(0)
        });
        OrderId::next_after(max_suffix)
    }

    /// Prepends the new record and returns to page one. The active search,
    /// filters, and sort stay as they are; the fresh row only shows when it
    /// passes them.
    pub fn create_order(&self, draft: OrderDraft, id: OrderId) {
        let order = draft.into_order(id, Utc::now());
        leptos::logging::log!("create_order: {}", order.id);
        self.orders.update(|orders| orders.insert(0, order));
        self.reset_to_first_page();
    }

    pub fn is_row_selected(&self, index: usize) -> bool {
        self.selected.with(|s| s.contains(&index))
    }

    pub fn toggle_row(&self, index: usize) {
        self.selected.update(|s| {
            if !s.remove(&index) {
                s.insert(index);
            }
        });
    }

    /// Header checkbox: selects the whole page, or clears when every visible
    /// row is already selected.
    pub fn toggle_all(&self, page_len: usize) {
        self.selected.update(|s| {
            if s.len() == page_len && page_len > 0 {
                s.clear();
            } else {
                *s = (0..page_len).collect();
            }
        });
    }

    pub fn all_selected(&self, page_len: usize) -> bool {
        page_len > 0 && self.selected.with(|s| s.len() == page_len)
    }

    pub fn some_selected(&self) -> bool {
        self.selected.with(|s| !s.is_empty())
    }
}

impl Default for OrdersState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_orders_state() -> OrdersState {
    use_context::<OrdersState>().expect("OrdersState must be provided by the app root")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::order::OrderStatus;

    fn draft() -> OrderDraft {
        OrderDraft {
            user_name: "Jane Doe".into(),
            project: "Landing Page".into(),
            address: "Meadow Lane Oakland".into(),
            status: OrderStatus::Pending,
        }
    }

    #[test]
    fn created_order_gets_next_id_and_lands_first_on_page_one() {
        let state = OrdersState::new();
        state.set_page(5);
        state.toggle_row(2);

        let id = state.next_order_id();
        assert_eq!(id.as_str(), "#CM9901");

        state.create_order(draft(), id);
        let rows = state.visible_rows();
        assert_eq!(state.current_page(), 1);
        assert!(!state.some_selected());
        assert_eq!(rows[0].id.as_str(), "#CM9901");
        assert_eq!(rows[0].date_label, "Just now");
        assert_eq!(state.orders.get_untracked().len(), 101);
    }

    #[test]
    fn create_order_keeps_search_filters_and_sort() {
        let state = OrdersState::new();
        state.set_status_filter(StatusFilter::Only(OrderStatus::Pending));
        state.toggle_sort(SortKey::User);

        state.create_order(draft(), state.next_order_id());

        let filters = state.filters.get_untracked();
        assert_eq!(filters.status, StatusFilter::Only(OrderStatus::Pending));
        let sort = state.sort.get_untracked();
        assert_eq!(sort.key, Some(SortKey::User));
        // The new Pending "Jane Doe" passes the filter and sorts by user name.
        assert!(state
            .processed()
            .iter()
            .any(|o| o.id.as_str() == "#CM9901"));
        assert!(state
            .processed()
            .iter()
            .all(|o| o.status == OrderStatus::Pending));
    }

    #[test]
    fn search_change_resets_page_and_clears_selection() {
        let state = OrdersState::new();
        state.set_page(3);
        state.toggle_row(0);
        state.toggle_row(4);
        assert!(state.some_selected());

        state.set_search("shirt".into());
        assert_eq!(state.page.get_untracked(), 1);
        assert!(!state.some_selected());
    }

    #[test]
    fn current_page_clamps_when_result_set_shrinks() {
        let state = OrdersState::new();
        state.set_page(10);
        assert_eq!(state.current_page(), 10);

        // One match ("Natali Craig") leaves a single page.
        state.search.set("Natali".into());
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.visible_rows().len(), 1);
    }

    #[test]
    fn toggle_all_selects_then_clears_the_page() {
        let state = OrdersState::new();
        let len = state.visible_rows().len();
        assert_eq!(len, 10);

        state.toggle_all(len);
        assert!(state.all_selected(len));
        state.toggle_all(len);
        assert!(!state.some_selected());
    }
}
