//! Client-side list pipeline for the orders view.
//!
//! Every stage is a pure function; the view recomputes the whole chain
//! (filter -> search -> sort -> paginate) on any input change. No stage ever
//! mutates an upstream stage's output.

use std::cmp::Ordering;

use super::aggregate::{Order, OrderStatus};

/// Rows per page in the orders table.
pub const PAGE_SIZE: usize = 10;

// ============================================================================
// Filter stage
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    fn matches(&self, order: &Order) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => order.status == *status,
        }
    }
}

/// Date-range filter over the display label, not the timestamp. "Today"
/// matches relative labels ("Just now", "A minute ago", "1 hour ago");
/// "Yesterday" matches that exact label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRangeFilter {
    #[default]
    AllTime,
    Today,
    Yesterday,
}

impl DateRangeFilter {
    pub fn label(&self) -> &'static str {
        match self {
            DateRangeFilter::AllTime => "All Time",
            DateRangeFilter::Today => "Today",
            DateRangeFilter::Yesterday => "Yesterday",
        }
    }

    fn matches(&self, order: &Order) -> bool {
        match self {
            DateRangeFilter::AllTime => true,
            DateRangeFilter::Today => {
                let label = &order.date_label;
                label.contains("now") || label.contains("minute") || label.contains("hour")
            }
            DateRangeFilter::Yesterday => order.date_label == "Yesterday",
        }
    }
}

/// Both predicates applied conjunctively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderFilters {
    pub status: StatusFilter,
    pub date_range: DateRangeFilter,
}

impl OrderFilters {
    /// Number of non-default predicates, shown as the filter badge.
    pub fn active_count(&self) -> usize {
        usize::from(self.status != StatusFilter::All)
            + usize::from(self.date_range != DateRangeFilter::AllTime)
    }
}

/// Reduce the record set by the active filters, preserving input order.
/// An empty result is valid, not an error.
pub fn filter_orders(orders: &[Order], filters: &OrderFilters) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| filters.status.matches(o) && filters.date_range.matches(o))
        .cloned()
        .collect()
}

// ============================================================================
// Search stage
// ============================================================================

/// Case-insensitive substring match over every displayed field. A blank or
/// whitespace-only query passes everything through.
pub fn search_orders(orders: Vec<Order>, query: &str) -> Vec<Order> {
    if query.trim().is_empty() {
        return orders;
    }
    let needle = query.to_lowercase();
    orders
        .into_iter()
        .filter(|o| {
            o.id.as_str().to_lowercase().contains(&needle)
                || o.user.name.to_lowercase().contains(&needle)
                || o.project.to_lowercase().contains(&needle)
                || o.address.to_lowercase().contains(&needle)
                || o.status.as_str().to_lowercase().contains(&needle)
                || o.date_label.to_lowercase().contains(&needle)
        })
        .collect()
}

// ============================================================================
// Sort stage
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    User,
    Project,
    Address,
    Date,
    Status,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Id => "Order ID",
            SortKey::User => "User",
            SortKey::Project => "Project",
            SortKey::Address => "Address",
            SortKey::Date => "Date",
            SortKey::Status => "Status",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortState {
    /// Selecting the active key flips direction; a new key starts ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.direction = match self.direction {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            };
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Asc;
        }
    }
}

fn compare_by_key(a: &Order, b: &Order, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.numeric_suffix().cmp(&b.id.numeric_suffix()),
        SortKey::User => a
            .user
            .name
            .to_lowercase()
            .cmp(&b.user.name.to_lowercase()),
        SortKey::Project => a.project.to_lowercase().cmp(&b.project.to_lowercase()),
        SortKey::Address => a.address.to_lowercase().cmp(&b.address.to_lowercase()),
        SortKey::Date => a.date_sort.cmp(&b.date_sort),
        SortKey::Status => a.status.priority().cmp(&b.status.priority()),
    }
}

/// Order the records by the selected key. No key selected keeps input order.
/// `sort_by` is stable, so ties keep their prior relative order.
pub fn sort_orders(mut orders: Vec<Order>, sort: &SortState) -> Vec<Order> {
    let Some(key) = sort.key else {
        return orders;
    };
    orders.sort_by(|a, b| {
        let cmp = compare_by_key(a, b, key);
        match sort.direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        }
    });
    orders
}

// ============================================================================
// Pagination stage
// ============================================================================

/// `max(1, ceil(count / PAGE_SIZE))`. An empty result still has one page so
/// the pager always has something to render.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE).max(1)
}

/// Contiguous slice `[(page-1)*size, page*size)` for a 1-based page index.
/// A page past the end yields an empty slice; bounds are the caller's job.
pub fn page_slice(orders: &[Order], page: usize) -> &[Order] {
    let start = page.saturating_sub(1) * PAGE_SIZE;
    if start >= orders.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(orders.len());
    &orders[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::fixtures::seed_orders;
    use std::collections::HashSet;

    fn ids(orders: &[Order]) -> Vec<&str> {
        orders.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_fixture_has_one_hundred_unique_ids() {
        let orders = seed_orders();
        assert_eq!(orders.len(), 100);
        let unique: HashSet<_> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(unique.len(), 100);
        assert_eq!(orders[0].id.as_str(), "#CM9801");
        assert_eq!(orders[99].id.as_str(), "#CM9900");
    }

    #[test]
    fn test_search_natali_returns_exactly_cm9801() {
        let found = search_orders(seed_orders(), "Natali");
        assert_eq!(ids(&found), vec!["#CM9801"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_spans_fields() {
        let by_address = search_orders(seed_orders(), "oakland");
        assert!(by_address.iter().any(|o| o.id.as_str() == "#CM9801"));
        let by_status = search_orders(seed_orders(), "rejected");
        assert!(by_status.iter().all(|o| o.status == OrderStatus::Rejected));
        assert!(!by_status.is_empty());
    }

    #[test]
    fn test_blank_search_is_a_pass_through() {
        let orders = seed_orders();
        assert_eq!(search_orders(orders.clone(), "").len(), orders.len());
        assert_eq!(search_orders(orders.clone(), "   ").len(), orders.len());
    }

    #[test]
    fn test_status_filter_exact_match_and_idempotence() {
        let filters = OrderFilters {
            status: StatusFilter::Only(OrderStatus::Pending),
            date_range: DateRangeFilter::AllTime,
        };
        let once = filter_orders(&seed_orders(), &filters);
        assert!(once.iter().all(|o| o.status == OrderStatus::Pending));
        let twice = filter_orders(&once, &filters);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_date_range_label_heuristics() {
        let orders = seed_orders();
        let today = filter_orders(
            &orders,
            &OrderFilters {
                status: StatusFilter::All,
                date_range: DateRangeFilter::Today,
            },
        );
        // "Just now", "A minute ago", "1 hour ago"
        assert_eq!(ids(&today), vec!["#CM9801", "#CM9802", "#CM9803"]);

        let yesterday = filter_orders(
            &orders,
            &OrderFilters {
                status: StatusFilter::All,
                date_range: DateRangeFilter::Yesterday,
            },
        );
        assert_eq!(ids(&yesterday), vec!["#CM9804"]);
    }

    #[test]
    fn test_filters_apply_conjunctively() {
        let filters = OrderFilters {
            status: StatusFilter::Only(OrderStatus::Pending),
            date_range: DateRangeFilter::Today,
        };
        let result = filter_orders(&seed_orders(), &filters);
        // #CM9803 is the only Pending order with a relative date label.
        assert_eq!(ids(&result), vec!["#CM9803"]);
    }

    #[test]
    fn test_pending_then_feb_search_keeps_only_pending() {
        let filters = OrderFilters {
            status: StatusFilter::Only(OrderStatus::Pending),
            date_range: DateRangeFilter::AllTime,
        };
        let filtered = filter_orders(&seed_orders(), &filters);
        let found = search_orders(filtered, "Feb");
        assert!(!found.is_empty());
        assert!(found.iter().all(|o| o.status == OrderStatus::Pending));
        assert!(found.iter().all(|o| {
            o.date_label.contains("Feb")
                || o.project.contains("Feb")
                || o.address.contains("Feb")
        }));
    }

    #[test]
    fn test_sort_by_id_ascending_over_fixture() {
        let sorted = sort_orders(
            seed_orders(),
            &SortState {
                key: Some(SortKey::Id),
                direction: SortDirection::Asc,
            },
        );
        assert_eq!(sorted.first().map(|o| o.id.as_str()), Some("#CM9801"));
        assert_eq!(sorted.last().map(|o| o.id.as_str()), Some("#CM9900"));
    }

    #[test]
    fn test_sort_without_key_preserves_input_order() {
        let orders = seed_orders();
        let untouched = sort_orders(orders.clone(), &SortState::default());
        assert_eq!(orders, untouched);
    }

    #[test]
    fn test_status_sort_is_stable_and_desc_inverts_exactly() {
        let asc = sort_orders(
            seed_orders(),
            &SortState {
                key: Some(SortKey::Status),
                direction: SortDirection::Asc,
            },
        );
        // Stability: within one status, fixture order (by id) is preserved.
        let pending: Vec<_> = asc
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .map(|o| o.id.numeric_suffix())
            .collect();
        let mut sorted_pending = pending.clone();
        sorted_pending.sort_unstable();
        assert_eq!(pending, sorted_pending);

        // Priorities are non-decreasing ascending, non-increasing descending.
        assert!(asc.windows(2).all(|w| w[0].status.priority() <= w[1].status.priority()));
        let desc = sort_orders(
            seed_orders(),
            &SortState {
                key: Some(SortKey::Status),
                direction: SortDirection::Desc,
            },
        );
        assert!(desc.windows(2).all(|w| w[0].status.priority() >= w[1].status.priority()));
    }

    #[test]
    fn test_sort_toggle_flips_direction_then_rebases() {
        let mut sort = SortState::default();
        sort.toggle(SortKey::Status);
        assert_eq!(sort.key, Some(SortKey::Status));
        assert_eq!(sort.direction, SortDirection::Asc);
        sort.toggle(SortKey::Status);
        assert_eq!(sort.direction, SortDirection::Desc);
        sort.toggle(SortKey::User);
        assert_eq!(sort.key, Some(SortKey::User));
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_date_sort_uses_timestamp_not_label() {
        let sorted = sort_orders(
            seed_orders(),
            &SortState {
                key: Some(SortKey::Date),
                direction: SortDirection::Asc,
            },
        );
        // Oldest fixture entry is "Feb 2, 2023" (#CM9805), newest "Just now"
        // (#CM9801) despite lexicographic labels saying otherwise.
        assert_eq!(sorted.first().map(|o| o.id.as_str()), Some("#CM9805"));
        assert_eq!(sorted.last().map(|o| o.id.as_str()), Some("#CM9801"));
        assert!(sorted.windows(2).all(|w| w[0].date_sort <= w[1].date_sort));
    }

    #[test]
    fn test_total_pages_rounding() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(100), 10);
    }

    #[test]
    fn test_pagination_partitions_exactly_once() {
        let orders = seed_orders();
        let pages = total_pages(orders.len());
        let mut seen: Vec<&str> = Vec::new();
        for page in 1..=pages {
            let slice = page_slice(&orders, page);
            assert!(slice.len() <= PAGE_SIZE);
            seen.extend(slice.iter().map(|o| o.id.as_str()));
        }
        assert_eq!(seen.len(), orders.len());
        let unique: HashSet<_> = seen.iter().collect();
        assert_eq!(unique.len(), orders.len());
    }

    #[test]
    fn test_last_page_may_be_short_and_out_of_range_is_empty() {
        let orders: Vec<Order> = seed_orders().into_iter().take(25).collect();
        assert_eq!(total_pages(orders.len()), 3);
        assert_eq!(page_slice(&orders, 3).len(), 5);
        assert!(page_slice(&orders, 4).is_empty());
        assert!(page_slice(&[], 1).is_empty());
    }

    #[test]
    fn test_displayed_page_is_subset_of_filtered_set() {
        let filters = OrderFilters {
            status: StatusFilter::Only(OrderStatus::Complete),
            date_range: DateRangeFilter::AllTime,
        };
        let filtered = filter_orders(&seed_orders(), &filters);
        let searched = search_orders(filtered, "a");
        let sorted = sort_orders(
            searched.clone(),
            &SortState {
                key: Some(SortKey::User),
                direction: SortDirection::Desc,
            },
        );
        let searched_ids: HashSet<_> = searched.iter().map(|o| o.id.as_str()).collect();
        for page in 1..=total_pages(sorted.len()) {
            for order in page_slice(&sorted, page) {
                assert!(searched_ids.contains(order.id.as_str()));
            }
        }
    }

    #[test]
    fn test_active_filter_count() {
        assert_eq!(OrderFilters::default().active_count(), 0);
        let one = OrderFilters {
            status: StatusFilter::Only(OrderStatus::Approved),
            date_range: DateRangeFilter::AllTime,
        };
        assert_eq!(one.active_count(), 1);
        let two = OrderFilters {
            status: StatusFilter::Only(OrderStatus::Approved),
            date_range: DateRangeFilter::Yesterday,
        };
        assert_eq!(two.active_count(), 2);
    }
}
