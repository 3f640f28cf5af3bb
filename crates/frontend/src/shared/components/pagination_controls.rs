use crate::shared::icons::icon;
use leptos::prelude::*;

/// One slot in the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Builds the visible page buttons for a 1-based pager. Up to seven slots:
/// everything fits for small totals, otherwise the first and last pages stay
/// pinned with an ellipsis on each overflowing side of the current window.
pub fn page_window(total: usize, current: usize) -> Vec<PageItem> {
    const MAX_BUTTONS: usize = 7;

    if total <= MAX_BUTTONS {
        return (1..=total).map(PageItem::Page).collect();
    }

    let left = current.saturating_sub(2).max(2);
    let right = (current + 2).min(total - 1);

    let mut result = vec![PageItem::Page(1)];
    if left > 2 {
        result.push(PageItem::Ellipsis);
    }
    for page in left..=right {
        result.push(PageItem::Page(page));
    }
    if right < total - 1 {
        result.push(PageItem::Ellipsis);
    }
    result.push(PageItem::Page(total));
    result
}

/// Pager strip: previous arrow, windowed page buttons, next arrow.
#[component]
pub fn PaginationControls(
    /// Total page count, at least 1
    #[prop(into)]
    total_pages: Signal<usize>,
    /// Current 1-based page
    #[prop(into)]
    current_page: Signal<usize>,
    /// Called with the newly selected page
    on_change: Callback<usize>,
) -> impl IntoView {
    let go_prev = move |_| {
        let page = current_page.get();
        if page > 1 {
            on_change.run(page - 1);
        }
    };
    let go_next = move |_| {
        let page = current_page.get();
        if page < total_pages.get() {
            on_change.run(page + 1);
        }
    };

    view! {
        <nav class="pagination" aria-label="Pagination">
            <button
                class="pagination__arrow"
                disabled=move || current_page.get() == 1
                aria-label="Previous page"
                on:click=go_prev
            >
                {icon("chevron-left")}
            </button>
            {move || {
                page_window(total_pages.get(), current_page.get())
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Ellipsis => {
                            view! { <span class="pagination__ellipsis">"…"</span> }.into_any()
                        }
                        PageItem::Page(page) => {
                            let is_current = move || current_page.get() == page;
                            view! {
                                <button
                                    class="pagination__page"
                                    class=("pagination__page--active", is_current)
                                    aria-current=move || if is_current() { Some("page") } else { None }
                                    on:click=move |_| on_change.run(page)
                                >
                                    {page}
                                </button>
                            }
                            .into_any()
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination__arrow"
                disabled=move || current_page.get() == total_pages.get()
                aria-label="Next page"
                on:click=go_next
            >
                {icon("chevron-right")}
            </button>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(items: &[PageItem]) -> Vec<Option<usize>> {
        items
            .iter()
            .map(|item| match item {
                PageItem::Page(p) => Some(*p),
                PageItem::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn small_totals_list_every_page() {
        assert_eq!(
            pages(&page_window(7, 4)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), Some(7)]
        );
        assert_eq!(pages(&page_window(1, 1)), vec![Some(1)]);
    }

    #[test]
    fn window_near_start_has_only_right_ellipsis() {
        assert_eq!(
            pages(&page_window(10, 1)),
            vec![Some(1), Some(2), Some(3), None, Some(10)]
        );
        assert_eq!(
            pages(&page_window(10, 3)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(10)]
        );
    }

    #[test]
    fn window_in_middle_has_both_ellipses() {
        assert_eq!(
            pages(&page_window(10, 5)),
            vec![Some(1), None, Some(3), Some(4), Some(5), Some(6), Some(7), None, Some(10)]
        );
    }

    #[test]
    fn window_near_end_has_only_left_ellipsis() {
        assert_eq!(
            pages(&page_window(10, 9)),
            vec![Some(1), None, Some(7), Some(8), Some(9), Some(10)]
        );
        assert_eq!(
            pages(&page_window(10, 10)),
            vec![Some(1), None, Some(8), Some(9), Some(10)]
        );
    }
}
