use contracts::domain::order::pipeline::{DateRangeFilter, SortKey, StatusFilter};
use contracts::domain::order::{Order, OrderStatus};
use leptos::prelude::*;

use crate::domain::orders::state::use_orders_state;
use crate::domain::orders::ui::create::AddOrderModal;
use crate::shared::components::ui::Checkbox;
use crate::shared::components::{PageHeader, PaginationControls};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, sort_indicator};

const SORTABLE_COLUMNS: [SortKey; 6] = [
    SortKey::Id,
    SortKey::User,
    SortKey::Project,
    SortKey::Address,
    SortKey::Date,
    SortKey::Status,
];

fn status_class(status: OrderStatus) -> String {
    format!(
        "status status--{}",
        status.as_str().to_lowercase().replace(' ', "-")
    )
}

/// Orders list: toolbar, filterable sortable table, pager and the
/// create dialog.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let state = use_orders_state();

    let (show_create, set_show_create) = signal(false);
    let (show_filter_menu, set_show_filter_menu) = signal(false);
    let (show_sort_menu, set_show_sort_menu) = signal(false);

    let visible_rows = Signal::derive(move || state.visible_rows());
    let enumerated_rows =
        move || visible_rows.get().into_iter().enumerate().collect::<Vec<_>>();
    let page_len = move || visible_rows.with(|rows| rows.len());
    let is_empty = move || page_len() == 0;

    let filter_badge = move || {
        let count = state.filters.get().active_count();
        (count > 0).then(|| view! { <span class="toolbar__badge">{count}</span> })
    };

    view! {
        <div class="orders-page">
            <PageHeader title="Order List".to_string() />

            <div class="toolbar">
                <div class="toolbar__group">
                    <button
                        class="toolbar__button"
                        title="Add order"
                        on:click=move |_| set_show_create.set(true)
                    >
                        {icon("plus")}
                    </button>

                    <div class="toolbar__menu-anchor">
                        <button
                            class="toolbar__button"
                            title="Filter"
                            on:click=move |_| {
                                set_show_sort_menu.set(false);
                                set_show_filter_menu.update(|v| *v = !*v);
                            }
                        >
                            {icon("filter")}
                            {filter_badge}
                        </button>
                        <Show when=move || show_filter_menu.get()>
                            <FilterMenu on_close=Callback::new(move |_| set_show_filter_menu.set(false)) />
                        </Show>
                    </div>

                    <div class="toolbar__menu-anchor">
                        <button
                            class="toolbar__button"
                            title="Sort"
                            on:click=move |_| {
                                set_show_filter_menu.set(false);
                                set_show_sort_menu.update(|v| *v = !*v);
                            }
                        >
                            {icon("arrow-down-up")}
                        </button>
                        <Show when=move || show_sort_menu.get()>
                            <SortMenu on_close=Callback::new(move |_| set_show_sort_menu.set(false)) />
                        </Show>
                    </div>
                </div>

                <div class="toolbar__search">
                    {icon("search")}
                    <input
                        type="text"
                        class="toolbar__search-input"
                        placeholder="Search"
                        prop:value=move || state.search.get()
                        on:input=move |ev| state.set_search(event_target_value(&ev))
                    />
                    <Show when=move || !state.search.get().is_empty()>
                        <button
                            class="toolbar__search-clear"
                            title="Clear"
                            on:click=move |_| state.clear_search()
                        >
                            {icon("x")}
                        </button>
                    </Show>
                </div>
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th class="table__cell table__cell--checkbox">
                            <Checkbox
                                checked=Signal::derive(move || state.all_selected(page_len()))
                                indeterminate=Signal::derive(move || state.some_selected())
                                on_change=Callback::new(move |_| state.toggle_all(page_len()))
                                aria_label="Select all rows"
                            />
                        </th>
                        {SORTABLE_COLUMNS.iter().map(|&key| view! {
                            <th
                                class="table__cell table__cell--sortable"
                                on:click=move |_| state.toggle_sort(key)
                            >
                                {key.label()}
                                {move || sort_indicator(&state.sort.get(), key)}
                            </th>
                        }).collect_view()}
                        <th class="table__cell"></th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || !is_empty()
                        fallback=|| view! {
                            <tr>
                                <td class="table__empty" colspan="8">"No orders available"</td>
                            </tr>
                        }
                    >
                        <For
                            each=enumerated_rows
                            key=|(index, order)| (*index, order.id.clone())
                            children=move |(index, order)| view! {
                                <OrderRow index=index order=order />
                            }
                        />
                    </Show>
                </tbody>
            </table>

            <div class="orders-page__footer">
                <PaginationControls
                    total_pages=Signal::derive(move || state.total_pages())
                    current_page=Signal::derive(move || state.current_page())
                    on_change=Callback::new(move |page| state.set_page(page))
                />
            </div>

            <Show when=move || show_create.get()>
                <AddOrderModal on_close=Callback::new(move |_| set_show_create.set(false)) />
            </Show>
        </div>
    }
}

#[component]
fn OrderRow(index: usize, order: Order) -> impl IntoView {
    let state = use_orders_state();
    let search = move || state.search.get();

    let id = order.id.as_str().to_string();
    let user = order.user.name.clone();
    let project = order.project.clone();
    let address = order.address.clone();
    let date_label = order.date_label.clone();
    let status = order.status;

    view! {
        <tr class="table__row" class=("table__row--selected", move || state.is_row_selected(index))>
            <td class="table__cell table__cell--checkbox">
                <Checkbox
                    checked=Signal::derive(move || state.is_row_selected(index))
                    on_change=Callback::new(move |_| state.toggle_row(index))
                    aria_label="Select row"
                />
            </td>
            <td class="table__cell">{move || highlight_matches(&id, &search())}</td>
            <td class="table__cell">{move || highlight_matches(&user, &search())}</td>
            <td class="table__cell">{move || highlight_matches(&project, &search())}</td>
            <td class="table__cell">{move || highlight_matches(&address, &search())}</td>
            <td class="table__cell table__cell--date">
                {icon("calendar")}
                {move || highlight_matches(&date_label, &search())}
            </td>
            <td class="table__cell">
                <span class=status_class(status)>
                    <span class="status__dot"></span>
                    {status.as_str()}
                </span>
            </td>
            <td class="table__cell table__cell--actions">
                <button class="table__kebab" title="More">
                    {icon("more-horizontal")}
                </button>
            </td>
        </tr>
    }
}

/// Status and date-range pickers; both apply immediately.
#[component]
fn FilterMenu(on_close: Callback<()>) -> impl IntoView {
    let state = use_orders_state();

    let status_options = std::iter::once(StatusFilter::All)
        .chain(OrderStatus::all().into_iter().map(StatusFilter::Only))
        .collect::<Vec<_>>();
    let date_options = [
        DateRangeFilter::AllTime,
        DateRangeFilter::Today,
        DateRangeFilter::Yesterday,
    ];

    view! {
        <div class="menu">
            <div class="menu__section">
                <div class="menu__heading">"Status"</div>
                {status_options.into_iter().map(|option| {
                    let is_active = move || state.filters.get().status == option;
                    view! {
                        <button
                            class="menu__item"
                            class=("menu__item--active", is_active)
                            on:click=move |_| {
                                state.set_status_filter(option);
                                on_close.run(());
                            }
                        >
                            {option.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
            <div class="menu__section">
                <div class="menu__heading">"Date"</div>
                {date_options.into_iter().map(|option| {
                    let is_active = move || state.filters.get().date_range == option;
                    view! {
                        <button
                            class="menu__item"
                            class=("menu__item--active", is_active)
                            on:click=move |_| {
                                state.set_date_filter(option);
                                on_close.run(());
                            }
                        >
                            {option.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Sort key picker; picking the active key flips its direction.
#[component]
fn SortMenu(on_close: Callback<()>) -> impl IntoView {
    let state = use_orders_state();

    view! {
        <div class="menu">
            {SORTABLE_COLUMNS.iter().map(|&key| {
                let is_active = move || state.sort.get().key == Some(key);
                view! {
                    <button
                        class="menu__item"
                        class=("menu__item--active", is_active)
                        on:click=move |_| {
                            state.toggle_sort(key);
                            on_close.run(());
                        }
                    >
                        {key.label()}
                        {move || sort_indicator(&state.sort.get(), key)}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
