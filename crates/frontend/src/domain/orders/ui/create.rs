use contracts::domain::order::{OrderDraft, OrderStatus};
use leptos::prelude::*;

use crate::domain::orders::state::use_orders_state;
use crate::shared::components::ui::{Input, Select};
use crate::shared::components::Modal;

/// "Add New Order" dialog. The id is assigned when the dialog opens and
/// shown read-only; Save stays disabled until the draft is complete.
#[component]
pub fn AddOrderModal(on_close: Callback<()>) -> impl IntoView {
    let state = use_orders_state();

    let assigned_id = state.next_order_id();
    let draft = RwSignal::new(OrderDraft::default());

    let can_save = move || draft.with(|d| d.is_complete());

    let id_for_save = assigned_id.clone();
    let save = move |_| {
        if !can_save() {
            return;
        }
        state.create_order(draft.get(), id_for_save.clone());
        on_close.run(());
    };

    let cancel = move |_| {
        draft.set(OrderDraft::default());
        on_close.run(());
    };

    let status_options = OrderStatus::all()
        .into_iter()
        .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
        .collect::<Vec<_>>();

    let footer = move || {
        let save = save.clone();
        view! {
            <button class="button button--secondary" on:click=cancel>
                "Cancel"
            </button>
            <button class="button button--primary" disabled=move || !can_save() on:click=save>
                "Save"
            </button>
        }
    };

    view! {
        <Modal title="Add New Order".to_string() on_close=on_close footer=footer>
            <Input
                label="Order ID"
                value=Signal::derive({
                    let id = assigned_id.clone();
                    move || id.as_str().to_string()
                })
                readonly=true
                id="order-id"
            />
            <Input
                label="User"
                value=Signal::derive(move || draft.with(|d| d.user_name.clone()))
                on_input=Callback::new(move |value| draft.update(|d| d.user_name = value))
                placeholder="Full name"
                id="order-user"
            />
            <Input
                label="Project"
                value=Signal::derive(move || draft.with(|d| d.project.clone()))
                on_input=Callback::new(move |value| draft.update(|d| d.project = value))
                placeholder="Project name"
                id="order-project"
            />
            <Input
                label="Address"
                value=Signal::derive(move || draft.with(|d| d.address.clone()))
                on_input=Callback::new(move |value| draft.update(|d| d.address = value))
                placeholder="Address"
                id="order-address"
            />
            <Select
                label="Status"
                value=Signal::derive(move || draft.with(|d| d.status.as_str().to_string()))
                on_change=Callback::new(move |value: String| {
                    if let Some(status) = OrderStatus::parse(&value) {
                        draft.update(|d| d.status = status);
                    }
                })
                options=Signal::derive(move || status_options.clone())
                id="order-status"
            />
        </Modal>
    }
}
