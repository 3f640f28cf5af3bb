use leptos::prelude::*;

/// Checkbox used by the table row selectors. The header variant can render
/// the indeterminate dash when only part of the page is selected.
#[component]
pub fn Checkbox(
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Indeterminate state, shown only while unchecked
    #[prop(optional, into)]
    indeterminate: Option<Signal<bool>>,
    /// Change event handler, receives the new checked state
    on_change: Callback<bool>,
    /// Accessible label
    #[prop(optional, into)]
    aria_label: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <input
            type="checkbox"
            class="table__checkbox"
            prop:checked=move || checked.get()
            prop:indeterminate=move || {
                indeterminate.map(|s| s.get()).unwrap_or(false) && !checked.get()
            }
            aria-label=move || aria_label.get().unwrap_or_default()
            on:change=move |ev| {
                on_change.run(event_target_checked(&ev));
            }
        />
    }
}
