use leptos::prelude::*;

/// Page heading row with an optional action slot on the right.
#[component]
pub fn PageHeader(
    /// Heading text
    title: String,
    /// Right-aligned actions
    #[prop(optional)]
    actions: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <h1 class="page-header__title">{title}</h1>
            {actions.map(|a| view! { <div class="page-header__actions">{a()}</div> })}
        </div>
    }
}
