use crate::shared::icons::icon;
use contracts::domain::activity::{NotificationKind, ACTIVITIES, CONTACTS, NOTIFICATIONS};
use leptos::prelude::*;

fn notification_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Bug => "bug",
        NotificationKind::UserRegistered => "user",
        NotificationKind::Subscribed => "broadcast",
    }
}

/// Right sidebar: notifications, the activity timeline and contacts.
/// The content is static display data.
#[component]
pub fn RightPanel() -> impl IntoView {
    view! {
        <aside class="right-panel">
            <section class="right-panel__section">
                <h3 class="right-panel__heading">"Notifications"</h3>
                <ul class="feed">
                    {NOTIFICATIONS.iter().map(|n| view! {
                        <li class="feed__item">
                            <span class="feed__icon">{icon(notification_icon(n.kind))}</span>
                            <div class="feed__body">
                                <div class="feed__text">{n.message.clone()}</div>
                                <div class="feed__time">{n.time_label.clone()}</div>
                            </div>
                        </li>
                    }).collect_view()}
                </ul>
            </section>

            <section class="right-panel__section">
                <h3 class="right-panel__heading">"Activities"</h3>
                <ul class="feed feed--timeline">
                    {ACTIVITIES.iter().map(|a| view! {
                        <li class="feed__item">
                            <span class="feed__dot"></span>
                            <div class="feed__body">
                                <div class="feed__text">{format!("{} {}", a.user, a.action)}</div>
                                <div class="feed__time">{a.time_label.clone()}</div>
                            </div>
                        </li>
                    }).collect_view()}
                </ul>
            </section>

            <section class="right-panel__section">
                <h3 class="right-panel__heading">"Contacts"</h3>
                <ul class="contacts">
                    {CONTACTS.iter().map(|c| view! {
                        <li class="contacts__item">
                            <span class="contacts__avatar">{c.initials()}</span>
                            <span class="contacts__name">{c.name.clone()}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </section>
        </aside>
    }
}
