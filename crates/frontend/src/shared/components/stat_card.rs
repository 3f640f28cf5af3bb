use crate::shared::icons::icon;
use contracts::shared::indicators::{StatCard, Trend};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const ANIMATION_STEPS: u32 = 60;
const ANIMATION_MS: u32 = 1500;

/// Dashboard stat tile. The headline number counts up from zero to its
/// target over 1.5 seconds when the card mounts.
#[component]
pub fn StatCardView(card: StatCard) -> impl IntoView {
    let target = card.value.target();
    let (current, set_current) = signal(0.0_f64);

    spawn_local(async move {
        for step in 1..=ANIMATION_STEPS {
            TimeoutFuture::new(ANIMATION_MS / ANIMATION_STEPS).await;
            set_current.set(target * f64::from(step) / f64::from(ANIMATION_STEPS));
        }
    });

    let value = card.value;
    let formatted = move || value.format(current.get());

    let (trend_icon, trend_class) = match card.trend {
        Trend::Up => ("trending-up", "stat-card__change--up"),
        Trend::Down => ("trending-down", "stat-card__change--down"),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__title">{card.title}</div>
            <div class="stat-card__row">
                <span class="stat-card__value">{formatted}</span>
                <span class=format!("stat-card__change {trend_class}")>
                    {card.change}
                    {icon(trend_icon)}
                </span>
            </div>
        </div>
    }
}
