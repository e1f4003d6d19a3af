//! UI Components

use chrono::Datelike;
use leptos::prelude::*;
use openslot_core::{HttpSubscriptionClient, SubscriptionAttempt};

use crate::api;

/// Email-capture form bound to a shared attempt
///
/// Several forms may share one `attempt`; whichever submits, all of them
/// show the in-flight state and the result.
#[component]
pub fn SubscribeForm(
    client: HttpSubscriptionClient,
    attempt: RwSignal<SubscriptionAttempt>,
) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        leptos::task::spawn_local(api::subscribe(client.clone(), attempt));
    };

    let submitting = move || attempt.with(SubscriptionAttempt::is_submitting);

    view! {
        <form class="subscribe-form" on:submit=on_submit>
            <div class="subscribe-row">
                <input
                    type="email"
                    placeholder="name@domain.com"
                    required=true
                    prop:value=move || attempt.with(|a| a.email().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        attempt.update(|a| a.set_email(value));
                    }
                    disabled=submitting
                />
                <button
                    type="submit"
                    class="btn btn-join"
                    disabled=move || !attempt.with(SubscriptionAttempt::can_submit)
                >
                    {move || if submitting() { "Joining..." } else { "Join now" }}
                </button>
            </div>
            {move || {
                attempt.with(|a| {
                    a.message().filter(|m| !m.is_empty()).map(|m| {
                        let class = if a.is_success() {
                            "form-message success"
                        } else {
                            "form-message error"
                        };
                        view! { <div class=class>{m.to_string()}</div> }
                    })
                })
            }}
        </form>
    }
}

/// Site header with logo and section links
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="brand">
                <img src="/logo.png" alt="OpenSlot.ai Logo" width="64" height="64" class="logo" />
                <span class="wordmark">"OpenSlot.ai"</span>
            </div>
            <nav class="site-nav">
                <a href="#features">"Product"</a>
                <a href="#pricing">"Pricing"</a>
            </nav>
        </header>
    }
}

/// Feature card (icon, title, blurb)
#[component]
pub fn FeatureCard(
    icon: &'static str,
    alt: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon">
                <img src=icon alt=alt width="32" height="32" />
            </div>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

/// Single pricing plan; the children render below the perks
#[component]
pub fn PricingCard(
    name: &'static str,
    price: &'static str,
    perks: &'static [&'static str],
    children: Children,
) -> impl IntoView {
    view! {
        <div class="plan">
            <h3>{name}</h3>
            <div class="price">{price}<span>"/month"</span></div>
            <ul class="perks">
                {perks.iter().map(|perk| view! { <li>{*perk}</li> }).collect_view()}
            </ul>
            {children()}
        </div>
    }
}

struct Block {
    height: u8,
    tone: &'static str,
}

const fn block(height: u8, tone: &'static str) -> Block {
    Block { height, tone }
}

/// Calendar grid body, five columns per row
#[rustfmt::skip]
const CALENDAR_BLOCKS: [Block; 20] = [
    block(12, "purple-200"), block(16, "blue-300"), block(12, "blue-200"), block(14, "blue-300"), block(10, "blue-200"),
    block(10, "pink-200"), block(14, "purple-300"), block(12, "blue-200"), block(16, "blue-300"), block(8, "blue-200"),
    block(8, "pink-200"), block(12, "purple-200"), block(10, "pink-300"), block(8, "blue-200"), block(14, "blue-300"),
    block(12, "blue-200"), block(8, "pink-200"), block(14, "blue-300"), block(10, "pink-200"), block(12, "blue-300"),
];

const CALENDAR_COLUMNS: usize = 5;

/// "This week" panel rows: (active, progress percent)
const WEEK_PROGRESS: [(bool, u8); 6] = [
    (true, 80),
    (true, 60),
    (true, 80),
    (false, 100),
    (false, 100),
    (false, 100),
];

/// Decorative calendar next to the hero copy
#[component]
pub fn CalendarPreview() -> impl IntoView {
    let slots = (0..CALENDAR_COLUMNS)
        .map(|_| view! { <div class="slot slot-open"></div> })
        .collect_view();

    let blocks = CALENDAR_BLOCKS
        .iter()
        .map(|b| {
            let class = format!("slot tone-{}", b.tone);
            let style = format!("height: {}px", u32::from(b.height) * 4);
            view! { <div class=class style=style></div> }
        })
        .collect_view();

    let progress = WEEK_PROGRESS
        .iter()
        .map(|&(active, percent)| {
            let class = if active { "week-row active" } else { "week-row inactive" };
            let style = format!("width: {percent}%");
            view! {
                <div class=class>
                    <div class="dot"></div>
                    <div class="track">
                        <div class="bar" style=style></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="calendar-preview">
            <div class="calendar-grid">{slots}{blocks}</div>
            <div class="week-panel">
                <div class="week-title">"This week"</div>
                <div class="week-rows">{progress}</div>
            </div>
        </div>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="site-footer">
            {format!("© {year} - All rights reserved.")}
        </footer>
    }
}
