//! Landing Page

use leptos::prelude::*;
use openslot_core::{HttpSubscriptionClient, SubscriptionAttempt};

use crate::api;
use crate::components::{
    CalendarPreview, FeatureCard, PricingCard, SiteFooter, SiteHeader, SubscribeForm,
};

const STANDARD_PERKS: &[&str] = &[
    "Unlimited AI scans",
    "Unlimited AI negotiation",
    "Unlimited team members",
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let client = use_context::<HttpSubscriptionClient>().unwrap_or_else(api::subscription_client);

    // Hero and pricing forms share one attempt
    let attempt = RwSignal::new(SubscriptionAttempt::new());

    view! {
        <div class="landing">
            <SiteHeader />

            <section class="hero">
                <div class="hero-copy">
                    <span class="badge">"🚀 Coming Soon - Early Access Available"</span>
                    <h1>"Save your time with" <br /> "One-Click AI negotiation."</h1>
                    <p class="tagline">
                        "Define what's movable (1:1, focus, habits) - AI safely negotiates shifts, "
                        "collects approvals, and books automatically with just one click."
                    </p>
                    <SubscribeForm client=client.clone() attempt=attempt />
                </div>
                <CalendarPreview />
            </section>

            <section id="features" class="features">
                <h2>"Manage your entire community" <br /> "in a single system"</h2>
                <div class="feature-grid">
                    <FeatureCard
                        icon="/ai-icon.png"
                        alt="AI Intelligence"
                        title="AI scans schedules"
                        description="AI reads free/busy and surfaces real overlap without exposing private details"
                    />
                    <FeatureCard
                        icon="/analytics-icon.png"
                        alt="Analytics Search"
                        title="Finds movable events"
                        description="Flags 1:1s, focus blocks, and habits as reschedulable under your policy, work hours, and buffers"
                    />
                    <FeatureCard
                        icon="/handshake-icon.png"
                        alt="Negotiation Handshake"
                        title="Suggest the best plan"
                        description="Proposes two safe shift options, collects one-click approvals, and auto-books with audit and undo"
                    />
                </div>
            </section>

            <section id="pricing" class="pricing">
                <PricingCard name="Standard" price="$5" perks=STANDARD_PERKS>
                    <SubscribeForm client=client attempt=attempt />
                </PricingCard>
            </section>

            <SiteFooter />
        </div>
    }
}
