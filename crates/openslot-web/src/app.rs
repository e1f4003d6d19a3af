//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::api;
use crate::pages::LandingPage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Base URL is resolved once per app instance
    provide_context(api::subscription_client());

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=LandingPage />
                </Routes>
            </main>
        </Router>
    }
}
