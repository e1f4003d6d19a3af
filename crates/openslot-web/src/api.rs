//! API Client Wiring

use async_trait::async_trait;
use leptos::prelude::*;
use openslot_core::{
    submit, ApiConfig, AttemptStore, HttpSubscriptionClient, SubmitOutcome, SubscribeError,
    SubscriptionAttempt, SubscriptionClient,
};

/// Subscription service base URL, fixed at build time
const API_URL: Option<&str> = option_env!("OPENSLOT_API_URL");

/// Build the subscription client from the compiled-in configuration
pub fn subscription_client() -> HttpSubscriptionClient {
    let config = ApiConfig::from_value(API_URL);
    leptos::logging::log!("Using API URL: {}", config.base_url());
    HttpSubscriptionClient::new(&config)
}

/// Signal-backed attempt store shared by every form on a page
#[derive(Clone, Copy)]
pub struct SignalStore(pub RwSignal<SubscriptionAttempt>);

impl AttemptStore for SignalStore {
    fn modify<R>(&self, f: impl FnOnce(&mut SubscriptionAttempt) -> R) -> Option<R> {
        // None once the owning page has been disposed
        self.0.try_update(f)
    }
}

/// Reports failures to the browser console with their underlying cause
pub struct ConsoleLogged<C>(pub C);

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl<C> SubscriptionClient for ConsoleLogged<C>
where
    C: SubscriptionClient + Sync,
{
    async fn subscribe(&self, email: &str) -> Result<String, SubscribeError> {
        let result = self.0.subscribe(email).await;
        if let Err(err) = &result {
            leptos::logging::error!("API Error: {}", err);
        }
        result
    }
}

/// Run one submission against the page's attempt
pub async fn subscribe(client: HttpSubscriptionClient, attempt: RwSignal<SubscriptionAttempt>) {
    let outcome = submit(&ConsoleLogged(client), &SignalStore(attempt)).await;

    if outcome == SubmitOutcome::Discarded {
        leptos::logging::log!("Subscription settled after the page was closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openslot_core::SubmissionStatus;

    /// Stub service: accepts, or disposes the page mid-request
    struct Service {
        reply: Result<String, SubscribeError>,
        unmount: Option<Owner>,
    }

    #[async_trait]
    impl SubscriptionClient for Service {
        async fn subscribe(&self, _email: &str) -> Result<String, SubscribeError> {
            if let Some(owner) = &self.unmount {
                owner.cleanup();
            }
            self.reply.clone()
        }
    }

    fn page() -> (Owner, SignalStore) {
        let owner = Owner::new();
        let attempt = owner.with(|| RwSignal::new(SubscriptionAttempt::with_email("ada@example.com")));
        (owner, SignalStore(attempt))
    }

    #[test]
    fn test_store_is_gone_after_dispose() {
        let (owner, store) = page();
        assert_eq!(store.modify(|a| a.email().to_string()).as_deref(), Some("ada@example.com"));

        owner.cleanup();
        assert_eq!(store.modify(|a| a.email().to_string()), None);
    }

    #[tokio::test]
    async fn test_signal_store_settles_submission() {
        let (_owner, store) = page();
        let service = Service {
            reply: Ok("Subscribed!".into()),
            unmount: None,
        };

        let outcome = submit(&service, &store).await;

        assert_eq!(outcome, SubmitOutcome::Settled(SubmissionStatus::Succeeded));
        let attempt = store.0.get_untracked();
        assert_eq!(attempt.message(), Some("Subscribed!"));
        assert_eq!(attempt.email(), "");
    }

    #[tokio::test]
    async fn test_failure_passes_through_logging_client() {
        let (_owner, store) = page();
        let service = ConsoleLogged(Service {
            reply: Err(SubscribeError::Transport("connection refused".into())),
            unmount: None,
        });

        let outcome = submit(&service, &store).await;

        assert_eq!(outcome, SubmitOutcome::Settled(SubmissionStatus::Failed));
        let attempt = store.0.get_untracked();
        assert_eq!(attempt.message(), Some("Failed to connect to server"));
        assert_eq!(attempt.email(), "ada@example.com");
    }

    #[tokio::test]
    async fn test_unmount_mid_request_discards_outcome() {
        let (owner, store) = page();
        let service = Service {
            reply: Ok("Subscribed!".into()),
            unmount: Some(owner),
        };

        let outcome = submit(&service, &store).await;

        assert_eq!(outcome, SubmitOutcome::Discarded);
        assert!(outcome.was_sent());
    }
}
