//! Submit Flow
//!
//! Drives one subscription attempt: guard, mark in flight, call the service,
//! settle. The attempt itself lives wherever the caller keeps UI state, which
//! `AttemptStore` abstracts over.

use std::sync::{Mutex, PoisonError};

use crate::attempt::{SubmissionStatus, SubscriptionAttempt};
use crate::client::SubscriptionClient;

/// Owner of a `SubscriptionAttempt`
pub trait AttemptStore {
    /// Run `f` against the attempt.
    ///
    /// Returns `None` when the attempt no longer exists (e.g. the form that
    /// owned it was unmounted while a request was in flight).
    fn modify<R>(&self, f: impl FnOnce(&mut SubscriptionAttempt) -> R) -> Option<R>;
}

impl AttemptStore for Mutex<SubscriptionAttempt> {
    fn modify<R>(&self, f: impl FnOnce(&mut SubscriptionAttempt) -> R) -> Option<R> {
        let mut attempt = self.lock().unwrap_or_else(PoisonError::into_inner);
        Some(f(&mut attempt))
    }
}

/// How a call to [`submit`] ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty email or a request already pending; nothing was sent
    Guarded,
    /// The request ran and its result was applied; never `Submitting`
    Settled(SubmissionStatus),
    /// The request ran but the store was gone when it returned
    Discarded,
}

impl SubmitOutcome {
    /// Whether a request went out
    pub fn was_sent(self) -> bool {
        !matches!(self, SubmitOutcome::Guarded)
    }
}

/// Submit the email currently held in `store`.
pub async fn submit<C, S>(client: &C, store: &S) -> SubmitOutcome
where
    C: SubscriptionClient + ?Sized,
    S: AttemptStore + ?Sized,
{
    // Enter `Submitting` before the first await so a second call sees it
    let Some(email) = store.modify(SubscriptionAttempt::begin).flatten() else {
        return SubmitOutcome::Guarded;
    };

    let outcome = client.subscribe(&email).await;

    store
        .modify(|attempt| {
            attempt.settle(outcome);
            attempt.status()
        })
        .map_or(SubmitOutcome::Discarded, SubmitOutcome::Settled)
}
