//! Subscription Attempt
//!
//! The single state record behind the email-capture form. Every transition
//! goes through a method here so the form can never be both submitting and
//! settled at once.

use crate::error::SubscribeError;

/// Where the attempt is in its lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    /// True once a response (or transport failure) has been applied
    pub fn is_settled(self) -> bool {
        matches!(self, SubmissionStatus::Succeeded | SubmissionStatus::Failed)
    }
}

/// Email-capture form state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubscriptionAttempt {
    email: String,
    status: SubmissionStatus,
    message: Option<String>,
}

impl SubscriptionAttempt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Result of the last settled attempt, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.status == SubmissionStatus::Succeeded
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        !self.email.is_empty() && !self.is_submitting()
    }

    /// Enter `Submitting` and hand back the email to send.
    ///
    /// Returns `None` without touching state when the email is empty or a
    /// request is already in flight.
    pub fn begin(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }

        self.status = SubmissionStatus::Submitting;
        self.message = None;
        Some(self.email.clone())
    }

    /// Apply the outcome of the in-flight request.
    ///
    /// Ignored (returns `false`) unless the attempt is `Submitting`.
    pub fn settle(&mut self, outcome: Result<String, SubscribeError>) -> bool {
        if !self.is_submitting() {
            return false;
        }

        match outcome {
            Ok(message) => {
                self.status = SubmissionStatus::Succeeded;
                self.message = Some(message);
                self.email.clear();
            }
            Err(err) => {
                self.status = SubmissionStatus::Failed;
                self.message = Some(err.user_message());
            }
        }
        true
    }
}
