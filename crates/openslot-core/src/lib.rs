//! # openslot-core
//!
//! Subscription form controller for the OpenSlot.ai landing page.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                         submit()                          │
//! │  ┌─────────────────┐  ┌──────────────┐  ┌──────────────┐  │
//! │  │ Subscription    │  │ AttemptStore │  │ Subscription │  │
//! │  │ Attempt (state) │──│ (Mutex / UI) │──│ Client       │  │
//! │  └─────────────────┘  └──────────────┘  └──────────────┘  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! The crate is platform-neutral: the same controller drives the Leptos
//! frontend on `wasm32` and the native tests.

pub mod attempt;
pub mod client;
pub mod config;
pub mod error;
pub mod submit;

pub use attempt::{SubmissionStatus, SubscriptionAttempt};
pub use client::{HttpSubscriptionClient, SubscriptionClient};
pub use config::{ApiConfig, DEFAULT_API_URL};
pub use error::{Result, SubscribeError};
pub use submit::{submit, AttemptStore, SubmitOutcome};
