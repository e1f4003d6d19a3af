//! API Configuration

/// Base URL used when nothing is configured (local development backend)
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable holding the subscription service base URL
pub const API_URL_VAR: &str = "OPENSLOT_API_URL";

const SUBSCRIBE_PATH: &str = "/api/subscribe";

/// Subscription service configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build from an optional value; unset or blank means the default.
    ///
    /// The frontend passes `option_env!("OPENSLOT_API_URL")` here so the
    /// address is baked in at build time.
    pub fn from_value(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    /// Read `OPENSLOT_API_URL` from the process environment
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(API_URL_VAR).ok().as_deref())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the subscribe endpoint
    pub fn subscribe_url(&self) -> String {
        format!("{}{}", self.base_url, SUBSCRIBE_PATH)
    }
}
