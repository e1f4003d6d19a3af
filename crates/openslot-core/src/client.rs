//! Subscription Client
//!
//! `SubscriptionClient` is the seam between the form controller and the
//! external `/api/subscribe` service.

use async_trait::async_trait;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::{Result, SubscribeError};

/// Subscription service client (Strategy pattern)
///
/// Futures are `!Send` on `wasm32`, where the browser fetch API backs reqwest.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait SubscriptionClient {
    /// Register `email`, returning the service's confirmation message
    async fn subscribe(&self, email: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct SubscribeRequest<'a> {
    email: &'a str,
}

/// reqwest-backed client for `POST {base}/api/subscribe`
#[derive(Clone, Debug)]
pub struct HttpSubscriptionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpSubscriptionClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.subscribe_url(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl SubscriptionClient for HttpSubscriptionClient {
    async fn subscribe(&self, email: &str) -> Result<String> {
        tracing::debug!(endpoint = %self.endpoint, "Submitting subscription");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&SubscribeRequest { email })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Subscription request failed: {}", e);
                SubscribeError::from(e)
            })?;

        let status = response.status();

        // The body is JSON on both arms; anything else is a transport failure
        let data: serde_json::Value = response.json().await.map_err(|e| {
            tracing::error!("Unreadable subscription response ({}): {}", status, e);
            SubscribeError::from(e)
        })?;

        if status.is_success() {
            tracing::info!("Subscription accepted");
            Ok(data["message"].as_str().unwrap_or_default().to_string())
        } else {
            let detail = data["detail"].as_str().map(str::to_string);
            tracing::warn!(status = status.as_u16(), ?detail, "Subscription rejected");
            Err(SubscribeError::Rejected {
                status: status.as_u16(),
                detail,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn client_for(server: &MockServer) -> HttpSubscriptionClient {
        HttpSubscriptionClient::new(&ApiConfig::new(server.uri()))
    }

    #[test]
    fn test_endpoint_from_config() {
        let client = HttpSubscriptionClient::new(&ApiConfig::new("https://api.openslot.ai/"));
        assert_eq!(client.endpoint(), "https://api.openslot.ai/api/subscribe");
    }

    #[tokio::test]
    async fn test_posts_json_email() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/subscribe"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(serde_json::json!({"email": "ada@example.com"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "Subscribed!"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let message = client.subscribe("ada@example.com").await;
        assert_eq!(message, Ok("Subscribed!".to_string()));
    }

    #[tokio::test]
    async fn test_success_without_message_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert_eq!(client.subscribe("ada@example.com").await, Ok(String::new()));
    }

    #[tokio::test]
    async fn test_rejection_carries_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"detail": "Already subscribed"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.subscribe("ada@example.com").await.unwrap_err();
        assert_eq!(
            err,
            SubscribeError::Rejected {
                status: 400,
                detail: Some("Already subscribed".into()),
            }
        );
    }

    #[tokio::test]
    async fn test_non_string_detail_is_dropped() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "detail": [{"loc": ["body", "email"], "msg": "field required"}]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.subscribe("ada@example.com").await.unwrap_err();
        assert_eq!(err.user_message(), "Something went wrong");
    }

    #[tokio::test]
    async fn test_non_json_body_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.subscribe("ada@example.com").await.unwrap_err();
        assert!(matches!(err, SubscribeError::Transport(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Nothing listens on port 1
        let client = HttpSubscriptionClient::new(&ApiConfig::new("http://127.0.0.1:1"));
        let err = client.subscribe("ada@example.com").await.unwrap_err();
        assert_eq!(err.user_message(), "Failed to connect to server");
    }
}
