//! AiClient trait implementation for DashScopeClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, Message};

use super::client::{error_detail, DashScopeClient};

fn transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}

#[async_trait]
impl AiClient for DashScopeClient {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AiError::MissingCredential(self.config.api_key_env.clone()))?;

        let body = self.build_request_body(messages);

        debug!(model = %self.config.model, messages = messages.len(), "DashScope API request");

        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!("failed to read error body: {e}");
                    String::new()
                }
            };
            return Err(AiError::ApiError {
                status: status.as_u16(),
                detail: error_detail(status, &body),
            });
        }

        let text = response.text().await.map_err(transport_error)?;
        let json: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| AiError::ParseError(e.to_string()))?;

        self.parse_response(json)
    }
}
