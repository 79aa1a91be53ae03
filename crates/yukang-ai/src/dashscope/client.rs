//! DashScope client struct, request building, and response parsing.

use crate::{AiError, AiResponse, Message, TokenUsage};

use super::config::DashScopeConfig;

/// Longest slice of a raw error body carried into an error message.
const MAX_ERROR_DETAIL_CHARS: usize = 200;

/// DashScope API client.
pub struct DashScopeClient {
    pub(crate) config: DashScopeConfig,
    pub(crate) http: reqwest::Client,
}

impl DashScopeClient {
    pub fn new(config: DashScopeConfig) -> Result<Self, AiError> {
        let mut builder = reqwest::Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    /// Build the JSON request body for the text-generation API.
    pub(crate) fn build_request_body(&self, messages: &[Message]) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "input": {
                "messages": messages,
            },
            "parameters": {
                "result_format": self.config.result_format,
            }
        })
    }

    /// Parse a successful response.
    ///
    /// `result_format = "message"` answers under `output.choices`; the
    /// plain `text` format answers under `output.text`.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let output = &json["output"];

        let content = match output["choices"].as_array() {
            Some(choices) => {
                let first = choices
                    .first()
                    .ok_or_else(|| AiError::IncompleteResponse("empty choices".into()))?;
                first["message"]["content"]
                    .as_str()
                    .ok_or_else(|| {
                        AiError::IncompleteResponse("choice has no message content".into())
                    })?
                    .to_string()
            }
            None => output["text"]
                .as_str()
                .ok_or_else(|| AiError::IncompleteResponse("no choices in output".into()))?
                .to_string(),
        };

        let usage = TokenUsage {
            input_tokens: json["usage"]["input_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["output_tokens"].as_u64().unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}

/// Condense a non-2xx body into a one-line detail.
///
/// DashScope error bodies look like `{"code": "...", "message": "...",
/// "request_id": "..."}`; anything else is passed through truncated. An
/// empty body falls back to the status's canonical reason.
pub(crate) fn error_detail(status: reqwest::StatusCode, body: &str) -> String {
    if body.trim().is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string();
    }
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        let code = json["code"].as_str();
        let message = json["message"].as_str();
        match (code, message) {
            (Some(code), Some(message)) => return format!("{code}: {message}"),
            (None, Some(message)) => return message.to_string(),
            (Some(code), None) => return code.to_string(),
            (None, None) => {}
        }
    }
    body.chars().take(MAX_ERROR_DETAIL_CHARS).collect()
}
